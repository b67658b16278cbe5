//! glomview-server: serve the ROI image dataset and the viewer UI.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin glomview-server -- [OPTIONS]
//! ```
//!
//! Logging is controlled with `RUST_LOG` (default:
//! `glomview_server=info,tower_http=info`).

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use glomview_server::ServerConfig;
use glomview_server::config::{DEFAULT_BIND, DEFAULT_IMAGES_DIR, DEFAULT_MASKS_DIR};
use tracing_subscriber::EnvFilter;

/// Serve kidney ROI images and their glomeruli masks to the viewer.
#[derive(Parser)]
#[command(name = "glomview-server", version)]
struct Cli {
    /// Directory holding the ROI JPEGs.
    #[arg(long, default_value = DEFAULT_IMAGES_DIR)]
    images_dir: PathBuf,

    /// Directory holding the `*_mask.png` masks.
    #[arg(long, default_value = DEFAULT_MASKS_DIR)]
    masks_dir: PathBuf,

    /// Filename suffix of listed images.
    #[arg(long, default_value = glomview_dataset::types::IMAGE_EXTENSION)]
    image_extension: String,

    /// Address to listen on.
    #[arg(long, default_value = DEFAULT_BIND)]
    bind: SocketAddr,

    /// Resample each mask to its image's pixel dimensions before serving.
    #[arg(long)]
    align_masks: bool,

    /// Built viewer UI to serve for all non-API paths.
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            images_dir: cli.images_dir,
            masks_dir: cli.masks_dir,
            image_extension: cli.image_extension,
            bind: cli.bind,
            align_masks: cli.align_masks,
            static_dir: cli.static_dir,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("glomview_server=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let config = ServerConfig::from(Cli::parse());
    if let Err(e) = config.validate() {
        tracing::error!("invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    match glomview_server::serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("server error: {e}");
            ExitCode::FAILURE
        }
    }
}
