//! glomview-server: HTTP server for the ROI image dataset.
//!
//! Lists the dataset images and streams image and mask bytes. The
//! browser UI talks to three endpoints:
//!
//! - `GET /api/images` -> `{"images": [...]}`
//! - `GET /api/images/{filename}` -> JPEG bytes
//! - `GET /api/masks/{filename}` -> PNG mask for that image
//!
//! `/images/*` and `/masks/*` are aliases of the two file endpoints.
//! Everything else falls through to the built UI bundle when one is
//! configured.

pub mod config;
pub mod dataset;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, ServerConfig};
pub use error::ServeError;

/// Build the application router for `config`.
#[must_use]
pub fn router(config: ServerConfig) -> Router {
    let static_dir = config.static_dir.clone();
    let state = Arc::new(config);

    let api = Router::new()
        .route("/api/images", get(routes::list_images))
        .route("/api/images/{filename}", get(routes::get_image))
        .route("/api/masks/{filename}", get(routes::get_mask))
        // Edge rewrites.
        .route("/images/{filename}", get(routes::get_image))
        .route("/masks/{filename}", get(routes::get_mask))
        .with_state(state);

    let app = match static_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api,
    };
    app.layer(TraceLayer::new_for_http())
}

/// Bind `config.bind` and serve until the process is stopped.
///
/// # Errors
///
/// Returns an I/O error if the address cannot be bound or the server
/// fails while accepting connections.
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    let addr = config.bind;
    tracing::info!(
        images = %config.images_dir.display(),
        masks = %config.masks_dir.display(),
        align_masks = config.align_masks,
        "dataset configured"
    );
    let app = router(config);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, app).await
}
