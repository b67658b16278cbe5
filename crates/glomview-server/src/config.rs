//! Server configuration.
//!
//! All paths are relative to the process working directory unless
//! given absolute, matching the dataset layout
//! `public/jpegs/*.jpg` + `public/masks/*_mask.png`.

use std::net::SocketAddr;
use std::path::PathBuf;

use glomview_dataset::types::IMAGE_EXTENSION;

/// Default directory of the ROI images.
pub const DEFAULT_IMAGES_DIR: &str = "public/jpegs";

/// Default directory of the masks.
pub const DEFAULT_MASKS_DIR: &str = "public/masks";

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Invalid server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The listing extension is not of the form `.ext`.
    #[error("image extension must look like \".jpg\", got {0:?}")]
    InvalidExtension(String),

    /// The static UI directory does not exist.
    #[error("static directory {0} is not a directory")]
    MissingStaticDir(PathBuf),
}

/// Immutable configuration shared by every request handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Directory listed by `/api/images` and served by `/api/images/*`.
    pub images_dir: PathBuf,
    /// Directory served by `/api/masks/*`.
    pub masks_dir: PathBuf,
    /// Suffix a file needs to appear in the listing.
    pub image_extension: String,
    /// Address the server binds to.
    pub bind: SocketAddr,
    /// Resample masks to their image's dimensions before serving.
    pub align_masks: bool,
    /// Built UI bundle served for every non-API path.
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            masks_dir: PathBuf::from(DEFAULT_MASKS_DIR),
            image_extension: IMAGE_EXTENSION.to_owned(),
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            align_masks: false,
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Configuration for a dataset rooted at the given directories.
    #[must_use]
    pub fn new(images_dir: impl Into<PathBuf>, masks_dir: impl Into<PathBuf>) -> Self {
        Self {
            images_dir: images_dir.into(),
            masks_dir: masks_dir.into(),
            ..Self::default()
        }
    }

    /// Check the settings that can be checked before serving.
    ///
    /// The dataset directories are deliberately not checked: they are
    /// re-read on every request and may appear after startup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidExtension`] if the extension is not
    /// a dot followed by at least one character.
    /// Returns [`ConfigError::MissingStaticDir`] if `static_dir` is set
    /// but is not a directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_extension = self
            .image_extension
            .strip_prefix('.')
            .is_some_and(|ext| !ext.is_empty() && !ext.contains(['/', '\\']));
        if !valid_extension {
            return Err(ConfigError::InvalidExtension(self.image_extension.clone()));
        }
        if let Some(ref dir) = self.static_dir
            && !dir.is_dir()
        {
            return Err(ConfigError::MissingStaticDir(dir.clone()));
        }
        Ok(())
    }
}
