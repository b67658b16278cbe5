//! Shared types for the glomview dataset.

use serde::{Deserialize, Serialize};

/// URL prefix under which the server exposes ROI images.
///
/// `/images/*` is rewritten to the image API at the edge, so records
/// point here rather than at `/api/images/*` directly.
pub const IMAGE_URL_PREFIX: &str = "/images/";

/// URL prefix under which the server exposes masks, keyed by the
/// *image* filename (the server derives the mask filename).
pub const MASK_URL_PREFIX: &str = "/masks/";

/// Extension of the ROI images in the dataset.
pub const IMAGE_EXTENSION: &str = ".jpg";

/// Suffix that replaces [`IMAGE_EXTENSION`] to form a mask filename.
pub const MASK_SUFFIX: &str = "_mask.png";

/// One ROI image in the dataset.
///
/// `filename` is the unique key; `url` is derived from it and never
/// set independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Bare filename, e.g. `HE_K1_x_x_S3_x_ROI2.jpg`.
    pub filename: String,
    /// Browser-facing URL of the image bytes.
    pub url: String,
}

impl ImageRecord {
    /// Create a record, deriving its URL from the filename.
    #[must_use]
    pub fn new(filename: impl Into<String>) -> Self {
        let filename = filename.into();
        let url = format!("{IMAGE_URL_PREFIX}{filename}");
        Self { filename, url }
    }
}

/// JSON body of `GET /api/images`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageListing {
    /// Filenames of every image in the dataset directory.
    pub images: Vec<String>,
}

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Errors from the byte-level operations in this crate.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Failed to decode or encode an image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,
}
