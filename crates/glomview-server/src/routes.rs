//! Request handlers for the listing, image, and mask endpoints.

use std::path::Path;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path as UrlPath, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use glomview_dataset::{ImageListing, align_to_image, mask_filename};

use crate::config::ServerConfig;
use crate::dataset;
use crate::error::ServeError;

/// Client message when the listing directory cannot be read.
pub const LIST_FAILURE: &str = "Failed to read images";
/// Client message for an absent image.
pub const IMAGE_NOT_FOUND: &str = "Image not found";
/// Client message when an image exists but cannot be read.
pub const IMAGE_FAILURE: &str = "Failed to serve image";
/// Client message for an absent mask.
pub const MASK_NOT_FOUND: &str = "Mask not found";
/// Client message when a mask exists but cannot be served.
pub const MASK_FAILURE: &str = "Failed to serve mask";
/// Client message when aligning a mask whose image is absent.
pub const SOURCE_NOT_FOUND: &str = "Source image not found";

/// Dataset files never change once published.
pub const IMMUTABLE_CACHE: &str = "public, max-age=31536000, immutable";

/// `GET /api/images`
pub async fn list_images(
    State(config): State<Arc<ServerConfig>>,
) -> Result<Json<ImageListing>, ServeError> {
    let images = dataset::list_images(&config.images_dir, &config.image_extension).await?;
    tracing::info!(count = images.len(), dir = %config.images_dir.display(), "listed images");
    Ok(Json(ImageListing { images }))
}

/// `GET /api/images/{filename}` and `GET /images/{filename}`
///
/// Only names the listing could return are served.
pub async fn get_image(
    State(config): State<Arc<ServerConfig>>,
    UrlPath(filename): UrlPath<String>,
) -> Result<Response, ServeError> {
    if !filename.ends_with(&config.image_extension) {
        return Err(ServeError::NotFound(IMAGE_NOT_FOUND));
    }
    let bytes =
        dataset::read_file(&config.images_dir, &filename, IMAGE_NOT_FOUND, IMAGE_FAILURE).await?;
    tracing::debug!(%filename, len = bytes.len(), "serving image");
    Ok(cached(content_type_for(&filename), bytes))
}

/// `GET /api/masks/{filename}` and `GET /masks/{filename}`
///
/// `filename` is the *image* filename; the mask is `X_mask.png` for
/// `X.jpg`. With `align_masks` the mask is resampled to the image's
/// dimensions before it is sent.
pub async fn get_mask(
    State(config): State<Arc<ServerConfig>>,
    UrlPath(filename): UrlPath<String>,
) -> Result<Response, ServeError> {
    if !dataset::is_plain_filename(&filename) {
        return Err(ServeError::NotFound(MASK_NOT_FOUND));
    }
    let mask_name = mask_filename(&filename).ok_or(ServeError::NotFound(MASK_NOT_FOUND))?;
    let mask =
        dataset::read_file(&config.masks_dir, &mask_name, MASK_NOT_FOUND, MASK_FAILURE).await?;

    let body = if config.align_masks {
        if !filename.ends_with(&config.image_extension) {
            return Err(ServeError::NotFound(SOURCE_NOT_FOUND));
        }
        let image =
            dataset::read_file(&config.images_dir, &filename, SOURCE_NOT_FOUND, MASK_FAILURE)
                .await?;
        tokio::task::spawn_blocking(move || align_to_image(&mask, &image)).await??
    } else {
        mask
    };

    tracing::debug!(%mask_name, len = body.len(), aligned = config.align_masks, "serving mask");
    Ok(cached("image/png", body))
}

/// MIME type from a filename's extension.
#[must_use]
pub fn content_type_for(filename: &str) -> &'static str {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

fn cached(content_type: &'static str, body: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, IMMUTABLE_CACHE),
        ],
        body,
    )
        .into_response()
}
