//! Segmentation masks: filename derivation and pixel alignment.
//!
//! Every ROI image `X.jpg` may have a mask `X_mask.png` stored in a
//! separate directory. Nothing guarantees the mask exists, nor that it
//! has the same pixel dimensions as its image.
//!
//! [`align_to_image`] resamples a mask onto its image's pixel grid so
//! the overlay lines up exactly instead of relying on the browser to
//! stretch it.

use std::io::Cursor;

use image::imageops::FilterType;
use image::{ImageFormat, ImageReader};

use crate::types::{DatasetError, Dimensions, IMAGE_EXTENSION, MASK_SUFFIX, MASK_URL_PREFIX};

/// Mask filename for an image filename: `X.jpg` -> `X_mask.png`.
///
/// Only the trailing extension is replaced, so `a.jpg.jpg` maps to
/// `a.jpg_mask.png`. Returns `None` when the filename does not end in
/// the image extension, since there is no mask naming rule for it.
#[must_use]
pub fn mask_filename(image_filename: &str) -> Option<String> {
    let stem = image_filename.strip_suffix(IMAGE_EXTENSION)?;
    Some(format!("{stem}{MASK_SUFFIX}"))
}

/// Browser-facing URL of the mask for an image filename.
///
/// The server derives the mask filename itself, so the URL carries the
/// image filename.
#[must_use]
pub fn mask_url(image_filename: &str) -> String {
    format!("{MASK_URL_PREFIX}{image_filename}")
}

/// Read the pixel dimensions of an encoded image without decoding it.
///
/// # Errors
///
/// Returns [`DatasetError::EmptyInput`] if `bytes` is empty.
/// Returns [`DatasetError::ImageDecode`] if the header is unreadable.
pub fn image_dimensions(bytes: &[u8]) -> Result<Dimensions, DatasetError> {
    if bytes.is_empty() {
        return Err(DatasetError::EmptyInput);
    }
    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(image::ImageError::from)?
        .into_dimensions()?;
    Ok(Dimensions { width, height })
}

/// Resample a mask to exactly the pixel dimensions of its source image.
///
/// Uses Lanczos3 with an exact fill (aspect ratio is not preserved, the
/// mask covers the whole image). When the dimensions already match the
/// mask bytes are returned unchanged; otherwise the resized mask is
/// re-encoded as PNG.
///
/// # Errors
///
/// Returns [`DatasetError::EmptyInput`] if either input is empty.
/// Returns [`DatasetError::ImageDecode`] if either image cannot be
/// decoded or the PNG cannot be encoded.
pub fn align_to_image(mask_bytes: &[u8], image_bytes: &[u8]) -> Result<Vec<u8>, DatasetError> {
    if mask_bytes.is_empty() {
        return Err(DatasetError::EmptyInput);
    }
    let target = image_dimensions(image_bytes)?;
    let mask = image::load_from_memory(mask_bytes)?;

    if mask.width() == target.width && mask.height() == target.height {
        return Ok(mask_bytes.to_vec());
    }

    let resized = mask.resize_exact(target.width, target.height, FilterType::Lanczos3);
    let mut png = Vec::new();
    resized.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}
