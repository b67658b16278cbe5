//! Dataset listing fetch.
//!
//! All network functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target). [`parse_listing`] is pure.

use glomview_dataset::{ImageListing, ImageRecord, records_from_listing};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Listing endpoint, relative to the page origin.
pub const LISTING_URL: &str = "/api/images";

/// Errors that can occur while fetching the listing.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// A browser API call returned an error (including network failure).
    #[error("browser API error: {0}")]
    JsError(String),

    /// The server answered with a non-success status.
    #[error("server responded with HTTP {0}")]
    Status(u16),

    /// The body was not a listing.
    #[error("invalid listing: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<JsValue> for FetchError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Decode a `{"images": [...]}` listing body.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] if `body` is not a listing.
pub fn parse_listing(body: &str) -> Result<ImageListing, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// Fetch the listing and turn it into image records.
///
/// # Errors
///
/// Returns [`FetchError::JsError`] on network or browser API failure.
/// Returns [`FetchError::Status`] if the server reports an error.
/// Returns [`FetchError::Decode`] if the body is not a listing.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn fetch_images() -> Result<Vec<ImageRecord>, FetchError> {
    let window = web_sys::window().ok_or_else(|| FetchError::JsError("no global window".into()))?;

    let response: web_sys::Response = JsFuture::from(window.fetch_with_str(LISTING_URL))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| FetchError::JsError("response body is not text".into()))?;

    let listing = parse_listing(&body)?;
    Ok(records_from_listing(&listing))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_listing_body() {
        let listing = parse_listing(r#"{"images":["HE_1.jpg","PAS_1.jpg"]}"#).unwrap();
        assert_eq!(listing.images, ["HE_1.jpg", "PAS_1.jpg"]);
    }

    #[test]
    fn error_body_is_not_a_listing() {
        let result = parse_listing(r#"{"error":"Failed to read images"}"#);
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn status_error_display() {
        assert_eq!(
            FetchError::Status(500).to_string(),
            "server responded with HTTP 500"
        );
    }
}
