//! Request errors and their JSON responses.

use std::io;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use glomview_dataset::DatasetError;
use serde::Serialize;

/// Error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Errors a request handler can return.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// The requested file does not exist (or is not a servable name).
    #[error("{0}")]
    NotFound(&'static str),

    /// A filesystem operation failed for a reason other than absence.
    #[error("{context}: {source}")]
    ReadFailure {
        /// Client-facing description of what failed.
        context: &'static str,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Mask alignment could not decode or encode an image.
    #[error("failed to align mask: {0}")]
    Align(#[from] DatasetError),

    /// The blocking alignment task panicked or was cancelled.
    #[error("mask alignment task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ServeError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ReadFailure { .. } | Self::Align(_) | Self::Join(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message sent to the client. Internal details stay in the log.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::NotFound(message) => *message,
            Self::ReadFailure { context, .. } => *context,
            Self::Align(_) | Self::Join(_) => crate::routes::MASK_FAILURE,
        }
    }
}

impl IntoResponse for ServeError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "not found");
        }
        let body = ErrorBody {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ServeError::NotFound("Image not found");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "Image not found");
    }

    #[test]
    fn read_failure_hides_io_details() {
        let err = ServeError::ReadFailure {
            context: "Failed to read images",
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Failed to read images");
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn align_failure_is_internal() {
        let err = ServeError::from(DatasetError::EmptyInput);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Failed to serve mask");
    }
}
