use crate::constants::{PAYLOAD_TOO_LARGE_MESSAGE, UNREADABLE_IMAGE_MESSAGE, UNSUPPORTED_FORMAT_MESSAGE};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported upload extension: {0:?}")]
    UnsupportedFormat(String),

    #[error("Unreadable image: {0}")]
    UnreadableImage(String),

    #[error("Failed to encode poster: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Status code and the message safe to show to the visitor
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Io(e) => {
                tracing::error!("IO error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Storage error".to_string())
            }
            AppError::UnsupportedFormat(_) => {
                (StatusCode::BAD_REQUEST, UNSUPPORTED_FORMAT_MESSAGE.to_string())
            }
            AppError::UnreadableImage(reason) => {
                tracing::warn!("Rejected unreadable photo: {}", reason);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    UNREADABLE_IMAGE_MESSAGE.to_string(),
                )
            }
            AppError::Encode(e) => {
                tracing::error!("Poster encoding error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::PayloadTooLarge(reason) => {
                tracing::warn!("Rejected oversized upload: {}", reason);
                (StatusCode::PAYLOAD_TOO_LARGE, PAYLOAD_TOO_LARGE_MESSAGE.to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        }
    }
}

/// Plain-text responses for the HTML form flow
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.status_and_message().into_response()
    }
}

/// JSON flavour of [`AppError`] for `/api/*` routes
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl<E: Into<AppError>> From<E> for ApiError {
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.0.status_and_message();

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_format_is_bad_request_with_french_message() {
        let response = AppError::UnsupportedFormat(".gif".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unreadable_image_is_unprocessable() {
        let (status, message) =
            AppError::UnreadableImage("bad magic".to_string()).status_and_message();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(message, UNREADABLE_IMAGE_MESSAGE);
    }

    #[test]
    fn payload_too_large_uses_french_message() {
        let (status, message) =
            AppError::PayloadTooLarge("length limit exceeded".to_string()).status_and_message();
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(message, PAYLOAD_TOO_LARGE_MESSAGE);
    }

    #[test]
    fn io_errors_hide_details() {
        let err = AppError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        let (status, message) = err.status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Storage error");
    }
}
