use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No resume is loaded")]
    NoResume,

    #[error("Operation already in flight: {0}")]
    Busy(&'static str),

    #[error("Unsupported media type: {0}")]
    UnsupportedMedia(String),

    #[error("File parsing failed: {0}")]
    ParseFailure(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::NoResume => (
                StatusCode::NOT_FOUND,
                "NO_RESUME",
                "No resume is loaded. Upload a file or create one from scratch.".to_string(),
            ),
            AppError::Busy(op) => (
                StatusCode::CONFLICT,
                "OPERATION_IN_FLIGHT",
                format!("A {op} request is already in flight"),
            ),
            AppError::UnsupportedMedia(ct) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_MEDIA_TYPE",
                format!("Please upload a PDF or DOCX file (got '{ct}')"),
            ),
            AppError::ParseFailure(msg) => {
                tracing::error!("File parsing failed: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "PARSE_FAILED",
                    "Unable to process the uploaded file. Please try again.".to_string(),
                )
            }
            AppError::Render(msg) => {
                tracing::error!("Render error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    "Failed to render the export document".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_resume_maps_to_404() {
        let response = AppError::NoResume.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_busy_maps_to_409() {
        let response = AppError::Busy("save").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_unsupported_media_maps_to_415() {
        let response = AppError::UnsupportedMedia("image/png".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
