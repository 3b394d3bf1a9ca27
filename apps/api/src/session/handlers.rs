use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::intake;
use crate::models::resume::Resume;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub resume: Resume,
    pub message: String,
}

/// POST /api/v1/resume/upload
///
/// Multipart upload, field name `file`. The MIME gate runs before any bytes
/// are read; rejected or failed uploads leave the session untouched.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SessionResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        if !intake::is_supported_upload(&content_type) {
            return Err(AppError::UnsupportedMedia(content_type));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read file data: {e}")))?;

        let resume = state
            .parser
            .parse(&filename, data)
            .await
            .map_err(|e| AppError::ParseFailure(e.to_string()))?;

        state.session.replace(resume.clone()).await;
        info!("Resume loaded from upload '{filename}'");
        return Ok(Json(SessionResponse {
            resume,
            message: "Resume uploaded successfully. You can now edit it.".to_string(),
        }));
    }

    Err(AppError::Validation(
        "No file provided. Use multipart field 'file'".to_string(),
    ))
}

/// POST /api/v1/resume/blank
pub async fn handle_create_blank(
    State(state): State<AppState>,
) -> Result<Json<SessionResponse>, AppError> {
    let resume = Resume::blank();
    state.session.replace(resume.clone()).await;
    info!("Blank resume created");
    Ok(Json(SessionResponse {
        resume,
        message: "New resume created. You can now start building it from scratch.".to_string(),
    }))
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Result<Json<Resume>, AppError> {
    Ok(Json(state.session.require_snapshot().await?))
}

/// DELETE /api/v1/resume
///
/// "Back to upload": drops the current resume, unsaved edits included.
pub async fn handle_discard(State(state): State<AppState>) -> StatusCode {
    if state.session.discard().await {
        info!("Resume discarded");
    }
    StatusCode::NO_CONTENT
}
