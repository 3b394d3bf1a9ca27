use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use chrono::Utc;

use crate::errors::AppError;
use crate::export::{json, pdf};
use crate::state::AppState;

/// GET /api/v1/resume/export/json
///
/// Serves the pretty-printed resume as an attachment download.
pub async fn handle_export_json(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let resume = state.session.require_snapshot().await?;
    let body = json::to_pretty_json(&resume)?;
    let filename = json::json_filename(&resume.personal_info.full_name, Utc::now().date_naive());

    Ok((
        [
            (header::CONTENT_TYPE, "application/json; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    ))
}

/// GET /api/v1/resume/export/pdf
pub async fn handle_export_pdf(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let resume = state.session.require_snapshot().await?;
    let bytes = pdf::render_pdf(&resume)?;
    let filename = pdf::pdf_filename(&resume.personal_info.full_name, Utc::now().date_naive());

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    ))
}
