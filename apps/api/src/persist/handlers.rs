use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SaveReply {
    pub success: bool,
    pub message: String,
    /// `"service"` or `"fallback"`.
    pub source: &'static str,
}

/// POST /api/v1/resume/save
///
/// Saves a read-only snapshot of the current resume. At most one save runs
/// at a time; a concurrent trigger gets 409.
pub async fn handle_save(State(state): State<AppState>) -> Result<Json<SaveReply>, AppError> {
    let resume = state.session.require_snapshot().await?;

    let _guard = state
        .save_in_flight
        .try_begin()
        .ok_or(AppError::Busy(state.save_in_flight.name()))?;

    let outcome = state.saver.save(&resume).await;
    let receipt = outcome.receipt();

    Ok(Json(SaveReply {
        success: receipt.success,
        message: receipt.message.clone(),
        source: if outcome.is_fallback() {
            "fallback"
        } else {
            "service"
        },
    }))
}
