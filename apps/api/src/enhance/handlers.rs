use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EnhanceBody {
    pub section: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceReply {
    pub enhanced_content: String,
    /// `"service"` or `"fallback"` — callers that care about masking can
    /// tell the two apart.
    pub source: &'static str,
}

/// POST /api/v1/enhance
///
/// The empty-content check lives here, not in the client: submitting
/// nothing to enhance is a user error, surfaced before any call is made.
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(req): Json<EnhanceBody>,
) -> Result<Json<EnhanceReply>, AppError> {
    if req.content.trim().is_empty() {
        return Err(AppError::Validation(
            "No content to enhance. Please add some content before enhancing with AI."
                .to_string(),
        ));
    }

    let _guard = state
        .enhance_in_flight
        .try_begin()
        .ok_or(AppError::Busy(state.enhance_in_flight.name()))?;

    let outcome = state.enhancer.enhance(&req.section, &req.content).await;
    let source = if outcome.is_fallback() {
        "fallback"
    } else {
        "service"
    };

    Ok(Json(EnhanceReply {
        enhanced_content: outcome.text().to_string(),
        source,
    }))
}
