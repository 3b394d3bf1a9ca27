pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::editor::handlers as editor;
use crate::enhance::handlers as enhance;
use crate::export::handlers as export;
use crate::persist::handlers as persist;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session: upload / create / fetch / discard
        .route(
            "/api/v1/resume",
            get(session::handle_get_resume).delete(session::handle_discard),
        )
        .route("/api/v1/resume/upload", post(session::handle_upload))
        .route("/api/v1/resume/blank", post(session::handle_create_blank))
        // Section editors
        .route(
            "/api/v1/resume/personal-info",
            patch(editor::handle_update_personal_info),
        )
        .route(
            "/api/v1/resume/experience",
            post(editor::handle_add_experience),
        )
        .route(
            "/api/v1/resume/experience/:id",
            patch(editor::handle_update_experience).delete(editor::handle_remove_experience),
        )
        .route(
            "/api/v1/resume/education",
            post(editor::handle_add_education),
        )
        .route(
            "/api/v1/resume/education/:id",
            patch(editor::handle_update_education).delete(editor::handle_remove_education),
        )
        .route("/api/v1/resume/skills", post(editor::handle_add_skill))
        .route(
            "/api/v1/resume/skills/:id",
            patch(editor::handle_update_skill).delete(editor::handle_remove_skill),
        )
        // Enhancement and persistence
        .route("/api/v1/enhance", post(enhance::handle_enhance))
        .route("/api/v1/resume/save", post(persist::handle_save))
        // Exports
        .route(
            "/api/v1/resume/export/json",
            get(export::handle_export_json),
        )
        .route("/api/v1/resume/export/pdf", get(export::handle_export_pdf))
        .with_state(state)
}
