//! HTTP surface of the section editors.
//!
//! Every mutation runs under the session's write lock and performs a
//! shallow top-level merge: the edited collection is replaced wholesale,
//! the other sections are carried over, and the response body is the full
//! updated resume.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::editor::education::{self, EducationPatch};
use crate::editor::experience::{self, ExperiencePatch};
use crate::editor::personal_info::{self, PersonalInfoPatch};
use crate::editor::skills::{self, SkillPatch};
use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::state::AppState;

/// PATCH /api/v1/resume/personal-info
pub async fn handle_update_personal_info(
    State(state): State<AppState>,
    Json(patch): Json<PersonalInfoPatch>,
) -> Result<Json<Resume>, AppError> {
    let updated = state
        .session
        .modify(|r| Resume {
            personal_info: personal_info::apply(&r.personal_info, &patch),
            ..r.clone()
        })
        .await?;
    Ok(Json(updated))
}

/// POST /api/v1/resume/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
) -> Result<Json<Resume>, AppError> {
    let updated = state
        .session
        .modify(|r| Resume {
            experience: experience::add(&r.experience),
            ..r.clone()
        })
        .await?;
    Ok(Json(updated))
}

/// PATCH /api/v1/resume/experience/:id
pub async fn handle_update_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ExperiencePatch>,
) -> Result<Json<Resume>, AppError> {
    let updated = state
        .session
        .modify(|r| Resume {
            experience: experience::update(&r.experience, &id, &patch),
            ..r.clone()
        })
        .await?;
    Ok(Json(updated))
}

/// DELETE /api/v1/resume/experience/:id
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resume>, AppError> {
    let updated = state
        .session
        .modify(|r| Resume {
            experience: experience::remove(&r.experience, &id),
            ..r.clone()
        })
        .await?;
    Ok(Json(updated))
}

/// POST /api/v1/resume/education
pub async fn handle_add_education(
    State(state): State<AppState>,
) -> Result<Json<Resume>, AppError> {
    let updated = state
        .session
        .modify(|r| Resume {
            education: education::add(&r.education),
            ..r.clone()
        })
        .await?;
    Ok(Json(updated))
}

/// PATCH /api/v1/resume/education/:id
pub async fn handle_update_education(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<EducationPatch>,
) -> Result<Json<Resume>, AppError> {
    let updated = state
        .session
        .modify(|r| Resume {
            education: education::update(&r.education, &id, &patch),
            ..r.clone()
        })
        .await?;
    Ok(Json(updated))
}

/// DELETE /api/v1/resume/education/:id
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resume>, AppError> {
    let updated = state
        .session
        .modify(|r| Resume {
            education: education::remove(&r.education, &id),
            ..r.clone()
        })
        .await?;
    Ok(Json(updated))
}

/// POST /api/v1/resume/skills
pub async fn handle_add_skill(State(state): State<AppState>) -> Result<Json<Resume>, AppError> {
    let updated = state
        .session
        .modify(|r| Resume {
            skills: skills::add(&r.skills),
            ..r.clone()
        })
        .await?;
    Ok(Json(updated))
}

/// PATCH /api/v1/resume/skills/:id
pub async fn handle_update_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<SkillPatch>,
) -> Result<Json<Resume>, AppError> {
    let updated = state
        .session
        .modify(|r| Resume {
            skills: skills::update(&r.skills, &id, &patch),
            ..r.clone()
        })
        .await?;
    Ok(Json(updated))
}

/// DELETE /api/v1/resume/skills/:id
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resume>, AppError> {
    let updated = state
        .session
        .modify(|r| Resume {
            skills: skills::remove(&r.skills, &id),
            ..r.clone()
        })
        .await?;
    Ok(Json(updated))
}
