//! Axum route handlers for the Résumé API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::assistant::operations;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::resume::{ResumeCreate, ResumeRow, ResumeUpdate};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct AiSummaryRequest {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub experience_summary: String,
}

#[derive(Debug, Serialize)]
pub struct AiSummaryResponse {
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct EnhanceBulletRequest {
    pub bullet: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
}

#[derive(Debug, Serialize)]
pub struct EnhanceBulletResponse {
    pub enhanced: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestSkillsRequest {
    pub job_title: String,
    #[serde(default)]
    pub current_skills: Vec<String>,
    #[serde(default)]
    pub experience_summary: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestSkillsResponse {
    /// Always a JSON array.
    pub skills: Value,
}

fn not_found() -> AppError {
    AppError::NotFound("Resume not found".to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// CRUD
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/resumes
pub async fn handle_list(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    Ok(Json(state.store.list_resumes(user.id).await?))
}

/// POST /api/resumes
pub async fn handle_create(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<ResumeCreate>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    let resume = state.store.insert_resume(user.id, req).await?;
    Ok((StatusCode::CREATED, Json(resume)))
}

/// GET /api/resumes/:id
pub async fn handle_get(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeRow>, AppError> {
    let resume = state
        .store
        .get_resume(user.id, id)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(resume))
}

/// PUT /api/resumes/:id
pub async fn handle_update(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ResumeUpdate>,
) -> Result<Json<ResumeRow>, AppError> {
    let resume = state
        .store
        .update_resume(user.id, id, req)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(resume))
}

/// DELETE /api/resumes/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete_resume(user.id, id).await? {
        return Err(not_found());
    }
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// AI helpers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/resumes/:id/ai-summary
///
/// The résumé must exist and belong to the caller; its content is not sent to the model.
pub async fn handle_ai_summary(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<AiSummaryRequest>,
) -> Result<Json<AiSummaryResponse>, AppError> {
    state
        .store
        .get_resume(user.id, id)
        .await?
        .ok_or_else(not_found)?;

    let summary =
        operations::generate_resume_summary(state.llm.as_ref(), &req.job_title, &req.experience_summary)
            .await?;

    Ok(Json(AiSummaryResponse { summary }))
}

/// POST /api/resumes/enhance-bullet
pub async fn handle_enhance_bullet(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Json(req): Json<EnhanceBulletRequest>,
) -> Result<Json<EnhanceBulletResponse>, AppError> {
    let enhanced =
        operations::enhance_bullet(state.llm.as_ref(), &req.bullet, &req.job_title, &req.company)
            .await?;
    Ok(Json(EnhanceBulletResponse { enhanced }))
}

/// POST /api/resumes/suggest-skills
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Json(req): Json<SuggestSkillsRequest>,
) -> Result<Json<SuggestSkillsResponse>, AppError> {
    let skills = operations::suggest_skills(
        state.llm.as_ref(),
        &req.job_title,
        &req.current_skills,
        &req.experience_summary,
    )
    .await?;
    Ok(Json(SuggestSkillsResponse {
        skills: skills.into_value(),
    }))
}
