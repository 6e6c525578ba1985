//! Axum route handlers for the career tools: JD analyzer, recommendations, cover letters.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::assistant::operations;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JdAnalyzeRequest {
    pub job_description: String,
    pub resume_id: Uuid,
}

/// The four JD-match fields, projected from whatever object the model returned.
/// Missing keys get neutral defaults; values are passed through as-is.
#[derive(Debug, Serialize, PartialEq)]
pub struct JdAnalyzeResponse {
    pub match_score: Value,
    pub matched_skills: Value,
    pub missing_skills: Value,
    pub suggestions: Value,
}

impl JdAnalyzeResponse {
    pub fn project(result: &Value) -> Self {
        let field = |key: &str, default: Value| result.get(key).cloned().unwrap_or(default);
        Self {
            match_score: field("match_score", json!(0)),
            matched_skills: field("matched_skills", json!([])),
            missing_skills: field("missing_skills", json!([])),
            suggestions: field("suggestions", json!([])),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    pub resume_id: Uuid,
    pub job_description: String,
    #[serde(default)]
    pub company_name: String,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

async fn owned_resume(state: &AppState, user_id: Uuid, id: Uuid) -> Result<ResumeRow, AppError> {
    state
        .store
        .get_resume(user_id, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/jd-analyzer/analyze
pub async fn handle_analyze_jd(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<JdAnalyzeRequest>,
) -> Result<Json<JdAnalyzeResponse>, AppError> {
    let resume = owned_resume(&state, user.id, req.resume_id).await?;

    let result =
        operations::analyze_jd_match(state.llm.as_ref(), &req.job_description, &resume.content)
            .await?;

    Ok(Json(JdAnalyzeResponse::project(result.value())))
}

/// GET /api/recommendations
///
/// Sends every résumé (title + content) and portfolio (title + config) the user owns.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Value>, AppError> {
    let resumes: Vec<Value> = state
        .store
        .list_resumes(user.id)
        .await?
        .into_iter()
        .map(|r| json!({"title": r.title, "content": r.content}))
        .collect();

    let portfolios: Vec<Value> = state
        .store
        .list_portfolios(user.id)
        .await?
        .into_iter()
        .map(|p| json!({"title": p.title, "config": p.config}))
        .collect();

    let result = operations::get_recommendations(state.llm.as_ref(), &resumes, &portfolios).await?;
    Ok(Json(result.into_value()))
}

/// POST /api/cover-letter/generate
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let resume = owned_resume(&state, user.id, req.resume_id).await?;

    let cover_letter = operations::generate_cover_letter(
        state.llm.as_ref(),
        &resume.content,
        &req.job_description,
        &req.company_name,
    )
    .await?;

    Ok(Json(CoverLetterResponse { cover_letter }))
}
