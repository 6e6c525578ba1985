//! Axum route handlers for the Case Study API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::assistant::operations;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::case_study::{CaseStudyCreate, CaseStudyRow};
use crate::state::AppState;

fn not_found() -> AppError {
    AppError::NotFound("Case study not found".to_string())
}

/// GET /api/case-studies
pub async fn handle_list(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<CaseStudyRow>>, AppError> {
    Ok(Json(state.store.list_case_studies(user.id).await?))
}

/// POST /api/case-studies
pub async fn handle_create(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<CaseStudyCreate>,
) -> Result<(StatusCode, Json<CaseStudyRow>), AppError> {
    let case_study = state.store.insert_case_study(user.id, req).await?;
    Ok((StatusCode::CREATED, Json(case_study)))
}

/// POST /api/case-studies/:id/generate
///
/// Generates the write-up from the stored inputs and persists it, fallback included.
pub async fn handle_generate(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<CaseStudyRow>, AppError> {
    let case_study = state
        .store
        .get_case_study(user.id, id)
        .await?
        .ok_or_else(not_found)?;

    let generated = operations::generate_case_study(state.llm.as_ref(), &case_study.inputs).await?;
    if generated.is_fallback() {
        info!("Case study {id} stored with raw model text");
    }

    let updated = state
        .store
        .set_generated_content(user.id, id, generated.value())
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(updated))
}
