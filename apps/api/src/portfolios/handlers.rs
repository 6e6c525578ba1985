//! Axum route handlers for the Portfolio API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::assistant::operations;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::portfolio::{PortfolioCreate, PortfolioRow, PortfolioUpdate};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateBioRequest {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: String,
}

fn not_found() -> AppError {
    AppError::NotFound("Portfolio not found".to_string())
}

/// GET /api/portfolios
pub async fn handle_list(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<PortfolioRow>>, AppError> {
    Ok(Json(state.store.list_portfolios(user.id).await?))
}

/// POST /api/portfolios
/// New portfolios always start unpublished.
pub async fn handle_create(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<PortfolioCreate>,
) -> Result<(StatusCode, Json<PortfolioRow>), AppError> {
    let portfolio = state.store.insert_portfolio(user.id, req).await?;
    Ok((StatusCode::CREATED, Json(portfolio)))
}

/// GET /api/portfolios/:id
pub async fn handle_get(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<PortfolioRow>, AppError> {
    let portfolio = state
        .store
        .get_portfolio(user.id, id)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(portfolio))
}

/// PUT /api/portfolios/:id
pub async fn handle_update(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<PortfolioUpdate>,
) -> Result<Json<PortfolioRow>, AppError> {
    let portfolio = state
        .store
        .update_portfolio(user.id, id, req)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(portfolio))
}

/// DELETE /api/portfolios/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete_portfolio(user.id, id).await? {
        return Err(not_found());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/portfolios/generate-bio
///
/// Returns `{tagline, bio}` from the model, or empty strings when the reply is unusable.
pub async fn handle_generate_bio(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Json(req): Json<GenerateBioRequest>,
) -> Result<Json<Value>, AppError> {
    let bio = operations::generate_portfolio_bio(
        state.llm.as_ref(),
        &req.name,
        &req.title,
        &req.skills,
        &req.experience,
    )
    .await?;
    Ok(Json(bio.into_value()))
}
