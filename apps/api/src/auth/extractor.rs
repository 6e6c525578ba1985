use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::auth::token::{decode_access_token, TokenError};
use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::state::AppState;

/// The authenticated caller, resolved from an `Authorization: Bearer <jwt>` header.
pub struct AuthUser(pub UserRow);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()))?;

        let user_id = decode_access_token(token, &state.config.secret_key).map_err(|e| match e {
            TokenError::Invalid(_) => AppError::Unauthorized("Invalid or expired token".to_string()),
            TokenError::BadSubject => AppError::Unauthorized("Invalid token payload".to_string()),
        })?;

        let user = state
            .store
            .find_user(user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

        Ok(AuthUser(user))
    }
}
