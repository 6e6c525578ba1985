use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// JWT claims carried by every access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid or expired token")]
    Invalid(#[from] jsonwebtoken::errors::Error),

    #[error("Invalid token payload")]
    BadSubject,
}

/// Issues an HS256 access token for `user_id` valid for `expire_minutes`.
pub fn create_access_token(
    user_id: Uuid,
    secret: &str,
    expire_minutes: i64,
) -> Result<String, TokenError> {
    let claims = Claims {
        sub: user_id.to_string(),
        exp: (Utc::now() + Duration::minutes(expire_minutes)).timestamp(),
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

/// Validates signature and expiry, then returns the user id from `sub`.
pub fn decode_access_token(token: &str, secret: &str) -> Result<Uuid, TokenError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;
    Uuid::parse_str(&data.claims.sub).map_err(|_| TokenError::BadSubject)
}
