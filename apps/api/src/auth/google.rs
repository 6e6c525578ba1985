//! Google sign-in: verifies an ID token with Google's tokeninfo endpoint.

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Identity asserted by a verified Google ID token.
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleIdentity {
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Error)]
pub enum GoogleAuthError {
    #[error("token rejected by Google (status {0})")]
    Rejected(u16),

    #[error("token audience does not match this application")]
    AudienceMismatch,

    #[error("verification request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct TokenInfo {
    aud: String,
    email: Option<String>,
    name: Option<String>,
}

pub async fn verify_id_token(
    http: &reqwest::Client,
    tokeninfo_url: &str,
    client_id: &str,
    id_token: &str,
) -> Result<GoogleIdentity, GoogleAuthError> {
    let response = http
        .get(tokeninfo_url)
        .query(&[("id_token", id_token)])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        warn!("Google tokeninfo returned {status}");
        return Err(GoogleAuthError::Rejected(status.as_u16()));
    }

    let info: TokenInfo = response.json().await?;
    if info.aud != client_id {
        return Err(GoogleAuthError::AudienceMismatch);
    }

    Ok(GoogleIdentity {
        email: info.email.filter(|e| !e.is_empty()),
        name: info.name,
    })
}
