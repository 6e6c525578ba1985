//! Axum route handlers for the Auth API.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::google::verify_id_token;
use crate::auth::password::{hash_password, random_password, verify_password};
use crate::auth::token::create_access_token;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::user::{NewUser, UserResponse, UserRow, UserUpdate};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct GoogleTokenRequest {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user: UserResponse,
}

fn token_response(state: &AppState, user: &UserRow) -> Result<TokenResponse, AppError> {
    let access_token = create_access_token(
        user.id,
        &state.config.secret_key,
        state.config.access_token_expire_minutes,
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Token issuance failed: {e}")))?;

    Ok(TokenResponse {
        access_token,
        token_type: "bearer",
        user: UserResponse::from(user),
    })
}

/// POST /api/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "email and password are required".to_string(),
        ));
    }
    if state.store.find_user_by_email(&req.email).await?.is_some() {
        return Err(AppError::Validation("Email already registered".to_string()));
    }

    let user = state
        .store
        .insert_user(NewUser {
            email: req.email,
            full_name: req.full_name,
            password_hash: hash_password(&req.password)?,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(token_response(&state, &user)?)))
}

/// POST /api/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let user = state.store.find_user_by_email(&req.email).await?;
    let user = match user {
        Some(user) if verify_password(&req.password, &user.password_hash) => user,
        _ => {
            warn!("Rejected login attempt");
            return Err(AppError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }
    };

    Ok(Json(token_response(&state, &user)?))
}

/// POST /api/auth/google
///
/// Signs in with a Google ID token, creating the account on first use.
pub async fn handle_google_login(
    State(state): State<AppState>,
    Json(req): Json<GoogleTokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let identity = verify_id_token(
        &state.http,
        &state.config.google_tokeninfo_url,
        &state.config.google_client_id,
        &req.token,
    )
    .await
    .map_err(|e| {
        warn!("Google OAuth failed: {e}");
        AppError::Unauthorized(format!("Invalid Google token: {e}"))
    })?;

    let email = identity
        .email
        .ok_or_else(|| AppError::Validation("Google account has no email".to_string()))?;

    let user = match state.store.find_user_by_email(&email).await? {
        Some(user) => user,
        None => {
            info!("Creating account for first Google sign-in");
            state
                .store
                .insert_user(NewUser {
                    email,
                    full_name: identity.name.unwrap_or_else(|| "Google User".to_string()),
                    password_hash: hash_password(&random_password())?,
                })
                .await?
        }
    };

    Ok(Json(token_response(&state, &user)?))
}

/// GET /api/auth/me
pub async fn handle_get_me(AuthUser(user): AuthUser) -> Json<UserResponse> {
    Json(UserResponse::from(&user))
}

/// PATCH /api/auth/me
pub async fn handle_update_me(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(update): Json<UserUpdate>,
) -> Result<Json<UserResponse>, AppError> {
    if update.is_empty() {
        return Ok(Json(UserResponse::from(&user)));
    }

    if let Some(email) = &update.email {
        if let Some(existing) = state.store.find_user_by_email(email).await? {
            if existing.id != user.id {
                return Err(AppError::Validation("Email already in use".to_string()));
            }
        }
    }

    let updated = state
        .store
        .update_user(user.id, &update)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse::from(&updated)))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::test_support::TestApp;

    #[tokio::test]
    async fn test_signup_returns_token_and_user() {
        let app = TestApp::new("");
        let (status, body) = app
            .request(
                Method::POST,
                "/api/auth/signup",
                None,
                Some(json!({"email": "ada@example.com", "full_name": "Ada", "password": "pw123456"})),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["token_type"], "bearer");
        assert_eq!(body["user"]["email"], "ada@example.com");
        assert!(body["user"].get("password_hash").is_none());

        let token = body["access_token"].as_str().unwrap();
        let (status, me) = app.request(Method::GET, "/api/auth/me", Some(token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(me["full_name"], "Ada");
    }

    #[tokio::test]
    async fn test_signup_rejects_duplicate_email() {
        let app = TestApp::new("");
        app.user("ada@example.com").await;

        let (status, body) = app
            .request(
                Method::POST,
                "/api/auth/signup",
                None,
                Some(json!({"email": "ada@example.com", "full_name": "Ada", "password": "pw"})),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Email already registered");
    }

    #[tokio::test]
    async fn test_login_with_correct_and_wrong_password() {
        let app = TestApp::new("");
        app.user("ada@example.com").await;

        let (status, body) = app
            .request(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({"email": "ada@example.com", "password": TestApp::PASSWORD})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["access_token"].is_string());

        let (status, body) = app
            .request(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({"email": "ada@example.com", "password": "wrong"})),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["message"], "Invalid email or password");
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let app = TestApp::new("");
        let (status, _) = app
            .request(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({"email": "ghost@example.com", "password": "x"})),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_me_requires_valid_token() {
        let app = TestApp::new("");

        let (status, _) = app.request(Method::GET, "/api/auth/me", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = app
            .request(Method::GET, "/api/auth/me", Some("not-a-jwt"), None)
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["message"], "Invalid or expired token");
    }

    #[tokio::test]
    async fn test_token_for_deleted_user_is_rejected() {
        let app = TestApp::new("");
        let token = app.token_for(uuid::Uuid::new_v4());
        let (status, body) = app.request(Method::GET, "/api/auth/me", Some(&token), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["message"], "User not found");
    }

    #[tokio::test]
    async fn test_update_me_changes_name_and_guards_email() {
        let app = TestApp::new("");
        let (_, token) = app.user("ada@example.com").await;
        app.user("grace@example.com").await;

        let (status, body) = app
            .request(
                Method::PATCH,
                "/api/auth/me",
                Some(&token),
                Some(json!({"full_name": "Ada King"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["full_name"], "Ada King");
        assert_eq!(body["email"], "ada@example.com");

        let (status, body) = app
            .request(
                Method::PATCH,
                "/api/auth/me",
                Some(&token),
                Some(json!({"email": "grace@example.com"})),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Email already in use");

        let (status, body) = app
            .request(
                Method::PATCH,
                "/api/auth/me",
                Some(&token),
                Some(json!({"email": "ada@example.com"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "ada@example.com");
    }

    #[tokio::test]
    async fn test_google_login_creates_then_reuses_account() {
        let server = MockServer::start().await;
        let mut app = TestApp::new("");
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "aud": app.config.google_client_id,
                "email": "lin@example.com",
                "name": "Lin"
            })))
            .mount(&server)
            .await;
        app.set_google_tokeninfo_url(format!("{}/tokeninfo", server.uri()));

        let (status, first) = app
            .request(Method::POST, "/api/auth/google", None, Some(json!({"token": "t"})))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["user"]["full_name"], "Lin");

        let (_, second) = app
            .request(Method::POST, "/api/auth/google", None, Some(json!({"token": "t"})))
            .await;
        assert_eq!(first["user"]["id"], second["user"]["id"]);
    }

    #[tokio::test]
    async fn test_google_login_without_email_is_bad_request() {
        let server = MockServer::start().await;
        let mut app = TestApp::new("");
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "aud": app.config.google_client_id
            })))
            .mount(&server)
            .await;
        app.set_google_tokeninfo_url(format!("{}/tokeninfo", server.uri()));

        let (status, body) = app
            .request(Method::POST, "/api/auth/google", None, Some(json!({"token": "t"})))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Google account has no email");
    }

    #[tokio::test]
    async fn test_google_login_rejected_token_is_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;
        let mut app = TestApp::new("");
        app.set_google_tokeninfo_url(format!("{}/tokeninfo", server.uri()));

        let (status, _) = app
            .request(Method::POST, "/api/auth/google", None, Some(json!({"token": "t"})))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
