use anyhow::{Context, Result};

const DEFAULT_SECRET_KEY: &str = "dev-secret-key-change-in-production";
const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_GOOGLE_TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";
const DEFAULT_TOKEN_EXPIRE_MINUTES: i64 = 60 * 24 * 7;

/// Application configuration loaded once from environment variables at startup
/// and handed to every component that needs it.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub secret_key: String,
    /// `None` when unset or blank. The gateway reports a configuration error on use.
    pub groq_api_key: Option<String>,
    pub groq_base_url: String,
    pub google_client_id: String,
    pub google_tokeninfo_url: String,
    pub access_token_expire_minutes: i64,
    pub cors_origin: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            secret_key: env_or("SECRET_KEY", DEFAULT_SECRET_KEY),
            groq_api_key: optional_env("GROQ_API_KEY"),
            groq_base_url: env_or("GROQ_BASE_URL", DEFAULT_GROQ_BASE_URL),
            google_client_id: env_or("GOOGLE_CLIENT_ID", ""),
            google_tokeninfo_url: env_or("GOOGLE_TOKENINFO_URL", DEFAULT_GOOGLE_TOKENINFO_URL),
            access_token_expire_minutes: std::env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
                .unwrap_or_else(|_| DEFAULT_TOKEN_EXPIRE_MINUTES.to_string())
                .parse::<i64>()
                .context("ACCESS_TOKEN_EXPIRE_MINUTES must be an integer")?,
            cors_origin: env_or("CORS_ORIGIN", "http://localhost:5173"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
impl Config {
    /// Config for unit tests. Never touches the process environment.
    pub fn for_tests() -> Self {
        Config {
            database_url: "postgres://localhost/portfolify_test".to_string(),
            secret_key: "test-secret".to_string(),
            groq_api_key: Some("test-groq-key".to_string()),
            groq_base_url: "http://127.0.0.1:9".to_string(),
            google_client_id: "test-client-id.apps.googleusercontent.com".to_string(),
            google_tokeninfo_url: "http://127.0.0.1:9/tokeninfo".to_string(),
            access_token_expire_minutes: 60,
            cors_origin: "http://localhost:5173".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}
