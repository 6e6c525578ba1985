mod assistant;
mod auth;
mod career;
mod case_studies;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod portfolios;
mod resumes;
mod routes;
mod state;
mod store;

#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::PgStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolify API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let pool = create_pool(&config.database_url).await?;

    // Initialize LLM client. A missing key is not fatal: AI endpoints answer 503.
    let llm = LlmClient::new(&config);
    if config.groq_api_key.is_some() {
        info!("LLM client initialized (model: {})", llm_client::MODEL);
    } else {
        tracing::warn!("GROQ_API_KEY is not set; AI endpoints will be unavailable");
    }

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_origin
                .parse::<HeaderValue>()
                .context("CORS_ORIGIN must be a valid header value")?,
        )
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    // Build app state
    let state = AppState {
        store: Arc::new(PgStore::new(pool)),
        llm: Arc::new(llm),
        http: reqwest::Client::new(),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
