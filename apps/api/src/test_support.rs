//! Shared fixtures for handler and operation tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use crate::auth::password::hash_password;
use crate::auth::token::create_access_token;
use crate::config::Config;
use crate::llm_client::{LlmClient, LlmError, ModelGateway};
use crate::models::resume::{ResumeCreate, ResumeRow};
use crate::models::user::{NewUser, UserRow};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::memory::MemoryStore;
use crate::store::Store;

/// Gateway double: returns a canned reply (or a provider error) and records every call.
pub struct StubGateway {
    reply: Option<String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl StubGateway {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fails every call as if the provider returned HTTP 500.
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// (system, prompt) pairs in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelGateway for StubGateway {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));
        self.reply.clone().ok_or(LlmError::Api {
            status: 500,
            message: "provider unavailable".to_string(),
        })
    }
}

/// The full router over an in-memory store.
pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub llm: Arc<StubGateway>,
    gateway: Arc<dyn ModelGateway>,
    pub config: Config,
}

impl TestApp {
    pub const PASSWORD: &'static str = "correct horse battery staple";

    /// Every model call answers with `reply`.
    pub fn new(reply: &str) -> Self {
        Self::with_gateway(StubGateway::replying(reply))
    }

    pub fn with_gateway(llm: StubGateway) -> Self {
        let llm = Arc::new(llm);
        Self {
            store: Arc::new(MemoryStore::default()),
            gateway: llm.clone(),
            llm,
            config: Config::for_tests(),
        }
    }

    /// Uses the real Groq client with no API key configured.
    pub fn without_api_key() -> Self {
        let mut config = Config::for_tests();
        config.groq_api_key = None;
        Self {
            store: Arc::new(MemoryStore::default()),
            gateway: Arc::new(LlmClient::new(&config)),
            llm: Arc::new(StubGateway::failing()),
            config,
        }
    }

    pub fn set_google_tokeninfo_url(&mut self, url: String) {
        self.config.google_tokeninfo_url = url;
    }

    fn state(&self) -> AppState {
        AppState {
            store: self.store.clone(),
            llm: self.gateway.clone(),
            http: reqwest::Client::new(),
            config: self.config.clone(),
        }
    }

    pub fn token_for(&self, user_id: Uuid) -> String {
        create_access_token(user_id, &self.config.secret_key, 60).unwrap()
    }

    /// Registers a user with `TestApp::PASSWORD` and returns it with a bearer token.
    pub async fn user(&self, email: &str) -> (UserRow, String) {
        let user = self
            .store
            .insert_user(NewUser {
                email: email.to_string(),
                full_name: "Test User".to_string(),
                password_hash: hash_password(Self::PASSWORD).unwrap(),
            })
            .await
            .unwrap();
        let token = self.token_for(user.id);
        (user, token)
    }

    pub async fn resume_for(&self, user_id: Uuid, content: Value) -> ResumeRow {
        self.store
            .insert_resume(
                user_id,
                ResumeCreate {
                    title: "Resume".to_string(),
                    content,
                },
            )
            .await
            .unwrap()
    }

    /// Sends one request through the router. Empty response bodies come back as `Value::Null`.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = build_router(self.state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }
}
