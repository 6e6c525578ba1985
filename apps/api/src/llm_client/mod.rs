/// LLM Client — the single point of entry for all model calls in Portfolify.
///
/// ARCHITECTURAL RULE: No other module may call the Groq API directly.
/// Every AI feature goes through a `ModelGateway`, and every structured reply
/// goes through `extract::extract` before it reaches a caller.
///
/// Model: llama-3.3-70b-versatile (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

pub mod extract;
pub mod prompts;

/// The model used for all LLM calls in Portfolify.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "llama-3.3-70b-versatile";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 2000;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("GROQ_API_KEY is not set. Please add it to your .env file.")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Sends one (system, user) message pair to a completion endpoint and returns the raw reply.
///
/// Carried in `AppState` as `Arc<dyn ModelGateway>`.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Text of the first choice. Missing content is treated as an empty reply.
    pub fn text(&self) -> &str {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// Groq chat-completions client (OpenAI-compatible wire format).
/// One request per call: no retries, no streaming.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl LlmClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.groq_api_key.clone(),
            base_url: config.groq_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Makes a raw call to the completion endpoint, returning the full response object.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<ChatResponse, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let mut messages = Vec::with_capacity(2);
        if !system.is_empty() {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: prompt,
        });

        let request_body = ChatRequest {
            model: MODEL,
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ProviderError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }
}

#[async_trait]
impl ModelGateway for LlmClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(prompt, system).await?;
        Ok(response.text().to_string())
    }
}
