/// LLM client — the single point of entry for all OpenAI API calls.
///
/// ARCHITECTURAL RULE: No other module may call the OpenAI API directly.
/// All completion requests MUST go through the gateway in this module.
///
/// Model: gpt-4o (hardcoded — do not make configurable to prevent drift)
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for all completion calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-4o";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// A provider that turns a (system prompt, user prompt) pair into the raw
/// text of the assistant message. Behind a trait so tests can substitute a
/// stub for the real OpenAI client.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn chat(&self, system: &str, user: &str, temperature: f32) -> Result<String, LlmError>;
}

/// Reqwest-backed OpenAI chat-completions client.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl ChatCompletion for OpenAiClient {
    /// Makes exactly one call to the chat-completions API, demanding a JSON
    /// object response. A failed attempt is final; there is no retry.
    async fn chat(&self, system: &str, user: &str, temperature: f32) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            temperature,
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse error message
            let message = serde_json::from_str::<OpenAiError>(&body)
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

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LlmError::EmptyContent)
    }
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("OpenAI client is not configured")]
    NotConfigured,

    #[error("{0}")]
    Provider(String),
}

/// Holds the provider handle decided once at startup. When no API key was
/// found the gateway stays unconfigured and every completion request
/// short-circuits without a network call.
#[derive(Clone)]
pub struct CompletionGateway {
    provider: Option<Arc<dyn ChatCompletion>>,
}

impl CompletionGateway {
    pub fn configured(provider: impl ChatCompletion + 'static) -> Self {
        Self {
            provider: Some(Arc::new(provider)),
        }
    }

    pub fn unconfigured() -> Self {
        Self { provider: None }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Submits one (system prompt, user prompt) pair and parses the
    /// assistant message content as JSON. The parsed value is passed
    /// through without validating its shape.
    pub async fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
    ) -> Result<Value, GatewayError> {
        let provider = self.provider.as_ref().ok_or(GatewayError::NotConfigured)?;

        let content = provider
            .chat(system, user, temperature)
            .await
            .map_err(|e| GatewayError::Provider(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| GatewayError::Provider(e.to_string()))
    }
}
