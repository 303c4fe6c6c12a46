/// Completion client: the single point of entry for all upstream LLM calls.
///
/// ARCHITECTURAL RULE: No other module may call the completion API directly.
/// All LLM interactions MUST go through this module.
///
/// Model: llama-3.1-8b-instant (hardcoded, do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::portfolio::builder::PromptSpec;

const COMPLETIONS_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// The model used for all portfolio generation calls.
pub const MODEL: &str = "llama-3.1-8b-instant";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Completion API unreachable: {0}")]
    Unreachable(String),

    #[error("Completion API error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Malformed completion payload: {0}")]
    MalformedPayload(String),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    /// Extracts the generated text from the first choice.
    ///
    /// An absent or null content field is passed through as an empty string
    /// rather than an error; the document validator downstream rejects it.
    fn text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default()
    }
}

/// Seam for the upstream completion call so handlers can be tested with a
/// mock backend instead of a live API.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, spec: &PromptSpec) -> Result<String, GenerationError>;
}

/// Production completion client against the Groq OpenAI-compatible endpoint.
/// Exactly one upstream attempt per request: no retry, no backoff. A failed
/// generation is terminal for the request that triggered it.
pub struct CompletionClient {
    client: Client,
    api_key: String,
}

impl CompletionClient {
    /// The credential is injected here, at construction; nothing in the
    /// call path reads process environment state.
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
impl CompletionBackend for CompletionClient {
    async fn complete(&self, spec: &PromptSpec) -> Result<String, GenerationError> {
        let request_body = ChatRequest {
            model: spec.model,
            temperature: spec.temperature,
            max_tokens: spec.max_tokens,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &spec.system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: &spec.user_instruction,
                },
            ],
        };

        let response = self
            .client
            .post(COMPLETIONS_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GenerationError::Unreachable(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Upstream {
                status: status.as_u16(),
                message: body,
            });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::MalformedPayload(e.to_string()))?;

        let text = chat_response.text();
        debug!("Completion call succeeded: {} bytes generated", text.len());

        Ok(text)
    }
}
