use super::secrets::{SecretError, SecretResolver};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Soft output bound passed to the model. Advisory only: the produced text
/// is returned as-is, without post-hoc truncation.
const MAX_CHARS: usize = 200;

const MAX_TOKENS: u32 = 256;
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("credential unavailable: {0}")]
    Credential(#[from] SecretError),
    #[error("generation provider failure: {0}")]
    Provider(String),
}

/// Produces review text for a (title, author) pair.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, title: &str, author: &str) -> Result<String, GenerationError>;
}

/// Build the generation instruction. Title and author are inserted verbatim.
pub fn build_prompt(title: &str, author: &str) -> String {
    format!(
        "{author}著『{title}』の書評を日本語で{MAX_CHARS}文字以内で書いてください。"
    )
}

/// [`TextGenerator`] backed by an OpenAI-compatible chat-completions API.
///
/// One model invocation per call, bearer-authenticated with a credential
/// resolved freshly from the secret store.
pub struct OpenAiGenerator {
    resolver: Arc<dyn SecretResolver>,
    http: reqwest::Client,
    endpoint: String,
    model: String,
}

impl OpenAiGenerator {
    pub fn new(resolver: Arc<dyn SecretResolver>, endpoint: &str, model: &str) -> Self {
        Self {
            resolver,
            http: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, title: &str, author: &str) -> Result<String, GenerationError> {
        // Credential first: a resolver failure aborts before any provider
        // traffic is issued.
        let credential = self.resolver.resolve().await?;

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_prompt(title, author),
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            stream: false,
        };

        debug!(model = %self.model, title = %title, "Invoking generation provider");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(credential)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Provider(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GenerationError::Provider(format!(
                "provider returned {}",
                response.status()
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Provider(e.to_string()))?;

        extract_text(body)
    }
}

/// Pull the produced text out of the provider response.
pub(crate) fn extract_text(body: ChatResponse) -> Result<String, GenerationError> {
    let choice = body
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| GenerationError::Provider("response contained no choices".to_string()))?;

    match choice.message.content {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(GenerationError::Provider(
            "response contained no text".to_string(),
        )),
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    pub(crate) choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub(crate) message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponseMessage {
    pub(crate) content: Option<String>,
}
