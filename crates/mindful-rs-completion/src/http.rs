//! Live HTTP completion provider for OpenAI-compatible services.

use crate::CompletionProvider;
use crate::error::CompletionError;
use crate::prompt::PERSONA_INSTRUCTION;
use crate::types::{ChatMessage, GenerationParams};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// Completion provider backed by an OpenAI-compatible chat endpoint.
///
/// The persona instruction is prepended to every request; callers only ever
/// see user and assistant messages.
pub struct HttpCompletionProvider {
    client: Client,
    endpoint: String,
    api_key: String,
    params: GenerationParams,
}

impl HttpCompletionProvider {
    /// Create a provider for the given endpoint and credential.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        params: GenerationParams,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            params,
        }
    }

    fn build_request(&self, history: &[ChatMessage]) -> ChatCompletionRequest {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ChatMessage::system(PERSONA_INSTRUCTION));
        messages.extend(history.iter().cloned());
        ChatCompletionRequest {
            model: self.params.model.clone(),
            messages,
            max_tokens: self.params.max_reply_tokens,
            temperature: self.params.temperature,
        }
    }
}

#[async_trait]
impl CompletionProvider for HttpCompletionProvider {
    async fn complete(&self, history: &[ChatMessage]) -> Result<String, CompletionError> {
        let request = self.build_request(history);
        debug!(
            "requesting completion (model={}, history_len={})",
            self.params.model,
            history.len()
        );
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| CompletionError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("completion request rejected (status={})", status);
            return Err(map_status(status, &body));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| CompletionError::MalformedResponse(err.to_string()))?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(CompletionError::EmptyResponse)
    }
}

/// Classify a non-success status into the error taxonomy.
fn map_status(status: StatusCode, body: &str) -> CompletionError {
    match status {
        StatusCode::UNAUTHORIZED => CompletionError::Unauthenticated,
        StatusCode::TOO_MANY_REQUESTS => CompletionError::RateLimited,
        StatusCode::PAYMENT_REQUIRED => CompletionError::QuotaExceeded,
        _ => {
            let message = serde_json::from_str::<ErrorResponse>(body)
                .map(|wrapper| wrapper.error.message)
                .unwrap_or_else(|_| format!("unexpected status {status}"));
            CompletionError::Transport(message)
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}
