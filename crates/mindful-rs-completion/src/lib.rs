//! Completion-client boundary for the Mindful engine.
//!
//! A provider turns an ordered, role-tagged message history into exactly one
//! assistant reply. Two implementations exist: a live HTTP client for
//! OpenAI-compatible services and a scripted local fallback. Which one a
//! deployment gets is decided once, at construction, from config.

mod error;
mod http;
mod prompt;
mod scripted;
mod types;

pub use error::CompletionError;
pub use http::HttpCompletionProvider;
pub use prompt::PERSONA_INSTRUCTION;
pub use scripted::ScriptedCompletionProvider;
pub use types::{ChatMessage, ChatRole, GenerationParams};

use async_trait::async_trait;
use mindful_rs_config::{CompletionConfig, ProviderKind};
use std::sync::Arc;

/// Capability to produce one assistant reply from an ordered history.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Produce exactly one assistant reply for the given history.
    async fn complete(&self, history: &[ChatMessage]) -> Result<String, CompletionError>;
}

/// Construct the provider selected by config.
///
/// Requesting the live provider without a credential fails here rather than
/// on the first call.
pub fn provider_from_config(
    config: &CompletionConfig,
) -> Result<Arc<dyn CompletionProvider>, CompletionError> {
    match config.provider {
        ProviderKind::Scripted => Ok(Arc::new(ScriptedCompletionProvider::new())),
        ProviderKind::Live => {
            let api_key = config
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .ok_or(CompletionError::Unauthenticated)?;
            let params = GenerationParams {
                model: config.model.clone(),
                temperature: config.temperature,
                max_reply_tokens: config.max_reply_tokens,
            };
            Ok(Arc::new(HttpCompletionProvider::new(
                &config.endpoint,
                api_key,
                params,
            )))
        }
    }
}
