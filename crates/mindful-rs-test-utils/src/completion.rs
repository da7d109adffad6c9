//! Completion provider doubles.

use async_trait::async_trait;
use mindful_rs_completion::{ChatMessage, CompletionError, CompletionProvider};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::Notify;

/// Provider that always returns the same reply.
#[derive(Debug, Clone)]
pub struct FixedCompletion {
    reply: String,
}

impl FixedCompletion {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl CompletionProvider for FixedCompletion {
    async fn complete(&self, _history: &[ChatMessage]) -> Result<String, CompletionError> {
        Ok(self.reply.clone())
    }
}

/// Provider that records the last history it was handed.
#[derive(Debug, Clone)]
pub struct RecordingCompletion {
    reply: String,
    pub last_history: Arc<Mutex<Vec<ChatMessage>>>,
}

impl RecordingCompletion {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            last_history: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl CompletionProvider for RecordingCompletion {
    async fn complete(&self, history: &[ChatMessage]) -> Result<String, CompletionError> {
        *self.last_history.lock() = history.to_vec();
        Ok(self.reply.clone())
    }
}

/// Provider that fails every request with the given error.
#[derive(Debug, Clone)]
pub struct FailingCompletion {
    error: CompletionError,
}

impl FailingCompletion {
    pub fn new(error: CompletionError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl CompletionProvider for FailingCompletion {
    async fn complete(&self, _history: &[ChatMessage]) -> Result<String, CompletionError> {
        Err(self.error.clone())
    }
}

/// Provider that parks every request until the test releases it.
#[derive(Debug)]
pub struct GatedCompletion {
    reply: String,
    gate: Arc<Notify>,
}

impl GatedCompletion {
    /// Returns the provider and the handle used to release parked requests.
    pub fn new(reply: impl Into<String>) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        (
            Self {
                reply: reply.into(),
                gate: gate.clone(),
            },
            gate,
        )
    }
}

#[async_trait]
impl CompletionProvider for GatedCompletion {
    async fn complete(&self, _history: &[ChatMessage]) -> Result<String, CompletionError> {
        self.gate.notified().await;
        Ok(self.reply.clone())
    }
}
