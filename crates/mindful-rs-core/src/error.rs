//! Error types for the core engine crate.

use crate::storage::StorageError;
use crate::types::ConversationId;
use thiserror::Error;

/// Errors returned by store and orchestrator operations.
#[derive(Debug, Error)]
pub enum MindfulCoreError {
    /// Conversation id is unknown to the store.
    #[error("unknown conversation: {0}")]
    UnknownConversation(ConversationId),
    /// Writing through the blob store failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    /// Serializing a collection failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
