//! Core engine for the Mindful wellness chat.
//!
//! This crate owns conversation state and its persistence contract, the
//! mood journal, and the turn-taking state machine that drives a completion
//! provider. Presentation layers consume the stores and the orchestrator;
//! they never touch storage or the provider directly.

pub mod chat;
pub mod conversations;
pub mod error;
pub mod moods;
pub mod storage;
pub mod topics;
pub mod types;

pub use chat::ChatOrchestrator;
pub use conversations::ConversationStore;
pub use error::MindfulCoreError;
pub use moods::MoodStore;
pub use storage::{BlobStore, FileBlobStore, StorageError};
pub use types::{
    Conversation, ConversationId, ConversationSummary, Message, Mood, MoodCount, MoodEntry, Role,
};
