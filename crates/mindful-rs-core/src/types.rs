//! Core data types for conversations and the mood journal.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current time truncated to the millisecond precision that persists.
pub(crate) fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    Utc.timestamp_millis_opt(now.timestamp_millis())
        .single()
        .unwrap_or(now)
}

/// Unique identifier for a conversation.
pub type ConversationId = Uuid;
/// Unique identifier for a message.
pub type MessageId = Uuid;
/// Unique identifier for a mood entry.
pub type MoodEntryId = Uuid;

/// Message stored in a conversation transcript. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Message identifier.
    pub id: MessageId,
    /// Message content.
    pub content: String,
    /// Role that produced the message.
    pub role: Role,
    /// Creation timestamp, persisted as epoch millis.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a user message stamped with the current time.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message stamped with the current time.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            role,
            timestamp: now_millis(),
        }
    }
}

/// Speaker role for a transcript message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User-authored message.
    User,
    /// Assistant-authored message.
    Assistant,
}

impl Role {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single conversation transcript.
///
/// `messages` holds insertion order, which is chronological order; the
/// transcript is never reordered or edited after the fact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    /// Conversation identifier.
    pub id: ConversationId,
    /// Display title, derived from the first user message.
    pub title: String,
    /// Ordered transcript, oldest first.
    pub messages: Vec<Message>,
    /// Timestamp of the most recent append, persisted as epoch millis.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_updated: DateTime<Utc>,
}

impl Conversation {
    /// Listing view of this conversation.
    pub fn summary(&self) -> ConversationSummary {
        ConversationSummary {
            id: self.id,
            title: self.title.clone(),
            message_count: self.messages.len(),
            last_updated: self.last_updated,
        }
    }
}

/// Summary view of a conversation for history listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationSummary {
    /// Conversation identifier.
    pub id: ConversationId,
    /// Display title.
    pub title: String,
    /// Count of messages stored.
    pub message_count: usize,
    /// Timestamp of the most recent append.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_updated: DateTime<Utc>,
}

/// Mood category for a journal entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Calm,
    Okay,
    Sad,
    Anxious,
    Stressed,
}

impl Mood {
    /// All categories in their fixed display order.
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Calm,
        Mood::Okay,
        Mood::Sad,
        Mood::Anxious,
        Mood::Stressed,
    ];

    /// Return the category as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Calm => "calm",
            Mood::Okay => "okay",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Stressed => "stressed",
        }
    }
}

/// One mood journal entry. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodEntry {
    /// Entry identifier.
    pub id: MoodEntryId,
    /// Recorded category.
    pub mood: Mood,
    /// Optional free-text note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Creation timestamp, persisted as epoch millis.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

/// Occurrence count for one mood category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoodCount {
    /// Counted category.
    pub mood: Mood,
    /// Occurrences inside the trend window.
    pub count: usize,
}
