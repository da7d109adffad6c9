//! Role-tagged message types for the completion boundary.

use serde::{Deserialize, Serialize};

/// Speaker role in the provider's vocabulary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Behavioral instruction, prepended by the provider itself.
    System,
    /// User-authored message.
    User,
    /// Assistant-authored message.
    Assistant,
}

impl ChatRole {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One role-tagged message in a completion request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    /// Build a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    /// Build a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// Build an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Generation parameters fixed at provider construction.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// Model identifier understood by the service.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Upper bound on reply length, in service tokens.
    pub max_reply_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_reply_tokens: 300,
        }
    }
}
