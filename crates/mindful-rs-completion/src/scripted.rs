//! Canned local completion provider.

use crate::CompletionProvider;
use crate::error::CompletionError;
use crate::types::ChatMessage;
use async_trait::async_trait;
use log::debug;
use rand::seq::IndexedRandom;

/// Supportive replies used when no live service is configured.
const REPLY_POOL: [&str; 8] = [
    "I hear you, and I want you to know that your feelings are completely valid. Can you tell me more about what's been on your mind?",
    "That sounds really challenging. You're being so brave by sharing this with me. How long have you been carrying these feelings?",
    "Thank you for trusting me with this. It takes courage to open up. What do you think might help you feel a little lighter right now?",
    "I'm here with you through this. Sometimes just being heard can make a difference. Is there anything specific you'd like to explore together?",
    "Your emotional experience matters, and I'm grateful you're sharing it with me. What would feel most supportive for you in this moment?",
    "I can sense this is important to you. You're taking such a positive step by talking about it. What insights have you had about this situation?",
    "It sounds like you're going through a lot. Remember, you don't have to carry this alone. What kind of support feels most helpful to you?",
    "I appreciate your openness. Every feeling you're experiencing is part of your human experience. What would you like to focus on together today?",
];

/// Completion provider that answers from a fixed local pool.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCompletionProvider {
    fixed_reply: Option<String>,
}

impl ScriptedCompletionProvider {
    /// Provider that picks a pool reply at random each turn.
    pub fn new() -> Self {
        Self { fixed_reply: None }
    }

    /// Provider that always returns the same reply.
    pub fn with_fixed_reply(reply: impl Into<String>) -> Self {
        Self {
            fixed_reply: Some(reply.into()),
        }
    }

    /// The full canned reply pool.
    pub fn replies() -> &'static [&'static str] {
        &REPLY_POOL
    }
}

#[async_trait]
impl CompletionProvider for ScriptedCompletionProvider {
    async fn complete(&self, history: &[ChatMessage]) -> Result<String, CompletionError> {
        debug!("producing scripted reply (history_len={})", history.len());
        if let Some(reply) = &self.fixed_reply {
            return Ok(reply.clone());
        }
        let reply = REPLY_POOL
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(REPLY_POOL[0]);
        Ok(reply.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::ScriptedCompletionProvider;
    use crate::CompletionProvider;
    use crate::types::ChatMessage;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn random_reply_comes_from_the_pool() {
        let provider = ScriptedCompletionProvider::new();
        let history = vec![ChatMessage::user("I feel low today")];
        let reply = provider.complete(&history).await.expect("reply");
        assert_eq!(
            ScriptedCompletionProvider::replies().contains(&reply.as_str()),
            true
        );
    }

    #[tokio::test]
    async fn fixed_reply_is_returned_verbatim() {
        let provider = ScriptedCompletionProvider::with_fixed_reply("I understand.");
        let reply = provider.complete(&[]).await.expect("reply");
        assert_eq!(reply, "I understand.".to_string());
    }
}
