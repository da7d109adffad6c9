//! Turn-taking state machine between the user and the completion provider.

use crate::conversations::ConversationStore;
use crate::error::MindfulCoreError;
use crate::types::{Conversation, ConversationId, Message, Role};
use log::{debug, info, warn};
use mindful_rs_completion::{ChatMessage, ChatRole, CompletionError, CompletionProvider};
use parking_lot::RwLock;
use std::sync::Arc;

/// Reply substituted when the provider answers with no usable content.
pub const LISTENING_PROMPT: &str =
    "I'm here to listen. Can you tell me more about what you're experiencing?";

/// Turn phase. At most one completion request is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnState {
    Idle,
    Sending,
}

/// Drives one chat turn at a time against a completion provider.
///
/// The user message is appended and persisted before the completion request
/// goes out, so a failed or slow reply never loses the user's side of the
/// turn. A send issued while a turn is outstanding is dropped, not queued;
/// there is no retry and no cancellation.
pub struct ChatOrchestrator {
    conversations: ConversationStore,
    provider: Arc<dyn CompletionProvider>,
    state: RwLock<TurnState>,
    last_error: RwLock<Option<String>>,
}

impl ChatOrchestrator {
    /// Create an orchestrator over an existing store and provider.
    pub fn new(conversations: ConversationStore, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            conversations,
            provider,
            state: RwLock::new(TurnState::Idle),
            last_error: RwLock::new(None),
        }
    }

    /// The conversation store backing this orchestrator.
    pub fn conversations(&self) -> &ConversationStore {
        &self.conversations
    }

    /// Whether a completion request is currently outstanding.
    pub fn is_sending(&self) -> bool {
        *self.state.read() == TurnState::Sending
    }

    /// Description of the most recent failed turn, if any.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.read().clone()
    }

    /// Run one turn: append the user message, then the provider's reply.
    ///
    /// Blank input, an outstanding turn, and a missing current conversation
    /// are all ignored. Provider failures are recorded as user-visible text
    /// and leave the transcript with the user message only.
    pub async fn send_message(&self, text: &str) -> Result<(), MindfulCoreError> {
        let text = text.trim();
        if text.is_empty() {
            debug!("ignoring blank message");
            return Ok(());
        }
        let Some(conversation_id) = self.conversations.current_id() else {
            debug!("ignoring message without a current conversation");
            return Ok(());
        };
        if !self.begin_turn() {
            debug!(
                "ignoring message while a turn is outstanding (conversation_id={})",
                conversation_id
            );
            return Ok(());
        }
        let result = self.run_turn(conversation_id, text).await;
        *self.state.write() = TurnState::Idle;
        result
    }

    /// Claim the sending slot; false when a turn is already outstanding.
    fn begin_turn(&self) -> bool {
        let mut state = self.state.write();
        if *state == TurnState::Sending {
            return false;
        }
        *state = TurnState::Sending;
        self.last_error.write().take();
        true
    }

    async fn run_turn(
        &self,
        conversation_id: ConversationId,
        text: &str,
    ) -> Result<(), MindfulCoreError> {
        let conversation = self
            .conversations
            .append_message(conversation_id, Message::user(text))?;
        let history = completion_history(&conversation);
        info!(
            "requesting reply (conversation_id={}, history_len={})",
            conversation_id,
            history.len()
        );
        match self.provider.complete(&history).await {
            Ok(reply) => {
                self.conversations
                    .append_message(conversation_id, Message::assistant(reply))?;
            }
            Err(CompletionError::EmptyResponse) => {
                // Soft failure: stand in with the listening prompt.
                self.conversations
                    .append_message(conversation_id, Message::assistant(LISTENING_PROMPT))?;
            }
            Err(err) => {
                warn!("turn failed (conversation_id={}): {err}", conversation_id);
                *self.last_error.write() = Some(err.to_string());
            }
        }
        Ok(())
    }
}

/// Translate a transcript into the provider's role vocabulary.
fn completion_history(conversation: &Conversation) -> Vec<ChatMessage> {
    conversation
        .messages
        .iter()
        .map(|message| ChatMessage {
            role: match message.role {
                Role::User => ChatRole::User,
                Role::Assistant => ChatRole::Assistant,
            },
            content: message.content.clone(),
        })
        .collect()
}
