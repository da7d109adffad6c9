//! Turn cycle integration tests.

use mindful_rs_completion::{ChatRole, CompletionError};
use mindful_rs_core::chat::{ChatOrchestrator, LISTENING_PROMPT};
use mindful_rs_core::conversations::{ConversationStore, OPENING_MESSAGE, UNTITLED};
use mindful_rs_core::types::Role;
use mindful_rs_test_utils::{
    FailingCompletion, FixedCompletion, GatedCompletion, RecordingCompletion,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

/// A successful turn leaves seed, user, and assistant messages in order.
#[tokio::test]
async fn full_turn_appends_user_then_reply() {
    let store = ConversationStore::open(None).expect("store");
    let chat = ChatOrchestrator::new(store, Arc::new(FixedCompletion::new("I understand.")));

    chat.send_message("I feel anxious today").await.expect("turn");

    let conversation = chat.conversations().current().expect("current");
    assert_eq!(conversation.messages.len(), 3);
    assert_eq!(conversation.messages[0].role, Role::Assistant);
    assert_eq!(conversation.messages[0].content, OPENING_MESSAGE.to_string());
    assert_eq!(conversation.messages[1].role, Role::User);
    assert_eq!(conversation.messages[1].content, "I feel anxious today".to_string());
    assert_eq!(conversation.messages[2].role, Role::Assistant);
    assert_eq!(conversation.messages[2].content, "I understand.".to_string());

    assert_eq!(conversation.title, "I feel anxious today".to_string());
    assert_eq!(conversation.last_updated, conversation.messages[2].timestamp);
    assert_eq!(chat.is_sending(), false);
    assert_eq!(chat.last_error(), None);
}

/// A failed turn keeps the user message and records the error description.
#[tokio::test]
async fn failed_turn_keeps_user_message_and_records_error() {
    let store = ConversationStore::open(None).expect("store");
    let chat = ChatOrchestrator::new(
        store,
        Arc::new(FailingCompletion::new(CompletionError::RateLimited)),
    );

    chat.send_message("I feel anxious today").await.expect("turn");

    let conversation = chat.conversations().current().expect("current");
    assert_eq!(conversation.messages.len(), 2);
    assert_eq!(conversation.messages[1].role, Role::User);
    assert_eq!(chat.is_sending(), false);
    assert_eq!(
        chat.last_error(),
        Some(CompletionError::RateLimited.to_string())
    );
}

/// An empty reply is replaced with the listening prompt, not an error.
#[tokio::test]
async fn empty_reply_substitutes_listening_prompt() {
    let store = ConversationStore::open(None).expect("store");
    let chat = ChatOrchestrator::new(
        store,
        Arc::new(FailingCompletion::new(CompletionError::EmptyResponse)),
    );

    chat.send_message("hello?").await.expect("turn");

    let conversation = chat.conversations().current().expect("current");
    assert_eq!(conversation.messages.len(), 3);
    assert_eq!(conversation.messages[2].content, LISTENING_PROMPT.to_string());
    assert_eq!(chat.last_error(), None);
}

/// A later successful turn clears the previous turn's error.
#[tokio::test]
async fn next_turn_clears_previous_error() {
    let store = ConversationStore::open(None).expect("store");
    let failing = ChatOrchestrator::new(
        store.clone(),
        Arc::new(FailingCompletion::new(CompletionError::RateLimited)),
    );
    failing.send_message("first try").await.expect("turn");
    assert_eq!(failing.last_error().is_some(), true);

    let chat = ChatOrchestrator::new(store, Arc::new(FixedCompletion::new("welcome back")));
    chat.send_message("second try").await.expect("turn");
    assert_eq!(chat.last_error(), None);
}

/// The provider sees the full transcript in its own role vocabulary.
#[tokio::test]
async fn provider_receives_translated_history() {
    let store = ConversationStore::open(None).expect("store");
    let provider = Arc::new(RecordingCompletion::new("noted"));
    let chat = ChatOrchestrator::new(store, provider.clone());

    chat.send_message("rough week").await.expect("turn");

    let history = provider.last_history.lock().clone();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, ChatRole::Assistant);
    assert_eq!(history[0].content, OPENING_MESSAGE.to_string());
    assert_eq!(history[1].role, ChatRole::User);
    assert_eq!(history[1].content, "rough week".to_string());
}

/// A send while a turn is outstanding is dropped, not queued.
#[tokio::test]
async fn overlapping_send_is_a_no_op() {
    let store = ConversationStore::open(None).expect("store");
    let (provider, release) = GatedCompletion::new("delayed reply");
    let chat = Arc::new(ChatOrchestrator::new(store, Arc::new(provider)));

    let first = tokio::spawn({
        let chat = chat.clone();
        async move { chat.send_message("first").await }
    });
    while !chat.is_sending() {
        tokio::task::yield_now().await;
    }

    chat.send_message("second").await.expect("noop");

    let conversation = chat.conversations().current().expect("current");
    assert_eq!(conversation.messages.len(), 2);
    assert_eq!(conversation.messages[1].content, "first".to_string());
    assert_eq!(chat.is_sending(), true);

    release.notify_one();
    first.await.expect("join").expect("turn");

    let conversation = chat.conversations().current().expect("current");
    assert_eq!(conversation.messages.len(), 3);
    assert_eq!(conversation.messages[2].content, "delayed reply".to_string());
    assert_eq!(chat.is_sending(), false);
}

/// A fresh store always carries an untitled seeded conversation.
#[tokio::test]
async fn fresh_store_seeds_an_untitled_conversation() {
    let store = ConversationStore::open(None).expect("store");
    let chat = ChatOrchestrator::new(store, Arc::new(FixedCompletion::new("hi")));

    let conversation = chat.conversations().current().expect("current");
    assert_eq!(conversation.title, UNTITLED.to_string());
    assert_eq!(conversation.messages.len(), 1);
}
