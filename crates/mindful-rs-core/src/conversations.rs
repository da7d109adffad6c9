//! Conversation collection with write-through persistence.

use crate::error::MindfulCoreError;
use crate::storage::BlobStore;
use crate::types::{Conversation, ConversationId, ConversationSummary, Message, Role};
use log::{debug, info, warn};
use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

/// Storage key for the persisted conversation collection.
pub const CONVERSATIONS_KEY: &str = "mindful_conversations";

/// Title carried until the first user message names the conversation.
pub const UNTITLED: &str = "New conversation";

/// Assistant message seeded into every new conversation.
pub const OPENING_MESSAGE: &str = "Hello! I'm Mindful AI, your personal therapy companion. I'm here to listen and support you. How are you feeling today?";

/// Longest derived title before truncation.
const TITLE_MAX_CHARS: usize = 40;
/// Marker appended to a truncated title.
const TITLE_ELLIPSIS: &str = "...";

/// Conversation collection facade used by the turn loop and the UI.
///
/// The collection stays ordered most-recently-updated first, and exactly one
/// conversation may be current. Every mutation writes the full collection
/// through the blob store before returning.
#[derive(Clone)]
pub struct ConversationStore {
    inner: Arc<RwLock<Inner>>,
    /// Optional persistent store for the collection.
    blob_store: Option<Arc<dyn BlobStore>>,
}

struct Inner {
    /// Most-recently-updated first.
    conversations: Vec<Conversation>,
    /// Identity of the current conversation.
    current: Option<ConversationId>,
}

impl ConversationStore {
    /// Create a store and restore any persisted collection.
    ///
    /// A missing, empty, or unreadable document falls back to a fresh
    /// conversation rather than an error; the store always has a current
    /// conversation after construction.
    pub fn open(blob_store: Option<Arc<dyn BlobStore>>) -> Result<Self, MindfulCoreError> {
        let store = Self {
            inner: Arc::new(RwLock::new(Inner {
                conversations: Vec::new(),
                current: None,
            })),
            blob_store,
        };
        if !store.restore() {
            store.start_conversation()?;
        }
        Ok(store)
    }

    /// Restore the persisted collection; false when nothing usable exists.
    fn restore(&self) -> bool {
        let Some(blob_store) = &self.blob_store else {
            return false;
        };
        let raw = match blob_store.get(CONVERSATIONS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return false,
            Err(err) => {
                warn!("failed to read stored conversations: {err}");
                return false;
            }
        };
        let mut conversations: Vec<Conversation> = match serde_json::from_str(&raw) {
            Ok(conversations) => conversations,
            Err(err) => {
                warn!("discarding unreadable conversation collection: {err}");
                return false;
            }
        };
        if conversations.is_empty() {
            return false;
        }
        conversations.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
        info!("restored conversations (count={})", conversations.len());
        let mut inner = self.inner.write();
        inner.current = conversations.first().map(|conversation| conversation.id);
        inner.conversations = conversations;
        true
    }

    /// Start a fresh conversation seeded with the opening assistant message,
    /// insert it at the front, and mark it current.
    pub fn start_conversation(&self) -> Result<Conversation, MindfulCoreError> {
        let greeting = Message::assistant(OPENING_MESSAGE);
        let conversation = Conversation {
            id: Uuid::new_v4(),
            title: UNTITLED.to_string(),
            last_updated: greeting.timestamp,
            messages: vec![greeting],
        };
        info!("started conversation (conversation_id={})", conversation.id);
        {
            let mut inner = self.inner.write();
            inner.conversations.insert(0, conversation.clone());
            inner.current = Some(conversation.id);
        }
        self.persist()?;
        Ok(conversation)
    }

    /// Mark the named conversation current and return it.
    ///
    /// An unknown id leaves the current conversation untouched.
    pub fn load_conversation(&self, id: ConversationId) -> Option<Conversation> {
        let mut inner = self.inner.write();
        let found = inner
            .conversations
            .iter()
            .find(|conversation| conversation.id == id)
            .cloned();
        match &found {
            Some(conversation) => {
                debug!("loaded conversation (conversation_id={})", id);
                inner.current = Some(conversation.id);
            }
            None => debug!("ignoring unknown conversation (conversation_id={})", id),
        }
        found
    }

    /// Append a message and reposition its conversation to the front.
    ///
    /// The first user message also names the conversation while its title is
    /// still the placeholder; both updates land in the same write.
    pub fn append_message(
        &self,
        id: ConversationId,
        message: Message,
    ) -> Result<Conversation, MindfulCoreError> {
        let updated = {
            let mut inner = self.inner.write();
            let position = inner
                .conversations
                .iter()
                .position(|conversation| conversation.id == id)
                .ok_or(MindfulCoreError::UnknownConversation(id))?;
            debug!(
                "appending message (conversation_id={}, role={}, content_len={})",
                id,
                message.role.as_str(),
                message.content.len()
            );
            let mut conversation = inner.conversations.remove(position);
            if message.role == Role::User && conversation.title == UNTITLED {
                conversation.title = derive_title(&message.content);
            }
            conversation.last_updated = message.timestamp;
            conversation.messages.push(message);
            inner.conversations.insert(0, conversation.clone());
            inner
                .conversations
                .sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
            conversation
        };
        self.persist()?;
        Ok(updated)
    }

    /// The currently selected conversation.
    pub fn current(&self) -> Option<Conversation> {
        let inner = self.inner.read();
        let id = inner.current?;
        inner
            .conversations
            .iter()
            .find(|conversation| conversation.id == id)
            .cloned()
    }

    /// Id of the currently selected conversation.
    pub fn current_id(&self) -> Option<ConversationId> {
        self.inner.read().current
    }

    /// Full collection, most-recently-updated first.
    pub fn conversations(&self) -> Vec<Conversation> {
        self.inner.read().conversations.clone()
    }

    /// Listing summaries, most-recently-updated first.
    pub fn summaries(&self) -> Vec<ConversationSummary> {
        self.inner
            .read()
            .conversations
            .iter()
            .map(Conversation::summary)
            .collect()
    }

    /// Serialize and write the full collection through the blob store.
    fn persist(&self) -> Result<(), MindfulCoreError> {
        let Some(blob_store) = &self.blob_store else {
            return Ok(());
        };
        let serialized = {
            let inner = self.inner.read();
            serde_json::to_string(&inner.conversations)?
        };
        blob_store.set(CONVERSATIONS_KEY, &serialized)?;
        Ok(())
    }
}

/// Derive a conversation title from the first user message.
fn derive_title(content: &str) -> String {
    let mut title: String = content.chars().take(TITLE_MAX_CHARS).collect();
    if content.chars().count() > TITLE_MAX_CHARS {
        title.push_str(TITLE_ELLIPSIS);
    }
    title
}

#[cfg(test)]
mod tests {
    use super::{
        CONVERSATIONS_KEY, ConversationStore, OPENING_MESSAGE, UNTITLED, derive_title,
    };
    use crate::storage::{BlobStore, FileBlobStore};
    use crate::types::{Message, Role};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use tempfile::tempdir;
    use uuid::Uuid;

    #[test]
    fn new_conversation_is_seeded_and_untitled() {
        let store = ConversationStore::open(None).expect("store");
        let conversation = store.current().expect("current");
        assert_eq!(conversation.title, UNTITLED.to_string());
        assert_eq!(conversation.messages.len(), 1);
        assert_eq!(conversation.messages[0].role, Role::Assistant);
        assert_eq!(conversation.messages[0].content, OPENING_MESSAGE.to_string());
        assert_eq!(conversation.last_updated, conversation.messages[0].timestamp);
    }

    #[test]
    fn append_preserves_insertion_order() {
        let store = ConversationStore::open(None).expect("store");
        let id = store.current_id().expect("current");

        store.append_message(id, Message::user("first")).expect("append");
        store.append_message(id, Message::assistant("second")).expect("append");
        store.append_message(id, Message::user("third")).expect("append");

        let contents: Vec<String> = store
            .current()
            .expect("current")
            .messages
            .iter()
            .map(|message| message.content.clone())
            .collect();
        assert_eq!(
            contents,
            vec![
                OPENING_MESSAGE.to_string(),
                "first".to_string(),
                "second".to_string(),
                "third".to_string()
            ]
        );
    }

    #[test]
    fn title_derivation_fires_once_on_first_user_message() {
        let store = ConversationStore::open(None).expect("store");
        let id = store.current_id().expect("current");

        // Assistant messages never name the conversation.
        store
            .append_message(id, Message::assistant("still listening"))
            .expect("append");
        assert_eq!(store.current().expect("current").title, UNTITLED.to_string());

        let updated = store
            .append_message(id, Message::user("I feel anxious today"))
            .expect("append");
        assert_eq!(updated.title, "I feel anxious today".to_string());

        let updated = store
            .append_message(id, Message::user("and this should not retitle it"))
            .expect("append");
        assert_eq!(updated.title, "I feel anxious today".to_string());
    }

    #[test]
    fn long_first_messages_are_truncated_with_marker() {
        let long = "a".repeat(41);
        let title = derive_title(&long);
        assert_eq!(title.chars().count(), 43);
        assert_eq!(title.ends_with("..."), true);

        // Exactly at the bound there is nothing to cut.
        let exact = "b".repeat(40);
        assert_eq!(derive_title(&exact), exact);
    }

    #[test]
    fn collection_stays_ordered_most_recent_first() {
        let store = ConversationStore::open(None).expect("store");
        let first = store.current_id().expect("current");
        let second = store.start_conversation().expect("second").id;

        assert_eq!(store.current_id(), Some(second));

        // Appending to the older conversation moves it back to the front.
        store.append_message(first, Message::user("hello again")).expect("append");
        let ids: Vec<Uuid> = store
            .conversations()
            .iter()
            .map(|conversation| conversation.id)
            .collect();
        assert_eq!(ids, vec![first, second]);

        let summaries = store.summaries();
        assert_eq!(summaries[0].id, first);
        assert_eq!(summaries[0].message_count, 2);
    }

    #[test]
    fn unknown_id_is_a_silent_miss_on_load() {
        let store = ConversationStore::open(None).expect("store");
        let current = store.current_id();
        assert_eq!(store.load_conversation(Uuid::new_v4()), None);
        assert_eq!(store.current_id(), current);
    }

    #[test]
    fn unknown_id_is_an_error_on_append() {
        let store = ConversationStore::open(None).expect("store");
        let err = store
            .append_message(Uuid::new_v4(), Message::user("lost"))
            .expect_err("unknown id");
        assert_eq!(err.to_string().starts_with("unknown conversation"), true);
    }

    #[test]
    fn collection_round_trips_through_the_blob_store() {
        let temp = tempdir().expect("tempdir");
        let blob_store: Arc<dyn BlobStore> =
            Arc::new(FileBlobStore::new(temp.path()).expect("blob store"));

        let store = ConversationStore::open(Some(blob_store.clone())).expect("store");
        let id = store.current_id().expect("current");
        store
            .append_message(id, Message::user("remember me"))
            .expect("append");
        let before = store.conversations();

        let reopened = ConversationStore::open(Some(blob_store)).expect("reopen");
        assert_eq!(reopened.conversations(), before);
        assert_eq!(reopened.current_id(), Some(id));
    }

    #[test]
    fn corrupted_document_falls_back_to_a_fresh_conversation() {
        let temp = tempdir().expect("tempdir");
        let blob_store: Arc<dyn BlobStore> =
            Arc::new(FileBlobStore::new(temp.path()).expect("blob store"));
        blob_store
            .set(CONVERSATIONS_KEY, "{ this is not a collection")
            .expect("seed corruption");

        let store = ConversationStore::open(Some(blob_store)).expect("store");
        let conversation = store.current().expect("current");
        assert_eq!(conversation.title, UNTITLED.to_string());
        assert_eq!(conversation.messages.len(), 1);
        assert_eq!(store.conversations().len(), 1);
    }

    #[test]
    fn empty_document_falls_back_to_a_fresh_conversation() {
        let temp = tempdir().expect("tempdir");
        let blob_store: Arc<dyn BlobStore> =
            Arc::new(FileBlobStore::new(temp.path()).expect("blob store"));
        blob_store.set(CONVERSATIONS_KEY, "[]").expect("seed empty");

        let store = ConversationStore::open(Some(blob_store)).expect("store");
        assert_eq!(store.conversations().len(), 1);
        assert_eq!(store.current().is_some(), true);
    }
}
