//! Mood journal with write-through persistence.

use crate::error::MindfulCoreError;
use crate::storage::BlobStore;
use crate::types::{Mood, MoodCount, MoodEntry, now_millis};
use chrono::{Local, NaiveDate};
use log::{debug, info, warn};
use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

/// Storage key for the persisted mood collection.
pub const MOODS_KEY: &str = "mindful_moods";

/// Number of recent entries the trend aggregation considers.
const TREND_WINDOW: usize = 7;

/// Mood entry collection, newest first.
///
/// Independent of the conversation store; the two persist under separate
/// keys and never touch each other's documents.
#[derive(Clone)]
pub struct MoodStore {
    entries: Arc<RwLock<Vec<MoodEntry>>>,
    /// Optional persistent store for the collection.
    blob_store: Option<Arc<dyn BlobStore>>,
}

impl MoodStore {
    /// Create a store and restore any persisted entries.
    ///
    /// An unreadable document is treated as an empty journal.
    pub fn open(blob_store: Option<Arc<dyn BlobStore>>) -> Self {
        let entries = blob_store
            .as_deref()
            .map(restore_entries)
            .unwrap_or_default();
        Self {
            entries: Arc::new(RwLock::new(entries)),
            blob_store,
        }
    }

    /// Record a mood with an optional note, stamped with the current time.
    pub fn add_entry(
        &self,
        mood: Mood,
        note: Option<String>,
    ) -> Result<MoodEntry, MindfulCoreError> {
        let entry = MoodEntry {
            id: Uuid::new_v4(),
            mood,
            note,
            timestamp: now_millis(),
        };
        info!("recording mood (mood={})", mood.as_str());
        self.entries.write().insert(0, entry.clone());
        self.persist()?;
        Ok(entry)
    }

    /// All entries, newest first.
    pub fn entries(&self) -> Vec<MoodEntry> {
        self.entries.read().clone()
    }

    /// The newest entries, up to `limit`.
    pub fn recent_entries(&self, limit: usize) -> Vec<MoodEntry> {
        self.entries.read().iter().take(limit).cloned().collect()
    }

    /// The entry recorded on the current local calendar day, if any.
    pub fn todays_entry(&self) -> Option<MoodEntry> {
        self.entry_on(Local::now().date_naive())
    }

    /// The first stored entry whose local calendar date equals `day`.
    ///
    /// Days start at local midnight; an entry from 23:59 yesterday never
    /// counts for today no matter how recent it is.
    pub fn entry_on(&self, day: NaiveDate) -> Option<MoodEntry> {
        self.entries
            .read()
            .iter()
            .find(|entry| entry.timestamp.with_timezone(&Local).date_naive() == day)
            .cloned()
    }

    /// Occurrence counts over the most recent entries, highest first.
    ///
    /// Every category appears, including those with zero occurrences; ties
    /// keep the fixed category order.
    pub fn mood_trend(&self) -> Vec<MoodCount> {
        let entries = self.entries.read();
        let window = &entries[..entries.len().min(TREND_WINDOW)];
        let mut counts: Vec<MoodCount> = Mood::ALL
            .iter()
            .map(|mood| MoodCount {
                mood: *mood,
                count: window.iter().filter(|entry| entry.mood == *mood).count(),
            })
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }

    /// Serialize and write the full collection through the blob store.
    fn persist(&self) -> Result<(), MindfulCoreError> {
        let Some(blob_store) = &self.blob_store else {
            return Ok(());
        };
        let serialized = {
            let entries = self.entries.read();
            serde_json::to_string(&*entries)?
        };
        blob_store.set(MOODS_KEY, &serialized)?;
        Ok(())
    }
}

/// Read the persisted collection, treating any failure as empty.
fn restore_entries(blob_store: &dyn BlobStore) -> Vec<MoodEntry> {
    let raw = match blob_store.get(MOODS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!("failed to read stored moods: {err}");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<MoodEntry>>(&raw) {
        Ok(entries) => {
            debug!("restored mood entries (count={})", entries.len());
            entries
        }
        Err(err) => {
            warn!("discarding unreadable mood collection: {err}");
            Vec::new()
        }
    }
}
