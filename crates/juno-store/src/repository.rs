use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{JournalEntry, Mood};

/// Trait for journal entry persistence operations.
///
/// Every operation is scoped by `user_id`; an entry is never visible to a
/// query for a different user. Implementations must keep listing order
/// newest-first (`created_at` descending).
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Insert a freshly created entry at the head of the user's collection.
    async fn insert(&self, entry: JournalEntry) -> Result<()>;

    /// All entries for a user, newest first. A defensive copy: mutating the
    /// returned vector never touches the store.
    async fn list(&self, user_id: &str) -> Result<Vec<JournalEntry>>;

    /// Point lookup scoped to the user.
    async fn find(&self, user_id: &str, id: Uuid) -> Result<Option<JournalEntry>>;

    /// Update mood/content and stamp `updated_at`. Returns false if the
    /// entry does not exist for that user.
    async fn update(
        &self,
        user_id: &str,
        id: Uuid,
        mood: Mood,
        content: String,
        updated_at: DateTime<Utc>,
    ) -> Result<bool>;

    /// Attach a late-arriving affirmation, keyed by id. Returns false (and
    /// does nothing) if the entry has been deleted in the meantime.
    async fn set_affirmation(&self, user_id: &str, id: Uuid, affirmation: String) -> Result<bool>;

    /// Remove an entry. Returns false if absent for that user.
    async fn delete(&self, user_id: &str, id: Uuid) -> Result<bool>;

    /// Number of entries the user currently has.
    async fn count(&self, user_id: &str) -> Result<usize>;
}
