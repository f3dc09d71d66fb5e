use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{JournalEntry, Mood};
use crate::repository::EntryRepository;

/// In-memory entry repository, partitioned by user id.
///
/// Mutations take the write lock, so concurrent writes for the same user
/// serialize instead of interleaving on shared state.
#[derive(Default)]
pub struct MemoryRepository {
    entries: RwLock<HashMap<String, Vec<JournalEntry>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntryRepository for MemoryRepository {
    async fn insert(&self, entry: JournalEntry) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries
            .entry(entry.user_id.clone())
            .or_default()
            .insert(0, entry);
        Ok(())
    }

    async fn list(&self, user_id: &str) -> Result<Vec<JournalEntry>> {
        let entries = self.entries.read().await;
        let mut listed = entries.get(user_id).cloned().unwrap_or_default();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }

    async fn find(&self, user_id: &str, id: Uuid) -> Result<Option<JournalEntry>> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(user_id)
            .and_then(|list| list.iter().find(|e| e.id == id))
            .cloned())
    }

    async fn update(
        &self,
        user_id: &str,
        id: Uuid,
        mood: Mood,
        content: String,
        updated_at: DateTime<Utc>,
    ) -> Result<bool> {
        let mut entries = self.entries.write().await;
        let Some(entry) = entries
            .get_mut(user_id)
            .and_then(|list| list.iter_mut().find(|e| e.id == id))
        else {
            return Ok(false);
        };
        entry.mood = mood;
        entry.content = content;
        entry.updated_at = Some(updated_at);
        Ok(true)
    }

    async fn set_affirmation(&self, user_id: &str, id: Uuid, affirmation: String) -> Result<bool> {
        let mut entries = self.entries.write().await;
        let Some(entry) = entries
            .get_mut(user_id)
            .and_then(|list| list.iter_mut().find(|e| e.id == id))
        else {
            // Entry deleted while the affirmation was in flight; drop it.
            return Ok(false);
        };
        entry.ai_affirmation = Some(affirmation);
        Ok(true)
    }

    async fn delete(&self, user_id: &str, id: Uuid) -> Result<bool> {
        let mut entries = self.entries.write().await;
        let Some(list) = entries.get_mut(user_id) else {
            return Ok(false);
        };
        let before = list.len();
        list.retain(|e| e.id != id);
        Ok(list.len() < before)
    }

    async fn count(&self, user_id: &str) -> Result<usize> {
        let entries = self.entries.read().await;
        Ok(entries.get(user_id).map_or(0, Vec::len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_is_scoped_per_user() {
        let repo = MemoryRepository::new();
        repo.insert(JournalEntry::new("alice", Mood::Happy, "Sunny day at the park."))
            .await
            .unwrap();
        repo.insert(JournalEntry::new("bob", Mood::Sad, "Rained all afternoon."))
            .await
            .unwrap();

        let alice = repo.list("alice").await.unwrap();
        assert_eq!(alice.len(), 1);
        assert_eq!(alice[0].user_id, "alice");
        assert_eq!(repo.count("bob").await.unwrap(), 1);
        assert!(repo.list("carol").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_returns_a_defensive_copy() {
        let repo = MemoryRepository::new();
        repo.insert(JournalEntry::new("alice", Mood::Calm, "Morning meditation went well."))
            .await
            .unwrap();

        let mut listed = repo.list("alice").await.unwrap();
        listed.clear();

        assert_eq!(repo.count("alice").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn set_affirmation_on_deleted_entry_is_a_noop() {
        let repo = MemoryRepository::new();
        let entry = JournalEntry::new("alice", Mood::Anxious, "Worried about tomorrow.");
        let id = entry.id;
        repo.insert(entry).await.unwrap();
        assert!(repo.delete("alice", id).await.unwrap());

        let applied = repo
            .set_affirmation("alice", id, "You are doing your best.".to_string())
            .await
            .unwrap();
        assert!(!applied);
    }

    #[tokio::test]
    async fn delete_reports_absence() {
        let repo = MemoryRepository::new();
        assert!(!repo.delete("alice", Uuid::new_v4()).await.unwrap());
    }
}
