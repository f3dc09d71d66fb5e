use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{bson::doc, Client, Collection};
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::models::{JournalEntry, Mood};
use crate::repository::EntryRepository;

/// MongoDB-backed entry repository (the hosted-backend deployment).
///
/// Entry ids are stored in their string form; `created_at` serializes as an
/// RFC 3339 UTC string, which sorts lexicographically in time order.
#[derive(Clone)]
pub struct MongoRepository {
    collection: Collection<JournalEntry>,
}

impl MongoRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("journal_entries");
        Self { collection }
    }

    pub async fn connect(uri: &str, db_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| StoreError::Internal(format!("MongoDB connection failed: {}", e)))?;
        Ok(Self::new(&client, db_name))
    }
}

#[async_trait]
impl EntryRepository for MongoRepository {
    async fn insert(&self, entry: JournalEntry) -> Result<()> {
        self.collection.insert_one(&entry).await?;
        Ok(())
    }

    async fn list(&self, user_id: &str) -> Result<Vec<JournalEntry>> {
        let filter = doc! { "user_id": user_id };
        let entries = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(entries)
    }

    async fn find(&self, user_id: &str, id: Uuid) -> Result<Option<JournalEntry>> {
        let filter = doc! { "_id": id.to_string(), "user_id": user_id };
        Ok(self.collection.find_one(filter).await?)
    }

    async fn update(
        &self,
        user_id: &str,
        id: Uuid,
        mood: Mood,
        content: String,
        updated_at: DateTime<Utc>,
    ) -> Result<bool> {
        let filter = doc! { "_id": id.to_string(), "user_id": user_id };
        let update = doc! {
            "$set": {
                "mood": mood.as_str(),
                "content": content,
                "updated_at": bson::to_bson(&updated_at)?,
            }
        };
        let result = self.collection.update_one(filter, update).await?;
        Ok(result.matched_count > 0)
    }

    async fn set_affirmation(&self, user_id: &str, id: Uuid, affirmation: String) -> Result<bool> {
        let filter = doc! { "_id": id.to_string(), "user_id": user_id };
        let update = doc! { "$set": { "ai_affirmation": affirmation } };
        let result = self.collection.update_one(filter, update).await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, user_id: &str, id: Uuid) -> Result<bool> {
        let filter = doc! { "_id": id.to_string(), "user_id": user_id };
        let result = self.collection.delete_one(filter).await?;
        Ok(result.deleted_count > 0)
    }

    async fn count(&self, user_id: &str) -> Result<usize> {
        let filter = doc! { "user_id": user_id };
        let count = self.collection.count_documents(filter).await?;
        Ok(count as usize)
    }
}
