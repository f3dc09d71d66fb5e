use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use juno_llm::flows;
use juno_llm::{ActivitySuggestion, GenerateClient};

use crate::error::{Result, StoreError};
use crate::insights::{Insight, InsightCache};
use crate::models::{JournalEntry, Mood};
use crate::repository::EntryRepository;

/// Entries must carry at least this much text.
const MIN_CONTENT_CHARS: usize = 10;

/// Whole-history summary needs at least one entry.
const MIN_ENTRIES_FOR_SUMMARY: usize = 1;

/// Activity suggestions need a little history to work with.
const MIN_ENTRIES_FOR_SUGGESTIONS: usize = 3;

/// Suggestions only look at the newest entries to bound prompt size.
const RECENT_ENTRIES_FOR_SUGGESTIONS: usize = 5;

const WEEKLY_WINDOW_DAYS: i64 = 7;
const MIN_ENTRIES_FOR_WEEKLY: usize = 3;

/// How much history the chat companion sees, most recent first.
const CHAT_CONTEXT_ENTRIES: usize = 10;

/// Facade over the entry repository, the insight cache, and the generation
/// gateway. All journaling operations go through here.
pub struct JournalService {
    repo: Arc<dyn EntryRepository>,
    llm: Arc<dyn GenerateClient>,
    cache: Arc<InsightCache>,
    model: String,
}

impl JournalService {
    pub fn new(
        repo: Arc<dyn EntryRepository>,
        llm: Arc<dyn GenerateClient>,
        cache: InsightCache,
        model: impl Into<String>,
    ) -> Self {
        Self {
            repo,
            llm,
            cache: Arc::new(cache),
            model: model.into(),
        }
    }

    fn authenticated(user_id: &str) -> Result<()> {
        if user_id.trim().is_empty() {
            return Err(StoreError::Unauthenticated);
        }
        Ok(())
    }

    fn validate(mood: &str, content: &str) -> Result<Mood> {
        let mood = Mood::parse(mood)
            .ok_or_else(|| StoreError::Validation(format!("Unknown mood: {}", mood)))?;
        if content.trim().len() < MIN_CONTENT_CHARS {
            return Err(StoreError::Validation(format!(
                "Journal entry must be at least {} characters.",
                MIN_CONTENT_CHARS
            )));
        }
        Ok(mood)
    }

    /// Validate and store a new entry, newest-first. Returns before the
    /// affirmation exists; a detached task backfills it by id.
    pub async fn add_entry(
        &self,
        user_id: &str,
        mood: &str,
        content: &str,
    ) -> Result<JournalEntry> {
        Self::authenticated(user_id)?;
        let mood = Self::validate(mood, content)?;

        let entry = JournalEntry::new(user_id, mood, content);
        self.repo.insert(entry.clone()).await?;
        self.cache.invalidate(user_id).await;

        self.spawn_affirmation(entry.user_id.clone(), entry.id, entry.content.clone());
        Ok(entry)
    }

    pub async fn get_entries(&self, user_id: &str) -> Result<Vec<JournalEntry>> {
        Self::authenticated(user_id)?;
        self.repo.list(user_id).await
    }

    pub async fn get_entry(&self, user_id: &str, id: Uuid) -> Result<JournalEntry> {
        Self::authenticated(user_id)?;
        self.repo
            .find(user_id, id)
            .await?
            .ok_or_else(|| StoreError::EntryNotFound(id.to_string()))
    }

    /// Edit mood/content. Only a content change re-requests an affirmation;
    /// the old one stays in place until the replacement arrives.
    pub async fn update_entry(
        &self,
        user_id: &str,
        id: Uuid,
        mood: &str,
        content: &str,
    ) -> Result<JournalEntry> {
        Self::authenticated(user_id)?;
        let mood = Self::validate(mood, content)?;

        let existing = self
            .repo
            .find(user_id, id)
            .await?
            .ok_or_else(|| StoreError::EntryNotFound(id.to_string()))?;

        let updated_at = Utc::now();
        let applied = self
            .repo
            .update(user_id, id, mood, content.to_string(), updated_at)
            .await?;
        if !applied {
            return Err(StoreError::EntryNotFound(id.to_string()));
        }
        self.cache.invalidate(user_id).await;

        let content_changed = existing.content != content;
        if content_changed {
            self.spawn_affirmation(user_id.to_string(), id, content.to_string());
        }

        Ok(JournalEntry {
            mood,
            content: content.to_string(),
            updated_at: Some(updated_at),
            ..existing
        })
    }

    pub async fn delete_entry(&self, user_id: &str, id: Uuid) -> Result<()> {
        Self::authenticated(user_id)?;
        let removed = self.repo.delete(user_id, id).await?;
        if !removed {
            return Err(StoreError::EntryNotFound(id.to_string()));
        }
        self.cache.invalidate(user_id).await;
        Ok(())
    }

    /// Fire-and-forget affirmation backfill. Failures are logged and
    /// swallowed; the entry simply keeps `ai_affirmation: None`. A late
    /// result for a deleted entry is discarded by the id-keyed write.
    fn spawn_affirmation(&self, user_id: String, id: Uuid, content: String) {
        let repo = Arc::clone(&self.repo);
        let llm = Arc::clone(&self.llm);
        let model = self.model.clone();

        tokio::spawn(async move {
            match flows::generate_affirmation(llm.as_ref(), &model, &content).await {
                Ok(affirmation) => {
                    match repo.set_affirmation(&user_id, id, affirmation).await {
                        Ok(true) => {}
                        Ok(false) => {
                            tracing::debug!("Entry {} gone before affirmation arrived", id);
                        }
                        Err(e) => {
                            tracing::error!("Failed to store affirmation for entry {}: {}", id, e);
                        }
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to generate affirmation for entry {}: {}", id, e);
                }
            }
        });
    }

    /// Reflective summary of the user's whole history, cached per user
    /// until the history changes or the freshness window lapses.
    pub async fn summary(&self, user_id: &str) -> Result<Insight<String>> {
        Self::authenticated(user_id)?;
        let entries = self.repo.list(user_id).await?;
        let count = entries.len();

        if let Some(cached) = self.cache.cached_summary(user_id, count).await {
            return Ok(Insight::Ready(cached));
        }
        if count < MIN_ENTRIES_FOR_SUMMARY {
            return Ok(Insight::Unavailable(
                "Not enough entries to generate a summary. Write at least one entry.".to_string(),
            ));
        }

        let contents: Vec<String> = entries.into_iter().map(|e| e.content).collect();
        match flows::summarize_entries(self.llm.as_ref(), &self.model, &contents).await {
            Ok(summary) => {
                self.cache.store_summary(user_id, summary.clone(), count).await;
                Ok(Insight::Ready(summary))
            }
            Err(e) => {
                tracing::error!("AI summary generation failed for {}: {}", user_id, e);
                Ok(Insight::Unavailable(
                    "Failed to generate summary from AI.".to_string(),
                ))
            }
        }
    }

    /// Activity suggestions from the five newest entries, cached like the
    /// summary.
    pub async fn activity_suggestions(
        &self,
        user_id: &str,
    ) -> Result<Insight<Vec<ActivitySuggestion>>> {
        Self::authenticated(user_id)?;
        let entries = self.repo.list(user_id).await?;
        let count = entries.len();

        if let Some(cached) = self.cache.cached_suggestions(user_id, count).await {
            return Ok(Insight::Ready(cached));
        }
        if count < MIN_ENTRIES_FOR_SUGGESTIONS {
            return Ok(Insight::Unavailable(
                "Not enough entries to suggest activities. Write at least three entries."
                    .to_string(),
            ));
        }

        let recent: Vec<String> = entries
            .into_iter()
            .take(RECENT_ENTRIES_FOR_SUGGESTIONS)
            .map(|e| e.content)
            .collect();
        match flows::generate_suggestions(self.llm.as_ref(), &self.model, &recent).await {
            Ok(suggestions) => {
                self.cache
                    .store_suggestions(user_id, suggestions.clone(), count)
                    .await;
                Ok(Insight::Ready(suggestions))
            }
            Err(e) => {
                tracing::error!("AI suggestion generation failed for {}: {}", user_id, e);
                Ok(Insight::Unavailable(
                    "Failed to generate suggestions from AI.".to_string(),
                ))
            }
        }
    }

    /// Recap of the past seven days. Recomputed on every call: the window
    /// itself moves with the clock, so a count-keyed cache would serve
    /// yesterday's window as today's.
    pub async fn weekly_summary(&self, user_id: &str) -> Result<Insight<String>> {
        Self::authenticated(user_id)?;
        let cutoff = Utc::now() - Duration::days(WEEKLY_WINDOW_DAYS);
        let recent: Vec<JournalEntry> = self
            .repo
            .list(user_id)
            .await?
            .into_iter()
            .filter(|e| e.created_at > cutoff)
            .collect();

        if recent.len() < MIN_ENTRIES_FOR_WEEKLY {
            return Ok(Insight::Unavailable(
                "Not enough entries this week to generate a summary. Write at least three entries."
                    .to_string(),
            ));
        }

        let moods: Vec<String> = recent.iter().map(|e| e.mood.to_string()).collect();
        let contents: Vec<String> = recent.into_iter().map(|e| e.content).collect();
        match flows::generate_weekly_summary(self.llm.as_ref(), &self.model, &moods, &contents)
            .await
        {
            Ok(summary) => Ok(Insight::Ready(summary)),
            Err(e) => {
                tracing::error!("AI weekly summary failed for {}: {}", user_id, e);
                Ok(Insight::Unavailable(
                    "Failed to generate weekly summary from AI.".to_string(),
                ))
            }
        }
    }

    /// One turn with the Juno companion, with recent entries as context.
    pub async fn chat(&self, user_id: &str, message: &str) -> Result<String> {
        Self::authenticated(user_id)?;
        let context: Vec<flows::ChatEntry> = self
            .repo
            .list(user_id)
            .await?
            .into_iter()
            .take(CHAT_CONTEXT_ENTRIES)
            .map(|e| flows::ChatEntry {
                date: e.created_at.format("%Y-%m-%d").to_string(),
                mood: e.mood.to_string(),
                text: e.content,
            })
            .collect();

        flows::chat(self.llm.as_ref(), &self.model, message, &context)
            .await
            .map_err(|e| StoreError::Service(e.to_string()))
    }

    /// A single journal prompt tailored to a mood label.
    pub async fn mood_prompt(&self, mood: &str) -> Result<String> {
        let mood = Mood::parse(mood)
            .ok_or_else(|| StoreError::Validation(format!("Unknown mood: {}", mood)))?;
        flows::generate_mood_prompt(self.llm.as_ref(), &self.model, mood.as_str())
            .await
            .map_err(|e| StoreError::Service(e.to_string()))
    }

    /// Follow-up questions for a half-written entry.
    pub async fn writing_prompts(&self, entry_so_far: &str) -> Result<Vec<String>> {
        flows::generate_writing_prompts(self.llm.as_ref(), &self.model, entry_so_far)
            .await
            .map_err(|e| StoreError::Service(e.to_string()))
    }
}
