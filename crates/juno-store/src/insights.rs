use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use juno_llm::ActivitySuggestion;

/// How long a cached insight stays servable without recomputation.
pub const FRESHNESS_WINDOW: std::time::Duration = std::time::Duration::from_secs(5 * 60);

/// Outcome of an insight request. Minimum-entry shortfalls and gateway
/// failures are soft `Unavailable` results, not errors; the presentation
/// layer shows the reason verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insight<T> {
    Ready(T),
    Unavailable(String),
}

impl<T> Insight<T> {
    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Unavailable(_) => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

#[derive(Debug, Clone)]
struct CachedInsight<T> {
    value: T,
    /// Entry count at computation time; a differing current count means the
    /// history changed under the cache.
    entry_count: usize,
    computed_at: DateTime<Utc>,
}

/// Per-user memo of the two expensive whole-history gateway calls.
///
/// A cached value is served only while the user's entry count still matches
/// the count at computation time and the value is younger than the
/// freshness window. Mutations drop a user's cached values eagerly, ahead
/// of any time-based expiry.
pub struct InsightCache {
    ttl: Duration,
    summaries: RwLock<HashMap<String, CachedInsight<String>>>,
    suggestions: RwLock<HashMap<String, CachedInsight<Vec<ActivitySuggestion>>>>,
}

impl InsightCache {
    pub fn new(ttl: std::time::Duration) -> Self {
        Self {
            ttl: Duration::from_std(ttl).unwrap_or_else(|_| Duration::seconds(5 * 60)),
            summaries: RwLock::new(HashMap::new()),
            suggestions: RwLock::new(HashMap::new()),
        }
    }

    fn is_fresh<T>(&self, cached: &CachedInsight<T>, current_count: usize) -> bool {
        cached.entry_count == current_count && Utc::now() - cached.computed_at < self.ttl
    }

    pub async fn cached_summary(&self, user_id: &str, current_count: usize) -> Option<String> {
        let summaries = self.summaries.read().await;
        summaries
            .get(user_id)
            .filter(|cached| self.is_fresh(cached, current_count))
            .map(|cached| cached.value.clone())
    }

    pub async fn store_summary(&self, user_id: &str, value: String, entry_count: usize) {
        let mut summaries = self.summaries.write().await;
        summaries.insert(
            user_id.to_string(),
            CachedInsight {
                value,
                entry_count,
                computed_at: Utc::now(),
            },
        );
    }

    pub async fn cached_suggestions(
        &self,
        user_id: &str,
        current_count: usize,
    ) -> Option<Vec<ActivitySuggestion>> {
        let suggestions = self.suggestions.read().await;
        suggestions
            .get(user_id)
            .filter(|cached| self.is_fresh(cached, current_count))
            .map(|cached| cached.value.clone())
    }

    pub async fn store_suggestions(
        &self,
        user_id: &str,
        value: Vec<ActivitySuggestion>,
        entry_count: usize,
    ) {
        let mut suggestions = self.suggestions.write().await;
        suggestions.insert(
            user_id.to_string(),
            CachedInsight {
                value,
                entry_count,
                computed_at: Utc::now(),
            },
        );
    }

    /// Drop everything cached for a user. Called on every entry mutation.
    pub async fn invalidate(&self, user_id: &str) {
        self.summaries.write().await.remove(user_id);
        self.suggestions.write().await.remove(user_id);
    }
}

impl Default for InsightCache {
    fn default() -> Self {
        Self::new(FRESHNESS_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn summary_is_served_while_count_matches() {
        let cache = InsightCache::default();
        cache.store_summary("alice", "a reflective note".to_string(), 3).await;

        assert_eq!(
            cache.cached_summary("alice", 3).await.as_deref(),
            Some("a reflective note")
        );
    }

    #[tokio::test]
    async fn summary_is_stale_when_entry_count_changed() {
        let cache = InsightCache::default();
        cache.store_summary("alice", "a reflective note".to_string(), 3).await;

        assert!(cache.cached_summary("alice", 4).await.is_none());
    }

    #[tokio::test]
    async fn summary_expires_after_the_freshness_window() {
        let cache = InsightCache::new(std::time::Duration::ZERO);
        cache.store_summary("alice", "a reflective note".to_string(), 3).await;

        assert!(cache.cached_summary("alice", 3).await.is_none());
    }

    #[tokio::test]
    async fn invalidate_drops_both_kinds() {
        let cache = InsightCache::default();
        cache.store_summary("alice", "note".to_string(), 1).await;
        cache
            .store_suggestions(
                "alice",
                vec![ActivitySuggestion {
                    title: "Walk".to_string(),
                    description: "Short stroll outside.".to_string(),
                }],
                1,
            )
            .await;

        cache.invalidate("alice").await;

        assert!(cache.cached_summary("alice", 1).await.is_none());
        assert!(cache.cached_suggestions("alice", 1).await.is_none());
    }

    #[tokio::test]
    async fn cache_is_partitioned_by_user() {
        let cache = InsightCache::default();
        cache.store_summary("alice", "alice's note".to_string(), 2).await;

        assert!(cache.cached_summary("bob", 2).await.is_none());
        cache.invalidate("bob").await;
        assert!(cache.cached_summary("alice", 2).await.is_some());
    }
}
