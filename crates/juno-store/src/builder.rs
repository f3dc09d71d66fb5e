use std::sync::Arc;

use juno_llm::GenerateClient;

use crate::error::{Result, StoreError};
use crate::insights::{InsightCache, FRESHNESS_WINDOW};
use crate::journal::JournalService;
use crate::repository::EntryRepository;

const DEFAULT_MODEL: &str = "gpt-4o-mini";

impl JournalService {
    pub fn builder() -> JournalServiceBuilder {
        JournalServiceBuilder::new()
    }
}

pub struct JournalServiceBuilder {
    repository: Option<Arc<dyn EntryRepository>>,
    llm_client: Option<Arc<dyn GenerateClient>>,
    model: String,
    cache_ttl: std::time::Duration,
}

impl JournalServiceBuilder {
    pub fn new() -> Self {
        Self {
            repository: None,
            llm_client: None,
            model: DEFAULT_MODEL.to_string(),
            cache_ttl: FRESHNESS_WINDOW,
        }
    }

    pub fn repository(mut self, repository: Arc<dyn EntryRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn llm_client(mut self, client: Arc<dyn GenerateClient>) -> Self {
        self.llm_client = Some(client);
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn cache_ttl(mut self, ttl: std::time::Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn build(self) -> Result<JournalService> {
        let repository = self
            .repository
            .ok_or_else(|| StoreError::Internal("repository is required".to_string()))?;
        let llm_client = self
            .llm_client
            .ok_or_else(|| StoreError::Internal("llm_client is required".to_string()))?;

        Ok(JournalService::new(
            repository,
            llm_client,
            InsightCache::new(self.cache_ttl),
            self.model,
        ))
    }
}

impl Default for JournalServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
