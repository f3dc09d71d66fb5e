use std::sync::Arc;

use juno_store::JournalService;

use crate::auth::{SessionStore, UserDirectory};
use crate::config::Config;

/// Shared application state passed to all handlers
///
/// All resources are wrapped in Arc for efficient sharing across async tasks.
pub struct AppState {
    pub config: Arc<Config>,
    pub journal: Arc<JournalService>,
    pub sessions: SessionStore,
    pub users: UserDirectory,
}

impl AppState {
    pub fn new(
        config: Config,
        journal: JournalService,
        sessions: SessionStore,
        users: UserDirectory,
    ) -> Self {
        Self {
            config: Arc::new(config),
            journal: Arc::new(journal),
            sessions,
            users,
        }
    }
}
