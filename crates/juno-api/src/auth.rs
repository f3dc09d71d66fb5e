//! Session-token resolution at the request boundary.
//!
//! The session protocol itself is deliberately thin: opaque bearer tokens
//! mapped to user ids in memory, with a config-seeded user directory for
//! login. Handlers only ever see a resolved [`Identity`]; nothing below
//! this layer re-derives the acting user.

use std::collections::HashMap;
use std::sync::Arc;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::ApiError;
use crate::state::AppState;

/// The acting user, resolved from the request's bearer token.
#[derive(Debug, Clone)]
pub struct Identity(pub String);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for Identity {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(ApiError::Unauthenticated)?;
        let user_id = state
            .sessions
            .resolve(&token)
            .await
            .ok_or(ApiError::Unauthenticated)?;
        Ok(Identity(user_id))
    }
}

pub(crate) fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// In-memory token-to-user map.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, user_id: &str) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions
            .write()
            .await
            .insert(token.clone(), user_id.to_string());
        token
    }

    pub async fn resolve(&self, token: &str) -> Option<String> {
        self.sessions.read().await.get(token).cloned()
    }

    pub async fn revoke(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }
}

/// Config-seeded credential check for login.
#[derive(Clone)]
pub struct UserDirectory {
    users: Arc<Vec<DirectoryUser>>,
}

struct DirectoryUser {
    id: String,
    email: String,
    password: String,
}

impl UserDirectory {
    pub fn from_config(config: &AuthConfig) -> Self {
        let users = config
            .users
            .iter()
            .enumerate()
            .map(|(idx, seed)| DirectoryUser {
                id: seed.id.clone().unwrap_or_else(|| (idx + 1).to_string()),
                email: seed.email.clone(),
                password: seed.password.clone(),
            })
            .collect();
        Self {
            users: Arc::new(users),
        }
    }

    /// Returns the user id when the credentials match.
    pub fn verify(&self, email: &str, password: &str) -> Option<String> {
        self.users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .map(|u| u.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedUser;

    fn directory() -> UserDirectory {
        UserDirectory::from_config(&AuthConfig {
            users: vec![SeedUser {
                id: None,
                email: "user@example.com".to_string(),
                password: "password".to_string(),
            }],
        })
    }

    #[test]
    fn verify_accepts_seeded_credentials() {
        assert_eq!(directory().verify("user@example.com", "password").as_deref(), Some("1"));
    }

    #[test]
    fn verify_rejects_bad_credentials() {
        let dir = directory();
        assert!(dir.verify("user@example.com", "wrong").is_none());
        assert!(dir.verify("other@example.com", "password").is_none());
    }

    #[tokio::test]
    async fn sessions_resolve_until_revoked() {
        let sessions = SessionStore::new();
        let token = sessions.create("1").await;

        assert_eq!(sessions.resolve(&token).await.as_deref(), Some("1"));
        sessions.revoke(&token).await;
        assert!(sessions.resolve(&token).await.is_none());
    }
}
