use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::models::Session;

struct SessionEntry {
    session: Session,
    expires_at: i64,
}

/// Process-local session contexts keyed by cookie token.
#[derive(Clone)]
pub struct SessionStore {
    entries: Arc<RwLock<HashMap<String, SessionEntry>>>,
    expiry_secs: i64,
}

impl SessionStore {
    pub fn new(expiry_hours: i64) -> Self {
        Self::with_expiry_secs(expiry_hours.saturating_mul(3600))
    }

    pub fn with_expiry_secs(expiry_secs: i64) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            expiry_secs,
        }
    }

    /// Return a live token for the request, creating a session when the
    /// presented token is absent, unknown or expired. The flag is `true` for
    /// newly created sessions.
    pub async fn resolve(&self, token: Option<&str>) -> (String, bool) {
        let now = chrono::Utc::now().timestamp();
        let mut entries = self.entries.write().await;

        if let Some(token) = token {
            if let Some(entry) = entries.get_mut(token) {
                if entry.expires_at > now {
                    entry.expires_at = now.saturating_add(self.expiry_secs);
                    return (token.to_string(), false);
                }
                entries.remove(token);
            }
        }

        let token = Uuid::new_v4().to_string();
        entries.insert(
            token.clone(),
            SessionEntry {
                session: Session::default(),
                expires_at: now.saturating_add(self.expiry_secs),
            },
        );
        (token, true)
    }

    pub async fn get(&self, token: &str) -> Option<Session> {
        let now = chrono::Utc::now().timestamp();
        self.entries
            .read()
            .await
            .get(token)
            .filter(|entry| entry.expires_at > now)
            .map(|entry| entry.session.clone())
    }

    pub async fn put(&self, token: &str, session: Session) {
        let expires_at = chrono::Utc::now().timestamp().saturating_add(self.expiry_secs);
        self.entries
            .write()
            .await
            .insert(token.to_string(), SessionEntry { session, expires_at });
    }

    /// Drop expired sessions; returns how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        let now = chrono::Utc::now().timestamp();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        before - entries.len()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::models::Page;

    #[tokio::test]
    async fn unknown_token_gets_fresh_session() {
        let store = SessionStore::new(24);

        let (token, created) = store.resolve(Some("forged")).await;
        assert!(created);
        assert_ne!(token, "forged");

        let session = store.get(&token).await.unwrap();
        assert_eq!(session.page, Page::Auth);
        assert!(!session.logged_in);
    }

    #[tokio::test]
    async fn known_token_is_reused() {
        let store = SessionStore::new(24);
        let (token, _) = store.resolve(None).await;

        let mut session = store.get(&token).await.unwrap();
        session.log_in("alice");
        store.put(&token, session.clone()).await;

        let (again, created) = store.resolve(Some(&token)).await;
        assert!(!created);
        assert_eq!(again, token);
        assert_eq!(store.get(&token).await, Some(session));
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let store = SessionStore::new(24);
        let (a, _) = store.resolve(None).await;
        let (b, _) = store.resolve(None).await;

        let mut session = store.get(&a).await.unwrap();
        session.log_in("alice");
        store.put(&a, session).await;

        assert!(!store.get(&b).await.unwrap().logged_in);
    }

    #[tokio::test]
    async fn expired_sessions_are_replaced_and_purged() {
        let store = SessionStore::with_expiry_secs(0);
        let (token, _) = store.resolve(None).await;

        assert!(store.get(&token).await.is_none());
        let (replacement, created) = store.resolve(Some(&token)).await;
        assert!(created);
        assert_ne!(replacement, token);

        assert_eq!(store.cleanup_expired().await, 1);
        assert_eq!(store.len().await, 0);
    }
}
