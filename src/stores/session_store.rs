use crate::utils::time::{current_timestamp, is_expired};
use dashmap::DashMap;
use rand::RngCore;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct Session {
    pub user_id: Uuid,
    pub created_at: i64,
}

/// In-memory store for login sessions, keyed by opaque token
pub struct SessionStore {
    sessions: DashMap<String, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Open a session for the given user, returning the bearer token
    pub fn create(&self, user_id: Uuid) -> String {
        let mut bytes = [0u8; 32];
        rand::rng().fill_bytes(&mut bytes);
        let token = hex::encode(bytes);

        self.sessions.insert(
            token.clone(),
            Session {
                user_id,
                created_at: current_timestamp(),
            },
        );

        token
    }

    /// Resolve a token to its user id
    pub fn resolve(&self, token: &str) -> Option<Uuid> {
        self.sessions.get(token).map(|entry| entry.value().user_id)
    }

    /// Revoke a session
    /// Returns true if the token was active
    pub fn revoke(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// Drop sessions older than `ttl` seconds, returning how many were removed
    ///
    /// The count comes from the retain closure itself; comparing map sizes
    /// before and after would miscount when a login lands mid-sweep.
    pub fn remove_expired(&self, ttl: i64, now: i64) -> usize {
        let mut removed = 0;

        self.sessions.retain(|_, session| {
            let keep = !is_expired(session.created_at, ttl, now);

            if !keep {
                removed += 1;
            }

            keep
        });

        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_resolve() {
        let store = SessionStore::new();
        let user_id = Uuid::new_v4();

        let token = store.create(user_id);

        assert_eq!(token.len(), 64); // 32 bytes hex-encoded
        assert_eq!(store.resolve(&token), Some(user_id));
    }

    #[test]
    fn test_tokens_are_unique() {
        let store = SessionStore::new();
        let user_id = Uuid::new_v4();

        let first = store.create(user_id);
        let second = store.create(user_id);

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_revoke() {
        let store = SessionStore::new();
        let token = store.create(Uuid::new_v4());

        assert!(store.revoke(&token));
        assert_eq!(store.resolve(&token), None);
        assert!(!store.revoke(&token));
    }

    #[test]
    fn test_remove_expired_during_concurrent_logins() {
        use std::sync::Arc;

        let store = Arc::new(SessionStore::new());
        let now = current_timestamp();

        let writer = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for _ in 0..1000 {
                    store.create(Uuid::new_v4());
                }
            })
        };

        // Nothing can be older than this ttl, so every sweep must report
        // zero removals no matter how many logins land mid-sweep
        for _ in 0..100 {
            assert_eq!(store.remove_expired(1_i64 << 40, now), 0);
        }

        writer.join().unwrap();
        assert_eq!(store.len(), 1000);
    }

    #[test]
    fn test_remove_expired() {
        let store = SessionStore::new();
        let token = store.create(Uuid::new_v4());

        let now = current_timestamp();

        // Well within the ttl
        assert_eq!(store.remove_expired(3600, now), 0);
        assert!(store.resolve(&token).is_some());

        // Pretend an hour passed
        assert_eq!(store.remove_expired(3600, now + 7200), 1);
        assert!(store.resolve(&token).is_none());
    }
}
