//! crates/astrology_core/src/session.rs
//!
//! Encoding of the active session and an in-memory `SessionStore`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::Account;
use crate::ports::{PortError, PortResult, SessionStore};

/// The key the active account is stored under.
pub const SESSION_KEY: &str = "astrologyUser";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Malformed stored session: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub fn encode_session(account: &Account) -> Result<String, SessionError> {
    Ok(serde_json::to_string(account)?)
}

pub fn decode_session(raw: &str) -> Result<Account, SessionError> {
    Ok(serde_json::from_str(raw)?)
}

/// A `SessionStore` that forgets everything when dropped.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> PortResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| PortError::Unexpected("session store lock poisoned".to_string()))
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, key: &str) -> PortResult<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> PortResult<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> PortResult<()> {
        self.entries()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account {
            id: "42".to_string(),
            email: "aria@example.com".to_string(),
            name: "Aria".to_string(),
            requests_remaining: 2,
        }
    }

    #[test]
    fn session_round_trips_without_a_password() {
        let raw = encode_session(&account()).unwrap();
        assert!(!raw.contains("password"));
        assert!(raw.contains("\"requestsRemaining\":2"));
        assert_eq!(decode_session(&raw).unwrap(), account());
    }

    #[test]
    fn garbage_is_reported_as_malformed() {
        for raw in ["", "{", "null", "{\"id\":1}", "[]"] {
            assert!(
                matches!(decode_session(raw), Err(SessionError::Malformed(_))),
                "{raw:?}"
            );
        }
    }

    #[tokio::test]
    async fn memory_store_sets_gets_and_removes() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get(SESSION_KEY).await.unwrap(), None);
        store.set(SESSION_KEY, "value").await.unwrap();
        assert_eq!(store.get(SESSION_KEY).await.unwrap().as_deref(), Some("value"));
        store.remove(SESSION_KEY).await.unwrap();
        store.remove(SESSION_KEY).await.unwrap();
        assert_eq!(store.get(SESSION_KEY).await.unwrap(), None);
    }
}
