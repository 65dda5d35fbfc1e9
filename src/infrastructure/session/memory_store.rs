//! In-process session store for development and testing.

use super::store::{SessionStore, SessionStoreResult};
use crate::domain::entities::SessionData;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use tracing::debug;

/// A stored record with its absolute expiry time.
struct StoredSession {
    data: SessionData,
    expires_at: DateTime<Utc>,
}

impl StoredSession {
    fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Session store backed by an in-process concurrent map.
///
/// Expired entries are dropped lazily on read. Sessions do not survive a
/// restart, so this store is only suitable for development or single-node
/// deployments without Redis.
///
/// # Use Cases
///
/// - Development environments without Redis
/// - Integration tests
/// - Fallback when the Redis connection fails at startup
pub struct MemorySessionStore {
    entries: DashMap<String, StoredSession>,
}

impl MemorySessionStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        debug!("Using in-memory session store");
        Self {
            entries: DashMap::new(),
        }
    }

    /// Number of stored sessions, including not-yet-collected expired ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn put(
        &self,
        session_id: &str,
        data: &SessionData,
        ttl_seconds: u64,
    ) -> SessionStoreResult<()> {
        let stored = StoredSession {
            data: data.clone(),
            expires_at: Utc::now() + Duration::seconds(ttl_seconds as i64),
        };

        self.entries.insert(session_id.to_string(), stored);
        Ok(())
    }

    async fn get(&self, session_id: &str) -> SessionStoreResult<Option<SessionData>> {
        // The map reference must be dropped before removal to avoid deadlock.
        let expired = match self.entries.get(session_id) {
            Some(entry) if entry.is_expired() => true,
            Some(entry) => return Ok(Some(entry.data.clone())),
            None => return Ok(None),
        };

        if expired {
            self.entries.remove(session_id);
        }
        Ok(None)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
