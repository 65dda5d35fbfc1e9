//! Redis-backed session store implementation.

use super::store::{SessionStore, SessionStoreError, SessionStoreResult};
use crate::domain::entities::SessionData;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Key namespace for session records, shared with the admin CLI.
pub const SESSION_KEY_PREFIX: &str = "session:";

/// Redis store for session records.
///
/// Records are stored as JSON strings under `session:{id}` with `SET EX`,
/// so expiry is enforced by Redis itself. Uses connection pooling via
/// `ConnectionManager` for efficient connection reuse.
pub struct RedisSessionStore {
    client: ConnectionManager,
}

impl RedisSessionStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> SessionStoreResult<Self> {
        info!("Connecting session store to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            SessionStoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            SessionStoreError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| SessionStoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Session store connected to Redis");

        Ok(Self { client: manager })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(session_id: &str) -> String {
        format!("{}{}", SESSION_KEY_PREFIX, session_id)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn put(
        &self,
        session_id: &str,
        data: &SessionData,
        ttl_seconds: u64,
    ) -> SessionStoreResult<()> {
        let key = Self::build_key(session_id);
        let record = serde_json::to_string(data)
            .map_err(|e| SessionStoreError::Encoding(e.to_string()))?;

        let mut conn = self.client.clone();
        conn.set_ex::<_, _, ()>(&key, record, ttl_seconds)
            .await
            .map_err(|e| SessionStoreError::Operation(format!("Redis SET failed: {}", e)))?;

        debug!("Session SET: {} (TTL: {}s)", session_id, ttl_seconds);
        Ok(())
    }

    async fn get(&self, session_id: &str) -> SessionStoreResult<Option<SessionData>> {
        let key = Self::build_key(session_id);
        let mut conn = self.client.clone();

        let record: Option<String> = conn
            .get(&key)
            .await
            .map_err(|e| SessionStoreError::Operation(format!("Redis GET failed: {}", e)))?;

        match record {
            Some(json) => {
                let data = serde_json::from_str(&json)
                    .map_err(|e| SessionStoreError::Encoding(e.to_string()))?;
                debug!("Session HIT: {}", session_id);
                Ok(Some(data))
            }
            None => {
                debug!("Session MISS: {}", session_id);
                Ok(None)
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
