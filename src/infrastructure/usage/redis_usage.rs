//! Redis-backed usage counter reads.

use crate::domain::providers::{UsageError, UsageProvider};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Key namespace for usage counters, shared with the admin CLI.
///
/// The counters themselves are written by the external statistics subsystem
/// (and by operators via the admin CLI); this service only reads them.
pub const USAGE_KEY_PREFIX: &str = "usage:";

/// Reads per-account remaining-call counters from Redis.
pub struct RedisUsageProvider {
    client: ConnectionManager,
}

impl RedisUsageProvider {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> Result<Self, UsageError> {
        info!("Connecting usage provider to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            UsageError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| UsageError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| UsageError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Usage provider connected to Redis");

        Ok(Self { client: manager })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(carid: &str) -> String {
        format!("{}{}", USAGE_KEY_PREFIX, carid)
    }
}

#[async_trait]
impl UsageProvider for RedisUsageProvider {
    async fn call_count(&self, carid: &str) -> Result<i64, UsageError> {
        let key = Self::build_key(carid);
        let mut conn = self.client.clone();

        let count: Option<i64> = conn
            .get(&key)
            .await
            .map_err(|e| UsageError::Operation(format!("Redis GET failed: {}", e)))?;

        // An account nobody has seeded yet simply has no budget recorded.
        let count = count.unwrap_or(0);
        debug!("Usage {}: {}", carid, count);
        Ok(count)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
