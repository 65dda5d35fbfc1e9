//! Session store trait and error types.

use crate::domain::entities::SessionData;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during session store operations.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("session store connection error: {0}")]
    Connection(String),
    #[error("session store operation error: {0}")]
    Operation(String),
    #[error("session record encoding error: {0}")]
    Encoding(String),
}

/// Result type for session store operations.
pub type SessionStoreResult<T> = Result<T, SessionStoreError>;

/// Trait for persisting session records keyed by opaque session id.
///
/// Unlike a cache, session writes are not fail-open: a lost write would
/// silently undo a successful login, so implementations propagate errors
/// and callers surface them as server errors.
///
/// # Implementations
///
/// - [`crate::infrastructure::session::RedisSessionStore`] - Redis-backed store
/// - [`crate::infrastructure::session::MemorySessionStore`] - In-process map
///   used when Redis is not configured
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores a session record under `session_id` with the given TTL.
    ///
    /// An existing record under the same id is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] if the record cannot be encoded or the
    /// backend write fails.
    async fn put(
        &self,
        session_id: &str,
        data: &SessionData,
        ttl_seconds: u64,
    ) -> SessionStoreResult<()>;

    /// Retrieves the session record for `session_id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(data))` for a live session
    /// - `Ok(None)` for an unknown or expired session id
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] if the backend read fails or the stored
    /// record cannot be decoded.
    async fn get(&self, session_id: &str) -> SessionStoreResult<Option<SessionData>>;

    /// Checks if the store backend is healthy.
    ///
    /// Used by the health endpoint to report store status.
    async fn health_check(&self) -> bool;
}
