//! Provider trait for per-account remaining-call counters.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while reading a usage counter.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("usage provider connection error: {0}")]
    Connection(String),
    #[error("usage provider operation error: {0}")]
    Operation(String),
}

/// Read-only interface to the external statistics subsystem that tracks how
/// many calls each backend account has left.
///
/// The counters are maintained elsewhere; this service only reads them to
/// rank accounts. Callers treat a failed lookup as a count of zero, so
/// implementations may surface errors freely without disrupting logins.
///
/// # Implementations
///
/// - [`crate::infrastructure::usage::RedisUsageProvider`] - Reads counters from Redis
/// - [`crate::infrastructure::usage::FixedUsageProvider`] - Fixed count for
///   every account, used when Redis is not configured
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsageProvider: Send + Sync {
    /// Returns the remaining call count for an account.
    ///
    /// Accounts without a recorded counter report zero, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError`] if the backend cannot be reached or the stored
    /// value is unreadable.
    async fn call_count(&self, carid: &str) -> Result<i64, UsageError>;

    /// Checks if the usage backend is reachable.
    ///
    /// Used by the health endpoint to report provider status.
    async fn health_check(&self) -> bool;
}
