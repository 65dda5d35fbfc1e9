//! Fixed-count usage provider for disabled Redis.

use crate::domain::providers::{UsageError, UsageProvider};
use async_trait::async_trait;
use tracing::debug;

/// A usage provider that reports the same count for every account.
///
/// With every count tied, the selector always picks the first configured
/// account, which keeps logins working deterministically when the real
/// counters are unavailable.
///
/// # Use Cases
///
/// - Development environments without Redis
/// - Fallback when the Redis connection fails at startup
pub struct FixedUsageProvider {
    count: i64,
}

impl FixedUsageProvider {
    /// Creates a provider reporting `count` for every account.
    pub fn new(count: i64) -> Self {
        debug!("Using fixed usage provider (count: {})", count);
        Self { count }
    }
}

impl Default for FixedUsageProvider {
    fn default() -> Self {
        Self::new(0)
    }
}

#[async_trait]
impl UsageProvider for FixedUsageProvider {
    async fn call_count(&self, _carid: &str) -> Result<i64, UsageError> {
        Ok(self.count)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reports_fixed_count_for_any_account() {
        let provider = FixedUsageProvider::new(7);

        assert_eq!(provider.call_count("carid1").await.unwrap(), 7);
        assert_eq!(provider.call_count("anything").await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_default_reports_zero() {
        let provider = FixedUsageProvider::default();

        assert_eq!(provider.call_count("carid1").await.unwrap(), 0);
        assert!(provider.health_check().await);
    }
}
