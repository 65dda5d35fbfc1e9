//! Account selection by remaining call budget.

use std::sync::Arc;

use crate::domain::providers::UsageProvider;
use tracing::{debug, warn};

/// Picks which backend account a freshly logged-in session should use.
///
/// The selector walks the configured account ids in order, reads each one's
/// remaining call count from the usage provider, and returns the id with the
/// strictly greatest count. The strict comparison means the earliest account
/// in configured order wins ties.
///
/// A failed counter lookup is logged and treated as a count of zero rather
/// than surfaced; selection must never block a login.
pub struct AccountSelector {
    carids: Vec<String>,
    usage: Arc<dyn UsageProvider>,
}

impl AccountSelector {
    /// Creates a selector over the configured account ids.
    ///
    /// The list order is significant and is expected to be non-empty;
    /// configuration validation enforces that at startup.
    pub fn new(carids: Vec<String>, usage: Arc<dyn UsageProvider>) -> Self {
        Self { carids, usage }
    }

    /// Returns the configured account id with the most remaining calls.
    ///
    /// Zero or negative counts are not errors; some id from the configured
    /// list is always returned.
    pub async fn select(&self) -> String {
        let mut best: Option<(usize, i64)> = None;

        for (idx, carid) in self.carids.iter().enumerate() {
            let count = match self.usage.call_count(carid).await {
                Ok(count) => count,
                Err(e) => {
                    warn!("Usage lookup failed for {}: {}. Counting as 0.", carid, e);
                    0
                }
            };

            // Strict comparison keeps the earliest account on ties.
            if best.is_none_or(|(_, max)| count > max) {
                best = Some((idx, count));
            }
        }

        let (idx, count) = best.unwrap_or((0, 0));
        let selected = self.carids.get(idx).cloned().unwrap_or_default();
        debug!("Selected account {} (remaining calls: {})", selected, count);

        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::providers::{MockUsageProvider, UsageError};

    fn carids() -> Vec<String> {
        vec![
            "carid1".to_string(),
            "carid2".to_string(),
            "carid3".to_string(),
        ]
    }

    fn provider_with_counts(counts: [i64; 3]) -> MockUsageProvider {
        let mut mock = MockUsageProvider::new();
        for (carid, count) in ["carid1", "carid2", "carid3"].into_iter().zip(counts) {
            mock.expect_call_count()
                .withf(move |id| id == carid)
                .times(1)
                .returning(move |_| Ok(count));
        }
        mock
    }

    #[tokio::test]
    async fn test_selects_account_with_most_calls() {
        let mock = provider_with_counts([5, 9, 2]);

        let selector = AccountSelector::new(carids(), Arc::new(mock));

        assert_eq!(selector.select().await, "carid2");
    }

    #[tokio::test]
    async fn test_tie_goes_to_first_in_configured_order() {
        let mock = provider_with_counts([7, 7, 3]);

        let selector = AccountSelector::new(carids(), Arc::new(mock));

        assert_eq!(selector.select().await, "carid1");
    }

    #[tokio::test]
    async fn test_all_zero_counts_still_selects_first() {
        let mock = provider_with_counts([0, 0, 0]);

        let selector = AccountSelector::new(carids(), Arc::new(mock));

        assert_eq!(selector.select().await, "carid1");
    }

    #[tokio::test]
    async fn test_lookup_error_counts_as_zero() {
        let mut mock = MockUsageProvider::new();
        mock.expect_call_count()
            .withf(|id| id == "carid1")
            .times(1)
            .returning(|_| Err(UsageError::Operation("down".to_string())));
        mock.expect_call_count()
            .withf(|id| id == "carid2")
            .times(1)
            .returning(|_| Ok(1));
        mock.expect_call_count()
            .withf(|id| id == "carid3")
            .times(1)
            .returning(|_| Ok(0));

        let selector = AccountSelector::new(carids(), Arc::new(mock));

        assert_eq!(selector.select().await, "carid2");
    }

    #[tokio::test]
    async fn test_all_lookups_failing_still_selects_first() {
        let mut mock = MockUsageProvider::new();
        mock.expect_call_count()
            .times(3)
            .returning(|_| Err(UsageError::Connection("down".to_string())));

        let selector = AccountSelector::new(carids(), Arc::new(mock));

        assert_eq!(selector.select().await, "carid1");
    }

    #[tokio::test]
    async fn test_negative_counts_are_ranked_not_rejected() {
        let mock = provider_with_counts([-5, -2, -9]);

        let selector = AccountSelector::new(carids(), Arc::new(mock));

        assert_eq!(selector.select().await, "carid2");
    }

    #[tokio::test]
    async fn test_single_account_list() {
        let mut mock = MockUsageProvider::new();
        mock.expect_call_count().times(1).returning(|_| Ok(0));

        let selector = AccountSelector::new(vec!["only".to_string()], Arc::new(mock));

        assert_eq!(selector.select().await, "only");
    }
}
