//! Usage counter backends for account selection.
//!
//! Implements [`crate::domain::providers::UsageProvider`] twice:
//! - [`RedisUsageProvider`] - Reads the counters maintained by the external
//!   statistics subsystem out of Redis
//! - [`FixedUsageProvider`] - Reports the same count for every account,
//!   used when Redis is not configured

mod fixed_usage;
mod redis_usage;

pub use fixed_usage::FixedUsageProvider;
pub use redis_usage::{RedisUsageProvider, USAGE_KEY_PREFIX};
