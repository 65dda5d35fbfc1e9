//! Session storage for authenticated clients.
//!
//! Provides a [`SessionStore`] trait with two implementations:
//! - [`RedisSessionStore`] - Production Redis-backed store with TTL expiry
//! - [`MemorySessionStore`] - In-process fallback when Redis is not configured

mod memory_store;
mod redis_store;
mod store;

pub use memory_store::MemorySessionStore;
pub use redis_store::{RedisSessionStore, SESSION_KEY_PREFIX};
pub use store::{SessionStore, SessionStoreError, SessionStoreResult};

#[cfg(test)]
pub use store::MockSessionStore;
