//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete backends for session storage, usage counters, and the outbound
//! OAuth call.
//!
//! # Modules
//!
//! - [`session`] - Session store abstractions (Redis and in-memory implementations)
//! - [`usage`] - Usage counter providers (Redis and fixed-count implementations)
//! - [`oauth`] - HTTP client for the external OAuth endpoint

pub mod oauth;
pub mod session;
pub mod usage;
