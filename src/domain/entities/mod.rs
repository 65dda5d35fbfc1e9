//! Core domain entities representing the business data model.
//!
//! This service holds almost no state of its own; the single entity is the
//! per-client session record written after a successful login.

pub mod session;

pub use session::{SESSION_COOKIE, SESSION_TTL_SECONDS, SessionData};
