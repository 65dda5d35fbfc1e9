//! Provider trait definitions for the domain layer.
//!
//! This module defines the interfaces (traits) that abstract the external
//! systems the login flow depends on. The traits are implemented by concrete
//! backends in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for external calls
//! - Implementations live in `crate::infrastructure`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Providers
//!
//! - [`OauthVerifier`] - Credential verification against the OAuth endpoint
//! - [`UsageProvider`] - Read-only remaining-call counters per account

pub mod oauth_verifier;
pub mod usage_provider;

pub use oauth_verifier::{OauthReply, OauthVerifier};
pub use usage_provider::{UsageError, UsageProvider};

#[cfg(test)]
pub use usage_provider::MockUsageProvider;
