//! # Login Portal
//!
//! A small login service that authenticates users against an external OAuth
//! endpoint and assigns each session a backend account, built with Axum and Redis.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Session entity and provider traits
//! - **Application Layer** ([`application`]) - Account selection and session logic
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis stores, in-memory
//!   fallbacks, and the OAuth HTTP client
//! - **API Layer** ([`api`]) - Health endpoint, rate limiting, and tracing middleware
//! - **Web Layer** ([`web`]) - Login and home pages rendered server-side
//!
//! ## Features
//!
//! - Page and token login flows against a configured OAuth endpoint
//! - Account assignment by remaining call budget (largest budget wins)
//! - Redis-backed sessions with a fixed five-day expiry
//! - In-memory fallbacks when Redis is not configured
//! - Rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export OAUTH_URL="https://oauth.example.com/verify"
//! export CARIDS="carid1,carid2,carid3"
//! export REDIS_URL="redis://localhost:6379"  # Optional
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AccountSelector, SessionService};
    pub use crate::domain::entities::{SESSION_TTL_SECONDS, SessionData};
    pub use crate::domain::providers::{OauthReply, OauthVerifier, UsageProvider};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
