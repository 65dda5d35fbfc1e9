//! Domain layer containing business entities and logic.
//!
//! This module implements the core domain logic following Clean Architecture
//! principles. It defines the session entity and the provider traits for the
//! external systems the login flow depends on, independent of infrastructure
//! concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`providers`] - Trait definitions for external backends
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Provider traits define contracts implemented by the infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Login Flow
//!
//! 1. HTTP handler receives the submitted login form
//! 2. [`providers::OauthVerifier`] forwards the form to the OAuth endpoint
//! 3. On success, [`crate::application::services::AccountSelector`] picks the
//!    backend account with the largest remaining call budget (page flow only)
//! 4. [`crate::application::services::SessionService`] persists an
//!    [`entities::SessionData`] record with a fixed time-to-live

pub mod entities;
pub mod providers;
