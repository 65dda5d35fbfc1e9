//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating provider calls
//! and business rules. Services consume provider and store traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::account_selector::AccountSelector`] - Picks the backend
//!   account with the largest remaining call budget
//! - [`services::session_service::SessionService`] - Session creation and
//!   cookie-based authentication

pub mod services;
