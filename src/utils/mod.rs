//! Utility functions for identifier generation and page assets.
//!
//! This module provides helper functions used across the application:
//!
//! - [`session_id`] - Session identifier generation
//! - [`badge`] - Flat-style SVG badge rendering for the login page

pub mod badge;
pub mod session_id;
