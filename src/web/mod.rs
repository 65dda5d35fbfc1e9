//! Web layer for the browser-facing login portal.
//!
//! Provides the login page, both login flows, and the session-protected
//! home page. Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`cookies`] - Session cookie construction and parsing
//! - [`handlers`] - Template rendering and login flow handlers
//! - [`middleware`] - Web-specific middleware (session auth)
//! - [`routes`] - Web route configuration

pub mod cookies;
pub mod handlers;
pub mod middleware;
pub mod routes;
