//! HTTP request handlers for API endpoints.

mod health;

pub use health::health_handler;
