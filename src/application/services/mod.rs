//! Business logic services for the application layer.

pub mod account_selector;
pub mod session_service;

pub use account_selector::AccountSelector;
pub use session_service::SessionService;
