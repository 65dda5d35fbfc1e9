//! Shared application state passed to every handler.

use std::sync::Arc;

use crate::application::services::{AccountSelector, SessionService};
use crate::domain::providers::{OauthVerifier, UsageProvider};

/// Application-wide state.
///
/// Cloned per request by Axum; all services are behind `Arc`, so a clone
/// is a handful of pointer bumps.
#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService>,
    pub account_selector: Arc<AccountSelector>,
    pub oauth: Arc<dyn OauthVerifier>,
    pub usage: Arc<dyn UsageProvider>,
    /// Purchase link shown beneath the login form.
    pub buy_link: String,
}
