#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestResponse;
use login_portal::application::services::{AccountSelector, SessionService};
use login_portal::domain::providers::{OauthReply, OauthVerifier, UsageError, UsageProvider};
use login_portal::infrastructure::session::MemorySessionStore;
use login_portal::state::AppState;

/// OAuth stub returning a fixed reply for every verification.
pub struct StubOauth {
    reply: OauthReply,
}

impl StubOauth {
    pub fn new(reply: OauthReply) -> Self {
        Self { reply }
    }
}

#[async_trait]
impl OauthVerifier for StubOauth {
    async fn verify(&self, _form: &HashMap<String, String>) -> OauthReply {
        self.reply.clone()
    }
}

/// Usage stub serving counts from a fixed map; unknown accounts read zero.
pub struct StubUsage {
    counts: HashMap<String, i64>,
}

impl StubUsage {
    pub fn new(counts: &[(&str, i64)]) -> Self {
        Self {
            counts: counts
                .iter()
                .map(|(carid, count)| ((*carid).to_string(), *count))
                .collect(),
        }
    }
}

#[async_trait]
impl UsageProvider for StubUsage {
    async fn call_count(&self, carid: &str) -> Result<i64, UsageError> {
        Ok(self.counts.get(carid).copied().unwrap_or(0))
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Builds application state around an in-memory session store and stubbed
/// external services.
///
/// The selector is configured with `carid1`, `carid2`, `carid3` in that
/// order. The store handle is returned too so tests can assert on what a
/// login actually persisted.
pub fn create_test_state(
    reply: OauthReply,
    counts: &[(&str, i64)],
) -> (AppState, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    let usage: Arc<dyn UsageProvider> = Arc::new(StubUsage::new(counts));

    let session_service = Arc::new(SessionService::new(store.clone()));
    let account_selector = Arc::new(AccountSelector::new(
        vec![
            "carid1".to_string(),
            "carid2".to_string(),
            "carid3".to_string(),
        ],
        usage.clone(),
    ));

    let state = AppState {
        session_service,
        account_selector,
        oauth: Arc::new(StubOauth::new(reply)),
        usage,
        buy_link: "https://chat.bjp666.link".to_string(),
    };

    (state, store)
}

/// Returns the raw `Set-Cookie` header of a response, if any.
pub fn set_cookie_header(response: &TestResponse) -> Option<String> {
    let header = response.maybe_header("set-cookie")?;
    Some(header.to_str().ok()?.to_string())
}

/// Extracts the session id from a response's `Set-Cookie` header.
pub fn session_id_from_cookie(response: &TestResponse) -> Option<String> {
    let cookie = set_cookie_header(response)?;
    let name_value = cookie.split(';').next()?;
    let (name, value) = name_value.split_once('=')?;

    (name == "session_id").then(|| value.to_string())
}
