//! HTTP client for the external OAuth endpoint.

use crate::domain::providers::{OauthReply, OauthVerifier};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Forwards submitted login forms to the configured OAuth endpoint.
///
/// The submitted fields are posted verbatim as a form body; the JSON reply
/// body alone decides the outcome. The upstream HTTP status is deliberately
/// not consulted, and a transport or decode failure folds into the default
/// (rejected) reply, so a dead OAuth endpoint reads as a login failure
/// rather than a server error.
pub struct OauthClient {
    http: reqwest::Client,
    oauth_url: String,
}

impl OauthClient {
    /// Creates a client posting to the given OAuth URL.
    pub fn new(oauth_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            oauth_url,
        }
    }
}

#[async_trait]
impl OauthVerifier for OauthClient {
    async fn verify(&self, form: &HashMap<String, String>) -> OauthReply {
        let response = match self.http.post(&self.oauth_url).form(form).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("OAuth request failed: {}", e);
                return OauthReply::default();
            }
        };

        match response.json::<OauthReply>().await {
            Ok(reply) => {
                debug!("OAuth reply: code={}", reply.code);
                reply
            }
            Err(e) => {
                warn!("Failed to decode OAuth reply: {}", e);
                OauthReply::default()
            }
        }
    }
}
