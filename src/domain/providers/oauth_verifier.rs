//! Provider trait for credential verification against the OAuth endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

/// Reply from the OAuth endpoint.
///
/// Decoded leniently: absent fields take their default values, so an empty,
/// malformed, or failed upstream reply resolves to the failure branch
/// (`code = 0`, empty message) rather than an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OauthReply {
    /// `1` means the credentials were accepted; anything else is a rejection.
    #[serde(default)]
    pub code: i64,
    /// Human-readable reason on rejection.
    #[serde(default)]
    pub msg: String,
}

impl OauthReply {
    /// Creates an accepted reply.
    pub fn success() -> Self {
        Self {
            code: 1,
            msg: String::new(),
        }
    }

    /// Creates a rejected reply with the given reason.
    pub fn failure(msg: impl Into<String>) -> Self {
        Self {
            code: 0,
            msg: msg.into(),
        }
    }

    /// Whether the OAuth endpoint accepted the credentials.
    pub fn is_success(&self) -> bool {
        self.code == 1
    }
}

/// Interface for forwarding a submitted login form to the OAuth endpoint.
///
/// Implementations never fail: transport and decode errors fold into the
/// default (rejected) reply, which the handlers surface as a login failure.
///
/// # Implementations
///
/// - [`crate::infrastructure::oauth::OauthClient`] - HTTP client posting the
///   form to the configured `OAUTH_URL`
#[async_trait]
pub trait OauthVerifier: Send + Sync {
    /// Posts the form fields verbatim to the OAuth endpoint and decodes the
    /// JSON reply.
    async fn verify(&self, form: &HashMap<String, String>) -> OauthReply;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_reply() {
        let reply: OauthReply = serde_json::from_str(r#"{"code":1,"msg":"ok"}"#).unwrap();

        assert!(reply.is_success());
        assert_eq!(reply.msg, "ok");
    }

    #[test]
    fn test_decode_rejection_reply() {
        let reply: OauthReply =
            serde_json::from_str(r#"{"code":0,"msg":"bad credentials"}"#).unwrap();

        assert!(!reply.is_success());
        assert_eq!(reply.msg, "bad credentials");
    }

    #[test]
    fn test_absent_fields_default_to_failure() {
        let reply: OauthReply = serde_json::from_str("{}").unwrap();

        assert_eq!(reply.code, 0);
        assert_eq!(reply.msg, "");
        assert!(!reply.is_success());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let reply: OauthReply =
            serde_json::from_str(r#"{"code":1,"msg":"ok","expires":3600}"#).unwrap();

        assert!(reply.is_success());
    }

    #[test]
    fn test_default_reply_is_failure() {
        assert!(!OauthReply::default().is_success());
    }

    #[test]
    fn test_nonstandard_success_codes_are_rejections() {
        let reply: OauthReply = serde_json::from_str(r#"{"code":2,"msg":""}"#).unwrap();

        assert!(!reply.is_success());
    }
}
