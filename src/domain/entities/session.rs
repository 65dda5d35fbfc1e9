//! Session entity representing an authenticated client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Time-to-live applied to every session on creation: 5 days.
///
/// Both login flows use this exact value; there is no sliding renewal.
pub const SESSION_TTL_SECONDS: u64 = 432_000;

/// Name of the cookie carrying the opaque session id.
pub const SESSION_COOKIE: &str = "session_id";

/// Server-side session record, created only after the OAuth endpoint
/// confirms the submitted credentials.
///
/// The record is keyed by an opaque random session id and stored with a
/// fixed TTL; expiry is enforced by the store, not by this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionData {
    /// Token the client submitted on login, kept verbatim for downstream use.
    pub usertoken: String,
    /// Backend account assigned to this session.
    pub carid: String,
    /// Creation timestamp, for operator visibility.
    pub created_at: DateTime<Utc>,
}

impl SessionData {
    /// Creates a session record stamped with the current time.
    pub fn new(usertoken: impl Into<String>, carid: impl Into<String>) -> Self {
        Self {
            usertoken: usertoken.into(),
            carid: carid.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_data_creation() {
        let session = SessionData::new("tok-123", "carid2");

        assert_eq!(session.usertoken, "tok-123");
        assert_eq!(session.carid, "carid2");
        assert!(session.created_at <= Utc::now());
    }

    #[test]
    fn test_session_data_json_round_trip() {
        let session = SessionData::new("tok-123", "carid1");

        let encoded = serde_json::to_string(&session).unwrap();
        let decoded: SessionData = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, session);
    }

    #[test]
    fn test_ttl_is_five_days() {
        assert_eq!(SESSION_TTL_SECONDS, 5 * 24 * 60 * 60);
    }
}
