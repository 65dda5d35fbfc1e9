//! Session creation and cookie-based authentication.

use std::sync::Arc;

use crate::domain::entities::{SESSION_TTL_SECONDS, SessionData};
use crate::error::AppError;
use crate::infrastructure::session::SessionStore;
use crate::utils::session_id::generate_session_id;
use serde_json::json;
use tracing::info;

/// Service managing the session lifecycle.
///
/// Sessions are created only after the OAuth endpoint has confirmed the
/// submitted credentials, always with the same fixed TTL. There is no
/// explicit logout; sessions end by expiry.
pub struct SessionService {
    store: Arc<dyn SessionStore>,
}

impl SessionService {
    /// Creates a new session service over the given store.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Creates a session for a confirmed login and returns its opaque id.
    ///
    /// The record carries the client's verbatim `usertoken` and the assigned
    /// `carid`; the TTL is always [`SESSION_TTL_SECONDS`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store write fails. Session
    /// writes are not fail-open: a lost write would silently undo the login.
    pub async fn create(&self, usertoken: &str, carid: &str) -> Result<String, AppError> {
        let session_id = generate_session_id();
        let data = SessionData::new(usertoken, carid);

        self.store
            .put(&session_id, &data, SESSION_TTL_SECONDS)
            .await
            .map_err(|e| {
                AppError::internal("Failed to store session", json!({ "reason": e.to_string() }))
            })?;

        info!("Session created for account {}", carid);
        Ok(session_id)
    }

    /// Resolves a session id from a cookie into its session record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for an unknown or expired id and
    /// [`AppError::Internal`] if the store read fails.
    pub async fn authenticate(&self, session_id: &str) -> Result<SessionData, AppError> {
        let data = self.store.get(session_id).await.map_err(|e| {
            AppError::internal("Failed to load session", json!({ "reason": e.to_string() }))
        })?;

        data.ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Unknown or expired session" }),
            )
        })
    }

    /// Checks if the session store backend is healthy.
    ///
    /// Used by the health check endpoint to report store status.
    pub async fn health_check(&self) -> bool {
        self.store.health_check().await
    }
}
