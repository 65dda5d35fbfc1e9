//! Session cookie construction and parsing.

use crate::domain::entities::{SESSION_COOKIE, SESSION_TTL_SECONDS};

/// Builds the `Set-Cookie` value for a freshly created session.
///
/// The cookie lifetime matches the store-side session time-to-live, so the
/// browser forgets the session at the same time the store does.
///
/// # Attributes
///
/// - `Max-Age` - same 5-day lifetime as the stored session
/// - `Path=/` - sent on every route, including the home page
/// - `HttpOnly` - not readable from page scripts
/// - `SameSite=Lax` - sent on top-level navigation only
pub fn session_cookie(session_id: &str) -> String {
    format!(
        "{SESSION_COOKIE}={session_id}; Max-Age={SESSION_TTL_SECONDS}; Path=/; HttpOnly; SameSite=Lax"
    )
}

/// Extracts the session id from a `Cookie` header value.
///
/// Handles multiple cookies by splitting on semicolons and matching the
/// session cookie name exactly; other cookies are ignored.
pub fn parse_session_cookie(cookie_header: &str) -> Option<String> {
    cookie_header.split(';').find_map(|cookie| {
        let mut parts = cookie.trim().splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(SESSION_COOKIE), Some(value)) => Some(value.to_string()),
            _ => None,
        }
    })
}
