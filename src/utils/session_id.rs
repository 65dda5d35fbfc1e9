//! Session identifier generation.
//!
//! Provides cryptographically secure random identifiers for login sessions.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
///
/// 24 bytes encode to 32 URL-safe characters with no padding.
const SESSION_ID_BYTES: usize = 24;

/// Generates a cryptographically secure random session identifier.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 32-character identifier that is safe to put
/// in a cookie value without quoting.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let id = generate_session_id();
/// assert_eq!(id.len(), 32);
/// assert!(id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_session_id() -> String {
    let mut buffer = [0u8; SESSION_ID_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
