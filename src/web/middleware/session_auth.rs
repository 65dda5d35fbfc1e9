//! Cookie-based session middleware for protected pages.

use axum::{
    extract::{Request, State},
    http::header::COOKIE,
    middleware::Next,
    response::{Redirect, Response},
};

use crate::state::AppState;
use crate::web::cookies::parse_session_cookie;

/// Authenticates page requests using the session cookie.
///
/// # Cookie Format
///
/// ```text
/// Cookie: session_id=<id>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract `session_id` cookie from the request
/// 2. Look the session up via [`crate::application::services::SessionService`]
/// 3. On success, attach the session data as a request extension and continue
/// 4. On failure or missing cookie, redirect to `/login`
///
/// Handlers behind this middleware can read the session with
/// `Extension<SessionData>`.
///
/// # Errors
///
/// Returns `Redirect` to `/login` if:
/// - the `session_id` cookie is missing
/// - the session is unknown or expired
/// - the session store is unreachable
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let session_id = req
        .headers()
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(parse_session_cookie);

    match session_id {
        Some(session_id) => match st.session_service.authenticate(&session_id).await {
            Ok(data) => {
                req.extensions_mut().insert(data);
                Ok(next.run(req).await)
            }
            Err(_) => Err(Redirect::to("/login")),
        },
        None => Err(Redirect::to("/login")),
    }
}
