//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    home_handler, login_page_handler, login_submit_handler, token_login_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Protected routes requiring a valid session.
///
/// Protected via [`crate::web::middleware::session_auth`] (cookie-based).
///
/// # Endpoints
///
/// - `GET /` - Home page with the assigned account
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/", get(home_handler))
}

/// Public routes without authentication.
///
/// # Endpoints
///
/// - `GET  /login` - Login page
/// - `POST /login` - Page-based login flow
/// - `POST /login/token` - Token-based login flow
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page_handler).post(login_submit_handler))
        .route("/login/token", post(token_login_handler))
}
