//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check: session store, usage provider (public)
//! - `GET  /login`       - Login page (public)
//! - `POST /login`       - Page-based login flow (public)
//! - `POST /login/token` - Token-based login flow (public)
//! - `GET  /`            - Home page (session cookie required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, tighter on credential-carrying routes
//! - **Session auth** - Cookie-backed session lookup on protected pages
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::session_auth;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let web_protected = web::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session_auth::layer,
        ))
        .layer(rate_limit::secure_layer());

    let web_public = web::routes::public_routes().layer(rate_limit::layer());

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(web_protected)
        .merge(web_public)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
