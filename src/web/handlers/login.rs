//! Login page and page-based login flow.

use std::collections::HashMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect, Response},
};
use metrics::counter;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::badge::render_badge;
use crate::web::cookies::session_cookie;

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - The inline login badge
/// - The purchase link
/// - An error line, empty on first render
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub badge: String,
    pub buy_link: String,
    pub error: String,
}

impl LoginTemplate {
    pub fn new(buy_link: &str, error: &str) -> Self {
        Self {
            badge: render_badge("login", "click to login", "blue"),
            buy_link: buy_link.to_string(),
            error: error.to_string(),
        }
    }
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
///
/// # Template
///
/// Uses `templates/login.html` for server-side rendering.
pub async fn login_page_handler(State(st): State<AppState>) -> impl IntoResponse {
    LoginTemplate::new(&st.buy_link, "")
}

/// Handles a page-based login submission.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Flow
///
/// 1. Forward the submitted form verbatim to the OAuth endpoint
/// 2. On rejection, re-render the login page with the returned message
/// 3. On success, pick the account with the largest remaining call budget,
///    create a session, set the session cookie, and redirect to `/`
///
/// A `carid` submitted with the form is ignored here; this flow always
/// re-selects the account. The token flow is the one that trusts the
/// client's choice.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the session store rejects the write.
pub async fn login_submit_handler(
    State(st): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let reply = st.oauth.verify(&form).await;

    if !reply.is_success() {
        counter!("login_failure_total", "flow" => "page").increment(1);
        tracing::info!(code = reply.code, msg = %reply.msg, "Login rejected");

        return Ok(LoginTemplate::new(&st.buy_link, &reply.msg).into_response());
    }

    let usertoken = form.get("usertoken").cloned().unwrap_or_default();
    let carid = st.account_selector.select().await;

    let session_id = st.session_service.create(&usertoken, &carid).await?;

    counter!("login_success_total", "flow" => "page").increment(1);

    Ok((
        [(SET_COOKIE, session_cookie(&session_id))],
        Redirect::to("/"),
    )
        .into_response())
}
