//! Token-based login flow.

use std::collections::HashMap;

use axum::{
    Form, Json,
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect, Response},
};
use metrics::counter;
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::cookies::session_cookie;

use super::login::LoginTemplate;

/// JSON reply for the token flow.
///
/// Field order is part of the wire shape: `code` first, then `msg`.
#[derive(Debug, Serialize)]
pub struct LoginReply {
    pub code: i64,
    pub msg: String,
}

impl LoginReply {
    fn success() -> Self {
        Self {
            code: 1,
            msg: "login successful".to_string(),
        }
    }

    fn failure(msg: &str) -> Self {
        Self {
            code: 0,
            msg: msg.to_string(),
        }
    }
}

/// Handles a token-based login submission.
///
/// # Endpoint
///
/// `POST /login/token`
///
/// # Flow
///
/// Same OAuth call as the page flow, but the session stores the `carid`
/// submitted with the request instead of a selector choice, and the
/// `resptype` field picks the response format:
///
/// - `resptype=json` - JSON reply `{code, msg}`
/// - anything else - redirect to `/` on success, login page on failure
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the session store rejects the write.
pub async fn token_login_handler(
    State(st): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let wants_json = form.get("resptype").is_some_and(|v| v == "json");

    let reply = st.oauth.verify(&form).await;

    if !reply.is_success() {
        counter!("login_failure_total", "flow" => "token").increment(1);
        tracing::info!(code = reply.code, msg = %reply.msg, "Token login rejected");

        if wants_json {
            return Ok(Json(LoginReply::failure(&reply.msg)).into_response());
        }
        return Ok(LoginTemplate::new(&st.buy_link, &reply.msg).into_response());
    }

    let usertoken = form.get("usertoken").cloned().unwrap_or_default();
    let carid = form.get("carid").cloned().unwrap_or_default();

    let session_id = st.session_service.create(&usertoken, &carid).await?;

    counter!("login_success_total", "flow" => "token").increment(1);

    let cookie = [(SET_COOKIE, session_cookie(&session_id))];
    if wants_json {
        Ok((cookie, Json(LoginReply::success())).into_response())
    } else {
        Ok((cookie, Redirect::to("/")).into_response())
    }
}
