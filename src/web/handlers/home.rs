//! Home page handler for signed-in users.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Extension, response::IntoResponse};
use chrono::Utc;

use crate::domain::entities::SessionData;

/// Template for the home page.
///
/// Renders `templates/home.html` with the assigned account and how long
/// ago the session was created.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
struct HomeTemplate {
    carid: String,
    signed_in_for: String,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Authentication
///
/// Protected by [`crate::web::middleware::session_auth`]; the session data
/// arrives as a request extension.
pub async fn home_handler(Extension(session): Extension<SessionData>) -> impl IntoResponse {
    let elapsed = Utc::now().signed_duration_since(session.created_at);

    HomeTemplate {
        carid: session.carid,
        signed_in_for: humanize_age(elapsed.num_seconds()),
    }
}

/// Formats a session age in seconds as a short human-readable duration.
///
/// Negative inputs (clock skew between writer and reader) are clamped to
/// zero.
fn humanize_age(seconds: i64) -> String {
    let seconds = seconds.max(0);

    if seconds < 60 {
        "less than a minute".to_string()
    } else if seconds < 3_600 {
        let minutes = seconds / 60;
        format!("{minutes} minute{}", plural(minutes))
    } else if seconds < 86_400 {
        let hours = seconds / 3_600;
        format!("{hours} hour{}", plural(hours))
    } else {
        let days = seconds / 86_400;
        format!("{days} day{}", plural(days))
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_age_under_a_minute() {
        assert_eq!(humanize_age(0), "less than a minute");
        assert_eq!(humanize_age(59), "less than a minute");
    }

    #[test]
    fn test_humanize_age_minutes() {
        assert_eq!(humanize_age(60), "1 minute");
        assert_eq!(humanize_age(150), "2 minutes");
        assert_eq!(humanize_age(3_599), "59 minutes");
    }

    #[test]
    fn test_humanize_age_hours() {
        assert_eq!(humanize_age(3_600), "1 hour");
        assert_eq!(humanize_age(7_300), "2 hours");
    }

    #[test]
    fn test_humanize_age_days() {
        assert_eq!(humanize_age(86_400), "1 day");
        assert_eq!(humanize_age(432_000), "5 days");
    }

    #[test]
    fn test_humanize_age_clamps_negative() {
        assert_eq!(humanize_age(-30), "less than a minute");
    }
}
