//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Session store**: Tests store reachability (Redis PING, or always
///    healthy for the in-memory store)
/// 2. **Usage provider**: Tests the per-account counter source the same way
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "session_store": {
///       "status": "ok",
///       "message": "Session store reachable"
///     },
///     "usage_provider": {
///       "status": "ok",
///       "message": "Usage provider reachable"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_session_store(&state).await;

    let usage_check = check_usage_provider(&state).await;

    let all_healthy = store_check.status == "ok" && usage_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            session_store: store_check,
            usage_provider: usage_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks session store connectivity.
async fn check_session_store(state: &AppState) -> CheckStatus {
    if state.session_service.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Session store reachable".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Session store unreachable".to_string()),
        }
    }
}

/// Checks usage provider connectivity.
async fn check_usage_provider(state: &AppState) -> CheckStatus {
    if state.usage.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Usage provider reachable".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Usage provider unreachable".to_string()),
        }
    }
}
