//! HTTP server initialization and runtime setup.
//!
//! Handles session store and usage provider wiring, OAuth client setup,
//! and Axum server lifecycle.

use crate::application::services::{AccountSelector, SessionService};
use crate::config::Config;
use crate::domain::providers::{OauthVerifier, UsageProvider};
use crate::infrastructure::oauth::OauthClient;
use crate::infrastructure::session::{MemorySessionStore, RedisSessionStore, SessionStore};
use crate::infrastructure::usage::{FixedUsageProvider, RedisUsageProvider};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Session store (Redis, or in-memory fallback)
/// - Usage provider (Redis, or zero-count fallback)
/// - OAuth client
/// - Axum HTTP server
///
/// The two Redis components connect independently; losing one at startup
/// degrades only that component.
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_session_store(&config).await;
    let usage = build_usage_provider(&config).await;

    let oauth: Arc<dyn OauthVerifier> = Arc::new(OauthClient::new(config.oauth_url.clone()));

    let session_service = Arc::new(SessionService::new(store));
    let account_selector = Arc::new(AccountSelector::new(config.carids.clone(), usage.clone()));

    let state = AppState {
        session_service,
        account_selector,
        oauth,
        usage,
        buy_link: config.buy_link.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}

/// Builds the session store, falling back to memory when Redis is absent
/// or unreachable.
async fn build_session_store(config: &Config) -> Arc<dyn SessionStore> {
    if let Some(redis_url) = &config.redis_url {
        match RedisSessionStore::connect(redis_url).await {
            Ok(redis) => {
                tracing::info!("Session store enabled (Redis)");
                return Arc::new(redis);
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to connect to Redis: {}. Using in-memory session store.",
                    e
                );
            }
        }
    } else {
        tracing::info!("Session store in-memory (no REDIS_URL)");
    }

    Arc::new(MemorySessionStore::new())
}

/// Builds the usage provider, falling back to fixed zero counts when Redis
/// is absent or unreachable.
///
/// With the fallback every account reads as count zero, so the selector
/// settles on the first configured account.
async fn build_usage_provider(config: &Config) -> Arc<dyn UsageProvider> {
    if let Some(redis_url) = &config.redis_url {
        match RedisUsageProvider::connect(redis_url).await {
            Ok(redis) => {
                tracing::info!("Usage provider enabled (Redis)");
                return Arc::new(redis);
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to connect to Redis: {}. Using fixed usage counts.",
                    e
                );
            }
        }
    } else {
        tracing::info!("Usage provider fixed (no REDIS_URL)");
    }

    Arc::new(FixedUsageProvider::new(0))
}
