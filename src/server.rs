//! HTTP server initialization and runtime setup.
//!
//! Builds the cipher, link storage, counter store and rate limiter, then runs
//! the Axum server until a shutdown signal arrives.

use crate::application::services::{LinkService, RateLimiter};
use crate::config::Config;
use crate::domain::repositories::CounterStore;
use crate::infrastructure::counter::{InMemoryCounterStore, RedisCounterStore};
use crate::infrastructure::persistence::InMemoryUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the shared application state from configuration.
///
/// # Errors
///
/// Returns an error if the encryption key is invalid or Redis is configured
/// but unreachable.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let cipher = config.cipher()?;

    let counter_store: Arc<dyn CounterStore> = match &config.redis_url {
        Some(redis_url) => {
            let store = RedisCounterStore::connect(redis_url)
                .await
                .context("Counter service is configured but unavailable")?;
            tracing::info!("Rate limiting with shared Redis counters");
            Arc::new(store)
        }
        None => {
            tracing::warn!("REDIS_URL not set, rate-limit counters are local to this instance");
            Arc::new(InMemoryCounterStore::new())
        }
    };

    let rate_limiter = Arc::new(RateLimiter::new(
        counter_store,
        config.rate_limit_requests,
        config.rate_limit_window(),
        config.rate_limit_timeout(),
    ));

    let repository = Arc::new(InMemoryUrlRepository::new());
    let link_service = Arc::new(LinkService::new(
        repository,
        cipher,
        config.base_url.clone(),
    ));

    Ok(AppState::new(link_service, rate_limiter, config.behind_proxy))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - State construction fails (see [`build_state`])
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;
    let link_service = state.link_service.clone();

    if !state.rate_limiter.health_check().await {
        tracing::warn!("Counter service not responding, requests will be rejected until it recovers");
    }
    tracing::info!(
        limit = state.rate_limiter.limit(),
        window_secs = state.rate_limiter.window().as_secs(),
        distributed = config.is_distributed_limiting(),
        "Rate limiter ready"
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!(
        links = link_service.link_count(),
        "Server stopped, in-memory links discarded"
    );

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
