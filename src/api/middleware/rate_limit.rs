//! Rate limiting middleware backed by the shared counter service.

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_key;

/// Message returned with `429 Too Many Requests`.
pub const RATE_LIMITED_MESSAGE: &str = "too many request";

/// Admits or rejects a request before any routing logic runs.
///
/// # Key Extraction
///
/// Requests are counted per client IP: the socket peer address, or the
/// forwarding headers when the service is configured as `behind_proxy`.
///
/// Requests over the limit, and every request while the counter service is
/// failing, receive `429 Too Many Requests`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/shorten", get(shorten_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), rate_limit::layer));
/// ```
pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let key = client_key(req.headers(), peer, state.behind_proxy);

    if !state.rate_limiter.allow(&key).await {
        return AppError::too_many_requests(RATE_LIMITED_MESSAGE).into_response();
    }

    next.run(req).await
}
