//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /shorten?url=` - Create a short link
//! - `GET /{code}`       - Redirect to the original URL
//! - anything else       - 404
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-client fixed window, applied to every request
//!   including unmatched paths, before any handler logic

use crate::api::handlers::{fallback_handler, redirect_handler, shorten_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/shorten", get(shorten_handler))
        .route("/{code}", get(redirect_handler))
        .fallback(fallback_handler)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::layer,
        ))
        .with_state(state)
        .layer(tracing::layer())
}
