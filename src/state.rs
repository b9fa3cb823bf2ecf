//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::application::services::{LinkService, RateLimiter};
use crate::infrastructure::persistence::InMemoryUrlRepository;

/// Handles to the services built once at startup.
///
/// Cloning is cheap: every field is reference counted or `Copy`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryUrlRepository>>,
    pub rate_limiter: Arc<RateLimiter>,
    /// Read the client address from forwarding headers.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService<InMemoryUrlRepository>>,
        rate_limiter: Arc<RateLimiter>,
        behind_proxy: bool,
    ) -> Self {
        Self {
            link_service,
            rate_limiter,
            behind_proxy,
        }
    }
}
