//! Application layer services.
//!
//! Services consume repository traits and give HTTP handlers a small API.
//!
//! - [`services::link_service::LinkService`] - Shortening and resolving links
//! - [`services::rate_limiter::RateLimiter`] - Per-client admission control

pub mod services;
