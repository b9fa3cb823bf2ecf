//! # URL Shortener
//!
//! Maps long URLs to 6-character codes and redirects codes back to the
//! original URL. Stored URLs are encrypted at rest with AES-256-CTR and every
//! request passes a per-client fixed-window rate limiter whose counters live
//! in Redis, so limits hold across server instances.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Link service and rate limiter
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory link store, counter stores
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export ENCRYPTION_KEY="$(cargo run -q --bin admin -- key generate --raw)"
//! export REDIS_URL="redis://localhost:6379"  # Optional, required for multiple instances
//!
//! cargo run
//!
//! curl 'http://localhost:8080/shorten?url=https://example.com'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, RateLimiter};
    pub use crate::domain::entities::{EncryptedUrl, ShortLink};
    pub use crate::domain::repositories::{CounterStore, UrlRepository};
    pub use crate::error::AppError;
    pub use crate::infrastructure::counter::{InMemoryCounterStore, RedisCounterStore};
    pub use crate::infrastructure::persistence::InMemoryUrlRepository;
    pub use crate::state::AppState;
    pub use crate::utils::url_cipher::UrlCipher;
}
