//! Shared counter service used by the rate limiter.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Failures talking to the counter service.
#[derive(Debug, Error)]
pub enum CounterError {
    #[error("counter service connection error: {0}")]
    Connection(String),

    #[error("counter service operation error: {0}")]
    Operation(String),
}

/// Atomic increment-with-expiry primitive.
///
/// The rate limiter relies entirely on the implementation's atomicity; it
/// performs no locking of its own. Implementations reachable from several
/// server processes give a globally consistent count.
///
/// # Implementations
///
/// - [`crate::infrastructure::counter::RedisCounterStore`] - Redis, shared between instances
/// - [`crate::infrastructure::counter::InMemoryCounterStore`] - single process only
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Increments the counter for `key` and returns the new value.
    ///
    /// When the increment creates the counter (it did not exist or had
    /// expired), its expiry is set to `window`. Later increments leave the
    /// expiry untouched, which makes the window fixed rather than sliding.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError`] if the service is unreachable or the
    /// operation fails.
    async fn increment(&self, key: &str, window: Duration) -> Result<u64, CounterError>;

    /// Checks if the counter service is reachable.
    async fn health_check(&self) -> bool;
}
