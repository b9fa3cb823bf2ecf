//! Fixed-window rate limiting per client.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::repositories::CounterStore;

/// Admission control counting requests per client key.
///
/// Each call increments the client's counter in the shared [`CounterStore`];
/// the counter's expiry is armed only when the increment creates it, so this
/// is a fixed window. A burst straddling two windows can admit up to twice
/// `limit` requests in a short span.
///
/// Fails closed: a counter-service error or a call slower than `timeout`
/// denies the request.
pub struct RateLimiter {
    store: Arc<dyn CounterStore>,
    limit: u64,
    window: Duration,
    timeout: Duration,
}

impl RateLimiter {
    /// Creates a limiter admitting `limit` requests per `window` for each key.
    ///
    /// `timeout` bounds every call to the counter service.
    pub fn new(
        store: Arc<dyn CounterStore>,
        limit: u64,
        window: Duration,
        timeout: Duration,
    ) -> Self {
        Self {
            store,
            limit,
            window,
            timeout,
        }
    }

    /// Records a request from `key` and returns whether it is admitted.
    pub async fn allow(&self, key: &str) -> bool {
        match tokio::time::timeout(self.timeout, self.store.increment(key, self.window)).await {
            Ok(Ok(count)) if count <= self.limit => true,
            Ok(Ok(count)) => {
                tracing::warn!(client = %key, count, limit = self.limit, "Rate limit exceeded");
                metrics::counter!("shortener_rate_limited_total").increment(1);
                false
            }
            Ok(Err(e)) => {
                tracing::warn!(client = %key, error = %e, "Counter service error, denying request");
                metrics::counter!("shortener_counter_errors_total").increment(1);
                false
            }
            Err(_) => {
                tracing::warn!(
                    client = %key,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Counter service timed out, denying request"
                );
                metrics::counter!("shortener_counter_errors_total").increment(1);
                false
            }
        }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Checks if the counter service is reachable.
    pub async fn health_check(&self) -> bool {
        tokio::time::timeout(self.timeout, self.store.health_check())
            .await
            .unwrap_or(false)
    }
}
