//! In-process counter store for single-instance deployments.

use crate::domain::repositories::{CounterError, CounterStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

const CLEANUP_INTERVAL: Duration = Duration::from_secs(300);

struct Window {
    count: u64,
    expires_at: Instant,
}

struct State {
    windows: HashMap<String, Window>,
    last_cleanup: Instant,
}

/// Counter store with the same expiry-on-create semantics as the Redis store,
/// kept in process memory.
///
/// Counts are not shared between server processes; use it only when a single
/// instance serves all traffic, or in tests.
pub struct InMemoryCounterStore {
    state: Mutex<State>,
}

impl InMemoryCounterStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                windows: HashMap::new(),
                last_cleanup: Instant::now(),
            }),
        }
    }

    /// Number of tracked counters, including ones not yet swept after expiry.
    #[cfg(test)]
    fn tracked_keys(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .windows
            .len()
    }
}

impl Default for InMemoryCounterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CounterStore for InMemoryCounterStore {
    async fn increment(&self, key: &str, window: Duration) -> Result<u64, CounterError> {
        let now = Instant::now();
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        if now.duration_since(state.last_cleanup) >= CLEANUP_INTERVAL {
            state.windows.retain(|_, w| w.expires_at > now);
            state.last_cleanup = now;
        }

        let entry = state
            .windows
            .entry(key.to_string())
            .or_insert_with(|| Window {
                count: 0,
                expires_at: now + window,
            });

        if entry.expires_at <= now {
            entry.count = 0;
            entry.expires_at = now + window;
        }

        entry.count += 1;
        Ok(entry.count)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
