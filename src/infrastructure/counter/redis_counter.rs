//! Redis-backed counter store.

use crate::domain::repositories::{CounterError, CounterStore};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, Script, aio::ConnectionManager};
use std::time::Duration;
use tracing::{debug, info};

/// Increments the key and arms its expiry only when the increment created it.
///
/// Running both steps in one script keeps them atomic on the server, so a key
/// can never be left without a TTL.
const INCREMENT_SCRIPT: &str = r"
local current = redis.call('INCR', KEYS[1])
if current == 1 then
    redis.call('PEXPIRE', KEYS[1], ARGV[1])
end
return current
";

/// Snapshot of one client's counter, as reported by [`RedisCounterStore::status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterStatus {
    pub count: Option<u64>,
    /// Remaining time to live; `None` when the key does not exist.
    pub ttl: Option<Duration>,
}

/// Rate-limit counters shared by every server instance through Redis.
///
/// Uses `ConnectionManager` for automatic reconnection and connection reuse.
pub struct RedisCounterStore {
    client: ConnectionManager,
    script: Script,
    key_prefix: String,
}

impl RedisCounterStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> Result<Self, CounterError> {
        info!("Connecting to Redis counter service");

        let client = Client::open(redis_url).map_err(|e| {
            CounterError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CounterError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CounterError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            script: Script::new(INCREMENT_SCRIPT),
            key_prefix: "ratelimit:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }

    /// Reads the current count and remaining window of a client's counter.
    pub async fn status(&self, key: &str) -> Result<CounterStatus, CounterError> {
        let key = self.build_key(key);
        let mut conn = self.client.clone();

        let count: Option<u64> = conn
            .get(&key)
            .await
            .map_err(|e| CounterError::Operation(e.to_string()))?;
        let pttl: i64 = conn
            .pttl(&key)
            .await
            .map_err(|e| CounterError::Operation(e.to_string()))?;

        // PTTL is -2 for a missing key and -1 for a key without expiry.
        let ttl = u64::try_from(pttl).ok().map(Duration::from_millis);

        Ok(CounterStatus { count, ttl })
    }

    /// Deletes a client's counter, returning whether it existed.
    pub async fn reset(&self, key: &str) -> Result<bool, CounterError> {
        let key = self.build_key(key);
        let mut conn = self.client.clone();

        let deleted: i64 = conn
            .del(&key)
            .await
            .map_err(|e| CounterError::Operation(e.to_string()))?;

        Ok(deleted > 0)
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    async fn increment(&self, key: &str, window: Duration) -> Result<u64, CounterError> {
        let key = self.build_key(key);
        let mut conn = self.client.clone();
        let window_ms = window.as_millis().max(1) as u64;

        let count: u64 = self
            .script
            .key(&key)
            .arg(window_ms)
            .invoke_async(&mut conn)
            .await
            .map_err(|e| CounterError::Operation(format!("INCR {} failed: {}", key, e)))?;

        debug!("Counter {} -> {}", key, count);
        Ok(count)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
