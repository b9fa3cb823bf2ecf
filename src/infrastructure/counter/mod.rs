//! Counter stores backing the rate limiter.
//!
//! - [`RedisCounterStore`] - Redis, consistent across server instances
//! - [`InMemoryCounterStore`] - Process-local fallback when Redis is not configured

mod memory_counter;
mod redis_counter;

pub use memory_counter::InMemoryCounterStore;
pub use redis_counter::{CounterStatus, RedisCounterStore};
