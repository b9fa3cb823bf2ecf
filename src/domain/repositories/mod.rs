//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`
//! for unit tests.
//!
//! - [`UrlRepository`] - Short code to encrypted URL storage
//! - [`CounterStore`] - Atomic counters backing the rate limiter

pub mod counter_store;
pub mod url_repository;

pub use counter_store::{CounterError, CounterStore};
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use counter_store::MockCounterStore;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
