//! Infrastructure layer for storage and external services.
//!
//! Implements the traits defined by the domain layer.
//!
//! - [`counter`] - Rate-limit counter stores (Redis and in-process)
//! - [`persistence`] - Link storage

pub mod counter;
pub mod persistence;
