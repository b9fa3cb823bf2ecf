//! HTTP layer translating requests into link service and rate limiter calls.
//!
//! - [`dto`] - Request/response types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting and tracing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
