//! Utility functions for code generation, encryption, and request handling.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_cipher`] - AES-256-CTR encryption of stored URLs
//! - [`client_ip`] - Client address extraction for rate limiting

pub mod client_ip;
pub mod code_generator;
pub mod url_cipher;
