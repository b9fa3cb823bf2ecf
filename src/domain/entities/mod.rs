//! Core domain entities.
//!
//! - [`EncryptedUrl`] - A URL as it is kept in the store
//! - [`ShortLink`] - A short code together with its public URL

pub mod encrypted_url;
pub mod link;

pub use encrypted_url::EncryptedUrl;
pub use link::ShortLink;
