//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_valid_code};
use crate::utils::url_cipher::UrlCipher;

pub const MISSING_URL_MESSAGE: &str = "URL parameter in query is required";
pub const INVALID_SCHEME_MESSAGE: &str = "URL parameter must have the value https:// or http://";
pub const NOT_FOUND_MESSAGE: &str = "This url does not exist in our project";

/// Service for shortening URLs and resolving short codes.
///
/// URLs are encrypted before they reach the repository and decrypted on the
/// way out, so the repository only ever sees opaque payloads.
pub struct LinkService<R: UrlRepository> {
    repository: Arc<R>,
    cipher: UrlCipher,
    base_url: String,
}

impl<R: UrlRepository> LinkService<R> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public prefix of generated short URLs, e.g.
    /// `http://localhost:8080`.
    pub fn new(repository: Arc<R>, cipher: UrlCipher, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            cipher,
            base_url: base_url.into(),
        }
    }

    /// Validates, encrypts and stores `long_url` under a fresh short code.
    ///
    /// The generated code is not checked against existing ones; a collision
    /// overwrites the older link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or does not start
    /// with `http://` or `https://`. Returns [`AppError::Internal`] if the
    /// random source fails during encryption.
    pub fn shorten(&self, long_url: &str) -> Result<ShortLink, AppError> {
        validate_long_url(long_url)?;

        let payload = self.cipher.encrypt(long_url)?;
        let code = generate_code();
        self.repository.put(code.clone(), payload);

        let link = ShortLink {
            short_url: self.short_url(&code),
            code,
        };
        metrics::counter!("shortener_links_created_total").increment(1);
        tracing::info!(code = %link.code, short_url = %link.short_url, "URL shortened");
        tracing::debug!(code = %link.code, original_url = %long_url, "Shortened URL target");

        Ok(link)
    }

    /// Resolves a short code to its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link is stored under `code`.
    /// Returns [`AppError::Internal`] if the stored payload cannot be
    /// decrypted.
    pub fn resolve(&self, code: &str) -> Result<String, AppError> {
        let Some(payload) = self.repository.get(code) else {
            tracing::warn!(
                code = %code,
                well_formed = is_valid_code(code),
                "Short code not found"
            );
            return Err(AppError::not_found(NOT_FOUND_MESSAGE));
        };

        let long_url = self.cipher.decrypt(&payload)?;
        metrics::counter!("shortener_redirects_total").increment(1);
        tracing::info!(code = %code, "Redirecting to original URL");

        Ok(long_url)
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        ShortLink::new(code.to_string(), &self.base_url).short_url
    }

    /// Number of links currently stored.
    pub fn link_count(&self) -> usize {
        self.repository.len()
    }
}

/// Checks that a URL is present and uses an HTTP(S) scheme.
///
/// Only the prefix is inspected; the rest of the URL is stored as given.
pub fn validate_long_url(long_url: &str) -> Result<(), AppError> {
    if long_url.is_empty() {
        tracing::warn!("Missing URL parameter in request");
        return Err(AppError::bad_request(MISSING_URL_MESSAGE));
    }

    if !(long_url.starts_with("https://") || long_url.starts_with("http://")) {
        tracing::warn!(length = long_url.len(), "Invalid URL scheme");
        return Err(AppError::bad_request(INVALID_SCHEME_MESSAGE));
    }

    Ok(())
}
