//! Repository trait for short code to encrypted URL mappings.

use crate::domain::entities::EncryptedUrl;

/// Storage for short links.
///
/// Implementations must be safe to share between request tasks. Writes to an
/// existing code overwrite the previous payload; there is no collision
/// detection and no expiry.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait UrlRepository: Send + Sync {
    /// Inserts or overwrites the payload stored under `code`.
    fn put(&self, code: String, payload: EncryptedUrl);

    /// Returns the payload stored under `code`, if any.
    fn get(&self, code: &str) -> Option<EncryptedUrl>;

    /// Number of stored links.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
