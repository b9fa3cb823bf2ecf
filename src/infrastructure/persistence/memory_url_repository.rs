//! In-memory implementation of the URL repository.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::EncryptedUrl;
use crate::domain::repositories::UrlRepository;

/// Process-local link storage.
///
/// A single mutex covers the whole map for both reads and writes. The lock is
/// held only for the map access itself, never across I/O or an `.await`.
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryUrlRepository {
    links: Mutex<HashMap<String, EncryptedUrl>>,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave a half-written entry behind,
    // so a poisoned map is still consistent.
    fn links(&self) -> MutexGuard<'_, HashMap<String, EncryptedUrl>> {
        self.links.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UrlRepository for InMemoryUrlRepository {
    fn put(&self, code: String, payload: EncryptedUrl) {
        if self.links().insert(code.clone(), payload).is_some() {
            tracing::warn!(code = %code, "Short code collision, previous link overwritten");
        }
    }

    fn get(&self, code: &str) -> Option<EncryptedUrl> {
        self.links().get(code).cloned()
    }

    fn len(&self) -> usize {
        self.links().len()
    }
}
