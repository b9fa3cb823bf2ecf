//! Short link returned to clients after a successful shorten request.

/// A freshly created short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    /// The generated short code.
    pub code: String,
    /// Public URL that redirects to the original, e.g. `http://localhost:8080/aZ09xY`.
    pub short_url: String,
}

impl ShortLink {
    /// Builds a short link by joining `base_url` and `code`.
    ///
    /// A trailing slash on `base_url` is ignored.
    pub fn new(code: String, base_url: &str) -> Self {
        let short_url = format!("{}/{}", base_url.trim_end_matches('/'), code);
        Self { code, short_url }
    }
}
