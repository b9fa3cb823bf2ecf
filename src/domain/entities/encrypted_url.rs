//! Opaque encrypted URL payload.

use std::fmt;

/// A URL encrypted by [`crate::utils::url_cipher::UrlCipher`].
///
/// Holds the hex encoding of `IV || ciphertext`. Only the cipher produces
/// values of this type in normal operation, which is why a stored payload
/// that fails to decrypt is treated as an integrity error rather than bad
/// user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedUrl(String);

impl EncryptedUrl {
    /// Wraps an already hex-encoded payload without checking it.
    pub fn from_hex_unchecked(hex: String) -> Self {
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EncryptedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let payload = EncryptedUrl::from_hex_unchecked("00ff".to_string());

        assert_eq!(payload.as_str(), "00ff");
        assert_eq!(payload.to_string(), "00ff");
    }
}
