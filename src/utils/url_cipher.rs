//! Symmetric encryption of stored URLs.
//!
//! URLs are encrypted with AES-256 in CTR mode. Each call draws a fresh
//! 16-byte IV from the operating system, so encrypting the same URL twice
//! never yields the same payload. The payload layout is
//! `hex(IV || ciphertext)`.

use aes::Aes256;
use ctr::Ctr128BE;
use ctr::cipher::{KeyIvInit, StreamCipher};
use thiserror::Error;

use crate::domain::entities::EncryptedUrl;

type Aes256Ctr = Ctr128BE<Aes256>;

/// Required key length in bytes (AES-256).
pub const KEY_LENGTH: usize = 32;

/// IV length in bytes, equal to the AES block size.
pub const IV_LENGTH: usize = 16;

/// Errors raised while building the cipher or processing a payload.
#[derive(Debug, Error)]
pub enum CipherError {
    #[error("encryption key must be {KEY_LENGTH} bytes, got {0}")]
    InvalidKeyLength(usize),

    #[error("random source unavailable: {0}")]
    RandomSource(String),

    #[error("payload is not valid hex: {0}")]
    InvalidEncoding(String),

    #[error("payload is {0} bytes, shorter than the {IV_LENGTH}-byte IV")]
    Truncated(usize),

    #[error("decrypted payload is not valid UTF-8")]
    InvalidPlaintext,
}

/// Encrypts and decrypts URLs with a key fixed for the lifetime of the process.
#[derive(Clone)]
pub struct UrlCipher {
    key: [u8; KEY_LENGTH],
}

impl UrlCipher {
    /// Builds a cipher from raw key material.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKeyLength`] unless `key` is exactly
    /// [`KEY_LENGTH`] bytes.
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        let key: [u8; KEY_LENGTH] = key
            .try_into()
            .map_err(|_| CipherError::InvalidKeyLength(key.len()))?;

        Ok(Self { key })
    }

    /// Builds a cipher from a hex-encoded key, as stored in configuration.
    pub fn from_hex(key_hex: &str) -> Result<Self, CipherError> {
        let key = hex::decode(key_hex.trim())
            .map_err(|e| CipherError::InvalidEncoding(e.to_string()))?;
        Self::new(&key)
    }

    /// Encrypts a URL under a freshly generated IV.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::RandomSource`] if the OS random source fails.
    pub fn encrypt(&self, plaintext: &str) -> Result<EncryptedUrl, CipherError> {
        let mut iv = [0u8; IV_LENGTH];
        getrandom::fill(&mut iv).map_err(|e| CipherError::RandomSource(e.to_string()))?;

        let mut body = plaintext.as_bytes().to_vec();
        let mut stream = Aes256Ctr::new(&self.key.into(), &iv.into());
        stream.apply_keystream(&mut body);

        let mut buffer = Vec::with_capacity(IV_LENGTH + body.len());
        buffer.extend_from_slice(&iv);
        buffer.extend_from_slice(&body);

        tracing::debug!(original_length = plaintext.len(), "URL encrypted");

        Ok(EncryptedUrl::from_hex_unchecked(hex::encode(buffer)))
    }

    /// Recovers the URL from a payload produced by [`Self::encrypt`].
    ///
    /// # Errors
    ///
    /// Fails when the payload is not hex, is shorter than the IV, or does not
    /// decrypt to UTF-8 (for instance when it was produced under another key).
    pub fn decrypt(&self, payload: &EncryptedUrl) -> Result<String, CipherError> {
        let mut bytes = hex::decode(payload.as_str())
            .map_err(|e| CipherError::InvalidEncoding(e.to_string()))?;

        if bytes.len() < IV_LENGTH {
            return Err(CipherError::Truncated(bytes.len()));
        }

        let mut body = bytes.split_off(IV_LENGTH);
        let iv: [u8; IV_LENGTH] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| CipherError::Truncated(bytes.len()))?;

        let mut stream = Aes256Ctr::new(&self.key.into(), &iv.into());
        stream.apply_keystream(&mut body);

        let plaintext = String::from_utf8(body).map_err(|_| CipherError::InvalidPlaintext)?;
        tracing::debug!(decrypted_length = plaintext.len(), "URL decrypted");

        Ok(plaintext)
    }
}

impl std::fmt::Debug for UrlCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlCipher").field("key", &"***").finish()
    }
}
