//! Short code generation.
//!
//! Codes are 6 characters drawn uniformly from `[a-zA-Z0-9]` using the
//! thread-local CSPRNG. Uniqueness is probabilistic only (62^6 possible
//! codes); callers do not check for collisions.

use rand::Rng;

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 6;

/// Symbols a code is built from.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a random short code.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    let code: String = (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect();

    tracing::debug!(code = %code, "Short code generated");
    code
}

/// Returns `true` if `code` has the shape of a generated code.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        for _ in 0..100 {
            assert_eq!(generate_code().len(), CODE_LENGTH);
        }
    }

    #[test]
    fn test_generate_code_uses_alphabet_only() {
        for _ in 0..1000 {
            let code = generate_code();
            assert!(code.bytes().all(|b| ALPHABET.contains(&b)), "{code}");
        }
    }

    #[test]
    fn test_generate_code_covers_whole_alphabet() {
        let mut seen = HashSet::new();

        for _ in 0..5000 {
            seen.extend(generate_code().bytes());
        }

        assert_eq!(seen.len(), ALPHABET.len());
    }

    #[test]
    fn test_generate_code_produces_distinct_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();

        // 1000 draws from 62^6 collide with probability below 1e-5
        assert!(codes.len() >= 999);
    }

    #[test]
    fn test_alphabet_has_no_duplicates() {
        let unique: HashSet<&u8> = ALPHABET.iter().collect();
        assert_eq!(unique.len(), 62);
    }

    #[test]
    fn test_is_valid_code() {
        assert!(is_valid_code("aZ09xY"));
        assert!(is_valid_code(&generate_code()));

        assert!(!is_valid_code(""));
        assert!(!is_valid_code("abc12"));
        assert!(!is_valid_code("abc1234"));
        assert!(!is_valid_code("abc-12"));
        assert!(!is_valid_code("ab cd1"));
    }
}
