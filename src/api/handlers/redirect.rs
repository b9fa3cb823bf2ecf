//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::application::services::link_service::NOT_FOUND_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the encrypted payload by code
/// 2. Decrypt it
/// 3. Return 302 Found with the original URL in `Location`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
/// Returns 500 Internal Server Error if the stored payload cannot be decrypted.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let long_url = state.link_service.resolve(&code)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location(&long_url))]).into_response())
}

/// Returns 404 for every path without a route.
pub async fn fallback_handler() -> AppError {
    AppError::not_found(NOT_FOUND_MESSAGE)
}

/// Builds a `Location` value, percent-encoding control characters that are
/// not allowed in header values.
fn location(url: &str) -> HeaderValue {
    if let Ok(value) = HeaderValue::from_str(url) {
        return value;
    }

    let mut encoded = String::with_capacity(url.len());
    for c in url.chars() {
        if c.is_ascii_control() {
            encoded.push_str(&format!("%{:02X}", c as u8));
        } else {
            encoded.push(c);
        }
    }

    HeaderValue::from_str(&encoded).unwrap_or_else(|_| HeaderValue::from_static("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_passthrough() {
        assert_eq!(
            location("https://example.com/a?b=c"),
            "https://example.com/a?b=c"
        );
    }

    #[test]
    fn test_location_keeps_non_ascii() {
        let value = location("https://example.com/日本");
        assert_eq!(value.as_bytes(), "https://example.com/日本".as_bytes());
    }

    #[test]
    fn test_location_encodes_control_characters() {
        assert_eq!(
            location("https://example.com/a\r\nSet-Cookie: x"),
            "https://example.com/a%0D%0ASet-Cookie: x"
        );
    }
}
