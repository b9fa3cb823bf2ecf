//! Client address extraction for rate limiting.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Key used when no address can be determined for a request.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Resolves the rate-limit key for a request.
///
/// The peer socket address is used by default. When `behind_proxy` is set,
/// the first entry of `X-Forwarded-For` wins, then `X-Real-IP`, then the
/// peer address. Enable it only behind a trusted reverse proxy, otherwise
/// clients can pick their own key.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert("x-forwarded-for", "203.0.113.7, 10.0.0.1".parse().unwrap());
///
/// assert_eq!(client_key(&headers, None, true), "203.0.113.7");
/// assert_eq!(client_key(&headers, None, false), "unknown");
/// ```
pub fn client_key(headers: &HeaderMap, peer: Option<SocketAddr>, behind_proxy: bool) -> String {
    if behind_proxy && let Some(ip) = forwarded_ip(headers) {
        return ip;
    }

    peer.map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    let forwarded_for = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    let real_ip = || {
        headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    forwarded_for.or_else(real_ip).map(str::to_string)
}
