//! DTOs for the shorten endpoint.

use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::domain::entities::ShortLink;

/// Query string of `GET /shorten`.
///
/// `url` stays optional here so a missing parameter reaches the service's
/// validation and gets its own message instead of a generic rejection.
/// The query is read as raw pairs, so a repeated `url` takes its first value
/// and unknown parameters are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct ShortenQuery {
    pub url: Option<String>,
}

impl From<Vec<(String, String)>> for ShortenQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let url = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "url").then_some(value));

        Self { url }
    }
}

/// Plain-text body returned for a created link.
#[derive(Debug)]
pub struct ShortenResponse {
    pub short_url: String,
}

impl From<ShortLink> for ShortenResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            short_url: link.short_url,
        }
    }
}

impl IntoResponse for ShortenResponse {
    fn into_response(self) -> Response {
        format!("The shortened url is: {}", self.short_url).into_response()
    }
}
