//! Handler for link shortening endpoint.

use axum::extract::{Query, State};

use crate::api::dto::shorten::{ShortenQuery, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens the URL passed in the query string.
///
/// # Endpoint
///
/// `GET /shorten?url=<long url>`
///
/// # Response
///
/// `200 OK` with a plain-text body:
///
/// ```text
/// The shortened url is: http://localhost:8080/aZ09xY
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing or empty, or does not start
/// with `http://` or `https://`.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Query(query): Query<ShortenQuery>,
) -> Result<ShortenResponse, AppError> {
    let long_url = query.url.unwrap_or_default();

    let link = state.link_service.shorten(&long_url)?;

    Ok(link.into())
}
