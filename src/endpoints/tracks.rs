//! Track lookups.

use crate::clients::{HttpMethod, HttpRequest, InvalidArgumentError};
use crate::endpoints::required_ids;
use crate::ids::{normalize_id, ResourceType};

/// GET `/tracks/{id}`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn track(track_id: &str) -> Result<HttpRequest, InvalidArgumentError> {
    let id = normalize_id(ResourceType::Track, track_id);
    HttpRequest::builder(HttpMethod::Get, format!("/tracks/{id}")).build()
}

/// GET `/tracks?ids=...`, optionally restricted to a market.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::EmptyIds`] if `track_ids` is empty.
pub fn tracks<S: AsRef<str>>(
    track_ids: &[S],
    market: Option<&str>,
) -> Result<HttpRequest, InvalidArgumentError> {
    let ids = required_ids(ResourceType::Track, "track_ids", track_ids)?;
    HttpRequest::builder(HttpMethod::Get, "/tracks")
        .query_param("ids", ids)
        .query_opt("market", market)
        .build()
}
