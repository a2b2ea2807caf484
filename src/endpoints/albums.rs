//! Album lookups.

use crate::clients::{HttpMethod, HttpRequest, InvalidArgumentError};
use crate::endpoints::{required_ids, PageParams};
use crate::ids::{normalize_id, ResourceType};

/// GET `/albums/{id}`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn album(album_id: &str) -> Result<HttpRequest, InvalidArgumentError> {
    let id = normalize_id(ResourceType::Album, album_id);
    HttpRequest::builder(HttpMethod::Get, format!("/albums/{id}")).build()
}

/// GET `/albums/{id}/tracks`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn album_tracks(album_id: &str, page: PageParams) -> Result<HttpRequest, InvalidArgumentError> {
    let id = normalize_id(ResourceType::Album, album_id);
    HttpRequest::builder(HttpMethod::Get, format!("/albums/{id}/tracks"))
        .query_params(&page)
        .build()
}

/// GET `/albums?ids=...`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::EmptyIds`] if `album_ids` is empty.
pub fn albums<S: AsRef<str>>(album_ids: &[S]) -> Result<HttpRequest, InvalidArgumentError> {
    let ids = required_ids(ResourceType::Album, "album_ids", album_ids)?;
    HttpRequest::builder(HttpMethod::Get, "/albums")
        .query_param("ids", ids)
        .build()
}
