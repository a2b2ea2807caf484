//! Public user profiles.

use crate::clients::{HttpMethod, HttpRequest, InvalidArgumentError};
use crate::endpoints::{segment, PageParams};

/// GET `/users/{user}`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn user(user_id: &str) -> Result<HttpRequest, InvalidArgumentError> {
    HttpRequest::builder(HttpMethod::Get, format!("/users/{}", segment(user_id))).build()
}

/// GET `/users/{user}/playlists`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn user_playlists(user_id: &str, page: PageParams) -> Result<HttpRequest, InvalidArgumentError> {
    HttpRequest::builder(
        HttpMethod::Get,
        format!("/users/{}/playlists", segment(user_id)),
    )
    .query_params(&page)
    .build()
}
