//! Operations on the current user's profile and library.

use crate::clients::{HttpMethod, HttpRequest, InvalidArgumentError};
use crate::endpoints::{required_ids, PageParams, TopItemsParams};
use crate::ids::ResourceType;

/// GET `/me`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn user() -> Result<HttpRequest, InvalidArgumentError> {
    HttpRequest::builder(HttpMethod::Get, "/me").build()
}

/// GET `/me/playlists`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn playlists(page: PageParams) -> Result<HttpRequest, InvalidArgumentError> {
    HttpRequest::builder(HttpMethod::Get, "/me/playlists")
        .query_params(&page)
        .build()
}

/// GET `/me/albums`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn albums(page: PageParams) -> Result<HttpRequest, InvalidArgumentError> {
    HttpRequest::builder(HttpMethod::Get, "/me/albums")
        .query_params(&page)
        .build()
}

/// GET `/me/tracks`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn tracks(page: PageParams) -> Result<HttpRequest, InvalidArgumentError> {
    HttpRequest::builder(HttpMethod::Get, "/me/tracks")
        .query_params(&page)
        .build()
}

/// GET `/me/following?type=artist`, paged by the `after` cursor.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn followed_artists(
    limit: Option<u32>,
    after: Option<&str>,
) -> Result<HttpRequest, InvalidArgumentError> {
    HttpRequest::builder(HttpMethod::Get, "/me/following")
        .query_param("type", "artist")
        .query_opt("limit", limit)
        .query_opt("after", after)
        .build()
}

/// DELETE `/me/tracks?ids=...`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::EmptyIds`] if `track_ids` is empty.
pub fn delete_tracks<S: AsRef<str>>(track_ids: &[S]) -> Result<HttpRequest, InvalidArgumentError> {
    let ids = required_ids(ResourceType::Track, "track_ids", track_ids)?;
    HttpRequest::builder(HttpMethod::Delete, "/me/tracks")
        .query_param("ids", ids)
        .build()
}

/// GET `/me/tracks/contains?ids=...`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::EmptyIds`] if `track_ids` is empty.
pub fn contains_tracks<S: AsRef<str>>(
    track_ids: &[S],
) -> Result<HttpRequest, InvalidArgumentError> {
    let ids = required_ids(ResourceType::Track, "track_ids", track_ids)?;
    HttpRequest::builder(HttpMethod::Get, "/me/tracks/contains")
        .query_param("ids", ids)
        .build()
}

/// PUT `/me/tracks?ids=...`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::EmptyIds`] if `track_ids` is empty.
pub fn add_tracks<S: AsRef<str>>(track_ids: &[S]) -> Result<HttpRequest, InvalidArgumentError> {
    let ids = required_ids(ResourceType::Track, "track_ids", track_ids)?;
    HttpRequest::builder(HttpMethod::Put, "/me/tracks")
        .query_param("ids", ids)
        .build()
}

/// GET `/me/top/artists`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn top_artists(params: TopItemsParams) -> Result<HttpRequest, InvalidArgumentError> {
    HttpRequest::builder(HttpMethod::Get, "/me/top/artists")
        .query_params(&params)
        .build()
}

/// GET `/me/top/tracks`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn top_tracks(params: TopItemsParams) -> Result<HttpRequest, InvalidArgumentError> {
    HttpRequest::builder(HttpMethod::Get, "/me/top/tracks")
        .query_params(&params)
        .build()
}

/// PUT `/me/albums?ids=...`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::EmptyIds`] if `album_ids` is empty.
pub fn add_albums<S: AsRef<str>>(album_ids: &[S]) -> Result<HttpRequest, InvalidArgumentError> {
    let ids = required_ids(ResourceType::Album, "album_ids", album_ids)?;
    HttpRequest::builder(HttpMethod::Put, "/me/albums")
        .query_param("ids", ids)
        .build()
}
