//! User-scoped playlist operations.
//!
//! Every path is addressed through the owning user:
//! `/users/{user}/playlists/{playlist}/...`.

use serde_json::{json, Map, Value};

use crate::clients::{HttpMethod, HttpRequest, InvalidArgumentError};
use crate::endpoints::{segment, PlaylistDetails, PlaylistTracksParams, TrackRemoval};
use crate::ids::{join_ids, normalize_id, normalize_uri, ResourceType};

fn playlist_path(user_id: &str, playlist_id: &str) -> String {
    format!(
        "/users/{}/playlists/{}",
        segment(user_id),
        normalize_id(ResourceType::Playlist, playlist_id)
    )
}

fn track_uris<S: AsRef<str>>(track_ids: &[S]) -> Vec<String> {
    track_ids
        .iter()
        .map(|id| normalize_uri(ResourceType::Track, id.as_ref()))
        .collect()
}

/// GET a user's playlist, or their starred playlist when `playlist_id` is
/// `None`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn user_playlist(
    user_id: &str,
    playlist_id: Option<&str>,
    fields: Option<&str>,
) -> Result<HttpRequest, InvalidArgumentError> {
    let path = match playlist_id {
        Some(playlist_id) => playlist_path(user_id, playlist_id),
        None => format!("/users/{}/starred", segment(user_id)),
    };
    HttpRequest::builder(HttpMethod::Get, path)
        .query_opt("fields", fields)
        .build()
}

/// GET `.../tracks` of a playlist.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn user_playlist_tracks(
    user_id: &str,
    playlist_id: &str,
    params: &PlaylistTracksParams,
) -> Result<HttpRequest, InvalidArgumentError> {
    HttpRequest::builder(
        HttpMethod::Get,
        format!("{}/tracks", playlist_path(user_id, playlist_id)),
    )
    .query_params(params)
    .build()
}

/// POST `/users/{user}/playlists` with `{name, public}`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn user_playlist_create(
    user_id: &str,
    name: &str,
    public: bool,
) -> Result<HttpRequest, InvalidArgumentError> {
    HttpRequest::builder(
        HttpMethod::Post,
        format!("/users/{}/playlists", segment(user_id)),
    )
    .body(json!({ "name": name, "public": public }))
    .build()
}

/// PUT the playlist with only the details that are set.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the details cannot be serialized.
pub fn user_playlist_change_details(
    user_id: &str,
    playlist_id: &str,
    details: &PlaylistDetails,
) -> Result<HttpRequest, InvalidArgumentError> {
    let body = serde_json::to_value(details).map_err(|e| InvalidArgumentError::InvalidParams {
        reason: e.to_string(),
    })?;
    HttpRequest::builder(HttpMethod::Put, playlist_path(user_id, playlist_id))
        .body(body)
        .build()
}

/// DELETE `.../followers`: unfollows (deletes) a playlist.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn user_playlist_unfollow(
    user_id: &str,
    playlist_id: &str,
) -> Result<HttpRequest, InvalidArgumentError> {
    HttpRequest::builder(
        HttpMethod::Delete,
        format!("{}/followers", playlist_path(user_id, playlist_id)),
    )
    .build()
}

/// POST the canonical track URIs to `.../tracks`, optionally at `position`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::EmptyIds`] if `track_ids` is empty.
pub fn user_playlist_add_tracks<S: AsRef<str>>(
    user_id: &str,
    playlist_id: &str,
    track_ids: &[S],
    position: Option<u32>,
) -> Result<HttpRequest, InvalidArgumentError> {
    if track_ids.is_empty() {
        return Err(InvalidArgumentError::EmptyIds {
            parameter: "track_ids",
        });
    }
    HttpRequest::builder(
        HttpMethod::Post,
        format!("{}/tracks", playlist_path(user_id, playlist_id)),
    )
    .query_opt("position", position)
    .body(track_uris(track_ids))
    .build()
}

/// PUT `{"uris": [...]}` to `.../tracks`, replacing every track.
///
/// An empty list clears the playlist.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn user_playlist_replace_tracks<S: AsRef<str>>(
    user_id: &str,
    playlist_id: &str,
    track_ids: &[S],
) -> Result<HttpRequest, InvalidArgumentError> {
    HttpRequest::builder(
        HttpMethod::Put,
        format!("{}/tracks", playlist_path(user_id, playlist_id)),
    )
    .body(json!({ "uris": track_uris(track_ids) }))
    .build()
}

/// PUT a reorder of `range_length` tracks starting at `range_start` to
/// before `insert_before`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn user_playlist_reorder_tracks(
    user_id: &str,
    playlist_id: &str,
    range_start: u32,
    insert_before: u32,
    range_length: u32,
    snapshot_id: Option<&str>,
) -> Result<HttpRequest, InvalidArgumentError> {
    let mut body = Map::new();
    body.insert("range_start".to_string(), json!(range_start));
    body.insert("range_length".to_string(), json!(range_length));
    body.insert("insert_before".to_string(), json!(insert_before));
    if let Some(snapshot_id) = snapshot_id {
        body.insert("snapshot_id".to_string(), json!(snapshot_id));
    }

    HttpRequest::builder(
        HttpMethod::Put,
        format!("{}/tracks", playlist_path(user_id, playlist_id)),
    )
    .body(Value::Object(body))
    .build()
}

/// DELETE tracks from a playlist, either every occurrence or specific
/// positions.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::MissingPositions`] if a specific entry
/// lists no positions.
pub fn user_playlist_remove_tracks(
    user_id: &str,
    playlist_id: &str,
    removal: &TrackRemoval,
    snapshot_id: Option<&str>,
) -> Result<HttpRequest, InvalidArgumentError> {
    let mut body = Map::new();
    body.insert("tracks".to_string(), removal.to_tracks_value()?);
    if let Some(snapshot_id) = snapshot_id {
        body.insert("snapshot_id".to_string(), json!(snapshot_id));
    }

    HttpRequest::builder(
        HttpMethod::Delete,
        format!("{}/tracks", playlist_path(user_id, playlist_id)),
    )
    .body(Value::Object(body))
    .build()
}

/// PUT `.../followers`: the current user follows the playlist.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn user_playlist_follow_playlist(
    owner_id: &str,
    playlist_id: &str,
) -> Result<HttpRequest, InvalidArgumentError> {
    HttpRequest::builder(
        HttpMethod::Put,
        format!("{}/followers", playlist_path(owner_id, playlist_id)),
    )
    .build()
}

/// GET `.../followers/contains?ids=...`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::EmptyIds`] if `user_ids` is empty.
pub fn user_playlist_is_following<S: AsRef<str>>(
    owner_id: &str,
    playlist_id: &str,
    user_ids: &[S],
) -> Result<HttpRequest, InvalidArgumentError> {
    if user_ids.is_empty() {
        return Err(InvalidArgumentError::EmptyIds {
            parameter: "user_ids",
        });
    }
    HttpRequest::builder(
        HttpMethod::Get,
        format!("{}/followers/contains", playlist_path(owner_id, playlist_id)),
    )
    .query_param("ids", join_ids(ResourceType::User, user_ids))
    .build()
}
