//! Audio analysis and audio features.

use crate::clients::{HttpMethod, HttpRequest, InvalidArgumentError};
use crate::endpoints::required_ids;
use crate::ids::{normalize_id, ResourceType};

/// Top-level key holding the array returned by the bulk audio features call.
pub const AUDIO_FEATURES_FIELD: &str = "audio_features";

/// GET `/audio-analysis/{id}`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn audio_analysis(track_id: &str) -> Result<HttpRequest, InvalidArgumentError> {
    let id = normalize_id(ResourceType::Track, track_id);
    HttpRequest::builder(HttpMethod::Get, format!("/audio-analysis/{id}")).build()
}

/// GET `/audio-features/{id}` for a single track.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn audio_feature(track_id: &str) -> Result<HttpRequest, InvalidArgumentError> {
    let id = normalize_id(ResourceType::Track, track_id);
    HttpRequest::builder(HttpMethod::Get, format!("/audio-features/{id}")).build()
}

/// GET `/audio-features?ids=...`.
///
/// The response wraps the features in [`AUDIO_FEATURES_FIELD`].
///
/// # Errors
///
/// Returns [`InvalidArgumentError::EmptyIds`] if `track_ids` is empty.
pub fn audio_features<S: AsRef<str>>(track_ids: &[S]) -> Result<HttpRequest, InvalidArgumentError> {
    let ids = required_ids(ResourceType::Track, "track_ids", track_ids)?;
    HttpRequest::builder(HttpMethod::Get, "/audio-features")
        .query_param("ids", ids)
        .build()
}
