//! Artist lookups.

use crate::clients::{HttpMethod, HttpRequest, InvalidArgumentError};
use crate::endpoints::{required_ids, ArtistAlbumsParams};
use crate::ids::{normalize_id, ResourceType};

/// Country used for top tracks when none is given.
pub const DEFAULT_TOP_TRACKS_COUNTRY: &str = "US";

/// GET `/artists/{id}`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn artist(artist_id: &str) -> Result<HttpRequest, InvalidArgumentError> {
    let id = normalize_id(ResourceType::Artist, artist_id);
    HttpRequest::builder(HttpMethod::Get, format!("/artists/{id}")).build()
}

/// GET `/artists?ids=...`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::EmptyIds`] if `artist_ids` is empty.
pub fn artists<S: AsRef<str>>(artist_ids: &[S]) -> Result<HttpRequest, InvalidArgumentError> {
    let ids = required_ids(ResourceType::Artist, "artist_ids", artist_ids)?;
    HttpRequest::builder(HttpMethod::Get, "/artists")
        .query_param("ids", ids)
        .build()
}

/// GET `/artists/{id}/albums`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn artist_albums(
    artist_id: &str,
    params: &ArtistAlbumsParams,
) -> Result<HttpRequest, InvalidArgumentError> {
    let id = normalize_id(ResourceType::Artist, artist_id);
    HttpRequest::builder(HttpMethod::Get, format!("/artists/{id}/albums"))
        .query_params(params)
        .build()
}

/// GET `/artists/{id}/top-tracks?country=...`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn artist_top_tracks(
    artist_id: &str,
    country: Option<&str>,
) -> Result<HttpRequest, InvalidArgumentError> {
    let id = normalize_id(ResourceType::Artist, artist_id);
    HttpRequest::builder(HttpMethod::Get, format!("/artists/{id}/top-tracks"))
        .query_param("country", country.unwrap_or(DEFAULT_TOP_TRACKS_COUNTRY))
        .build()
}

/// GET `/artists/{id}/related-artists`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn artist_related_artists(artist_id: &str) -> Result<HttpRequest, InvalidArgumentError> {
    let id = normalize_id(ResourceType::Artist, artist_id);
    HttpRequest::builder(HttpMethod::Get, format!("/artists/{id}/related-artists")).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::AlbumType;

    #[test]
    fn test_artist_albums_flattens_params() {
        let params = ArtistAlbumsParams {
            album_type: vec![AlbumType::Album, AlbumType::AppearsOn],
            country: Some("SE".to_string()),
            limit: Some(20),
            offset: None,
        };
        let request = artist_albums("spotify:artist:ar1", &params).unwrap();

        assert_eq!(request.path(), "/artists/ar1/albums");
        assert_eq!(request.query_value("album_type"), Some("album,appears_on"));
        assert_eq!(request.query_value("country"), Some("SE"));
        assert_eq!(request.query_value("limit"), Some("20"));
        assert!(request.query_value("offset").is_none());
    }

    #[test]
    fn test_artist_top_tracks_defaults_to_us() {
        let request = artist_top_tracks("ar1", None).unwrap();
        assert_eq!(request.path(), "/artists/ar1/top-tracks");
        assert_eq!(request.query_value("country"), Some("US"));

        let request = artist_top_tracks("ar1", Some("DE")).unwrap();
        assert_eq!(request.query_value("country"), Some("DE"));
    }

    #[test]
    fn test_artist_related_artists_path() {
        let request = artist_related_artists("https://open.spotify.com/artist/ar1").unwrap();
        assert_eq!(request.path(), "/artists/ar1/related-artists");
    }

    #[test]
    fn test_artists_rejects_empty_list() {
        let ids: [&str; 0] = [];
        assert!(artists(&ids).is_err());
    }
}
