//! Browse: featured playlists, new releases and categories.

use crate::clients::{HttpMethod, HttpRequest, InvalidArgumentError};
use crate::endpoints::{segment, BrowseParams, CategoriesParams, FeaturedPlaylistsParams};

/// GET `/browse/featured-playlists`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn featured_playlists(
    params: &FeaturedPlaylistsParams,
) -> Result<HttpRequest, InvalidArgumentError> {
    HttpRequest::builder(HttpMethod::Get, "/browse/featured-playlists")
        .query_params(params)
        .build()
}

/// GET `/browse/new-releases`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn new_releases(params: &BrowseParams) -> Result<HttpRequest, InvalidArgumentError> {
    HttpRequest::builder(HttpMethod::Get, "/browse/new-releases")
        .query_params(params)
        .build()
}

/// GET `/browse/categories`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn categories(params: &CategoriesParams) -> Result<HttpRequest, InvalidArgumentError> {
    HttpRequest::builder(HttpMethod::Get, "/browse/categories")
        .query_params(params)
        .build()
}

/// GET `/browse/categories/{category}/playlists`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn category_playlists(
    category_id: &str,
    params: &BrowseParams,
) -> Result<HttpRequest, InvalidArgumentError> {
    HttpRequest::builder(
        HttpMethod::Get,
        format!("/browse/categories/{}/playlists", segment(category_id)),
    )
    .query_params(params)
    .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_featured_playlists_formats_timestamp() {
        let params = FeaturedPlaylistsParams {
            locale: Some("sv_SE".to_string()),
            timestamp: Some(Utc.with_ymd_and_hms(2014, 10, 23, 9, 0, 0).unwrap()),
            limit: Some(20),
            ..FeaturedPlaylistsParams::default()
        };
        let request = featured_playlists(&params).unwrap();

        assert_eq!(request.path(), "/browse/featured-playlists");
        assert_eq!(request.query_value("locale"), Some("sv_SE"));
        assert_eq!(request.query_value("timestamp"), Some("2014-10-23T09:00:00Z"));
        assert_eq!(request.query_value("limit"), Some("20"));
        assert!(request.query_value("country").is_none());
    }

    #[test]
    fn test_new_releases_and_categories() {
        let params = BrowseParams {
            country: Some("SE".to_string()),
            ..BrowseParams::default()
        };
        let request = new_releases(&params).unwrap();
        assert_eq!(request.path(), "/browse/new-releases");
        assert_eq!(request.query_value("country"), Some("SE"));

        let request = categories(&CategoriesParams::default()).unwrap();
        assert_eq!(request.path(), "/browse/categories");
        assert!(request.query().is_empty());
    }

    #[test]
    fn test_category_playlists_encodes_category() {
        let request = category_playlists("hip hop", &BrowseParams::default()).unwrap();
        assert_eq!(request.path(), "/browse/categories/hip%20hop/playlists");
    }
}
