//! Catalog search.

use crate::clients::{HttpMethod, HttpRequest, InvalidArgumentError};
use crate::endpoints::{SearchParams, SearchType};

/// GET `/search?q=...&type=...`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn search(
    query: &str,
    search_type: SearchType,
    params: &SearchParams,
) -> Result<HttpRequest, InvalidArgumentError> {
    HttpRequest::builder(HttpMethod::Get, "/search")
        .query_param("q", query)
        .query_param("type", search_type)
        .query_params(params)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_sets_query_and_type() {
        let params = SearchParams {
            limit: Some(10),
            offset: Some(0),
            market: None,
        };
        let request = search("radiohead", SearchType::Artist, &params).unwrap();

        assert_eq!(request.path(), "/search");
        assert_eq!(request.query_value("q"), Some("radiohead"));
        assert_eq!(request.query_value("type"), Some("artist"));
        assert_eq!(request.query_value("limit"), Some("10"));
        assert_eq!(request.query_value("offset"), Some("0"));
        assert!(request.query_value("market").is_none());
    }

    #[test]
    fn test_playlist_search_uses_playlist_type() {
        let request = search("focus", SearchType::Playlist, &SearchParams::default()).unwrap();
        assert_eq!(request.query_value("type"), Some("playlist"));
    }

    #[test]
    fn test_default_params_leave_paging_to_server() {
        let request = search("q", SearchType::Track, &SearchParams::default()).unwrap();
        assert!(request.query_value("limit").is_none());
        assert!(request.query_value("offset").is_none());
        assert_eq!(request.query().len(), 2);
    }
}
