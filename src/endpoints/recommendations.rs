//! Recommendations and genre seeds.

use crate::clients::{HttpMethod, HttpRequest, InvalidArgumentError};
use crate::endpoints::RecommendationsParams;
use crate::ids::{join_ids, ResourceType};

/// GET `/recommendations`.
///
/// Seed lists are omitted when empty. The number of seeds is not checked
/// locally; the API rejects out-of-range combinations.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn recommendations(params: &RecommendationsParams) -> Result<HttpRequest, InvalidArgumentError> {
    let mut builder = HttpRequest::builder(HttpMethod::Get, "/recommendations")
        .query_opt("limit", params.limit)
        .query_opt("market", params.market.as_deref());

    if !params.seed_artists.is_empty() {
        builder = builder.query_param(
            "seed_artists",
            join_ids(ResourceType::Artist, &params.seed_artists),
        );
    }
    if !params.seed_genres.is_empty() {
        builder = builder.query_param("seed_genres", params.seed_genres.join(","));
    }
    if !params.seed_tracks.is_empty() {
        builder = builder.query_param(
            "seed_tracks",
            join_ids(ResourceType::Track, &params.seed_tracks),
        );
    }

    for (key, value) in params.attributes.query_pairs() {
        builder = builder.query_param(key, value);
    }

    builder.build()
}

/// GET `/recommendations/available-genre-seeds`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if the request fails validation.
pub fn recommendation_genre_seeds() -> Result<HttpRequest, InvalidArgumentError> {
    HttpRequest::builder(HttpMethod::Get, "/recommendations/available-genre-seeds").build()
}
