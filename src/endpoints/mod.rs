//! Request shaping for every Web API operation.
//!
//! Each function in this module turns typed arguments into exactly one
//! [`HttpRequest`]. Nothing here performs I/O: the
//! [`Spotify`](crate::Spotify) facade hands the result to the transport.
//! Invalid argument combinations are rejected with
//! [`InvalidArgumentError`] before a request exists.
//!
//! # Example
//!
//! ```rust
//! use spotify_api::clients::HttpMethod;
//! use spotify_api::endpoints::tracks;
//!
//! let request = tracks::tracks(&["spotify:track:a", "b"], Some("SE")).unwrap();
//!
//! assert_eq!(request.method(), HttpMethod::Get);
//! assert_eq!(request.path(), "/tracks");
//! assert_eq!(request.query_value("ids"), Some("a,b"));
//! assert_eq!(request.query_value("market"), Some("SE"));
//! ```

pub mod albums;
pub mod artists;
pub mod audio;
pub mod browse;
pub mod me;
pub mod params;
pub mod playlists;
pub mod recommendations;
pub mod search;
pub mod tracks;
pub mod users;

use std::borrow::Cow;

use crate::clients::InvalidArgumentError;
use crate::ids::{join_ids, ResourceType};

pub use params::{
    AlbumType, ArtistAlbumsParams, BrowseParams, CategoriesParams, FeaturedPlaylistsParams,
    PageParams, PlaylistDetails, PlaylistTracksParams, RecommendationsParams, RemovalMode,
    SearchParams, SearchType, TimeRange, TopItemsParams, TrackPositions, TrackRemoval, Tuneable,
    TuneableAttributes,
};

/// Percent-encodes caller-supplied free text for use as a path segment.
pub(crate) fn segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

/// Normalizes a non-empty id list and joins it with commas.
pub(crate) fn required_ids<S: AsRef<str>>(
    expected: ResourceType,
    parameter: &'static str,
    ids: &[S],
) -> Result<String, InvalidArgumentError> {
    if ids.is_empty() {
        return Err(InvalidArgumentError::EmptyIds { parameter });
    }
    Ok(join_ids(expected, ids))
}
