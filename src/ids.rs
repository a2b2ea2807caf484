//! Resource identifier normalization.
//!
//! Spotify accepts three spellings for the same entity:
//!
//! - a bare id: `4uLU6hMCjMI75M1A2tKUQC`
//! - a URI: `spotify:track:4uLU6hMCjMI75M1A2tKUQC`
//! - a URL: `https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC`
//!
//! Every endpoint normalizes its id arguments through [`normalize_id`] so that
//! callers can pass whichever form they have at hand.
//!
//! # Example
//!
//! ```rust
//! use spotify_api::ids::{normalize_id, normalize_uri, ResourceType};
//!
//! assert_eq!(normalize_id(ResourceType::Track, "spotify:track:abc123"), "abc123");
//! assert_eq!(normalize_uri(ResourceType::Track, "abc123"), "spotify:track:abc123");
//! ```

use std::fmt;

/// The kind of entity an identifier refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceType {
    /// A track.
    Track,
    /// An album.
    Album,
    /// An artist.
    Artist,
    /// A playlist.
    Playlist,
    /// A user profile.
    User,
    /// A podcast show.
    Show,
    /// A podcast episode.
    Episode,
}

impl ResourceType {
    /// Returns the lowercase type tag used in URIs and URLs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Track => "track",
            Self::Album => "album",
            Self::Artist => "artist",
            Self::Playlist => "playlist",
            Self::User => "user",
            Self::Show => "show",
            Self::Episode => "episode",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of parsing a raw identifier.
///
/// `found_type` is the type tag embedded in a URI or URL form, or `None`
/// when the input was already a bare id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedId<'a> {
    /// The type the caller expected.
    pub expected: ResourceType,
    /// The extracted bare id.
    pub id: &'a str,
    /// The type tag found in the input, if any.
    pub found_type: Option<&'a str>,
}

impl<'a> ParsedId<'a> {
    /// Returns the embedded type tag when it disagrees with the expected type.
    #[must_use]
    pub fn type_mismatch(&self) -> Option<&'a str> {
        self.found_type
            .filter(|found| *found != self.expected.as_str())
    }
}

/// Splits `raw` into its id and embedded type tag.
///
/// Colon-delimited forms are tried first, then slash-delimited forms; anything
/// with fewer than three segments is treated as a bare id. This never fails.
#[must_use]
pub fn parse_id(expected: ResourceType, raw: &str) -> ParsedId<'_> {
    let (id, found_type) = match (split_tail(raw, ':'), split_tail(raw, '/')) {
        (Some((kind, id)), _) | (None, Some((kind, id))) => (id, Some(kind)),
        (None, None) => (raw, None),
    };

    ParsedId {
        expected,
        id,
        found_type,
    }
}

/// Returns the trailing `(type, id)` pair when `raw` has at least three
/// `sep`-delimited segments.
fn split_tail(raw: &str, sep: char) -> Option<(&str, &str)> {
    let mut segments = raw.rsplit(sep);
    let id = segments.next()?;
    let kind = segments.next()?;
    segments.next()?;
    Some((kind, id))
}

/// Extracts the bare id from a bare id, URI or URL.
///
/// A type mismatch (e.g. an album URI passed where a track is expected) is
/// logged at debug level and otherwise ignored.
#[must_use]
pub fn normalize_id(expected: ResourceType, raw: &str) -> &str {
    let parsed = parse_id(expected, raw);
    if let Some(found) = parsed.type_mismatch() {
        tracing::debug!(
            "expected id of type {} but found type {} {}",
            expected,
            found,
            raw
        );
    }
    parsed.id
}

/// Builds the canonical `spotify:{type}:{id}` URI for an identifier.
///
/// The input goes through [`normalize_id`] first, so passing a URI that is
/// already canonical yields the same URI.
#[must_use]
pub fn normalize_uri(expected: ResourceType, raw: &str) -> String {
    format!("spotify:{}:{}", expected, normalize_id(expected, raw))
}

/// Normalizes every id and joins them with commas for an `ids` parameter.
#[must_use]
pub fn join_ids<S: AsRef<str>>(expected: ResourceType, ids: &[S]) -> String {
    ids.iter()
        .map(|raw| normalize_id(expected, raw.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}
