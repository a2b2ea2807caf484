//! Parameter types for endpoint functions.
//!
//! Query parameter structs derive `Serialize`; `None` fields are skipped and
//! list fields are joined with commas when the request is built.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::clients::InvalidArgumentError;
use crate::ids::{normalize_uri, ResourceType};

/// Offset pagination shared by list endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PageParams {
    /// Maximum number of items to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Index of the first item to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl PageParams {
    /// Creates pagination parameters with both values set.
    #[must_use]
    pub const fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }
}

/// Album groups accepted by the artist albums endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlbumType {
    /// Full-length albums.
    Album,
    /// Singles and EPs.
    Single,
    /// Albums the artist appears on.
    AppearsOn,
    /// Compilations.
    Compilation,
}

/// Parameters for listing an artist's albums.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ArtistAlbumsParams {
    /// Restrict results to these album groups.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub album_type: Vec<AlbumType>,

    /// Limit results to one country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Maximum number of albums to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Index of the first album to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// The kind of item a search returns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Artists.
    Artist,
    /// Albums.
    Album,
    /// Tracks.
    #[default]
    Track,
    /// Playlists.
    Playlist,
}

impl SearchType {
    /// Returns the value sent as the `type` query parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Album => "album",
            Self::Track => "track",
            Self::Playlist => "playlist",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for searching the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Maximum number of items to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Index of the first item to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// An ISO 3166-1 alpha-2 country code or `from_token`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
}

/// Parameters for the featured playlists listing.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FeaturedPlaylistsParams {
    /// Desired language, e.g. `sv_SE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// An ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// The user's local time, used to tailor results to the time of day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Maximum number of items to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Index of the first item to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Country-scoped pagination, used by new releases and category playlists.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BrowseParams {
    /// An ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Maximum number of items to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Index of the first item to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Parameters for listing browse categories.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CategoriesParams {
    /// An ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Desired language, e.g. `es_MX`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Maximum number of items to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Index of the first item to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Parameters for listing a playlist's tracks.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PlaylistTracksParams {
    /// Field filter, e.g. `items(track(name))`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Maximum number of tracks to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Index of the first track to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// An ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
}

/// Time frame over which top items are computed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    /// Roughly the last four weeks.
    ShortTerm,
    /// Roughly the last six months.
    #[default]
    MediumTerm,
    /// Several years of data.
    LongTerm,
}

/// Parameters for the current user's top artists and tracks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TopItemsParams {
    /// Maximum number of items to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Index of the first item to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Time frame; `medium_term` unless set.
    pub time_range: TimeRange,
}

/// Playlist attributes to change. Only the fields that are set are sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PlaylistDetails {
    /// New playlist name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the playlist is public.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,

    /// Whether the playlist is collaborative.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborative: Option<bool>,
}

/// A track and the playlist positions it occupies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackPositions {
    /// Track id, URI or URL.
    pub uri: String,
    /// Zero-based positions of the occurrences to remove.
    #[serde(default)]
    pub positions: Vec<u32>,
}

impl TrackPositions {
    /// Creates an entry for `uri` at the given positions.
    #[must_use]
    pub fn new(uri: impl Into<String>, positions: Vec<u32>) -> Self {
        Self {
            uri: uri.into(),
            positions,
        }
    }
}

/// How tracks are removed from a playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemovalMode {
    /// Every occurrence of each track.
    All,
    /// Only the listed positions.
    Specific,
}

impl FromStr for RemovalMode {
    type Err = InvalidArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "specific" => Ok(Self::Specific),
            other => Err(InvalidArgumentError::UnknownRemovalMode {
                mode: other.to_string(),
            }),
        }
    }
}

/// The tracks to remove from a playlist.
///
/// # Example
///
/// ```rust
/// use spotify_api::endpoints::{TrackPositions, TrackRemoval};
///
/// let removal = TrackRemoval::from_mode(
///     "specific",
///     vec![TrackPositions::new("4iV5W9uYEdYUVa79Axb7Rh", vec![2])],
/// )
/// .unwrap();
/// assert!(matches!(removal, TrackRemoval::Specific(_)));
///
/// assert!(TrackRemoval::from_mode("some", vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackRemoval {
    /// Remove every occurrence of these tracks.
    All(Vec<String>),
    /// Remove the listed occurrences.
    Specific(Vec<TrackPositions>),
}

impl TrackRemoval {
    /// Builds a removal from a mode name.
    ///
    /// With `"all"` the positions are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::UnknownRemovalMode`] for any mode other
    /// than `"all"` or `"specific"`.
    pub fn from_mode(mode: &str, tracks: Vec<TrackPositions>) -> Result<Self, InvalidArgumentError> {
        Ok(match mode.parse::<RemovalMode>()? {
            RemovalMode::All => Self::All(tracks.into_iter().map(|t| t.uri).collect()),
            RemovalMode::Specific => Self::Specific(tracks),
        })
    }

    /// Returns the removal mode.
    #[must_use]
    pub const fn mode(&self) -> RemovalMode {
        match self {
            Self::All(_) => RemovalMode::All,
            Self::Specific(_) => RemovalMode::Specific,
        }
    }

    /// Builds the `tracks` array of the removal body.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::MissingPositions`] if a specific entry
    /// lists no positions.
    pub(crate) fn to_tracks_value(&self) -> Result<Value, InvalidArgumentError> {
        let tracks: Vec<Value> = match self {
            Self::All(ids) => ids
                .iter()
                .map(|id| json!({ "uri": normalize_uri(ResourceType::Track, id) }))
                .collect(),
            Self::Specific(entries) => entries
                .iter()
                .map(|entry| {
                    if entry.positions.is_empty() {
                        return Err(InvalidArgumentError::MissingPositions {
                            uri: entry.uri.clone(),
                        });
                    }
                    Ok(json!({
                        "uri": normalize_uri(ResourceType::Track, &entry.uri),
                        "positions": entry.positions,
                    }))
                })
                .collect::<Result<Vec<_>, _>>()?,
        };
        Ok(Value::Array(tracks))
    }
}

/// Filter and target values for one tuneable track attribute.
///
/// Each bound that is set is sent as `min_<attribute>`, `max_<attribute>`
/// or `target_<attribute>`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tuneable<T> {
    /// Lower bound.
    pub min: Option<T>,
    /// Upper bound.
    pub max: Option<T>,
    /// Preferred value.
    pub target: Option<T>,
}

impl<T> Tuneable<T> {
    /// Targets a value without bounds.
    #[must_use]
    pub const fn target(value: T) -> Self {
        Self {
            min: None,
            max: None,
            target: Some(value),
        }
    }

    /// Bounds the attribute on both sides.
    #[must_use]
    pub const fn between(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            target: None,
        }
    }
}

impl<T: fmt::Display> Tuneable<T> {
    fn push_pairs(&self, attribute: &str, pairs: &mut Vec<(String, String)>) {
        for (prefix, value) in [("min", &self.min), ("max", &self.max), ("target", &self.target)] {
            if let Some(value) = value {
                pairs.push((format!("{prefix}_{attribute}"), value.to_string()));
            }
        }
    }
}

macro_rules! tuneable_attributes {
    ($($(#[$doc:meta])* $name:ident: $ty:ty),+ $(,)?) => {
        /// Tuneable track attributes for recommendations.
        ///
        /// Only the attributes listed here exist; anything else cannot be
        /// expressed.
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct TuneableAttributes {
            $(
                $(#[$doc])*
                pub $name: Tuneable<$ty>,
            )+
        }

        impl TuneableAttributes {
            /// Returns the `min_`/`max_`/`target_` query pairs that are set.
            #[must_use]
            pub fn query_pairs(&self) -> Vec<(String, String)> {
                let mut pairs = Vec::new();
                $(self.$name.push_pairs(stringify!($name), &mut pairs);)+
                pairs
            }
        }
    };
}

tuneable_attributes! {
    /// Confidence that the track is acoustic, 0.0 to 1.0.
    acousticness: f64,
    /// Suitability for dancing, 0.0 to 1.0.
    danceability: f64,
    /// Track length in milliseconds.
    duration_ms: u32,
    /// Perceived intensity, 0.0 to 1.0.
    energy: f64,
    /// Likelihood of no vocals, 0.0 to 1.0.
    instrumentalness: f64,
    /// Pitch class, 0 (C) to 11 (B).
    key: u8,
    /// Presence of an audience, 0.0 to 1.0.
    liveness: f64,
    /// Overall loudness in decibels.
    loudness: f64,
    /// 1 for major, 0 for minor.
    mode: u8,
    /// Popularity, 0 to 100.
    popularity: u8,
    /// Presence of spoken words, 0.0 to 1.0.
    speechiness: f64,
    /// Tempo in beats per minute.
    tempo: f64,
    /// Estimated beats per bar.
    time_signature: u8,
    /// Musical positiveness, 0.0 to 1.0.
    valence: f64,
}

/// Parameters for the recommendations endpoint.
///
/// Artist and track seeds may be ids, URIs or URLs. Empty seed lists are
/// omitted from the request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationsParams {
    /// Seed artists.
    pub seed_artists: Vec<String>,
    /// Seed genres, sent verbatim.
    pub seed_genres: Vec<String>,
    /// Seed tracks.
    pub seed_tracks: Vec<String>,
    /// Maximum number of tracks to return.
    pub limit: Option<u32>,
    /// Only return tracks playable in this market.
    pub market: Option<String>,
    /// Tuneable attribute filters and targets.
    pub attributes: TuneableAttributes,
}
