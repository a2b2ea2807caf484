//! The high-level client.
//!
//! [`Spotify`] exposes one async method per Web API operation. Each method
//! shapes its arguments through [`endpoints`](crate::endpoints) and sends the
//! resulting request through a single shared [`HttpClient`]. Operations on the
//! current user live on the [`Me`] view returned by [`Spotify::me`].
//!
//! # Example
//!
//! ```rust,ignore
//! use spotify_api::{AccessToken, Spotify};
//! use spotify_api::endpoints::{PageParams, SearchParams};
//!
//! let spotify = Spotify::with_token(AccessToken::new("BQC...")?)?;
//!
//! let track = spotify.track("spotify:track:4uLU6hMCjMI75M1A2tKUQC").await?;
//! println!("{}", track["name"]);
//!
//! let results = spotify.search_artist("Radiohead", &SearchParams::default()).await?;
//! let mut page = results["artists"].clone();
//! while let Some(next) = spotify.next(&page).await? {
//!     page = next;
//! }
//!
//! let saved = spotify.me().tracks(PageParams::new(20, 0)).await?;
//! ```

use serde_json::Value;

use crate::clients::{
    Direction, HttpClient, HttpError, HttpRequest, InvalidArgumentError, RequestOptions,
};
use crate::config::{AccessToken, SpotifyConfig};
use crate::endpoints::audio::AUDIO_FEATURES_FIELD;
use crate::endpoints::{
    albums, artists, audio, browse, me, playlists, recommendations, search, tracks, users,
    ArtistAlbumsParams, BrowseParams, CategoriesParams, FeaturedPlaylistsParams, PageParams,
    PlaylistDetails, PlaylistTracksParams, RecommendationsParams, SearchParams, SearchType,
    TopItemsParams, TrackPositions, TrackRemoval,
};
use crate::error::ConfigError;

/// Async client for the Spotify Web API.
///
/// Results are returned as loosely typed [`serde_json::Value`]s.
///
/// # Thread Safety
///
/// `Spotify` is `Send + Sync`; share it behind an `Arc` to issue calls from
/// several tasks over one connection pool.
#[derive(Debug)]
pub struct Spotify {
    http: HttpClient,
}

// Verify Spotify is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Spotify>();
    assert_send_sync::<Me<'_>>();
};

impl Spotify {
    /// Creates a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the HTTP client cannot be built.
    pub fn new(config: SpotifyConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            http: HttpClient::new(&config)?,
        })
    }

    /// Creates a client with a fixed access token and default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the HTTP client cannot be built.
    pub fn with_token(token: AccessToken) -> Result<Self, ConfigError> {
        Self::new(SpotifyConfig::builder().access_token(token).build()?)
    }

    /// Wraps an existing transport.
    #[must_use]
    pub const fn from_http_client(http: HttpClient) -> Self {
        Self { http }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http
    }

    /// Returns the current-user view, sharing this client's transport.
    #[must_use]
    pub const fn me(&self) -> Me<'_> {
        Me { http: &self.http }
    }

    async fn send(
        &self,
        request: Result<HttpRequest, InvalidArgumentError>,
    ) -> Result<Value, HttpError> {
        self.http.execute(request?).await
    }

    // Pagination

    /// Fetches the page after a previously returned paged result.
    ///
    /// Returns `Ok(None)` when there is no next page.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn next(&self, page: &Value) -> Result<Option<Value>, HttpError> {
        self.http.advance(page, Direction::Next).await
    }

    /// Fetches the page before a previously returned paged result.
    ///
    /// Returns `Ok(None)` when there is no previous page.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn previous(&self, page: &Value) -> Result<Option<Value>, HttpError> {
        self.http.advance(page, Direction::Previous).await
    }

    // Tracks

    /// Gets a track by id, URI or URL.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn track(&self, track_id: &str) -> Result<Value, HttpError> {
        self.send(tracks::track(track_id)).await
    }

    /// Gets several tracks.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] for an empty id list, or
    /// [`HttpError`] if the request fails.
    pub async fn tracks<S: AsRef<str> + Sync>(
        &self,
        track_ids: &[S],
        market: Option<&str>,
    ) -> Result<Value, HttpError> {
        self.send(tracks::tracks(track_ids, market)).await
    }

    // Artists

    /// Gets an artist by id, URI or URL.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn artist(&self, artist_id: &str) -> Result<Value, HttpError> {
        self.send(artists::artist(artist_id)).await
    }

    /// Gets several artists.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] for an empty id list, or
    /// [`HttpError`] if the request fails.
    pub async fn artists<S: AsRef<str> + Sync>(&self, artist_ids: &[S]) -> Result<Value, HttpError> {
        self.send(artists::artists(artist_ids)).await
    }

    /// Gets an artist's albums.
    ///
    /// Unset `limit` and `offset` are left out of the request, so the
    /// server's own paging defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn artist_albums(
        &self,
        artist_id: &str,
        params: &ArtistAlbumsParams,
    ) -> Result<Value, HttpError> {
        self.send(artists::artist_albums(artist_id, params)).await
    }

    /// Gets an artist's top tracks in `country` (`US` when `None`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn artist_top_tracks(
        &self,
        artist_id: &str,
        country: Option<&str>,
    ) -> Result<Value, HttpError> {
        self.send(artists::artist_top_tracks(artist_id, country)).await
    }

    /// Gets artists similar to an artist.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn artist_related_artists(&self, artist_id: &str) -> Result<Value, HttpError> {
        self.send(artists::artist_related_artists(artist_id)).await
    }

    // Albums

    /// Gets an album by id, URI or URL.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn album(&self, album_id: &str) -> Result<Value, HttpError> {
        self.send(albums::album(album_id)).await
    }

    /// Gets an album's tracks.
    ///
    /// Unset `limit` and `offset` are left out of the request, so the
    /// server's own paging defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn album_tracks(&self, album_id: &str, page: PageParams) -> Result<Value, HttpError> {
        self.send(albums::album_tracks(album_id, page)).await
    }

    /// Gets several albums.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] for an empty id list, or
    /// [`HttpError`] if the request fails.
    pub async fn albums<S: AsRef<str> + Sync>(&self, album_ids: &[S]) -> Result<Value, HttpError> {
        self.send(albums::albums(album_ids)).await
    }

    // Search

    /// Searches the catalog for items of one type.
    ///
    /// Unset `limit` and `offset` are left out of the request, so the
    /// server's own paging defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn search(
        &self,
        query: &str,
        search_type: SearchType,
        params: &SearchParams,
    ) -> Result<Value, HttpError> {
        self.send(search::search(query, search_type, params)).await
    }

    /// Searches for artists.
    ///
    /// Unset `limit` and `offset` are left out of the request, so the
    /// server's own paging defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn search_artist(&self, query: &str, params: &SearchParams) -> Result<Value, HttpError> {
        self.search(query, SearchType::Artist, params).await
    }

    /// Searches for albums.
    ///
    /// Unset `limit` and `offset` are left out of the request, so the
    /// server's own paging defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn search_album(&self, query: &str, params: &SearchParams) -> Result<Value, HttpError> {
        self.search(query, SearchType::Album, params).await
    }

    /// Searches for tracks.
    ///
    /// Unset `limit` and `offset` are left out of the request, so the
    /// server's own paging defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn search_track(&self, query: &str, params: &SearchParams) -> Result<Value, HttpError> {
        self.search(query, SearchType::Track, params).await
    }

    /// Searches for playlists.
    ///
    /// Unset `limit` and `offset` are left out of the request, so the
    /// server's own paging defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn search_playlist(
        &self,
        query: &str,
        params: &SearchParams,
    ) -> Result<Value, HttpError> {
        self.search(query, SearchType::Playlist, params).await
    }

    // Users

    /// Gets a user's public profile.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn user(&self, user_id: &str) -> Result<Value, HttpError> {
        self.send(users::user(user_id)).await
    }

    /// Gets the current user's profile. Same as `me().user()`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn current_user(&self) -> Result<Value, HttpError> {
        self.me().user().await
    }

    /// Gets the current user's playlists. Same as `me().playlists(page)`.
    ///
    /// Unset `limit` and `offset` are left out of the request, so the
    /// server's own paging defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn current_user_playlists(&self, page: PageParams) -> Result<Value, HttpError> {
        self.me().playlists(page).await
    }

    /// Gets a user's playlists.
    ///
    /// Unset `limit` and `offset` are left out of the request, so the
    /// server's own paging defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn user_playlists(&self, user_id: &str, page: PageParams) -> Result<Value, HttpError> {
        self.send(users::user_playlists(user_id, page)).await
    }

    // Playlists

    /// Gets a user's playlist, or their starred playlist when `playlist_id`
    /// is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn user_playlist(
        &self,
        user_id: &str,
        playlist_id: Option<&str>,
        fields: Option<&str>,
    ) -> Result<Value, HttpError> {
        self.send(playlists::user_playlist(user_id, playlist_id, fields))
            .await
    }

    /// Gets the tracks of a user's playlist.
    ///
    /// Unset `limit` and `offset` are left out of the request, so the
    /// server's own paging defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn user_playlist_tracks(
        &self,
        user_id: &str,
        playlist_id: &str,
        params: &PlaylistTracksParams,
    ) -> Result<Value, HttpError> {
        self.send(playlists::user_playlist_tracks(user_id, playlist_id, params))
            .await
    }

    /// Creates a playlist for a user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn user_playlist_create(
        &self,
        user_id: &str,
        name: &str,
        public: bool,
    ) -> Result<Value, HttpError> {
        self.send(playlists::user_playlist_create(user_id, name, public))
            .await
    }

    /// Changes a playlist's name, visibility or collaborative flag.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn user_playlist_change_details(
        &self,
        user_id: &str,
        playlist_id: &str,
        details: &PlaylistDetails,
    ) -> Result<Value, HttpError> {
        self.send(playlists::user_playlist_change_details(
            user_id,
            playlist_id,
            details,
        ))
        .await
    }

    /// Unfollows (deletes) a playlist for a user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn user_playlist_unfollow(
        &self,
        user_id: &str,
        playlist_id: &str,
    ) -> Result<Value, HttpError> {
        self.send(playlists::user_playlist_unfollow(user_id, playlist_id))
            .await
    }

    /// Adds tracks to a playlist, optionally at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] for an empty track list, or
    /// [`HttpError`] if the request fails.
    pub async fn user_playlist_add_tracks<S: AsRef<str> + Sync>(
        &self,
        user_id: &str,
        playlist_id: &str,
        track_ids: &[S],
        position: Option<u32>,
    ) -> Result<Value, HttpError> {
        self.send(playlists::user_playlist_add_tracks(
            user_id,
            playlist_id,
            track_ids,
            position,
        ))
        .await
    }

    /// Replaces every track in a playlist.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn user_playlist_replace_tracks<S: AsRef<str> + Sync>(
        &self,
        user_id: &str,
        playlist_id: &str,
        track_ids: &[S],
    ) -> Result<Value, HttpError> {
        self.send(playlists::user_playlist_replace_tracks(
            user_id,
            playlist_id,
            track_ids,
        ))
        .await
    }

    /// Moves `range_length` tracks starting at `range_start` to before
    /// `insert_before`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn user_playlist_reorder_tracks(
        &self,
        user_id: &str,
        playlist_id: &str,
        range_start: u32,
        insert_before: u32,
        range_length: u32,
        snapshot_id: Option<&str>,
    ) -> Result<Value, HttpError> {
        self.send(playlists::user_playlist_reorder_tracks(
            user_id,
            playlist_id,
            range_start,
            insert_before,
            range_length,
            snapshot_id,
        ))
        .await
    }

    /// Removes tracks from a playlist.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] if a specific entry lists no
    /// positions, or [`HttpError`] if the request fails.
    pub async fn user_playlist_remove_tracks(
        &self,
        user_id: &str,
        playlist_id: &str,
        removal: &TrackRemoval,
        snapshot_id: Option<&str>,
    ) -> Result<Value, HttpError> {
        self.send(playlists::user_playlist_remove_tracks(
            user_id,
            playlist_id,
            removal,
            snapshot_id,
        ))
        .await
    }

    /// Removes tracks using a mode name, `"all"` or `"specific"`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] for any other mode, before any
    /// request is sent, or [`HttpError`] if the request fails.
    pub async fn user_playlist_remove_tracks_by_mode(
        &self,
        user_id: &str,
        playlist_id: &str,
        mode: &str,
        tracks: Vec<TrackPositions>,
        snapshot_id: Option<&str>,
    ) -> Result<Value, HttpError> {
        let removal = TrackRemoval::from_mode(mode, tracks)?;
        self.user_playlist_remove_tracks(user_id, playlist_id, &removal, snapshot_id)
            .await
    }

    /// Removes every occurrence of the given tracks.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn user_playlist_remove_all_occurrences_of_tracks<S: AsRef<str> + Sync>(
        &self,
        user_id: &str,
        playlist_id: &str,
        track_ids: &[S],
        snapshot_id: Option<&str>,
    ) -> Result<Value, HttpError> {
        let removal = TrackRemoval::All(
            track_ids
                .iter()
                .map(|id| id.as_ref().to_string())
                .collect(),
        );
        self.user_playlist_remove_tracks(user_id, playlist_id, &removal, snapshot_id)
            .await
    }

    /// Removes the listed occurrences of tracks.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] if an entry lists no positions,
    /// or [`HttpError`] if the request fails.
    pub async fn user_playlist_remove_specific_occurrences_of_tracks(
        &self,
        user_id: &str,
        playlist_id: &str,
        tracks: Vec<TrackPositions>,
        snapshot_id: Option<&str>,
    ) -> Result<Value, HttpError> {
        let removal = TrackRemoval::Specific(tracks);
        self.user_playlist_remove_tracks(user_id, playlist_id, &removal, snapshot_id)
            .await
    }

    /// Follows a playlist as the current user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn user_playlist_follow_playlist(
        &self,
        owner_id: &str,
        playlist_id: &str,
    ) -> Result<Value, HttpError> {
        self.send(playlists::user_playlist_follow_playlist(owner_id, playlist_id))
            .await
    }

    /// Checks whether the given users follow a playlist.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] for an empty user list, or
    /// [`HttpError`] if the request fails.
    pub async fn user_playlist_is_following<S: AsRef<str> + Sync>(
        &self,
        owner_id: &str,
        playlist_id: &str,
        user_ids: &[S],
    ) -> Result<Value, HttpError> {
        self.send(playlists::user_playlist_is_following(
            owner_id,
            playlist_id,
            user_ids,
        ))
        .await
    }

    // Browse

    /// Gets featured playlists.
    ///
    /// Unset `limit` and `offset` are left out of the request, so the
    /// server's own paging defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn featured_playlists(
        &self,
        params: &FeaturedPlaylistsParams,
    ) -> Result<Value, HttpError> {
        self.send(browse::featured_playlists(params)).await
    }

    /// Gets new album releases.
    ///
    /// Unset `limit` and `offset` are left out of the request, so the
    /// server's own paging defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn new_releases(&self, params: &BrowseParams) -> Result<Value, HttpError> {
        self.send(browse::new_releases(params)).await
    }

    /// Gets browse categories.
    ///
    /// Unset `limit` and `offset` are left out of the request, so the
    /// server's own paging defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn categories(&self, params: &CategoriesParams) -> Result<Value, HttpError> {
        self.send(browse::categories(params)).await
    }

    /// Gets the playlists of a browse category.
    ///
    /// Unset `limit` and `offset` are left out of the request, so the
    /// server's own paging defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn category_playlists(
        &self,
        category_id: &str,
        params: &BrowseParams,
    ) -> Result<Value, HttpError> {
        self.send(browse::category_playlists(category_id, params))
            .await
    }

    // Recommendations

    /// Gets track recommendations for the given seeds.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn recommendations(
        &self,
        params: &RecommendationsParams,
    ) -> Result<Value, HttpError> {
        self.send(recommendations::recommendations(params)).await
    }

    /// Gets the genres usable as recommendation seeds.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn recommendation_genre_seeds(&self) -> Result<Value, HttpError> {
        self.send(recommendations::recommendation_genre_seeds())
            .await
    }

    // Audio

    /// Gets the audio analysis of a track.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn audio_analysis(&self, track_id: &str) -> Result<Value, HttpError> {
        self.send(audio::audio_analysis(track_id)).await
    }

    /// Gets the audio features of one track.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn audio_feature(&self, track_id: &str) -> Result<Value, HttpError> {
        self.send(audio::audio_feature(track_id)).await
    }

    /// Gets the audio features of several tracks as an array.
    ///
    /// A response without an `audio_features` array yields an empty array.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] for an empty id list, or
    /// [`HttpError`] if the request fails.
    pub async fn audio_features<S: AsRef<str> + Sync>(
        &self,
        track_ids: &[S],
    ) -> Result<Value, HttpError> {
        let request = audio::audio_features(track_ids)?;
        let options = RequestOptions::new().extract_field(AUDIO_FEATURES_FIELD);
        let value = self.http.execute_with(request, options).await?;

        if value.is_array() {
            Ok(value)
        } else {
            Ok(Value::Array(Vec::new()))
        }
    }
}

/// Operations on the current user, borrowed from a [`Spotify`] client.
///
/// `Me` shares the client's transport; it does not open a second session.
#[derive(Clone, Copy, Debug)]
pub struct Me<'a> {
    http: &'a HttpClient,
}

impl Me<'_> {
    async fn send(
        &self,
        request: Result<HttpRequest, InvalidArgumentError>,
    ) -> Result<Value, HttpError> {
        self.http.execute(request?).await
    }

    /// Gets the current user's profile.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn user(&self) -> Result<Value, HttpError> {
        self.send(me::user()).await
    }

    /// Gets the current user's playlists.
    ///
    /// Unset `limit` and `offset` are left out of the request, so the
    /// server's own paging defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn playlists(&self, page: PageParams) -> Result<Value, HttpError> {
        self.send(me::playlists(page)).await
    }

    /// Gets the albums saved in the current user's library.
    ///
    /// Unset `limit` and `offset` are left out of the request, so the
    /// server's own paging defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn albums(&self, page: PageParams) -> Result<Value, HttpError> {
        self.send(me::albums(page)).await
    }

    /// Gets the tracks saved in the current user's library.
    ///
    /// Unset `limit` and `offset` are left out of the request, so the
    /// server's own paging defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn tracks(&self, page: PageParams) -> Result<Value, HttpError> {
        self.send(me::tracks(page)).await
    }

    /// Gets the artists the current user follows.
    ///
    /// `after` is the last artist id of the previous page. An unset `limit`
    /// is left out of the request, so the server's default applies.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn followed_artists(
        &self,
        limit: Option<u32>,
        after: Option<&str>,
    ) -> Result<Value, HttpError> {
        self.send(me::followed_artists(limit, after)).await
    }

    /// Removes tracks from the current user's library.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] for an empty id list, or
    /// [`HttpError`] if the request fails.
    pub async fn delete_tracks<S: AsRef<str> + Sync>(
        &self,
        track_ids: &[S],
    ) -> Result<Value, HttpError> {
        self.send(me::delete_tracks(track_ids)).await
    }

    /// Checks whether tracks are saved in the current user's library.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] for an empty id list, or
    /// [`HttpError`] if the request fails.
    pub async fn contains_tracks<S: AsRef<str> + Sync>(
        &self,
        track_ids: &[S],
    ) -> Result<Value, HttpError> {
        self.send(me::contains_tracks(track_ids)).await
    }

    /// Saves tracks to the current user's library.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] for an empty id list, or
    /// [`HttpError`] if the request fails.
    pub async fn add_tracks<S: AsRef<str> + Sync>(
        &self,
        track_ids: &[S],
    ) -> Result<Value, HttpError> {
        self.send(me::add_tracks(track_ids)).await
    }

    /// Gets the current user's top artists.
    ///
    /// Unset `limit` and `offset` are left out of the request, so the
    /// server's own paging defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn top_artists(&self, params: TopItemsParams) -> Result<Value, HttpError> {
        self.send(me::top_artists(params)).await
    }

    /// Gets the current user's top tracks.
    ///
    /// Unset `limit` and `offset` are left out of the request, so the
    /// server's own paging defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn top_tracks(&self, params: TopItemsParams) -> Result<Value, HttpError> {
        self.send(me::top_tracks(params)).await
    }

    /// Saves albums to the current user's library.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidArgument`] for an empty id list, or
    /// [`HttpError`] if the request fails.
    pub async fn add_albums<S: AsRef<str> + Sync>(
        &self,
        album_ids: &[S],
    ) -> Result<Value, HttpError> {
        self.send(me::add_albums(album_ids)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_me_borrows_the_same_transport() {
        let spotify = Spotify::with_token(AccessToken::new("token").unwrap()).unwrap();
        let me = spotify.me();
        assert!(std::ptr::eq(me.http, spotify.http_client()));
    }

    #[test]
    fn test_with_token_uses_default_base_url() {
        let spotify = Spotify::with_token(AccessToken::new("token").unwrap()).unwrap();
        assert_eq!(spotify.http_client().base_url(), "https://api.spotify.com/v1");
    }

    #[tokio::test]
    async fn test_unknown_removal_mode_fails_before_io() {
        let spotify = Spotify::with_token(AccessToken::new("token").unwrap()).unwrap();
        let result = spotify
            .user_playlist_remove_tracks_by_mode("jane", "p1", "bogus", Vec::new(), None)
            .await;

        assert!(matches!(
            result,
            Err(HttpError::InvalidArgument(
                InvalidArgumentError::UnknownRemovalMode { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn test_empty_id_list_fails_before_io() {
        let spotify = Spotify::with_token(AccessToken::new("token").unwrap()).unwrap();
        let ids: [&str; 0] = [];
        assert!(matches!(
            spotify.tracks(&ids, None).await,
            Err(HttpError::InvalidArgument(_))
        ));
        assert!(matches!(
            spotify.me().add_albums(&ids).await,
            Err(HttpError::InvalidArgument(_))
        ));
    }
}
