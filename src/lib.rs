//! # Spotify Web API Rust Client
//!
//! An async client for the Spotify Web API, providing type-safe
//! configuration, pluggable bearer-token sources and one method per catalog,
//! library, playlist and recommendation operation.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`SpotifyConfig`] and [`SpotifyConfigBuilder`]
//! - Validated newtypes for tokens, credentials and the base URL
//! - Bearer tokens from a fixed value or any [`TokenSource`], including the
//!   [`ClientCredentials`] grant
//! - Id normalization: bare ids, `spotify:` URIs and `open.spotify.com` URLs
//!   are accepted everywhere an id is expected
//! - Pure request shaping in [`endpoints`], separate from I/O
//! - An async transport with per-call deadlines and typed errors
//! - Pagination helpers that follow the `next` and `previous` links
//!
//! ## Quick Start
//!
//! ```rust
//! use spotify_api::{AccessToken, SpotifyConfig};
//!
//! let config = SpotifyConfig::builder()
//!     .access_token(AccessToken::new("BQC...").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().to_string(), "https://api.spotify.com/v1");
//! ```
//!
//! ## Making Calls
//!
//! ```rust,ignore
//! use spotify_api::{AccessToken, Spotify};
//! use spotify_api::endpoints::{PageParams, TopItemsParams, TimeRange};
//!
//! let spotify = Spotify::with_token(AccessToken::new("BQC...")?)?;
//!
//! let album = spotify.album("https://open.spotify.com/album/6akEvsycLGftJxYudPjmqK").await?;
//! let tracks = spotify.album_tracks("6akEvsycLGftJxYudPjmqK", PageParams::new(50, 0)).await?;
//!
//! let top = spotify
//!     .me()
//!     .top_artists(TopItemsParams {
//!         time_range: TimeRange::ShortTerm,
//!         ..TopItemsParams::default()
//!     })
//!     .await?;
//! ```
//!
//! ## Client Credentials
//!
//! For server-to-server access without a user:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use spotify_api::{ClientCredentials, ClientId, ClientSecret, Spotify, SpotifyConfig};
//!
//! let credentials = ClientCredentials::new(
//!     ClientId::new("client-id")?,
//!     ClientSecret::new("client-secret")?,
//! );
//!
//! let config = SpotifyConfig::builder()
//!     .token_source(Arc::new(credentials))
//!     .build()?;
//! let spotify = Spotify::new(config)?;
//!
//! let seeds = spotify.recommendation_genre_seeds().await?;
//! ```
//!
//! ## Errors
//!
//! Every call returns [`HttpError`]:
//!
//! ```rust,ignore
//! use spotify_api::HttpError;
//!
//! match spotify.track("bogus").await {
//!     Ok(track) => println!("{}", track["name"]),
//!     Err(HttpError::Api(e)) if e.http_status == 429 => {
//!         println!("retry after {:?}s", e.retry_after());
//!     }
//!     Err(HttpError::Timeout { timeout }) => println!("gave up after {timeout:?}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and request arguments are checked
//!   before any network I/O
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod ids;
mod spotify;

// Re-export public types at crate root for convenience
pub use auth::{ClientCredentials, StaticToken, TokenError, TokenSource};
pub use config::{
    AccessToken, BaseUrl, ClientId, ClientSecret, ConnectionReuse, SpotifyConfig,
    SpotifyConfigBuilder,
};
pub use error::ConfigError;
pub use spotify::{Me, Spotify};

// Re-export HTTP client types
pub use clients::{
    ApiError, DecodeError, Direction, HttpClient, HttpError, HttpMethod, HttpRequest,
    InvalidArgumentError, RequestOptions,
};
