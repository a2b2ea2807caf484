//! Configuration types for the Spotify API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`SpotifyConfig`]: The configuration struct holding all client settings
//! - [`SpotifyConfigBuilder`]: A builder for constructing [`SpotifyConfig`] instances
//! - [`AccessToken`]: A validated bearer token with masked debug output
//! - [`ClientId`] / [`ClientSecret`]: Application credentials
//! - [`BaseUrl`]: A validated API base URL
//! - [`ConnectionReuse`]: Connection pooling policy
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use spotify_api::{AccessToken, SpotifyConfig};
//!
//! let config = SpotifyConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.timeout(), Duration::from_secs(10));
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl, ClientId, ClientSecret, DEFAULT_BASE_URL};

use std::sync::Arc;
use std::time::Duration;

use crate::auth::{StaticToken, TokenSource};
use crate::error::ConfigError;

/// Default per-request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How the transport reuses connections between calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionReuse {
    /// Keep idle connections in a pool shared by every call.
    #[default]
    Pooled,
    /// Close connections after each call.
    PerRequest,
}

/// Configuration for the Spotify API client.
///
/// Holds the token source every request is authorized with, the request
/// deadline and transport options.
///
/// # Thread Safety
///
/// `SpotifyConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct SpotifyConfig {
    token_source: Arc<dyn TokenSource>,
    base_url: BaseUrl,
    timeout: Duration,
    proxy: Option<String>,
    connection_reuse: ConnectionReuse,
    user_agent_prefix: Option<String>,
}

impl SpotifyConfig {
    /// Creates a new builder for constructing a `SpotifyConfig`.
    #[must_use]
    pub fn builder() -> SpotifyConfigBuilder {
        SpotifyConfigBuilder::new()
    }

    /// Returns the token source requests are authorized with.
    #[must_use]
    pub fn token_source(&self) -> Arc<dyn TokenSource> {
        Arc::clone(&self.token_source)
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default request deadline.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the outbound proxy URL, if configured.
    #[must_use]
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Returns the connection reuse policy.
    #[must_use]
    pub const fn connection_reuse(&self) -> ConnectionReuse {
        self.connection_reuse
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify SpotifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SpotifyConfig>();
};

/// Builder for constructing [`SpotifyConfig`] instances.
///
/// One of `access_token` or `token_source` is required. When both are set
/// the static access token is used.
///
/// # Defaults
///
/// - `base_url`: `https://api.spotify.com/v1`
/// - `timeout`: 30 seconds
/// - `proxy`: `None`
/// - `connection_reuse`: [`ConnectionReuse::Pooled`]
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use spotify_api::{ClientCredentials, ClientId, ClientSecret, SpotifyConfig};
///
/// let credentials = ClientCredentials::new(
///     ClientId::new("client-id").unwrap(),
///     ClientSecret::new("client-secret").unwrap(),
/// );
///
/// let config = SpotifyConfig::builder()
///     .token_source(Arc::new(credentials))
///     .proxy("http://proxy.internal:3128")
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct SpotifyConfigBuilder {
    access_token: Option<AccessToken>,
    token_source: Option<Arc<dyn TokenSource>>,
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    proxy: Option<String>,
    connection_reuse: Option<ConnectionReuse>,
    user_agent_prefix: Option<String>,
}

impl SpotifyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a fixed access token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets a token source queried before every request.
    #[must_use]
    pub fn token_source(mut self, source: Arc<dyn TokenSource>) -> Self {
        self.token_source = Some(source);
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the default request deadline.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Routes every request through the given proxy URL.
    #[must_use]
    pub fn proxy(mut self, url: impl Into<String>) -> Self {
        self.proxy = Some(url.into());
        self
    }

    /// Sets the connection reuse policy.
    #[must_use]
    pub const fn connection_reuse(mut self, policy: ConnectionReuse) -> Self {
        self.connection_reuse = Some(policy);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`SpotifyConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if neither an access
    /// token nor a token source was set, and [`ConfigError::InvalidTimeout`]
    /// for a zero timeout.
    pub fn build(self) -> Result<SpotifyConfig, ConfigError> {
        let token_source: Arc<dyn TokenSource> = match (self.access_token, self.token_source) {
            (Some(token), source) => {
                if source.is_some() {
                    tracing::debug!("Both access_token and token_source set; using access_token");
                }
                Arc::new(StaticToken::new(token))
            }
            (None, Some(source)) => source,
            (None, None) => {
                return Err(ConfigError::MissingRequiredField {
                    field: "access_token",
                })
            }
        };

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(SpotifyConfig {
            token_source,
            base_url: self.base_url.unwrap_or_default(),
            timeout,
            proxy: self.proxy,
            connection_reuse: self.connection_reuse.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
