//! Request-time error types.
//!
//! # Error Handling
//!
//! - [`InvalidArgumentError`]: The caller supplied an invalid parameter
//!   combination; raised before any I/O
//! - [`ApiError`]: The API answered outside the 2xx range
//! - [`DecodeError`]: A 2xx response whose body is not JSON
//! - [`HttpError`]: Unified error type returned by every endpoint
//!
//! No error is retried by the client. A 429 [`ApiError`] keeps the response
//! headers so the caller can honour `Retry-After`.
//!
//! # Example
//!
//! ```rust,ignore
//! use spotify_api::HttpError;
//!
//! match spotify.track("spotify:track:abc").await {
//!     Ok(track) => println!("{}", track["name"]),
//!     Err(HttpError::Api(e)) if e.http_status == 429 => {
//!         println!("Rate limited, retry after {:?}s", e.retry_after());
//!     }
//!     Err(HttpError::Timeout { timeout }) => println!("Gave up after {timeout:?}"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use std::collections::HashMap;
use std::time::Duration;

use thiserror::Error;

use crate::auth::TokenError;

/// Provider error code used when the response carries none.
pub const UNKNOWN_ERROR_CODE: i32 = -1;

/// Error returned when the API responds with a non-2xx status.
///
/// `message` is prefixed with the request URL and holds the API's
/// `error.message` when the body could be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("http status: {http_status}, code: {code} - {message}")]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub http_status: u16,
    /// Provider-specific error code, `-1` when unavailable.
    pub code: i32,
    /// The error message.
    pub message: String,
    /// Response headers, lower-cased, possibly multi-valued.
    pub headers: HashMap<String, Vec<String>>,
}

impl ApiError {
    /// Returns the first value of a response header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Retry-After` delay in seconds, if the API sent one.
    #[must_use]
    pub fn retry_after(&self) -> Option<f64> {
        self.header("retry-after")
            .and_then(|value| value.trim().parse::<f64>().ok())
    }
}

/// Error returned when a successful response body is not valid JSON.
#[derive(Debug, Error)]
#[error("Failed to decode response body (status {http_status}): {source}")]
pub struct DecodeError {
    /// The HTTP status code of the response.
    pub http_status: u16,
    /// The raw body text.
    pub body: String,
    /// The underlying JSON error.
    #[source]
    pub source: serde_json::Error,
}

/// Error returned when a request is rejected before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidArgumentError {
    /// The request path is empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// The method does not accept a body.
    #[error("Cannot send a body with {method}.")]
    BodyNotAllowed {
        /// The HTTP method.
        method: String,
    },

    /// A bulk endpoint was called with no ids.
    #[error("At least one id is required for '{parameter}'.")]
    EmptyIds {
        /// The parameter that was empty.
        parameter: &'static str,
    },

    /// Playlist track removal mode is neither `all` nor `specific`.
    #[error("Unknown removal mode '{mode}'. Mode must be 'all' or 'specific'.")]
    UnknownRemovalMode {
        /// The mode that was supplied.
        mode: String,
    },

    /// A specific-occurrence removal entry lists no positions.
    #[error("No positions given for track '{uri}'.")]
    MissingPositions {
        /// The track the entry refers to.
        uri: String,
    },

    /// Parameters could not be converted into a query string.
    #[error("Invalid parameters: {reason}")]
    InvalidParams {
        /// Why the conversion failed.
        reason: String,
    },
}

/// Unified error type for every API call.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The caller supplied an invalid argument.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),

    /// No usable bearer token.
    #[error("Authorization failed: {0}")]
    Auth(#[from] TokenError),

    /// The deadline elapsed before the exchange completed.
    #[error("Request timed out after {timeout:?}")]
    Timeout {
        /// The deadline that was applied.
        timeout: Duration,
    },

    /// The API responded outside the 2xx range.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A 2xx body that is not valid JSON.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns `true` for failures a caller may reasonably retry.
    ///
    /// Timeouts, network errors, 429 and 5xx responses are retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Network(_) => true,
            Self::Api(e) => e.http_status == 429 || e.http_status >= 500,
            Self::InvalidArgument(_) | Self::Auth(_) | Self::Decode(_) => false,
        }
    }

    /// Returns the HTTP status for errors that carry one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.http_status),
            Self::Decode(e) => Some(e.http_status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidArgument(_) | Self::Auth(_) | Self::Timeout { .. } => None,
        }
    }
}
