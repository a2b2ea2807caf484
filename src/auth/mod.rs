//! Bearer token sources.
//!
//! Every request is authorized with a token obtained from a [`TokenSource`]
//! at dispatch time. The transport never caches tokens; a source that wants
//! caching (such as [`ClientCredentials`]) does it itself.
//!
//! # Overview
//!
//! - [`TokenSource`]: The capability "produce a currently-valid bearer token, or fail"
//! - [`StaticToken`]: A fixed token supplied by the caller
//! - [`ClientCredentials`]: Client credentials grant with token caching
//! - [`TokenError`]: Why no token could be produced
//!
//! # Custom Sources
//!
//! ```rust
//! use async_trait::async_trait;
//! use spotify_api::auth::{TokenError, TokenSource};
//!
//! #[derive(Debug)]
//! struct FromEnv;
//!
//! #[async_trait]
//! impl TokenSource for FromEnv {
//!     async fn access_token(&self) -> Result<String, TokenError> {
//!         std::env::var("SPOTIFY_TOKEN").map_err(|_| TokenError::Empty)
//!     }
//! }
//! ```

mod client_credentials;

pub use client_credentials::{ClientCredentials, TOKEN_URL};

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::AccessToken;

/// Errors raised while resolving a bearer token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The source had no token to offer.
    #[error("No access token available")]
    Empty,

    /// The token endpoint rejected the request.
    #[error("Token request failed with status {status}: {message}")]
    RequestFailed {
        /// The HTTP status code returned, or 0 for network failures.
        status: u16,
        /// The error message from the response.
        message: String,
    },

    /// The token endpoint answered with something that is not a token.
    #[error("Invalid token response: {message}")]
    InvalidResponse {
        /// What was wrong with the response.
        message: String,
    },
}

/// A provider of bearer tokens.
///
/// Implementations must be safe to query concurrently. Refresh, if any, is
/// the implementation's own responsibility.
#[async_trait]
pub trait TokenSource: Send + Sync + fmt::Debug {
    /// Returns a currently-valid access token.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError`] if no usable token can be produced.
    async fn access_token(&self) -> Result<String, TokenError>;
}

/// A fixed access token.
#[derive(Clone, Debug)]
pub struct StaticToken(AccessToken);

impl StaticToken {
    /// Wraps a validated access token.
    #[must_use]
    pub const fn new(token: AccessToken) -> Self {
        Self(token)
    }
}

#[async_trait]
impl TokenSource for StaticToken {
    async fn access_token(&self) -> Result<String, TokenError> {
        Ok(self.0.as_ref().to_string())
    }
}

// Verify token sources are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StaticToken>();
    assert_send_sync::<ClientCredentials>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_token_returns_its_value() {
        let source = StaticToken::new(AccessToken::new("abc").unwrap());
        assert_eq!(source.access_token().await.unwrap(), "abc");
    }

    #[test]
    fn test_static_token_debug_masks_value() {
        let source = StaticToken::new(AccessToken::new("abc").unwrap());
        assert!(!format!("{source:?}").contains("abc"));
    }

    #[test]
    fn test_token_error_messages() {
        assert_eq!(TokenError::Empty.to_string(), "No access token available");

        let error = TokenError::RequestFailed {
            status: 400,
            message: "invalid_client".to_string(),
        };
        assert!(error.to_string().contains("400"));
        assert!(error.to_string().contains("invalid_client"));
    }
}
