//! OAuth 2.0 Client Credentials Grant.
//!
//! Server-to-server authentication without user context: the application's
//! client id and secret are exchanged for a short-lived access token. Tokens
//! obtained this way can call every endpoint that does not act on behalf of a
//! user (catalog lookups, search, browse, recommendations).
//!
//! The token is cached and refreshed once fewer than
//! [`EXPIRY_MARGIN_SECS`] seconds of its lifetime remain.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use spotify_api::{ClientCredentials, ClientId, ClientSecret, Spotify, SpotifyConfig};
//!
//! let credentials = ClientCredentials::new(
//!     ClientId::new("client-id")?,
//!     ClientSecret::new("client-secret")?,
//! );
//! let config = SpotifyConfig::builder()
//!     .token_source(Arc::new(credentials))
//!     .build()?;
//! let spotify = Spotify::new(config)?;
//! ```

use std::fmt;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tokio::sync::Mutex;

use super::{TokenError, TokenSource};
use crate::config::{ClientId, ClientSecret};

/// Accounts service token endpoint.
pub const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Tokens closer than this to expiry are refreshed.
pub const EXPIRY_MARGIN_SECS: i64 = 60;

/// Grant type for client credentials.
const CLIENT_CREDENTIALS_GRANT_TYPE: &str = "client_credentials";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn from_response(response: TokenResponse, now: DateTime<Utc>) -> Self {
        Self {
            access_token: response.access_token,
            expires_at: now + Duration::seconds(response.expires_in),
        }
    }

    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at - now < Duration::seconds(EXPIRY_MARGIN_SECS)
    }
}

/// A [`TokenSource`] backed by the client credentials grant.
///
/// Concurrent callers share one cached token; only one refresh request is in
/// flight at a time.
pub struct ClientCredentials {
    client_id: ClientId,
    client_secret: ClientSecret,
    token_url: String,
    http: reqwest::Client,
    cached: Mutex<Option<CachedToken>>,
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret)
            .field("token_url", &self.token_url)
            .finish_non_exhaustive()
    }
}

impl ClientCredentials {
    /// Creates a token source for the given application credentials.
    #[must_use]
    pub fn new(client_id: ClientId, client_secret: ClientSecret) -> Self {
        Self {
            client_id,
            client_secret,
            token_url: TOKEN_URL.to_string(),
            http: reqwest::Client::new(),
            cached: Mutex::new(None),
        }
    }

    /// Overrides the token endpoint.
    #[must_use]
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    /// Uses the given HTTP client (e.g. one configured with a proxy).
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Returns the `Authorization` header value for the token request.
    fn basic_auth_header(&self) -> String {
        let credentials = format!(
            "{}:{}",
            self.client_id.as_ref(),
            self.client_secret.as_ref()
        );
        format!("Basic {}", STANDARD.encode(credentials))
    }

    async fn request_token(&self) -> Result<TokenResponse, TokenError> {
        let response = self
            .http
            .post(&self.token_url)
            .header("Authorization", self.basic_auth_header())
            .form(&[("grant_type", CLIENT_CREDENTIALS_GRANT_TYPE)])
            .send()
            .await
            .map_err(|e| TokenError::RequestFailed {
                status: 0,
                message: format!("Network error: {e}"),
            })?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TokenError::RequestFailed { status, message });
        }

        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| TokenError::InvalidResponse {
                message: format!("Failed to parse token response: {e}"),
            })
    }
}

#[async_trait]
impl TokenSource for ClientCredentials {
    async fn access_token(&self) -> Result<String, TokenError> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if !token.is_expired(Utc::now()) {
                return Ok(token.access_token.clone());
            }
        }

        tracing::debug!("Requesting client credentials token from {}", self.token_url);
        let response = self.request_token().await?;
        if response.access_token.is_empty() {
            return Err(TokenError::Empty);
        }

        let token = CachedToken::from_response(response, Utc::now());
        let access_token = token.access_token.clone();
        *cached = Some(token);
        Ok(access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credentials(server: &MockServer) -> ClientCredentials {
        ClientCredentials::new(
            ClientId::new("id").unwrap(),
            ClientSecret::new("secret").unwrap(),
        )
        .with_token_url(format!("{}/api/token", server.uri()))
    }

    #[test]
    fn test_basic_auth_header_encodes_id_and_secret() {
        let source = ClientCredentials::new(
            ClientId::new("id").unwrap(),
            ClientSecret::new("secret").unwrap(),
        );
        // base64("id:secret")
        assert_eq!(source.basic_auth_header(), "Basic aWQ6c2VjcmV0");
    }

    #[test]
    fn test_token_close_to_expiry_is_expired() {
        let now = Utc::now();
        let token = CachedToken {
            access_token: "t".to_string(),
            expires_at: now + Duration::seconds(30),
        };
        assert!(token.is_expired(now));

        let token = CachedToken {
            access_token: "t".to_string(),
            expires_at: now + Duration::seconds(3600),
        };
        assert!(!token.is_expired(now));
    }

    #[tokio::test]
    async fn test_fetches_and_caches_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/token"))
            .and(header("Authorization", "Basic aWQ6c2VjcmV0"))
            .and(body_string("grant_type=client_credentials"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "fresh-token",
                "token_type": "Bearer",
                "expires_in": 3600
            })))
            .expect(1)
            .mount(&server)
            .await;

        let source = credentials(&server);
        assert_eq!(source.access_token().await.unwrap(), "fresh-token");
        // second call is served from the cache
        assert_eq!(source.access_token().await.unwrap(), "fresh-token");
    }

    #[tokio::test]
    async fn test_refreshes_token_near_expiry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "short-lived",
                "expires_in": 10
            })))
            .expect(2)
            .mount(&server)
            .await;

        let source = credentials(&server);
        source.access_token().await.unwrap();
        source.access_token().await.unwrap();
    }

    #[tokio::test]
    async fn test_rejected_credentials_map_to_request_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/token"))
            .respond_with(
                ResponseTemplate::new(400).set_body_string(r#"{"error":"invalid_client"}"#),
            )
            .mount(&server)
            .await;

        let result = credentials(&server).access_token().await;
        match result {
            Err(TokenError::RequestFailed { status, message }) => {
                assert_eq!(status, 400);
                assert!(message.contains("invalid_client"));
            }
            other => panic!("Expected RequestFailed, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_response_maps_to_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = credentials(&server).access_token().await;
        assert!(matches!(result, Err(TokenError::InvalidResponse { .. })));
    }
}
