//! HTTP transport for Web API communication.
//!
//! This module provides the [`HttpClient`] type, which performs one
//! authenticated exchange per [`HttpRequest`] under a deadline and maps the
//! outcome into a JSON value or an [`HttpError`].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::auth::{TokenError, TokenSource};
use crate::clients::errors::{ApiError, HttpError, UNKNOWN_ERROR_CODE};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, ConnectionReuse, SpotifyConfig};
use crate::error::ConfigError;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-call options for [`HttpClient::execute_with`].
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use spotify_api::clients::RequestOptions;
///
/// let options = RequestOptions::new()
///     .extract_field("audio_features")
///     .timeout(Duration::from_secs(5));
///
/// assert_eq!(options.extract_field.as_deref(), Some("audio_features"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Top-level key to unwrap from a successful response, when present.
    pub extract_field: Option<String>,
    /// Deadline for this call, overriding the configured default.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    /// Creates options with no field extraction and the default deadline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Unwraps `field` from the decoded response when it is present.
    #[must_use]
    pub fn extract_field(mut self, field: impl Into<String>) -> Self {
        self.extract_field = Some(field.into());
        self
    }

    /// Overrides the deadline for this call.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Which pagination link to follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// The `next` link.
    Next,
    /// The `previous` link.
    Previous,
}

impl Direction {
    /// Returns the name of the field holding the link.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
        }
    }
}

/// HTTP client for making requests to the Web API.
///
/// The client handles:
/// - A single connection pool shared by every call
/// - Bearer token resolution from the configured [`TokenSource`]
/// - Default headers including User-Agent and Accept
/// - A deadline around the whole exchange
///
/// No request is retried.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use spotify_api::{AccessToken, SpotifyConfig};
/// use spotify_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = SpotifyConfig::builder()
///     .access_token(AccessToken::new("token")?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/tracks/abc").build()?;
/// let track = client.execute(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL every relative path is joined to.
    base_url: BaseUrl,
    /// Default deadline per call.
    timeout: Duration,
    /// Source of bearer tokens.
    token_source: Arc<dyn TokenSource>,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProxy`] if the proxy URL is rejected and
    /// [`ConfigError::HttpClientBuild`] if the TLS backend cannot be set up.
    pub fn new(config: &SpotifyConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Spotify API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder().use_rustls_tls();

        if let Some(url) = config.proxy() {
            let proxy = reqwest::Proxy::all(url).map_err(|e| ConfigError::InvalidProxy {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
            builder = builder.proxy(proxy);
        }

        if config.connection_reuse() == ConnectionReuse::PerRequest {
            builder = builder.pool_max_idle_per_host(0);
        }

        let client = builder.build().map_err(|e| ConfigError::HttpClientBuild {
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            timeout: config.timeout(),
            token_source: config.token_source(),
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_ref()
    }

    /// Returns the default deadline per call.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request with default options.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::execute_with`].
    pub async fn execute(&self, request: HttpRequest) -> Result<Value, HttpError> {
        self.execute_with(request, RequestOptions::default()).await
    }

    /// Sends a request and returns the decoded response body.
    ///
    /// A successful empty or `null` body is returned as an empty object. When
    /// `options.extract_field` names a top-level key of the response, only
    /// that value is returned.
    ///
    /// Dropping the returned future cancels the exchange.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidArgument`)
    /// - No bearer token can be resolved (`Auth`)
    /// - The deadline elapses (`Timeout`)
    /// - A non-2xx response is received (`Api`)
    /// - A 2xx body is not JSON (`Decode`)
    /// - A connection-level error occurs (`Network`)
    pub async fn execute_with(
        &self,
        request: HttpRequest,
        options: RequestOptions,
    ) -> Result<Value, HttpError> {
        request.verify()?;

        let timeout = options.timeout.unwrap_or(self.timeout);
        let exchange = self.exchange(&request, options.extract_field.as_deref());

        match tokio::time::timeout(timeout, exchange).await {
            Ok(Err(HttpError::Network(e))) if e.is_timeout() => Err(HttpError::Timeout { timeout }),
            Ok(result) => result,
            Err(_) => Err(HttpError::Timeout { timeout }),
        }
    }

    /// Follows the `next` or `previous` link of a paged result.
    ///
    /// Returns `Ok(None)` when the link is absent, `null` or empty.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if following the link fails.
    pub async fn advance(
        &self,
        page: &Value,
        direction: Direction,
    ) -> Result<Option<Value>, HttpError> {
        let Some(url) = page
            .get(direction.field())
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
        else {
            return Ok(None);
        };

        let request = HttpRequest::builder(HttpMethod::Get, url).build()?;
        self.execute(request).await.map(Some)
    }

    async fn exchange(
        &self,
        request: &HttpRequest,
        extract_field: Option<&str>,
    ) -> Result<Value, HttpError> {
        let token = self.token_source.access_token().await?;
        if token.is_empty() {
            return Err(TokenError::Empty.into());
        }

        let url = request.url(self.base_url.as_ref());

        let mut req_builder = match request.method() {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder.header("Authorization", format!("Bearer {token}"));

        if !request.query().is_empty() {
            req_builder = req_builder.query(request.query());
        }

        if let Some(body) = request.body() {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        tracing::debug!("{} {}", request.method(), url);

        let res = req_builder.send().await?;
        let code = res.status().as_u16();
        let headers = HttpResponse::parse_headers(res.headers());
        let body = res.text().await?;
        let response = HttpResponse::new(code, headers, body);

        if !response.is_ok() {
            tracing::warn!("Request {} {} failed with status {}", request.method(), url, code);
            return Err(HttpError::Api(ApiError {
                http_status: code,
                code: UNKNOWN_ERROR_CODE,
                message: response.error_message(&url),
                headers: response.headers,
            }));
        }

        let value = response.json()?;
        Ok(extract(value, extract_field))
    }
}

/// Unwraps a top-level field when it is present.
fn extract(mut value: Value, field: Option<&str>) -> Value {
    if let Some(field) = field {
        if let Some(inner) = value.get_mut(field) {
            return inner.take();
        }
    }
    value
}
