//! Request descriptors.
//!
//! An [`HttpRequest`] is an immutable plan for one HTTP call: method, path,
//! query parameters and an optional JSON body. It is built once through
//! [`HttpRequestBuilder`] and handed to the [`HttpClient`](crate::clients::HttpClient).

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::clients::errors::InvalidArgumentError;

/// HTTP methods used by the Web API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for replacing or saving resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the uppercase method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable description of one HTTP call.
///
/// The path is relative to the configured base URL unless it is already an
/// absolute `http(s)://` URL (as found in `next`/`previous` pagination
/// fields), in which case it is used verbatim. The query map never holds
/// absent values.
///
/// # Example
///
/// ```rust
/// use spotify_api::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Put, "/users/me/playlists/p1/tracks")
///     .body(json!({"uris": ["spotify:track:t1"]}))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.method(), HttpMethod::Put);
/// assert!(request.body().is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    http_method: HttpMethod,
    path: String,
    query: BTreeMap<String, String>,
    body: Option<Value>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.http_method
    }

    /// Returns the path (or absolute URL) of the request.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query parameters.
    #[must_use]
    pub const fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    /// Returns a single query parameter value.
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Returns the JSON body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Returns `true` if the path is already an absolute URL.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.path.starts_with("https://") || self.path.starts_with("http://")
    }

    /// Resolves the request URL (without query string) against `base_url`.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        if self.is_absolute() {
            return self.path.clone();
        }
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if:
    /// - the path is empty
    /// - a GET request carries a body
    pub fn verify(&self) -> Result<(), InvalidArgumentError> {
        if self.path.trim_matches('/').is_empty() {
            return Err(InvalidArgumentError::EmptyPath);
        }

        if self.http_method == HttpMethod::Get && self.body.is_some() {
            return Err(InvalidArgumentError::BodyNotAllowed {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    query: BTreeMap<String, String>,
    body: Option<Value>,
    error: Option<InvalidArgumentError>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            query: BTreeMap::new(),
            body: None,
            error: None,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.insert(key.into(), value.to_string());
        self
    }

    /// Adds a query parameter only when `value` is present.
    #[must_use]
    pub fn query_opt<T: ToString>(self, key: impl Into<String>, value: Option<T>) -> Self {
        match value {
            Some(value) => self.query_param(key, value),
            None => self,
        }
    }

    /// Flattens a serializable parameter struct into query parameters.
    ///
    /// `null` fields are skipped, arrays are joined with commas and nested
    /// objects are rejected.
    #[must_use]
    pub fn query_params<T: Serialize>(mut self, params: &T) -> Self {
        match serialize_to_query(params) {
            Ok(query) => self.query.extend(query),
            Err(e) => self.error = Some(e),
        }
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if parameter serialization failed or
    /// the request fails [`HttpRequest::verify`].
    pub fn build(self) -> Result<HttpRequest, InvalidArgumentError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            query: self.query,
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}

/// Serializes a params struct into a flat query map.
fn serialize_to_query<T: Serialize>(
    params: &T,
) -> Result<BTreeMap<String, String>, InvalidArgumentError> {
    let value = serde_json::to_value(params).map_err(|e| InvalidArgumentError::InvalidParams {
        reason: e.to_string(),
    })?;

    let Value::Object(map) = value else {
        return Err(InvalidArgumentError::InvalidParams {
            reason: "query parameters must serialize to an object".to_string(),
        });
    };

    let mut query = BTreeMap::new();
    for (key, val) in map {
        match val {
            Value::Null => {}
            Value::String(s) => {
                query.insert(key, s);
            }
            Value::Number(n) => {
                query.insert(key, n.to_string());
            }
            Value::Bool(b) => {
                query.insert(key, b.to_string());
            }
            Value::Array(arr) => {
                let values: Vec<String> = arr
                    .iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect();
                if !values.is_empty() {
                    query.insert(key, values.join(","));
                }
            }
            Value::Object(_) => {
                return Err(InvalidArgumentError::InvalidParams {
                    reason: format!("nested object for query parameter '{key}'"),
                });
            }
        }
    }

    Ok(query)
}
