//! HTTP response view.
//!
//! [`HttpResponse`] holds what the transport read off the wire before any
//! interpretation: status, headers and the raw body text. Decoding into a
//! JSON value and the API error message format live here so the transport
//! stays a thin send/receive loop.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::errors::DecodeError;

/// Generic message used when an error body carries no `error.message`.
pub const GENERIC_ERROR_MESSAGE: &str = "error";

/// A raw HTTP response from the Web API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lower-cased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Collects a reqwest header map into lower-cased, multi-valued form.
    #[must_use]
    pub fn parse_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Decodes a successful body.
    ///
    /// An empty body or a literal `null` yields an empty object.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the body is not valid JSON.
    pub fn json(&self) -> Result<Value, DecodeError> {
        let text = self.body.trim();
        if text.is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }

        match serde_json::from_str::<Value>(text) {
            Ok(Value::Null) => Ok(Value::Object(serde_json::Map::new())),
            Ok(value) => Ok(value),
            Err(source) => Err(DecodeError {
                http_status: self.code,
                body: self.body.clone(),
                source,
            }),
        }
    }

    /// Builds the error message for a non-2xx response.
    ///
    /// Uses `error.message` from the body when it is a string, otherwise the
    /// generic `"error"`, and prefixes it with the request URL.
    #[must_use]
    pub fn error_message(&self, url: &str) -> String {
        let message = serde_json::from_str::<Value>(&self.body)
            .ok()
            .and_then(|body| {
                body.get("error")
                    .and_then(|error| error.get("message"))
                    .and_then(Value::as_str)
                    .map(String::from)
            })
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());

        format!("{url}:\n {message}")
    }
}
