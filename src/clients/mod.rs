//! HTTP layer for Web API communication.
//!
//! This module provides the request-dispatch core: immutable request
//! descriptors, the transport that sends them, and the errors it can raise.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async transport shared by every endpoint call
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: The raw response as read off the wire
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`RequestOptions`]: Per-call deadline and field extraction
//! - [`Direction`]: Which pagination link [`HttpClient::advance`] follows
//!
//! # Example
//!
//! ```rust,ignore
//! use spotify_api::{AccessToken, SpotifyConfig};
//! use spotify_api::clients::{HttpClient, HttpMethod, HttpRequest, RequestOptions};
//!
//! let config = SpotifyConfig::builder()
//!     .access_token(AccessToken::new("token")?)
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/audio-features")
//!     .query_param("ids", "a,b")
//!     .build()?;
//!
//! let features = client
//!     .execute_with(request, RequestOptions::new().extract_field("audio_features"))
//!     .await?;
//! ```
//!
//! # Deadlines
//!
//! Every call runs under a deadline (30 seconds unless configured or
//! overridden per call). It covers token resolution, connect, send and body
//! read. When it elapses the call fails with [`HttpError::Timeout`] and no
//! partial value is returned.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{
    ApiError, DecodeError, HttpError, InvalidArgumentError, UNKNOWN_ERROR_CODE,
};
pub use http_client::{Direction, HttpClient, RequestOptions, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, GENERIC_ERROR_MESSAGE};
