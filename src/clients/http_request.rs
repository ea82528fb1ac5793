//! HTTP request types for the HipChat API client.
//!
//! This module provides the [`HttpRequest`] descriptor and its builder.
//! A request is created per call, consumed by
//! [`HttpClient::request`](crate::clients::HttpClient::request) and never retained.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::clients::errors::InvalidRequestError;

/// A string-keyed JSON mapping used for query parameters and request bodies.
///
/// Iteration follows insertion order.
pub type Payload = Map<String, Value>;

/// The payload key whose value overrides the auth token on GET and POST requests.
pub const TOKEN_KEY: &str = "token";

/// HTTP methods supported by the HipChat API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method; the payload becomes the query string.
    Get,
    /// HTTP POST method; the payload becomes the JSON body.
    Post,
    /// HTTP PUT method; the payload becomes the JSON body.
    Put,
    /// HTTP DELETE method; no payload is sent.
    Delete,
}

impl HttpMethod {
    /// Returns whether a token override is honoured for this method.
    #[must_use]
    pub const fn supports_token_override(&self) -> bool {
        matches!(self, Self::Get | Self::Post)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

impl FromStr for HttpMethod {
    type Err = InvalidRequestError;

    /// Parses a verb case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(Self::Get),
            "post" => Ok(Self::Post),
            "put" => Ok(Self::Put),
            "delete" => Ok(Self::Delete),
            _ => Err(InvalidRequestError::InvalidMethod {
                method: s.to_string(),
            }),
        }
    }
}

/// Renders a scalar payload value the way it appears in a query string.
///
/// Strings are written without quotes; everything else uses its JSON text.
#[must_use]
pub fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A request to be sent to the HipChat API.
///
/// # Example
///
/// ```rust
/// use hipchat_api::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "room")
///     .payload(json!({"max-results": 10}).as_object().unwrap().clone())
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path, "room");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the API root.
    pub path: String,
    /// Query parameters (GET) or JSON body (POST/PUT).
    pub payload: Payload,
    /// An explicit auth token overriding every other source.
    pub token: Option<String>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::TokenOverrideUnsupported`] if an
    /// explicit token is set on a PUT or DELETE request.
    pub fn verify(&self) -> Result<(), InvalidRequestError> {
        if self.token.is_some() && !self.http_method.supports_token_override() {
            return Err(InvalidRequestError::TokenOverrideUnsupported {
                method: self.http_method.to_string(),
            });
        }
        Ok(())
    }

    /// Resolves the token override for URL building.
    ///
    /// Precedence is the explicit token, then a `token` entry of the payload.
    /// A `null` payload token is ignored. PUT and DELETE requests never
    /// override the client's token.
    #[must_use]
    pub fn token_override(&self) -> Option<String> {
        if !self.http_method.supports_token_override() {
            return None;
        }
        self.token
            .clone()
            .or_else(|| {
                self.payload
                    .get(TOKEN_KEY)
                    .filter(|token| !token.is_null())
                    .map(scalar_to_string)
            })
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    payload: Payload,
    token: Option<String>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            payload: Payload::new(),
            token: None,
        }
    }

    /// Sets the whole payload at once.
    #[must_use]
    pub fn payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    /// Adds a single payload entry.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    /// Sets an explicit token override.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            payload: self.payload,
            token: self.token,
        };
        request.verify()?;
        Ok(request)
    }
}
