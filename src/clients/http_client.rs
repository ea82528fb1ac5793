//! HTTP client for HipChat API communication.
//!
//! This module provides the [`HttpClient`] type, which turns an
//! [`HttpRequest`] into a transport call and normalizes the outcome.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::errors::HipchatError;
use crate::clients::http_request::{HttpMethod, HttpRequest, Payload};
use crate::clients::http_response::HttpResponse;
use crate::clients::logger::RequestLogger;
use crate::clients::transport::{ReqwestTransport, Transport, TransportRequest};
use crate::clients::url::UrlBuilder;
use crate::config::HipchatConfig;

/// Dispatches requests to the HipChat API.
///
/// The client handles:
/// - Token resolution (explicit override, payload `token`, client token)
/// - Verb-specific placement of the payload (query string or JSON body)
/// - Normalization of responses into a parsed body or a [`HipchatError`]
///
/// The only state is the immutable configuration captured at construction.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use hipchat_api::{HipchatConfig, HttpClient, HttpMethod, HttpRequest};
///
/// let config = HipchatConfig::with_token("my-token")?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "room")
///     .param("max-results", 10)
///     .build()?;
/// let body = client.request(request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    transport: Arc<dyn Transport>,
    urls: UrlBuilder,
    logger: Arc<dyn RequestLogger>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client that sends requests over the network.
    ///
    /// # Errors
    ///
    /// Returns [`HipchatError::Transport`] if the HTTP client cannot be created.
    pub fn new(config: &HipchatConfig) -> Result<Self, HipchatError> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client that sends requests through `transport`.
    #[must_use]
    pub fn with_transport(config: &HipchatConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            urls: UrlBuilder::new(
                config.api_root().clone(),
                config.auth_token().clone(),
                config.encode_query_values(),
            ),
            logger: Arc::clone(config.logger()),
        }
    }

    /// Returns the URL builder.
    #[must_use]
    pub const fn urls(&self) -> &UrlBuilder {
        &self.urls
    }

    /// Resolves a request into the URL and body handed to the transport.
    ///
    /// - GET: the payload becomes the query string; a `token` entry also
    ///   overrides the auth token. No body is sent.
    /// - POST: a `token` entry overrides the auth token and the whole payload,
    ///   `token` included, is sent as the JSON body.
    /// - PUT: the payload is sent as the JSON body under the client token.
    /// - DELETE: nothing is sent under the client token.
    #[must_use]
    pub fn prepare(&self, request: &HttpRequest) -> TransportRequest {
        let token = request.token_override();
        let token = token.as_deref();
        let path = request.path.as_str();

        let (url, body) = match request.http_method {
            HttpMethod::Get => (self.urls.build(path, Some(&request.payload), token), None),
            HttpMethod::Post => (
                self.urls.build(path, None, token),
                Some(Value::Object(request.payload.clone())),
            ),
            HttpMethod::Put => (
                self.urls.build(path, None, None),
                Some(Value::Object(request.payload.clone())),
            ),
            HttpMethod::Delete => (self.urls.build(path, None, None), None),
        };

        TransportRequest {
            method: request.http_method,
            url,
            body,
        }
    }

    /// Sends a request and returns the parsed response body.
    ///
    /// # Errors
    ///
    /// Returns [`HipchatError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The connection fails (`Transport`)
    /// - HipChat reports an error or a non-2xx status (`Api`)
    pub async fn request(&self, request: HttpRequest) -> Result<Value, HipchatError> {
        request.verify()?;

        let prepared = self.prepare(&request);
        self.logger.log_request(prepared.method, &prepared.url);

        let raw = self.transport.send(prepared).await?;
        self.logger.log_response(raw.status, &raw.body);

        Ok(HttpResponse::new(raw.status, raw.body).into_result()?)
    }

    /// Sends a request given its verb as text.
    ///
    /// The verb is matched case-insensitively against `get`, `post`, `put`
    /// and `delete`; anything else fails without contacting the transport.
    ///
    /// # Errors
    ///
    /// Returns [`HipchatError::InvalidRequest`] for an unknown verb, otherwise
    /// the errors of [`request`](Self::request).
    pub async fn send(
        &self,
        verb: &str,
        path: &str,
        payload: Option<Payload>,
    ) -> Result<Value, HipchatError> {
        let method = verb.parse::<HttpMethod>()?;
        let request = HttpRequest::builder(method, path)
            .payload(payload.unwrap_or_default())
            .build()?;
        self.request(request).await
    }
}
