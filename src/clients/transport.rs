//! The HTTP transport boundary.
//!
//! [`HttpClient`](crate::clients::HttpClient) builds URLs and bodies and hands
//! them to a [`Transport`]; the transport only moves bytes. The default
//! [`ReqwestTransport`] talks to the network, tests and embedders may supply
//! their own implementation.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::clients::errors::TransportError;
use crate::clients::http_request::HttpMethod;
use crate::config::HipchatConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A fully resolved request handed to a [`Transport`].
#[derive(Clone, Debug, PartialEq)]
pub struct TransportRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The complete URL, auth token and query string included.
    pub url: String,
    /// The JSON body, if any.
    pub body: Option<Value>,
}

/// The raw outcome of a request that reached the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The body text.
    pub body: String,
}

/// Sends requests over HTTP.
///
/// Implementations report connection-level failures as [`TransportError`];
/// any response that reached the server, whatever its status, is `Ok`.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Sends a single request.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

/// The default [`Transport`], backed by `reqwest`.
#[derive(Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    user_agent: String,
}

impl ReqwestTransport {
    /// Creates a transport for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the underlying client cannot be created
    /// (e.g., TLS initialization failure).
    pub fn new(config: &HipchatConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            user_agent: Self::user_agent(config.user_agent_prefix()),
        })
    }

    /// Returns the `User-Agent` header value sent with every request.
    #[must_use]
    pub fn user_agent_header(&self) -> &str {
        &self.user_agent
    }

    fn user_agent(prefix: Option<&str>) -> String {
        let prefix = prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        format!("{prefix}HipChat API Library v{SDK_VERSION} | Rust {rust_version}")
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        let mut builder = builder
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}
