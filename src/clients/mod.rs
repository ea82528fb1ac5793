//! HTTP client types for HipChat API communication.
//!
//! This module provides the request-construction and response-normalization
//! layer every endpoint method is built on.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: Dispatches requests and normalizes responses
//! - [`HttpRequest`]: A request descriptor (verb, path, payload, token override)
//! - [`HttpResponse`]: A completed response and its normalization
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`UrlBuilder`]: Builds `?auth_token=` URLs against the API root
//! - [`Transport`]: The boundary to the network, with [`ReqwestTransport`] as default
//! - [`RequestLogger`]: Injected diagnostics, [`NoopLogger`] by default
//!
//! # Token Resolution
//!
//! Every request carries exactly one auth token, chosen in this order:
//!
//! 1. The explicit token of the [`HttpRequest`] (GET and POST only)
//! 2. A `token` entry of the payload (GET and POST only)
//! 3. The client's configured token

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod logger;
mod transport;
mod url;

pub use errors::{
    ApiError, HipchatError, InvalidRequestError, TransportError, TRANSPORT_ERROR_MESSAGE,
};
pub use http_client::HttpClient;
pub use http_request::{
    scalar_to_string, HttpMethod, HttpRequest, HttpRequestBuilder, Payload, TOKEN_KEY,
};
pub use http_response::HttpResponse;
pub use logger::{mask_auth_token, NoopLogger, RequestLogger, TracingLogger};
pub use transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse, SDK_VERSION};
pub use url::{escape_path, UrlBuilder};
