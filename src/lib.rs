//! # HipChat API Rust Client
//!
//! An async Rust client for the HipChat v2 REST API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`HipchatConfig`] and [`HipchatConfigBuilder`]
//! - A request dispatcher, [`HttpClient`], that places the auth token, builds
//!   query strings and JSON bodies per HTTP verb, and normalizes responses
//! - Endpoint methods for rooms, emoticons, notifications and webhooks via
//!   [`HipchatClient`]
//! - A pluggable [`Transport`] and an injected [`RequestLogger`]
//!
//! ## Quick Start
//!
//! ```rust
//! use hipchat_api::{HipchatConfig, AuthToken};
//!
//! let config = HipchatConfig::builder()
//!     .auth_token(AuthToken::new("your-api-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use hipchat_api::{HipchatClient, HipchatConfig};
//! use hipchat_api::rest::{MessageColor, Notification};
//!
//! let client = HipchatClient::new(&HipchatConfig::with_token("your-api-token")?)?;
//!
//! let rooms = client.rooms().await?;
//! let history = client.history("Dev").await?;
//!
//! let notification = Notification::builder()
//!     .message("Deploy finished")
//!     .token("room-notification-token")
//!     .color(MessageColor::Green)
//!     .build()?;
//! client.notify("Dev", notification).await?;
//! ```
//!
//! ## Lower-Level Requests
//!
//! Any API path can be reached through the dispatcher:
//!
//! ```rust,ignore
//! let body = client.http_client().send("get", "room/Dev/member", None).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration, including diagnostics, is passed explicitly
//! - **Immutable credentials**: the client's token is fixed at construction
//! - **One outcome per call**: every operation resolves once, to a body or an error
//! - **Fail-fast validation**: invalid usage is rejected before any network call

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiRoot, AuthToken, HipchatConfig, HipchatConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, HipchatError, HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, InvalidRequestError, NoopLogger, Payload, RequestLogger, Transport,
    TransportError, TransportRequest, TransportResponse, TracingLogger,
};

// Re-export endpoint types
pub use rest::HipchatClient;
