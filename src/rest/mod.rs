//! Endpoint methods for the HipChat v2 REST API.
//!
//! [`HipchatClient`] maps each API operation to a fixed verb and path
//! template on top of [`HttpClient`]. Operations are grouped by resource:
//!
//! - rooms: [`rooms`](HipchatClient::rooms), [`get_room`](HipchatClient::get_room),
//!   [`create_room`](HipchatClient::create_room), [`delete_room`](HipchatClient::delete_room),
//!   [`history`](HipchatClient::history), [`set_topic`](HipchatClient::set_topic)
//! - emoticons: [`emoticons`](HipchatClient::emoticons),
//!   [`emoticons_with`](HipchatClient::emoticons_with),
//!   [`get_emoticon`](HipchatClient::get_emoticon)
//! - notifications: [`notify`](HipchatClient::notify),
//!   [`notify_message`](HipchatClient::notify_message)
//! - webhooks: [`webhooks`](HipchatClient::webhooks),
//!   [`get_webhook`](HipchatClient::get_webhook),
//!   [`create_webhook`](HipchatClient::create_webhook),
//!   [`delete_webhook`](HipchatClient::delete_webhook),
//!   [`delete_all_webhooks`](HipchatClient::delete_all_webhooks)
//!
//! # Example
//!
//! ```rust,ignore
//! use hipchat_api::{HipchatClient, HipchatConfig};
//!
//! let client = HipchatClient::new(&HipchatConfig::with_token("my-token")?)?;
//!
//! for room in client.rooms().await? {
//!     println!("{}", room["name"]);
//! }
//! client.notify_message("Dev", "Deploy finished", "room-notification-token").await?;
//! ```

mod emoticons;
mod notifications;
mod rooms;
mod webhooks;

pub use emoticons::{EmoticonListParams, EmoticonRef, EmoticonType};
pub use notifications::{MessageColor, MessageFormat, Notification, NotificationBuilder};
pub use rooms::RoomRef;
pub use webhooks::{WebhookOptions, WebhookOptionsBuilder};

use std::sync::Arc;

use serde_json::Value;

use crate::clients::{HipchatError, HttpClient, HttpMethod, HttpRequest, Transport};
use crate::config::HipchatConfig;

/// Client for the HipChat v2 REST API.
///
/// # Thread Safety
///
/// `HipchatClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug, Clone)]
pub struct HipchatClient {
    http_client: HttpClient,
    max_concurrent_requests: usize,
}

// Verify HipchatClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HipchatClient>();
};

impl HipchatClient {
    /// Creates a client that talks to the configured API root.
    ///
    /// # Errors
    ///
    /// Returns [`HipchatError::Transport`] if the HTTP client cannot be created.
    pub fn new(config: &HipchatConfig) -> Result<Self, HipchatError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
            max_concurrent_requests: config.max_concurrent_requests(),
        })
    }

    /// Creates a client that sends requests through `transport`.
    #[must_use]
    pub fn with_transport(config: &HipchatConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            http_client: HttpClient::with_transport(config, transport),
            max_concurrent_requests: config.max_concurrent_requests(),
        }
    }

    /// Returns the underlying request dispatcher.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the API capabilities document.
    ///
    /// Only unauthenticated callers may read this resource, so the request is
    /// made with an empty auth token.
    ///
    /// # Errors
    ///
    /// Returns [`HipchatError`] if the request fails.
    pub async fn capabilities(&self) -> Result<Value, HipchatError> {
        let request = HttpRequest::builder(HttpMethod::Get, "capabilities")
            .param("token", "")
            .build()?;
        self.http_client.request(request).await
    }

    async fn get(&self, path: String) -> Result<Value, HipchatError> {
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        self.http_client.request(request).await
    }
}

/// Extracts the `items` array of a collection response.
fn unwrap_items(body: Value) -> Result<Vec<Value>, HipchatError> {
    match body {
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(HipchatError::UnexpectedBody { field: "items" }),
        },
        _ => Err(HipchatError::UnexpectedBody { field: "items" }),
    }
}
