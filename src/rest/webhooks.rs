//! Room webhook endpoints.

use std::fmt;

use futures::stream::{self, StreamExt};
use serde_json::Value;

use crate::clients::{
    scalar_to_string, HipchatError, HttpMethod, HttpRequest, InvalidRequestError, Payload,
};
use crate::rest::{unwrap_items, HipchatClient, RoomRef};

/// A webhook definition for [`HipchatClient::create_webhook`].
///
/// `url` and `event` are required.
///
/// # Example
///
/// ```rust
/// use hipchat_api::rest::WebhookOptions;
///
/// let options = WebhookOptions::builder()
///     .url("https://example.com/hooks/hipchat")
///     .event("room_message")
///     .pattern("^/deploy")
///     .build()
///     .unwrap();
///
/// assert_eq!(options.into_payload()["event"], "room_message");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WebhookOptions {
    url: String,
    event: String,
    pattern: Option<String>,
    name: Option<String>,
    extra: Payload,
}

impl WebhookOptions {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> WebhookOptionsBuilder {
        WebhookOptionsBuilder::default()
    }

    /// Converts the options into the request body.
    #[must_use]
    pub fn into_payload(self) -> Payload {
        let mut payload = Payload::new();
        payload.insert("url".to_string(), self.url.into());
        payload.insert("event".to_string(), self.event.into());
        if let Some(pattern) = self.pattern {
            payload.insert("pattern".to_string(), pattern.into());
        }
        if let Some(name) = self.name {
            payload.insert("name".to_string(), name.into());
        }
        for (key, value) in self.extra {
            payload.entry(key).or_insert(value);
        }
        payload
    }
}

/// Builder for [`WebhookOptions`].
#[derive(Debug, Default)]
pub struct WebhookOptionsBuilder {
    url: Option<String>,
    event: Option<String>,
    pattern: Option<String>,
    name: Option<String>,
    extra: Payload,
}

impl WebhookOptionsBuilder {
    /// Sets the URL HipChat posts events to (required).
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the event to subscribe to, e.g. `room_message` (required).
    #[must_use]
    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Sets the message pattern for `room_message` webhooks.
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Sets the webhook name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a field the builder has no dedicated setter for.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Builds the [`WebhookOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::MissingWebhookFields`] if the URL or the
    /// event is missing.
    pub fn build(self) -> Result<WebhookOptions, InvalidRequestError> {
        let (Some(url), Some(event)) = (self.url, self.event) else {
            return Err(InvalidRequestError::MissingWebhookFields);
        };

        Ok(WebhookOptions {
            url,
            event,
            pattern: self.pattern,
            name: self.name,
            extra: self.extra,
        })
    }
}

fn webhook_path(room: &RoomRef, id: impl fmt::Display) -> String {
    format!("room/{room}/webhook/{id}")
}

impl HipchatClient {
    /// Registers a webhook on a room.
    ///
    /// # Errors
    ///
    /// Returns [`HipchatError`] if the request fails.
    pub async fn create_webhook(
        &self,
        room: impl Into<RoomRef>,
        options: WebhookOptions,
    ) -> Result<Value, HipchatError> {
        let request = HttpRequest::builder(HttpMethod::Post, format!("room/{}/webhook", room.into()))
            .payload(options.into_payload())
            .build()?;
        self.http_client.request(request).await
    }

    /// Fetches a single webhook.
    ///
    /// # Errors
    ///
    /// Returns [`HipchatError`] if the request fails.
    pub async fn get_webhook(
        &self,
        room: impl Into<RoomRef>,
        id: impl fmt::Display,
    ) -> Result<Value, HipchatError> {
        self.get(webhook_path(&room.into(), id)).await
    }

    /// Lists the webhooks of a room.
    ///
    /// Returns the whole response body; the webhooks are under `items`.
    ///
    /// # Errors
    ///
    /// Returns [`HipchatError`] if the request fails.
    pub async fn webhooks(&self, room: impl Into<RoomRef>) -> Result<Value, HipchatError> {
        self.get(format!("room/{}/webhook", room.into())).await
    }

    /// Deletes a single webhook.
    ///
    /// # Errors
    ///
    /// Returns [`HipchatError`] if the request fails.
    pub async fn delete_webhook(
        &self,
        room: impl Into<RoomRef>,
        id: impl fmt::Display,
    ) -> Result<Value, HipchatError> {
        let request =
            HttpRequest::builder(HttpMethod::Delete, webhook_path(&room.into(), id)).build()?;
        self.http_client.request(request).await
    }

    /// Deletes every webhook of a room and returns how many were deleted.
    ///
    /// The webhooks are listed first, then deleted concurrently with at most
    /// [`max_concurrent_requests`](crate::HipchatConfig::max_concurrent_requests)
    /// deletions in flight. Every deletion runs to completion. If any of them
    /// fails, the error of the first failing webhook in listing order is
    /// returned, whatever order the deletions finished in.
    ///
    /// # Errors
    ///
    /// Returns the listing error unchanged, [`HipchatError::UnexpectedBody`]
    /// if the listing has no `items` or an item has no `id`, or the error of
    /// the first failed deletion.
    pub async fn delete_all_webhooks(&self, room: impl Into<RoomRef>) -> Result<usize, HipchatError> {
        let room = room.into();
        let hooks = unwrap_items(self.webhooks(room.clone()).await?)?;

        let ids = hooks
            .iter()
            .map(|hook| {
                hook.get("id")
                    .map(scalar_to_string)
                    .ok_or(HipchatError::UnexpectedBody { field: "id" })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let total = ids.len();

        let results: Vec<Result<Value, HipchatError>> = stream::iter(ids)
            .map(|id| self.delete_webhook(room.clone(), id))
            .buffered(self.max_concurrent_requests)
            .collect()
            .await;

        match results.into_iter().find_map(Result::err) {
            Some(error) => Err(error),
            None => Ok(total),
        }
    }
}
