//! Room notification endpoint.
//!
//! Notifications are authenticated with a room notification token rather
//! than the client's token. The token travels both in the URL and in the
//! JSON body.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HipchatError, HttpMethod, HttpRequest, InvalidRequestError, Payload};
use crate::rest::{HipchatClient, RoomRef};

/// Background color of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageColor {
    /// Yellow.
    Yellow,
    /// Green.
    Green,
    /// Red.
    Red,
    /// Purple.
    Purple,
    /// Gray.
    Gray,
    /// Picked by the server.
    Random,
}

impl MessageColor {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Red => "red",
            Self::Purple => "purple",
            Self::Gray => "gray",
            Self::Random => "random",
        }
    }
}

/// How the notification message is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageFormat {
    /// Basic HTML.
    Html,
    /// Plain text with mentions and emoticons.
    Text,
}

impl MessageFormat {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Text => "text",
        }
    }
}

/// A room notification.
///
/// Build one with [`Notification::builder`]; `message` and `token` are required.
///
/// # Example
///
/// ```rust
/// use hipchat_api::rest::{MessageColor, Notification};
///
/// let notification = Notification::builder()
///     .message("Build passed")
///     .token("room-token")
///     .color(MessageColor::Green)
///     .build()
///     .unwrap();
///
/// let payload = notification.into_payload();
/// assert_eq!(payload["color"], "green");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    message: String,
    token: String,
    color: Option<MessageColor>,
    notify: Option<bool>,
    message_format: Option<MessageFormat>,
    extra: Payload,
}

impl Notification {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> NotificationBuilder {
        NotificationBuilder::default()
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the room notification token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Converts the notification into the request body.
    #[must_use]
    pub fn into_payload(self) -> Payload {
        let mut payload = Payload::new();
        payload.insert("message".to_string(), self.message.into());
        payload.insert("token".to_string(), self.token.into());
        if let Some(color) = self.color {
            payload.insert("color".to_string(), color.as_str().into());
        }
        if let Some(notify) = self.notify {
            payload.insert("notify".to_string(), notify.into());
        }
        if let Some(format) = self.message_format {
            payload.insert("message_format".to_string(), format.as_str().into());
        }
        for (key, value) in self.extra {
            payload.entry(key).or_insert(value);
        }
        payload
    }
}

/// Builder for [`Notification`].
#[derive(Debug, Default)]
pub struct NotificationBuilder {
    message: Option<String>,
    token: Option<String>,
    color: Option<MessageColor>,
    notify: Option<bool>,
    message_format: Option<MessageFormat>,
    extra: Payload,
}

impl NotificationBuilder {
    /// Sets the message text (required).
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the room notification token (required).
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the background color.
    #[must_use]
    pub const fn color(mut self, color: MessageColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets whether room members are alerted.
    #[must_use]
    pub const fn notify(mut self, notify: bool) -> Self {
        self.notify = Some(notify);
        self
    }

    /// Sets the message format.
    #[must_use]
    pub const fn message_format(mut self, format: MessageFormat) -> Self {
        self.message_format = Some(format);
        self
    }

    /// Adds a field the builder has no dedicated setter for.
    ///
    /// Fields with a dedicated setter take precedence.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Builds the [`Notification`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::MissingNotificationFields`] if the
    /// message or the token is missing.
    pub fn build(self) -> Result<Notification, InvalidRequestError> {
        let (Some(message), Some(token)) = (self.message, self.token) else {
            return Err(InvalidRequestError::MissingNotificationFields);
        };

        Ok(Notification {
            message,
            token,
            color: self.color,
            notify: self.notify,
            message_format: self.message_format,
            extra: self.extra,
        })
    }
}

impl HipchatClient {
    /// Sends a notification to a room.
    ///
    /// The request is authenticated with the notification's token.
    ///
    /// # Errors
    ///
    /// Returns [`HipchatError`] if the request fails.
    pub async fn notify(
        &self,
        room: impl Into<RoomRef>,
        notification: Notification,
    ) -> Result<Value, HipchatError> {
        let request =
            HttpRequest::builder(HttpMethod::Post, format!("room/{}/notification", room.into()))
                .payload(notification.into_payload())
                .build()?;
        self.http_client.request(request).await
    }

    /// Sends a plain notification with only a message and a token.
    ///
    /// # Errors
    ///
    /// Returns [`HipchatError`] if the request fails.
    pub async fn notify_message(
        &self,
        room: impl Into<RoomRef>,
        message: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Value, HipchatError> {
        let notification = Notification::builder()
            .message(message)
            .token(token)
            .build()?;
        self.notify(room, notification).await
    }
}
