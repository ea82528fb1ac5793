//! Request-time error types for the HipChat API client.
//!
//! # Error Handling
//!
//! Every operation returns [`HipchatError`], which has one variant per
//! failure class:
//!
//! - [`InvalidRequestError`]: invalid usage, detected before any network call
//! - [`TransportError`]: the connection failed; the top-level message is
//!   always `HipChat API Error.` and the underlying cause is kept as the
//!   error source
//! - [`ApiError`]: HipChat returned an error payload or a non-2xx status
//! - [`HipchatError::UnexpectedBody`]: a success body lacked a collection the
//!   endpoint unwraps
//!
//! # Example
//!
//! ```rust,ignore
//! use hipchat_api::HipchatError;
//!
//! match client.get_room("Dev".into()).await {
//!     Ok(room) => println!("Room: {room}"),
//!     Err(HipchatError::Api(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HipchatError::Transport(e)) => println!("{e}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::error::Error as StdError;

use thiserror::Error;

/// Generic message reported for every transport failure.
pub const TRANSPORT_ERROR_MESSAGE: &str = "HipChat API Error.";

/// Error returned when a request is rejected before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// The HTTP verb is not one of `get`, `post`, `put`, `delete`.
    #[error("Invalid use of the request function: unsupported HTTP method '{method}'.")]
    InvalidMethod {
        /// The verb that was provided.
        method: String,
    },

    /// An explicit token override was given for a verb that always uses the
    /// client's own token.
    #[error("Token overrides are not supported for {method} requests.")]
    TokenOverrideUnsupported {
        /// The HTTP method of the rejected request.
        method: String,
    },

    /// A room notification was missing its message or its token.
    #[error("Message and Room Notification token are required.")]
    MissingNotificationFields,

    /// A webhook definition was missing its URL or its event.
    #[error("URL and Event are required.")]
    MissingWebhookFields,
}

/// Error returned when the transport could not complete a request.
///
/// The display text is always [`TRANSPORT_ERROR_MESSAGE`]. The underlying
/// cause, when the transport supplied one, is available via
/// [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("{}", TRANSPORT_ERROR_MESSAGE)]
pub struct TransportError {
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl TransportError {
    /// Creates a transport error wrapping the underlying cause.
    pub fn new(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self {
            source: Some(source.into()),
        }
    }

    /// Creates a transport error without an underlying cause.
    #[must_use]
    pub const fn bare() -> Self {
        Self { source: None }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        Self::new(error)
    }
}

/// Error returned when HipChat answers with an error payload or a non-2xx status.
///
/// The display text is exactly `message`: the `error.message` field of the
/// body when present, the raw body text otherwise.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The extracted error text.
    pub message: String,
}

/// Unified error type for every client operation.
#[derive(Debug, Error)]
pub enum HipchatError {
    /// The request was rejected before it was sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// The connection to HipChat failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// HipChat reported an error.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A successful response did not contain the expected collection.
    #[error("Unexpected response body: missing '{field}' collection.")]
    UnexpectedBody {
        /// The name of the missing field.
        field: &'static str,
    },
}
