//! HTTP response types for the HipChat API client.
//!
//! This module provides the [`HttpResponse`] type and the normalization of a
//! completed response into either a parsed body or an [`ApiError`].

use serde_json::Value;

use crate::clients::errors::ApiError;

/// A completed response from the HipChat API.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The parsed response body.
    ///
    /// An empty body parses as `{}`. A body that is not JSON is kept as a
    /// JSON string holding the raw text.
    pub body: Value,
    /// The body exactly as received.
    pub raw_body: String,
}

impl HttpResponse {
    /// Creates a response, parsing `raw_body` as JSON.
    #[must_use]
    pub fn new(code: u16, raw_body: impl Into<String>) -> Self {
        let raw_body = raw_body.into();
        let body = if raw_body.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&raw_body).unwrap_or_else(|_| Value::String(raw_body.clone()))
        };

        Self {
            code,
            body,
            raw_body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the body carries an `error` field.
    #[must_use]
    pub fn has_error_field(&self) -> bool {
        self.body.get("error").is_some()
    }

    /// Returns the `error.message` text of the body, if it has one.
    ///
    /// Numbers and booleans are rendered as text. Any other non-string
    /// message counts as absent.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match self.body.get("error")?.get("message")? {
            Value::String(message) => Some(message.clone()),
            scalar @ (Value::Number(_) | Value::Bool(_)) => Some(scalar.to_string()),
            _ => None,
        }
    }

    /// Normalizes the response into a parsed body or an [`ApiError`].
    ///
    /// A response fails when its body has an `error` field or its status is
    /// outside `[200, 300)`. The error text is `error.message` when present
    /// as a string, number or boolean, the raw body otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for failed responses.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hipchat_api::clients::HttpResponse;
    ///
    /// let response = HttpResponse::new(404, r#"{"error":{"message":"Not found"}}"#);
    /// assert_eq!(response.into_result().unwrap_err().message, "Not found");
    /// ```
    pub fn into_result(self) -> Result<Value, ApiError> {
        if !self.has_error_field() && self.is_ok() {
            return Ok(self.body);
        }

        let message = self
            .error_message()
            .unwrap_or_else(|| self.raw_body.clone());

        Err(ApiError {
            code: self.code,
            message,
        })
    }
}
