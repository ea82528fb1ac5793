//! Error types for the HipChat API client.
//!
//! This module contains error types used for configuration and validation
//! errors. Request-time errors live in [`crate::clients`].
//!
//! # Example
//!
//! ```rust
//! use hipchat_api::{AuthToken, ConfigError};
//!
//! let result = AuthToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAuthToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Auth token cannot be empty.
    #[error("Auth token cannot be empty. Please provide a valid HipChat API token.")]
    EmptyAuthToken,

    /// API root URL is invalid.
    #[error("Invalid API root '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.hipchat.com/v2/').")]
    InvalidApiRoot {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The concurrency limit must allow at least one request.
    #[error("Concurrency limit must be at least 1.")]
    InvalidConcurrencyLimit,
}
