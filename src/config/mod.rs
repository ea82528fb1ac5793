//! Configuration types for the HipChat API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HipchatConfig`]: The configuration struct holding all client settings
//! - [`HipchatConfigBuilder`]: A builder for constructing [`HipchatConfig`] instances
//! - [`AuthToken`]: A validated API token newtype with masked debug output
//! - [`ApiRoot`]: A validated API root URL
//!
//! # Example
//!
//! ```rust
//! use hipchat_api::{HipchatConfig, AuthToken};
//!
//! let config = HipchatConfig::builder()
//!     .auth_token(AuthToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_root().as_ref(), "https://api.hipchat.com/v2/");
//! ```

mod newtypes;

pub use newtypes::{ApiRoot, AuthToken};

use std::sync::Arc;

use crate::clients::{NoopLogger, RequestLogger, TracingLogger};
use crate::error::ConfigError;

/// Default number of requests a bulk operation keeps in flight.
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 8;

/// Configuration for the HipChat API client.
///
/// The auth token is fixed for the lifetime of the configuration and of every
/// client built from it.
///
/// # Thread Safety
///
/// `HipchatConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct HipchatConfig {
    auth_token: AuthToken,
    api_root: ApiRoot,
    user_agent_prefix: Option<String>,
    encode_query_values: bool,
    max_concurrent_requests: usize,
    logger: Arc<dyn RequestLogger>,
}

impl HipchatConfig {
    /// Creates a new builder for constructing a `HipchatConfig`.
    #[must_use]
    pub fn builder() -> HipchatConfigBuilder {
        HipchatConfigBuilder::new()
    }

    /// Creates a configuration with defaults for everything but the token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty.
    pub fn with_token(token: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder().auth_token(AuthToken::new(token)?).build()
    }

    /// Returns the auth token.
    #[must_use]
    pub const fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Returns the API root.
    #[must_use]
    pub const fn api_root(&self) -> &ApiRoot {
        &self.api_root
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns whether query keys and values are percent-encoded.
    ///
    /// Defaults to `false`: pairs are appended as raw `&key=value` text,
    /// which existing callers may rely on.
    #[must_use]
    pub const fn encode_query_values(&self) -> bool {
        self.encode_query_values
    }

    /// Returns the number of requests bulk operations keep in flight.
    #[must_use]
    pub const fn max_concurrent_requests(&self) -> usize {
        self.max_concurrent_requests
    }

    /// Returns the request logger.
    #[must_use]
    pub fn logger(&self) -> &Arc<dyn RequestLogger> {
        &self.logger
    }
}

// Verify HipchatConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HipchatConfig>();
};

/// Builder for constructing [`HipchatConfig`] instances.
///
/// # Defaults
///
/// - `api_root`: [`ApiRoot::HIPCHAT_V2`]
/// - `user_agent_prefix`: `None`
/// - `encode_query_values`: `false`
/// - `max_concurrent_requests`: [`DEFAULT_MAX_CONCURRENT_REQUESTS`]
/// - `logger`: [`NoopLogger`]
///
/// # Example
///
/// ```rust
/// use hipchat_api::{HipchatConfig, AuthToken, ApiRoot};
///
/// let config = HipchatConfig::builder()
///     .auth_token(AuthToken::new("token").unwrap())
///     .api_root(ApiRoot::new("http://localhost:8080/v2/").unwrap())
///     .user_agent_prefix("MyBot/1.0")
///     .max_concurrent_requests(4)
///     .debug(true)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct HipchatConfigBuilder {
    auth_token: Option<AuthToken>,
    api_root: Option<ApiRoot>,
    user_agent_prefix: Option<String>,
    encode_query_values: Option<bool>,
    max_concurrent_requests: Option<usize>,
    logger: Option<Arc<dyn RequestLogger>>,
}

impl HipchatConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the auth token (required).
    #[must_use]
    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Sets the API root.
    #[must_use]
    pub fn api_root(mut self, root: ApiRoot) -> Self {
        self.api_root = Some(root);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets whether query keys and values are percent-encoded.
    #[must_use]
    pub const fn encode_query_values(mut self, encode: bool) -> Self {
        self.encode_query_values = Some(encode);
        self
    }

    /// Sets how many requests bulk operations keep in flight.
    #[must_use]
    pub const fn max_concurrent_requests(mut self, limit: usize) -> Self {
        self.max_concurrent_requests = Some(limit);
        self
    }

    /// Injects a request logger.
    #[must_use]
    pub fn logger(mut self, logger: Arc<dyn RequestLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Installs the [`TracingLogger`] when `enabled`, the [`NoopLogger`] otherwise.
    #[must_use]
    pub fn debug(self, enabled: bool) -> Self {
        if enabled {
            self.logger(Arc::new(TracingLogger))
        } else {
            self.logger(Arc::new(NoopLogger))
        }
    }

    /// Builds the [`HipchatConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `auth_token` is not set,
    /// or [`ConfigError::InvalidConcurrencyLimit`] if the limit is zero.
    pub fn build(self) -> Result<HipchatConfig, ConfigError> {
        let auth_token = self.auth_token.ok_or(ConfigError::MissingRequiredField {
            field: "auth_token",
        })?;

        let max_concurrent_requests = self
            .max_concurrent_requests
            .unwrap_or(DEFAULT_MAX_CONCURRENT_REQUESTS);
        if max_concurrent_requests == 0 {
            return Err(ConfigError::InvalidConcurrencyLimit);
        }

        Ok(HipchatConfig {
            auth_token,
            api_root: self.api_root.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            encode_query_values: self.encode_query_values.unwrap_or(false),
            max_concurrent_requests,
            logger: self.logger.unwrap_or_else(|| Arc::new(NoopLogger)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_auth_token() {
        let result = HipchatConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "auth_token"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = HipchatConfig::with_token("token").unwrap();

        assert_eq!(config.auth_token().as_ref(), "token");
        assert_eq!(config.api_root().as_ref(), ApiRoot::HIPCHAT_V2);
        assert!(config.user_agent_prefix().is_none());
        assert!(!config.encode_query_values());
        assert_eq!(
            config.max_concurrent_requests(),
            DEFAULT_MAX_CONCURRENT_REQUESTS
        );
        assert!(format!("{:?}", config.logger()).contains("NoopLogger"));
    }

    #[test]
    fn test_builder_rejects_zero_concurrency() {
        let result = HipchatConfig::builder()
            .auth_token(AuthToken::new("token").unwrap())
            .max_concurrent_requests(0)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidConcurrencyLimit)));
    }

    #[test]
    fn test_debug_installs_tracing_logger() {
        let config = HipchatConfig::builder()
            .auth_token(AuthToken::new("token").unwrap())
            .debug(true)
            .build()
            .unwrap();

        assert!(format!("{:?}", config.logger()).contains("TracingLogger"));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let root = ApiRoot::new("http://localhost:9000/v2").unwrap();
        let config = HipchatConfig::builder()
            .auth_token(AuthToken::new("token").unwrap())
            .api_root(root.clone())
            .user_agent_prefix("MyBot/1.0")
            .encode_query_values(true)
            .max_concurrent_requests(2)
            .build()
            .unwrap();

        assert_eq!(config.api_root(), &root);
        assert_eq!(config.user_agent_prefix(), Some("MyBot/1.0"));
        assert!(config.encode_query_values());
        assert_eq!(config.max_concurrent_requests(), 2);
    }

    #[test]
    fn test_config_debug_masks_token() {
        let config = HipchatConfig::with_token("very-secret").unwrap();
        let debug_str = format!("{config:?}");

        assert!(debug_str.contains("HipchatConfig"));
        assert!(!debug_str.contains("very-secret"));
    }
}
