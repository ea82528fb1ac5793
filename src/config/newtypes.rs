//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated HipChat API token.
///
/// This newtype ensures the token is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use hipchat_api::AuthToken;
///
/// let token = AuthToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "AuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new validated auth token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAuthToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(*****)")
    }
}

/// The root URL every resource path is resolved against.
///
/// The root must carry a scheme and a host. A trailing `/` is appended when
/// missing so that resource paths can be concatenated directly.
///
/// # Example
///
/// ```rust
/// use hipchat_api::ApiRoot;
///
/// let root = ApiRoot::new("http://localhost:8080/v2").unwrap();
/// assert_eq!(root.as_ref(), "http://localhost:8080/v2/");
/// assert_eq!(root.scheme(), "http");
/// assert_eq!(root.host_name(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRoot {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiRoot {
    /// The public HipChat v2 API root.
    pub const HIPCHAT_V2: &'static str = "https://api.hipchat.com/v2/";

    /// Creates a new validated API root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiRoot`] if the URL has no scheme or host,
    /// or carries a query string or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let mut url = url.into().trim().to_string();
        let invalid = |url: &str| ConfigError::InvalidApiRoot {
            url: url.to_string(),
        };

        let scheme_end = url.find("://").ok_or_else(|| invalid(&url))?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid(&url));
        }

        if url.contains(['?', '#']) {
            return Err(invalid(&url));
        }

        let host_start = scheme_end + 3;
        let remainder = url.get(host_start..).ok_or_else(|| invalid(&url))?;
        let host_end = remainder
            .find([':', '/'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid(&url));
        }

        if !url.ends_with('/') {
            url.push('/');
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for ApiRoot {
    fn default() -> Self {
        Self {
            url: Self::HIPCHAT_V2.to_string(),
            scheme_end: 5,
            host_start: 8,
            host_end: 23,
        }
    }
}

impl AsRef<str> for ApiRoot {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ApiRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
