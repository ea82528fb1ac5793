//! Request URL construction.
//!
//! Every URL has the form
//! `<api root><escaped path>?auth_token=<token>[&key=value...]`.

use std::fmt::Write as _;

use crate::clients::http_request::{scalar_to_string, Payload};
use crate::config::{ApiRoot, AuthToken};

/// Escapes a resource path one segment at a time.
///
/// Separators are kept, every other reserved character is percent-encoded.
///
/// # Example
///
/// ```rust
/// use hipchat_api::clients::escape_path;
///
/// assert_eq!(escape_path("room/Dev Team/history"), "room/Dev%20Team/history");
/// ```
#[must_use]
pub fn escape_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Builds request URLs for a fixed API root and client token.
///
/// Building is pure: the same arguments always produce the same URL.
#[derive(Clone, Debug)]
pub struct UrlBuilder {
    api_root: ApiRoot,
    token: AuthToken,
    encode_query_values: bool,
}

impl UrlBuilder {
    /// Creates a URL builder.
    #[must_use]
    pub const fn new(api_root: ApiRoot, token: AuthToken, encode_query_values: bool) -> Self {
        Self {
            api_root,
            token,
            encode_query_values,
        }
    }

    /// Returns the client token used when no override is given.
    #[must_use]
    pub const fn token(&self) -> &AuthToken {
        &self.token
    }

    /// Builds the URL for `path`.
    ///
    /// `token` replaces the client token when given, even if empty.
    /// Query pairs are appended in the mapping's iteration order; values are
    /// written raw unless query encoding was enabled in the configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hipchat_api::clients::UrlBuilder;
    /// use hipchat_api::{ApiRoot, AuthToken};
    ///
    /// let urls = UrlBuilder::new(ApiRoot::default(), AuthToken::new("abc").unwrap(), false);
    /// assert_eq!(
    ///     urls.build("room/42", None, None),
    ///     "https://api.hipchat.com/v2/room/42?auth_token=abc"
    /// );
    /// ```
    #[must_use]
    pub fn build(&self, path: &str, query: Option<&Payload>, token: Option<&str>) -> String {
        let token = token.unwrap_or_else(|| self.token.as_ref());
        let mut url = format!("{}{}?auth_token={token}", self.api_root, escape_path(path));

        if let Some(query) = query {
            for (key, value) in query {
                let value = scalar_to_string(value);
                if self.encode_query_values {
                    let _ = write!(
                        url,
                        "&{}={}",
                        urlencoding::encode(key),
                        urlencoding::encode(&value)
                    );
                } else {
                    let _ = write!(url, "&{key}={value}");
                }
            }
        }

        url
    }
}
