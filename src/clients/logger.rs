//! Diagnostic logging of outgoing requests and raw responses.
//!
//! The client never logs on its own. A [`RequestLogger`] is injected through
//! [`HipchatConfigBuilder::logger`](crate::HipchatConfigBuilder::logger) or
//! [`HipchatConfigBuilder::debug`](crate::HipchatConfigBuilder::debug); the
//! default is the [`NoopLogger`].

use std::fmt;

use crate::clients::http_request::HttpMethod;

/// Receives diagnostics for every dispatched request.
pub trait RequestLogger: Send + Sync + fmt::Debug {
    /// Called with the resolved URL before the request is sent.
    fn log_request(&self, method: HttpMethod, url: &str);

    /// Called with the status and raw body of a completed request.
    fn log_response(&self, status: u16, body: &str);
}

/// A logger that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopLogger;

impl RequestLogger for NoopLogger {
    fn log_request(&self, _method: HttpMethod, _url: &str) {}

    fn log_response(&self, _status: u16, _body: &str) {}
}

/// A logger that emits `tracing` debug events.
///
/// The `auth_token` value is masked in logged URLs.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl RequestLogger for TracingLogger {
    fn log_request(&self, method: HttpMethod, url: &str) {
        tracing::debug!(%method, url = %mask_auth_token(url), "URL REQUEST");
    }

    fn log_response(&self, status: u16, body: &str) {
        tracing::debug!(status, body, "RESPONSE");
    }
}

/// Replaces the value of the `auth_token` query parameter with `*****`.
///
/// # Example
///
/// ```rust
/// use hipchat_api::clients::mask_auth_token;
///
/// assert_eq!(
///     mask_auth_token("https://api.hipchat.com/v2/room?auth_token=secret&x=1"),
///     "https://api.hipchat.com/v2/room?auth_token=*****&x=1"
/// );
/// ```
#[must_use]
pub fn mask_auth_token(url: &str) -> String {
    const NEEDLE: &str = "auth_token=";

    let Some(start) = url.find(NEEDLE).map(|i| i + NEEDLE.len()) else {
        return url.to_string();
    };
    let end = url[start..].find('&').map_or(url.len(), |i| start + i);

    format!("{}*****{}", &url[..start], &url[end..])
}
