//! Emoticon endpoints.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HipchatError, HttpMethod, HttpRequest, Payload};
use crate::rest::{unwrap_items, HipchatClient};

/// Which emoticons a listing includes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmoticonType {
    /// Global and group emoticons.
    #[default]
    All,
    /// Group emoticons only.
    Group,
    /// Global emoticons only.
    Global,
}

impl EmoticonType {
    /// Returns the query string value for this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Group => "group",
            Self::Global => "global",
        }
    }
}

/// Paging and filtering for [`HipchatClient::emoticons_with`].
///
/// Unset fields fall back to `start-index=0`, `max-results=100`, `type=all`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmoticonListParams {
    /// Index of the first emoticon to return.
    pub start_index: Option<u64>,
    /// Maximum number of emoticons to return.
    pub max_results: Option<u64>,
    /// Which emoticons to include.
    pub emoticon_type: Option<EmoticonType>,
}

impl EmoticonListParams {
    /// Returns the query parameters, defaults applied, in wire order.
    #[must_use]
    pub fn to_query(&self) -> Payload {
        let mut query = Payload::new();
        query.insert("start-index".to_string(), self.start_index.unwrap_or(0).into());
        query.insert(
            "max-results".to_string(),
            self.max_results.unwrap_or(100).into(),
        );
        query.insert(
            "type".to_string(),
            self.emoticon_type.unwrap_or_default().as_str().into(),
        );
        query
    }
}

/// Identifies an emoticon by numeric id or by shortcut.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EmoticonRef {
    /// The numeric emoticon id.
    Id(u64),
    /// The emoticon shortcut, e.g. `fonzie`.
    Shortcut(String),
}

impl fmt::Display for EmoticonRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Shortcut(shortcut) => f.write_str(shortcut),
        }
    }
}

impl From<u64> for EmoticonRef {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for EmoticonRef {
    fn from(shortcut: &str) -> Self {
        Self::Shortcut(shortcut.to_string())
    }
}

impl From<String> for EmoticonRef {
    fn from(shortcut: String) -> Self {
        Self::Shortcut(shortcut)
    }
}

impl HipchatClient {
    /// Lists emoticons using the server's default paging.
    ///
    /// # Errors
    ///
    /// Returns [`HipchatError`] if the request fails or the response has no
    /// `items` array.
    pub async fn emoticons(&self) -> Result<Vec<Value>, HipchatError> {
        unwrap_items(self.get("emoticon".to_string()).await?)
    }

    /// Lists emoticons with explicit paging and filtering.
    ///
    /// # Errors
    ///
    /// Returns [`HipchatError`] if the request fails or the response has no
    /// `items` array.
    pub async fn emoticons_with(
        &self,
        params: &EmoticonListParams,
    ) -> Result<Vec<Value>, HipchatError> {
        let request = HttpRequest::builder(HttpMethod::Get, "emoticon")
            .payload(params.to_query())
            .build()?;
        unwrap_items(self.http_client.request(request).await?)
    }

    /// Fetches a single emoticon by id or shortcut.
    ///
    /// # Errors
    ///
    /// Returns [`HipchatError`] if the request fails.
    pub async fn get_emoticon(
        &self,
        emoticon: impl Into<EmoticonRef>,
    ) -> Result<Value, HipchatError> {
        self.get(format!("emoticon/{}", emoticon.into())).await
    }
}
