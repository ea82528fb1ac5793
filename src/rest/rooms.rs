//! Room endpoints.

use std::fmt;

use serde_json::Value;

use crate::clients::{HipchatError, HttpMethod, HttpRequest, Payload};
use crate::rest::{unwrap_items, HipchatClient};

/// Identifies a room by numeric id or by name.
///
/// # Example
///
/// ```rust
/// use hipchat_api::rest::RoomRef;
///
/// assert_eq!(RoomRef::from(42_u64).to_string(), "42");
/// assert_eq!(RoomRef::from("Dev Team").to_string(), "Dev Team");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RoomRef {
    /// The numeric room id.
    Id(u64),
    /// The room name.
    Name(String),
}

impl fmt::Display for RoomRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<u64> for RoomRef {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for RoomRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for RoomRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl HipchatClient {
    /// Lists all rooms.
    ///
    /// Returns the `items` of the response rather than the envelope.
    ///
    /// # Errors
    ///
    /// Returns [`HipchatError`] if the request fails or the response has no
    /// `items` array.
    pub async fn rooms(&self) -> Result<Vec<Value>, HipchatError> {
        unwrap_items(self.get("room".to_string()).await?)
    }

    /// Fetches a single room.
    ///
    /// # Errors
    ///
    /// Returns [`HipchatError`] if the request fails.
    pub async fn get_room(&self, room: impl Into<RoomRef>) -> Result<Value, HipchatError> {
        self.get(format!("room/{}", room.into())).await
    }

    /// Creates a room from the given parameters (e.g. `name`, `privacy`).
    ///
    /// # Errors
    ///
    /// Returns [`HipchatError`] if the request fails.
    pub async fn create_room(&self, params: Payload) -> Result<Value, HipchatError> {
        let request = HttpRequest::builder(HttpMethod::Post, "room")
            .payload(params)
            .build()?;
        self.http_client.request(request).await
    }

    /// Deletes a room.
    ///
    /// # Errors
    ///
    /// Returns [`HipchatError`] if the request fails.
    pub async fn delete_room(&self, room: impl Into<RoomRef>) -> Result<Value, HipchatError> {
        let request =
            HttpRequest::builder(HttpMethod::Delete, format!("room/{}", room.into())).build()?;
        self.http_client.request(request).await
    }

    /// Fetches the message history of a room.
    ///
    /// # Errors
    ///
    /// Returns [`HipchatError`] if the request fails.
    pub async fn history(&self, room: impl Into<RoomRef>) -> Result<Value, HipchatError> {
        self.get(format!("room/{}/history", room.into())).await
    }

    /// Sets the topic of a room.
    ///
    /// # Errors
    ///
    /// Returns [`HipchatError`] if the request fails.
    pub async fn set_topic(
        &self,
        room: impl Into<RoomRef>,
        topic: impl Into<String>,
    ) -> Result<Value, HipchatError> {
        let request = HttpRequest::builder(HttpMethod::Put, format!("room/{}/topic", room.into()))
            .param("topic", topic.into())
            .build()?;
        self.http_client.request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_ref_conversions() {
        assert_eq!(RoomRef::from(7_u64), RoomRef::Id(7));
        assert_eq!(RoomRef::from("Ops"), RoomRef::Name("Ops".to_string()));
        assert_eq!(
            RoomRef::from("Ops".to_string()),
            RoomRef::Name("Ops".to_string())
        );
    }
}
