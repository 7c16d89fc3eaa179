//! Notifications.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A notification as delivered by the API. Only the id is typed; the
/// payload varies by notification kind and passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A notification object or a bare identifier.
///
/// Every notification operation normalizes its input to identifiers via
/// [`NotificationRef::into_id`] before building the request.
#[derive(Debug, Clone)]
pub enum NotificationRef {
    Id(String),
    Notification(Notification),
}

impl NotificationRef {
    /// Consume the reference, yielding the identifier.
    pub fn into_id(self) -> String {
        match self {
            NotificationRef::Id(id) => id,
            NotificationRef::Notification(notification) => notification.id,
        }
    }
}

impl From<&str> for NotificationRef {
    fn from(id: &str) -> Self {
        NotificationRef::Id(id.to_string())
    }
}

impl From<String> for NotificationRef {
    fn from(id: String) -> Self {
        NotificationRef::Id(id)
    }
}

impl From<Notification> for NotificationRef {
    fn from(notification: Notification) -> Self {
        NotificationRef::Notification(notification)
    }
}

impl From<&Notification> for NotificationRef {
    fn from(notification: &Notification) -> Self {
        NotificationRef::Notification(notification.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_normalizes_to_id() {
        assert_eq!(NotificationRef::from("abc").into_id(), "abc");
        let notification: Notification =
            serde_json::from_value(serde_json::json!({"id": "abc", "title": "Hi"})).unwrap();
        assert_eq!(NotificationRef::from(notification).into_id(), "abc");
    }

    #[test]
    fn test_payload_passes_through() {
        let notification: Notification = serde_json::from_value(serde_json::json!({
            "id": "n1",
            "read_at": null,
            "data": {"message": "Entity updated"}
        }))
        .unwrap();
        assert_eq!(notification.extra["data"]["message"], "Entity updated");
    }
}
