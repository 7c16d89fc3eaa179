//! Notification and web-push endpoints.
//!
//! Bulk operations live under the plural `/notifications` path; per-item
//! operations under the singular `/notification/{id}`. All of them accept
//! notification objects or bare identifiers and normalize to identifiers
//! before building the request.

use serde_json::Value;

use brezel_core::error::BrezelResult;

use crate::client::Client;
use crate::models::NotificationRef;
use crate::url::{Params, Segment};

fn into_ids(notifications: Vec<NotificationRef>) -> Vec<String> {
    notifications
        .into_iter()
        .map(NotificationRef::into_id)
        .collect()
}

impl Client {
    /// List notifications, optionally paginated.
    pub async fn fetch_notifications(&self, page: Option<u32>) -> BrezelResult<Value> {
        let mut params = Params::new();
        params.insert_opt("page", page);
        let response = self.get(&["notifications".into()], &params).await?;
        Client::decode_json(response).await
    }

    /// Mark a batch of notifications read.
    pub async fn read_notifications(
        &self,
        notifications: Vec<NotificationRef>,
    ) -> BrezelResult<Value> {
        let body = serde_json::json!({ "notifications": into_ids(notifications) });
        let response = self
            .patch(
                &["notifications".into(), "read".into()],
                &Params::new(),
                Some(&body),
            )
            .await?;
        Client::decode_json(response).await
    }

    /// Delete a batch of notifications.
    pub async fn delete_notifications(
        &self,
        notifications: Vec<NotificationRef>,
    ) -> BrezelResult<Value> {
        let body = serde_json::json!({ "notifications": into_ids(notifications) });
        let response = self
            .delete(
                &["notifications".into(), "delete".into()],
                &Params::new(),
                Some(&body),
            )
            .await?;
        Client::decode_json(response).await
    }

    /// Delete every notification of the current user.
    pub async fn delete_all_notifications(&self) -> BrezelResult<Value> {
        let response = self
            .patch(
                &["notifications".into(), "deleteAll".into()],
                &Params::new(),
                None,
            )
            .await?;
        Client::decode_json(response).await
    }

    /// Invoke a named action on one notification.
    pub async fn call_notification_action(
        &self,
        notification: impl Into<NotificationRef>,
        action: &str,
    ) -> BrezelResult<()> {
        let path: [Segment; 4] = [
            "notification".into(),
            notification.into().into_id().into(),
            "action".into(),
            action.into(),
        ];
        self.post(&path, &Params::new(), None).await?;
        Ok(())
    }

    /// Mark one notification read.
    pub async fn read_notification(
        &self,
        notification: impl Into<NotificationRef>,
    ) -> BrezelResult<Value> {
        let path: [Segment; 3] = [
            "notification".into(),
            notification.into().into_id().into(),
            "read".into(),
        ];
        let response = self.post(&path, &Params::new(), None).await?;
        Client::decode_json(response).await
    }

    /// Mark one notification unread.
    pub async fn unread_notification(
        &self,
        notification: impl Into<NotificationRef>,
    ) -> BrezelResult<Value> {
        let path: [Segment; 3] = [
            "notification".into(),
            notification.into().into_id().into(),
            "unread".into(),
        ];
        let response = self.post(&path, &Params::new(), None).await?;
        Client::decode_json(response).await
    }

    // --- Web push ---

    /// Fetch the server's VAPID public key for push subscriptions.
    pub async fn fetch_vapid_public_key(&self) -> BrezelResult<String> {
        let response = self
            .get(&["webPush".into(), "publicKey".into()], &Params::new())
            .await?;
        Client::decode_text(response).await
    }

    /// Register a browser push subscription. The subscription object is
    /// treated as opaque and passed through.
    pub async fn subscribe_to_web_push(&self, subscription: &Value) -> BrezelResult<()> {
        let body = serde_json::json!({ "subscription": subscription });
        self.post(
            &["webPush".into(), "subscribe".into()],
            &Params::new(),
            Some(&body),
        )
        .await?;
        Ok(())
    }

    /// Remove a browser push subscription.
    pub async fn unsubscribe_from_web_push(&self, subscription: &Value) -> BrezelResult<()> {
        let body = serde_json::json!({ "subscription": subscription });
        self.post(
            &["webPush".into(), "unsubscribe".into()],
            &Params::new(),
            Some(&body),
        )
        .await?;
        Ok(())
    }
}
