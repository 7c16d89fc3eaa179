//! Webhook events.

use reqwest::Response;
use serde_json::Value;

use brezel_core::error::BrezelResult;

use crate::client::Client;
use crate::models::EntityRef;
use crate::url::{Params, Segment};

/// A named webhook trigger, optionally scoped to a module.
///
/// Events are not looked up before firing; an unknown identifier surfaces
/// as the server's 404.
#[derive(Debug, Clone)]
pub struct Event {
    pub identifier: String,
    pub module: Option<String>,
}

impl Event {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            module: None,
        }
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Fire this event, optionally scoped to an entity.
    ///
    /// The entity reference may be a full entity (its id is extracted) or a
    /// bare id; both produce the same path. Module and entity segments are
    /// only included when present.
    pub async fn fire(
        &self,
        client: &Client,
        entity: Option<EntityRef>,
        data: &Value,
    ) -> BrezelResult<Response> {
        let path: [Segment; 4] = [
            "webhook".into(),
            self.identifier.as_str().into(),
            self.module.as_deref().into(),
            entity.and_then(|e| e.id()).into(),
        ];
        client.post(&path, &Params::new(), Some(data)).await
    }
}

impl Client {
    /// Fire an event by identifier for an optional module and entity.
    pub async fn fire_event(
        &self,
        identifier: &str,
        module: Option<&str>,
        entity: Option<EntityRef>,
        data: &Value,
    ) -> BrezelResult<Response> {
        let mut event = Event::new(identifier);
        if let Some(module) = module {
            event = event.with_module(module);
        }
        event.fire(self, entity, data).await
    }
}
