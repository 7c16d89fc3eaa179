//! Entity CRUD, auto-save, history, and comment endpoints.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use brezel_core::error::{BrezelError, BrezelResult};

use crate::client::Client;
use crate::models::{Entity, FilterExpression, Module};
use crate::response::{EntityPage, EntityResponse, EntityTotal};
use crate::url::{Params, Segment};

/// Query options for entity listings and counts.
///
/// Absent fields never appear in the request query string.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EntitiesQuery {
    /// Compound filter expression, sent as one JSON-encoded parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterExpression>,
    /// Relation names to embed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<u32>,
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Include soft-deleted entities.
    #[serde(rename = "includeTrashed", skip_serializing_if = "Option::is_none")]
    pub include_trashed: Option<bool>,
    /// Restrict the returned columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
}

impl EntitiesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(mut self, filters: impl Into<FilterExpression>) -> Self {
        self.filters = Some(filters.into());
        self
    }

    pub fn with(mut self, relations: Vec<String>) -> Self {
        self.with = Some(relations);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn include_trashed(mut self, include: bool) -> Self {
        self.include_trashed = Some(include);
        self
    }
}

/// Query options for the change-history endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryQuery {
    pub page: u32,
    /// Restrict to changes by one user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Restrict to one change type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub change_type: Option<String>,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            page: 1,
            user: None,
            change_type: None,
        }
    }
}

impl Client {
    /// Fetch a single entity.
    ///
    /// `with_history` also fetches the entity's change log and unread
    /// status, and marks the entity read on the server.
    pub async fn fetch_entity(
        &self,
        module: &str,
        id: i64,
        with_history: bool,
    ) -> BrezelResult<Entity> {
        let mut params = Params::new();
        params.insert_opt("history", with_history.then_some(true));
        let path: [Segment; 4] = ["modules".into(), module.into(), "resources".into(), id.into()];
        let response = self.get(&path, &params).await?;
        Client::decode_json(response).await
    }

    /// List entities of a module.
    pub async fn fetch_entities(
        &self,
        module: &str,
        query: &EntitiesQuery,
    ) -> BrezelResult<Vec<Entity>> {
        let params = Params::from_query(query)?;
        let path: [Segment; 3] = ["modules".into(), module.into(), "resources".into()];
        let response = self.get(&path, &params).await?;
        let page: EntityPage = Client::decode_json(response).await?;
        Ok(page.data)
    }

    /// Count the entities matching a query.
    pub async fn fetch_total_entities(
        &self,
        module: &str,
        query: &EntitiesQuery,
    ) -> BrezelResult<i64> {
        let params = Params::from_query(query)?;
        let path: [Segment; 4] = [
            "modules".into(),
            module.into(),
            "resources".into(),
            "total".into(),
        ];
        let response = self.get(&path, &params).await?;
        let total: EntityTotal = Client::decode_json(response).await?;
        Ok(total.total)
    }

    /// Create an entity. The module back-reference is stripped from the body.
    pub async fn create_entity(
        &self,
        module: &str,
        entity: &Entity,
        params: &Params,
    ) -> BrezelResult<EntityResponse> {
        let body = serde_json::to_value(entity.without_module())?;
        let path: [Segment; 3] = ["modules".into(), module.into(), "resources".into()];
        let response = self.post(&path, params, Some(&body)).await?;
        Client::decode_json(response).await
    }

    /// Update an entity. Partial bodies are accepted.
    pub async fn update_entity(
        &self,
        module: &str,
        id: i64,
        entity: &Entity,
        params: &Params,
    ) -> BrezelResult<EntityResponse> {
        let body = serde_json::to_value(entity)?;
        let path: [Segment; 4] = ["modules".into(), module.into(), "resources".into(), id.into()];
        let response = self.put(&path, params, Some(&body)).await?;
        Client::decode_json(response).await
    }

    /// Save an entity: update when it carries an id, create otherwise.
    pub async fn save_entity(
        &self,
        module: &str,
        entity: &Entity,
        params: &Params,
    ) -> BrezelResult<EntityResponse> {
        match entity.id {
            Some(id) => self.update_entity(module, id, entity, params).await,
            None => self.create_entity(module, entity, params).await,
        }
    }

    /// Delete an entity.
    pub async fn delete_entity(&self, module: &str, id: i64) -> BrezelResult<()> {
        let path: [Segment; 4] = ["modules".into(), module.into(), "resources".into(), id.into()];
        self.delete(&path, &Params::new(), None).await?;
        Ok(())
    }

    /// Store an auto-save draft of an entity.
    ///
    /// The draft body carries a `discard_at` timestamp computed from the
    /// module's auto-save lifetime (default 3 days).
    pub async fn auto_save_entity(&self, module: &Module, entity: &Entity) -> BrezelResult<Value> {
        let body = auto_save_body(module, entity, Utc::now())?;
        let path: [Segment; 4] = [
            "modules".into(),
            module.identifier.as_str().into(),
            "resources".into(),
            "autoSave".into(),
        ];
        let response = self.post(&path, &Params::new(), Some(&body)).await?;
        Client::decode_json(response).await
    }

    /// Restore an entity from an auto-save draft.
    ///
    /// A missing id falls back to 0 (drafts of unsaved entities); a missing
    /// save id collapses out of the path.
    pub async fn restore_entity(&self, module: &str, entity: &Entity) -> BrezelResult<Value> {
        let path: [Segment; 6] = [
            "modules".into(),
            module.into(),
            "resources".into(),
            entity.id.unwrap_or(0).into(),
            "restore".into(),
            entity.save_id.into(),
        ];
        let response = self.get(&path, &Params::new()).await?;
        Client::decode_json(response).await
    }

    /// Diff between an entity and its auto-save draft.
    pub async fn fetch_autosave_diff(&self, module: &str, id: i64) -> BrezelResult<Value> {
        let path: [Segment; 5] = [
            "modules".into(),
            module.into(),
            "resources".into(),
            id.into(),
            "autosaveDiff".into(),
        ];
        let response = self.get(&path, &Params::new()).await?;
        Client::decode_json(response).await
    }

    /// Auto-save configuration of a module.
    pub async fn fetch_autosave_options(&self, module: &str) -> BrezelResult<Value> {
        let path: [Segment; 4] = [
            "modules".into(),
            module.into(),
            "resources".into(),
            "autoSaveOptions".into(),
        ];
        let response = self.get(&path, &Params::new()).await?;
        Client::decode_json(response).await
    }

    /// Paginated change history of an entity.
    pub async fn entity_history(
        &self,
        module: &str,
        id: i64,
        query: &HistoryQuery,
    ) -> BrezelResult<Value> {
        let params = Params::from_query(query)?;
        let path: [Segment; 5] = [
            "modules".into(),
            module.into(),
            "resources".into(),
            id.into(),
            "history".into(),
        ];
        let response = self.get(&path, &params).await?;
        Client::decode_json(response).await
    }

    /// Users who appear in an entity's change history.
    pub async fn entity_history_authors(&self, module: &str, id: i64) -> BrezelResult<Value> {
        let path: [Segment; 6] = [
            "modules".into(),
            module.into(),
            "resources".into(),
            id.into(),
            "history".into(),
            "authors".into(),
        ];
        let response = self.get(&path, &Params::new()).await?;
        Client::decode_json(response).await
    }

    /// Add a comment to an entity. The comment text is trimmed.
    pub async fn add_entity_comment(
        &self,
        module: &str,
        id: i64,
        comment: &str,
    ) -> BrezelResult<Value> {
        let body = serde_json::json!({ "comment": comment.trim() });
        let path: [Segment; 5] = [
            "modules".into(),
            module.into(),
            "resources".into(),
            id.into(),
            "comment".into(),
        ];
        let response = self.post(&path, &Params::new(), Some(&body)).await?;
        Client::decode_json(response).await
    }

    /// Update an existing comment.
    pub async fn save_entity_comment(
        &self,
        module: &str,
        id: i64,
        comment: &str,
        comment_id: i64,
    ) -> BrezelResult<Value> {
        let body = serde_json::json!({ "comment": comment.trim() });
        let path: [Segment; 6] = [
            "modules".into(),
            module.into(),
            "resources".into(),
            id.into(),
            "comment".into(),
            comment_id.into(),
        ];
        let response = self.put(&path, &Params::new(), Some(&body)).await?;
        Client::decode_json(response).await
    }

    /// Delete a comment.
    pub async fn delete_entity_comment(
        &self,
        module: &str,
        id: i64,
        comment_id: i64,
    ) -> BrezelResult<Value> {
        let path: [Segment; 6] = [
            "modules".into(),
            module.into(),
            "resources".into(),
            id.into(),
            "comment".into(),
            comment_id.into(),
        ];
        let response = self.delete(&path, &Params::new(), None).await?;
        Client::decode_json(response).await
    }
}

/// Build the auto-save request body: the entity without its module
/// back-reference, plus the computed `discard_at` timestamp.
fn auto_save_body(module: &Module, entity: &Entity, now: DateTime<Utc>) -> BrezelResult<Value> {
    let mut body = serde_json::to_value(entity.without_module())?;
    let object = body
        .as_object_mut()
        .ok_or_else(|| BrezelError::Serialization("entity must serialize to an object".into()))?;
    let discard_at = now + chrono::Duration::days(module.options.auto_save_lifetime_days());
    object.insert(
        "discard_at".into(),
        Value::String(discard_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    Ok(body)
}
