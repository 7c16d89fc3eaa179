//! Response envelope types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Entity;

/// Response of entity create/update/save calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityResponse {
    pub status: u16,
    pub success: bool,
    /// The created or updated entity, absent on validation failure.
    #[serde(default)]
    pub resource: Option<Entity>,
    /// Validation errors, absent on success.
    #[serde(default)]
    pub errors: Option<ValidationErrors>,
}

/// Validation errors: either a flat message list or a per-field map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValidationErrors {
    Messages(Vec<String>),
    PerField(BTreeMap<String, Vec<String>>),
}

/// `{data: [...]}` envelope of entity listings.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EntityPage {
    pub data: Vec<Entity>,
}

/// `{total}` envelope of the count endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EntityTotal {
    pub total: i64,
}
