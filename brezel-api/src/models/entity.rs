//! Entities: instances of data belonging to a module.
//!
//! Entities are open mappings. The fields the client itself depends on
//! (`id`, the module back-reference, `saveId`) are typed; every other key
//! passes through the flattened attribute map untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::module::Module;

/// An entity as exchanged with the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Back-reference to the owning module. Stripped from create and
    /// auto-save bodies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleRef>,

    /// Auto-save revision id, present on drafts.
    #[serde(default, rename = "saveId", skip_serializing_if = "Option::is_none")]
    pub save_id: Option<i64>,

    /// Domain-specific fields, passed through untouched.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a domain attribute.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Set a domain attribute, returning the entity for chaining.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// A copy of this entity with the module back-reference removed.
    ///
    /// Create and auto-save requests must not echo the module descriptor
    /// back to the server.
    pub fn without_module(&self) -> Entity {
        let mut entity = self.clone();
        entity.module = None;
        entity
    }
}

/// Minimal module back-reference carried inside an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRef {
    pub identifier: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ModuleRef {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            extra: Map::new(),
        }
    }
}

impl From<&Module> for ModuleRef {
    fn from(module: &Module) -> Self {
        ModuleRef::new(module.identifier.clone())
    }
}

/// An entity-shaped value or a bare id.
///
/// Operations that accept either (webhook events) normalize through
/// [`EntityRef::id`] once at their boundary.
#[derive(Debug, Clone)]
pub enum EntityRef {
    Id(i64),
    Entity(Entity),
}

impl EntityRef {
    /// The id this reference resolves to, if any.
    pub fn id(&self) -> Option<i64> {
        match self {
            EntityRef::Id(id) => Some(*id),
            EntityRef::Entity(entity) => entity.id,
        }
    }
}

impl From<i64> for EntityRef {
    fn from(id: i64) -> Self {
        EntityRef::Id(id)
    }
}

impl From<Entity> for EntityRef {
    fn from(entity: Entity) -> Self {
        EntityRef::Entity(entity)
    }
}

impl From<&Entity> for EntityRef {
    fn from(entity: &Entity) -> Self {
        EntityRef::Entity(entity.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_pass_through() {
        let entity: Entity = serde_json::from_value(serde_json::json!({
            "id": 1,
            "module": {"identifier": "module1"},
            "title": "Perfect",
            "tags": ["a", "b"]
        }))
        .unwrap();
        assert_eq!(entity.id, Some(1));
        assert_eq!(entity.attribute("title"), Some(&Value::from("Perfect")));

        let back = serde_json::to_value(&entity).unwrap();
        assert_eq!(back["tags"], serde_json::json!(["a", "b"]));
        assert_eq!(back["module"]["identifier"], "module1");
    }

    #[test]
    fn test_absent_core_fields_not_serialized() {
        let entity = Entity::new().with_attribute("title", "Draft");
        let json = serde_json::to_value(&entity).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("module").is_none());
        assert!(json.get("saveId").is_none());
        assert_eq!(json["title"], "Draft");
    }

    #[test]
    fn test_without_module_does_not_mutate() {
        let entity: Entity = serde_json::from_value(serde_json::json!({
            "id": 1,
            "module": {"identifier": "module1"}
        }))
        .unwrap();
        let stripped = entity.without_module();
        assert!(stripped.module.is_none());
        assert!(entity.module.is_some());
    }

    #[test]
    fn test_save_id_rename() {
        let entity: Entity =
            serde_json::from_value(serde_json::json!({"id": 1, "saveId": 9})).unwrap();
        assert_eq!(entity.save_id, Some(9));
    }

    #[test]
    fn test_entity_ref_id_resolution() {
        assert_eq!(EntityRef::from(7).id(), Some(7));
        let entity: Entity = serde_json::from_value(serde_json::json!({"id": 7})).unwrap();
        assert_eq!(EntityRef::from(&entity).id(), Some(7));
        assert_eq!(EntityRef::from(Entity::new()).id(), None);
    }
}
