//! Module descriptors.
//!
//! A module is the server-side definition of an entity type: identifier,
//! field list, and options. The identifier is the stable key used in every
//! entity-scoped request path.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fallback auto-save lifetime when the module configures none.
pub const DEFAULT_AUTO_SAVE_LIFETIME_DAYS: i64 = 3;

/// Server-side definition of an entity type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub id: i64,
    pub identifier: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub options: ModuleOptions,
}

/// One field definition within a module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub id: i64,
    pub identifier: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub options: Map<String, Value>,
}

/// Module options. Known keys are typed; everything else passes through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleOptions {
    /// Auto-save lifetime in days; the server delivers this as either a
    /// number or a numeric string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_save_lifetime: Option<AutoSaveLifetime>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `auto_save_lifetime` as delivered by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AutoSaveLifetime {
    Days(i64),
    Text(String),
}

impl ModuleOptions {
    /// Resolve the auto-save lifetime in days.
    ///
    /// Absent, zero, or unparseable values fall back to
    /// [`DEFAULT_AUTO_SAVE_LIFETIME_DAYS`].
    pub fn auto_save_lifetime_days(&self) -> i64 {
        match &self.auto_save_lifetime {
            Some(AutoSaveLifetime::Days(n)) if *n != 0 => *n,
            Some(AutoSaveLifetime::Text(s)) => s
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|n| *n != 0)
                .unwrap_or(DEFAULT_AUTO_SAVE_LIFETIME_DAYS),
            _ => DEFAULT_AUTO_SAVE_LIFETIME_DAYS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(value: Value) -> ModuleOptions {
        serde_json::from_value(serde_json::json!({ "auto_save_lifetime": value })).unwrap()
    }

    #[test]
    fn test_lifetime_from_number() {
        assert_eq!(options(Value::from(7)).auto_save_lifetime_days(), 7);
    }

    #[test]
    fn test_lifetime_from_string() {
        assert_eq!(options(Value::from("7")).auto_save_lifetime_days(), 7);
    }

    #[test]
    fn test_lifetime_defaults() {
        assert_eq!(
            ModuleOptions::default().auto_save_lifetime_days(),
            DEFAULT_AUTO_SAVE_LIFETIME_DAYS
        );
        assert_eq!(options(Value::from(0)).auto_save_lifetime_days(), 3);
        assert_eq!(options(Value::from("0")).auto_save_lifetime_days(), 3);
        assert_eq!(options(Value::from("soon")).auto_save_lifetime_days(), 3);
    }

    #[test]
    fn test_module_deserialize_defaults() {
        let module: Module =
            serde_json::from_str(r#"{"id": 1, "identifier": "module1"}"#).unwrap();
        assert_eq!(module.identifier, "module1");
        assert!(module.fields.is_empty());
        assert!(module.options.auto_save_lifetime.is_none());
    }

    #[test]
    fn test_module_options_keep_unknown_keys() {
        let module: Module = serde_json::from_value(serde_json::json!({
            "id": 1,
            "identifier": "module1",
            "options": {"auto_save_lifetime": "5", "color": "red"}
        }))
        .unwrap();
        assert_eq!(module.options.auto_save_lifetime_days(), 5);
        assert_eq!(module.options.extra["color"], "red");
    }

    #[test]
    fn test_field_type_rename() {
        let field: Field = serde_json::from_value(serde_json::json!({
            "id": 1,
            "identifier": "title",
            "type": "text"
        }))
        .unwrap();
        assert_eq!(field.field_type, "text");
    }
}
