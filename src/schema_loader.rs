//! JSON Schema checks for serialized catalog entities.
//!
//! The schema lives next to the shard directory (`resources/schema.json`) and
//! describes one `PokemonEntity` as the query engine serializes it. The CLI's
//! `validate` command and the integration suite both run every entity through
//! it.

use crate::catalog::PokemonEntity;
use anyhow::{Context, Result, anyhow};
use jsonschema::JSONSchema;
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::path::{Path, PathBuf};

pub const SCHEMA_FILE: &str = "schema.json";

/// `schema.json` beside the shard directory.
pub fn default_schema_path(resource_dir: &Path) -> PathBuf {
    match resource_dir.parent() {
        Some(parent) => parent.join(SCHEMA_FILE),
        None => resource_dir.join(SCHEMA_FILE),
    }
}

/// A compiled entity schema.
pub struct EntitySchema {
    path: PathBuf,
    compiled: JSONSchema,
}

#[derive(Clone, Debug, Serialize)]
/// Every schema error reported for one entity.
pub struct SchemaViolation {
    pub id: String,
    #[serde(rename = "formId", skip_serializing_if = "Option::is_none")]
    pub form_id: Option<String>,
    pub errors: Vec<String>,
}

impl EntitySchema {
    pub fn load(path: &Path) -> Result<Self> {
        let schema: Value = serde_json::from_reader(
            File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
        )
        .with_context(|| format!("parsing schema {}", path.display()))?;
        Self::from_value(&schema, path)
    }

    pub fn from_value(schema: &Value, path: &Path) -> Result<Self> {
        let compiled = JSONSchema::compile(schema)
            .map_err(|err| anyhow!("compiling schema {}: {err}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            compiled,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Error messages for `instance`, each prefixed with the failing JSON
    /// pointer. Empty when the instance is valid.
    pub fn validate(&self, instance: &Value) -> Vec<String> {
        match self.compiled.validate(instance) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .map(|err| format!("{}: {}", err.instance_path, err))
                .collect(),
        }
    }

    /// Serialize and check each entity; returns only the failing ones.
    pub fn validate_entities(&self, entities: &[PokemonEntity]) -> Result<Vec<SchemaViolation>> {
        let mut violations = Vec::new();
        for entity in entities {
            let value = serde_json::to_value(entity)
                .with_context(|| format!("serializing entity {}", entity.id))?;
            let errors = self.validate(&value);
            if !errors.is_empty() {
                violations.push(SchemaViolation {
                    id: entity.id.clone(),
                    form_id: entity.form_id.clone(),
                    errors,
                });
            }
        }
        Ok(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn bundled_schema() -> Result<EntitySchema> {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("resources")
            .join(SCHEMA_FILE);
        EntitySchema::load(&path)
    }

    fn pikachu() -> Value {
        json!({
            "id": "25",
            "localId": {"galar": "194", "paldea": "74"},
            "name": "Pikachu",
            "type": ["Electric"],
            "ability": [
                {"name": "Static", "hidden": false},
                {"name": "Lightning Rod", "hidden": true}
            ],
            "eggGroup": ["Field", "Fairy"],
            "baseStats": {"H": "35", "A": "55", "B": "40", "C": "50", "D": "50", "S": "90"},
            "generation": 1
        })
    }

    #[test]
    fn accepts_a_serialized_entity() -> Result<()> {
        let schema = bundled_schema()?;
        assert!(schema.validate(&pikachu()).is_empty());
        Ok(())
    }

    #[test]
    fn reports_pointer_of_each_failure() -> Result<()> {
        let schema = bundled_schema()?;
        let mut value = pikachu();
        value["baseStats"]["H"] = json!("thirty");
        value["type"] = json!([]);
        let errors = schema.validate(&value);
        assert_eq!(errors.len(), 2, "{errors:?}");
        assert!(errors.iter().any(|err| err.starts_with("/baseStats/H")));
        assert!(errors.iter().any(|err| err.starts_with("/type")));
        Ok(())
    }

    #[test]
    fn stat_total_is_not_part_of_the_wire_shape() -> Result<()> {
        let schema = bundled_schema()?;
        let mut value = pikachu();
        value["baseStats"]["total"] = json!(320);
        let errors = schema.validate(&value);
        assert_eq!(errors.len(), 1, "{errors:?}");
        assert!(errors[0].starts_with("/baseStats"));
        Ok(())
    }

    #[test]
    fn form_id_requires_form_name() -> Result<()> {
        let schema = bundled_schema()?;
        let mut value = pikachu();
        value["formId"] = json!("1");
        assert!(!schema.validate(&value).is_empty());
        value["formName"] = json!("Partner");
        assert!(schema.validate(&value).is_empty());
        Ok(())
    }

    #[test]
    fn unreadable_or_invalid_schema_is_an_error() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join(SCHEMA_FILE);
        assert!(EntitySchema::load(&path).is_err());
        fs::write(&path, "{\"type\": ")?;
        assert!(EntitySchema::load(&path).is_err());
        Ok(())
    }

    #[test]
    fn schema_sits_beside_the_shard_directory() {
        assert_eq!(
            default_schema_path(Path::new("/data/resources/pokemon")),
            PathBuf::from("/data/resources/schema.json")
        );
    }
}
