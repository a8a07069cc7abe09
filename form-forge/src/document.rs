//! JSON persistence for form definitions.
//!
//! A document stores the ordered field list only; the selection is
//! editor state and is not persisted. Loading re-checks every model
//! invariant, so a hand-edited document cannot produce a definition the
//! editing operations could not have produced.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{FormError, FormResult};
use crate::model::{FieldInstance, FormDefinition};
use crate::naming;
use crate::registry::ComponentRegistry;

/// Current document format version.
pub const DOCUMENT_VERSION: u32 = 1;

/// Serialized form of a [`FormDefinition`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDocument {
    pub version: u32,
    #[serde(default)]
    pub fields: Vec<FieldInstance>,
}

impl Default for FormDocument {
    fn default() -> Self {
        Self {
            version: DOCUMENT_VERSION,
            fields: Vec::new(),
        }
    }
}

impl FormDocument {
    /// Snapshot a definition.
    pub fn from_definition(form: &FormDefinition) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            fields: form.instances().to_vec(),
        }
    }

    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> FormResult<Self> {
        serde_json::from_str(json).map_err(|e| FormError::Document(e.to_string()))
    }

    /// Serialize to pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> FormResult<String> {
        let mut json =
            serde_json::to_string_pretty(self).map_err(|e| FormError::Document(e.to_string()))?;
        json.push('\n');
        Ok(json)
    }

    /// Validate the document and turn it into an editable definition.
    pub fn into_definition(self, registry: &ComponentRegistry) -> FormResult<FormDefinition> {
        self.validate(registry)?;
        Ok(FormDefinition::from_instances(self.fields))
    }

    /// Check version, kinds, names, and id/name uniqueness.
    pub fn validate(&self, registry: &ComponentRegistry) -> FormResult<()> {
        if self.version != DOCUMENT_VERSION {
            return Err(FormError::Document(format!(
                "unsupported document version {} (expected {})",
                self.version, DOCUMENT_VERSION
            )));
        }

        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for field in &self.fields {
            registry.lookup(&field.kind)?;
            naming::validate_name(&field.name)?;

            if !ids.insert(field.id) {
                return Err(FormError::Document(format!("duplicate field id {}", field.id)));
            }
            if !names.insert(field.name.as_str()) {
                let holder = self
                    .fields
                    .iter()
                    .find(|f| f.name == field.name)
                    .map_or(field.id, |f| f.id);
                return Err(FormError::DuplicateName {
                    name: field.name.clone(),
                    holder,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldId;

    fn sample() -> (ComponentRegistry, FormDefinition) {
        let registry = ComponentRegistry::builtin();
        let mut form = FormDefinition::new();
        let email = form.add_field(&registry, "email").unwrap();
        form.add_field(&registry, "select").unwrap();
        form.rename_field(email, "work_email").unwrap();
        (registry, form)
    }

    #[test]
    fn test_save_and_load() {
        let (registry, form) = sample();
        let json = FormDocument::from_definition(&form).to_json().unwrap();
        assert!(json.contains("\"version\": 1"));
        assert!(json.contains("\"customOptions\""));

        let loaded = FormDocument::from_json(&json)
            .unwrap()
            .into_definition(&registry)
            .unwrap();
        assert_eq!(loaded.instances(), form.instances());
        assert_eq!(loaded.selected_id(), None);
    }

    #[test]
    fn test_rejects_unknown_version() {
        let registry = ComponentRegistry::builtin();
        let doc = FormDocument {
            version: 7,
            fields: Vec::new(),
        };
        assert!(matches!(
            doc.into_definition(&registry),
            Err(FormError::Document(msg)) if msg.contains("version 7")
        ));
    }

    #[test]
    fn test_rejects_unknown_kind() {
        let (registry, form) = sample();
        let mut doc = FormDocument::from_definition(&form);
        doc.fields[1].kind = "slider".to_string();
        assert_eq!(
            doc.validate(&registry).unwrap_err(),
            FormError::unknown_kind("slider")
        );
    }

    #[test]
    fn test_rejects_invalid_and_duplicate_names() {
        let (registry, form) = sample();

        let mut doc = FormDocument::from_definition(&form);
        doc.fields[1].name = "1st".to_string();
        assert!(matches!(
            doc.validate(&registry),
            Err(FormError::InvalidName { .. })
        ));

        let mut doc = FormDocument::from_definition(&form);
        doc.fields[1].name = "work_email".to_string();
        assert_eq!(
            doc.validate(&registry).unwrap_err(),
            FormError::DuplicateName {
                name: "work_email".to_string(),
                holder: doc.fields[0].id,
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let (registry, form) = sample();
        let mut doc = FormDocument::from_definition(&form);
        let id: FieldId = doc.fields[0].id;
        doc.fields[1].id = id;
        assert!(matches!(
            doc.validate(&registry),
            Err(FormError::Document(msg)) if msg.starts_with("duplicate field id")
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            FormDocument::from_json("{\"version\": "),
            Err(FormError::Document(_))
        ));
    }

    #[test]
    fn test_custom_options_default_when_missing() {
        let registry = ComponentRegistry::builtin();
        let json = format!(
            r#"{{"version":1,"fields":[{{"id":"{}","name":"terms","kind":"checkbox","props":{{"label":"Terms"}}}}]}}"#,
            FieldId::new().as_uuid()
        );
        let form = FormDocument::from_json(&json)
            .unwrap()
            .into_definition(&registry)
            .unwrap();
        assert!(form.instances()[0].custom_options.is_empty());
    }
}
