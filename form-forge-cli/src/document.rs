//! Form documents on disk.
//!
//! Every edit is load, apply, save: the document is only rewritten when
//! the operation succeeds, so a rejected edit leaves the file untouched.

use std::path::{Path, PathBuf};

use form_forge::{ComponentRegistry, FormDefinition, FormDocument, FormResult};

use crate::error::{CliResult, DocumentError};
use crate::writer::FileWriter;

/// A form document at a fixed path.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    /// Create a store for the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an empty document.
    ///
    /// Fails if the document exists and `force` is not set.
    pub fn create(&self, force: bool) -> CliResult<()> {
        if self.path.exists() && !force {
            return Err(DocumentError::AlreadyExists {
                path: self.path.clone(),
            }
            .into());
        }
        self.save(&FormDefinition::new())
    }

    /// Load and validate the document.
    pub fn load(&self, registry: &ComponentRegistry) -> CliResult<FormDefinition> {
        if !self.path.exists() {
            return Err(DocumentError::NotFound {
                path: self.path.clone(),
            }
            .into());
        }

        let json = std::fs::read_to_string(&self.path)
            .map_err(|e| DocumentError::io(&self.path, e))?;
        let form = FormDocument::from_json(&json)
            .and_then(|doc| doc.into_definition(registry))
            .map_err(|source| DocumentError::Invalid {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(path = %self.path.display(), fields = form.len(), "document loaded");
        Ok(form)
    }

    /// Save a definition, replacing the document.
    pub fn save(&self, form: &FormDefinition) -> CliResult<()> {
        let json = FormDocument::from_definition(form).to_json()?;
        FileWriter::new(false).write(&self.path, &json)?;
        Ok(())
    }

    /// Apply one operation to the stored definition.
    ///
    /// The document is saved only when `op` succeeds.
    pub fn edit<T>(
        &self,
        registry: &ComponentRegistry,
        op: impl FnOnce(&mut FormDefinition) -> FormResult<T>,
    ) -> CliResult<T> {
        let mut form = self.load(registry)?;
        let value = op(&mut form)?;
        self.save(&form)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use form_forge::FormError;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> DocumentStore {
        DocumentStore::new(dir.path().join("signup.json"))
    }

    #[test]
    fn test_create_and_load_empty() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.create(false).unwrap();

        let form = store.load(&ComponentRegistry::builtin()).unwrap();
        assert!(form.is_empty());
    }

    #[test]
    fn test_create_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.create(false).unwrap();

        assert!(matches!(
            store.create(false),
            Err(CliError::Document(DocumentError::AlreadyExists { .. }))
        ));
        store.create(true).unwrap();
    }

    #[test]
    fn test_edit_persists_on_success() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let registry = ComponentRegistry::builtin();
        store.create(false).unwrap();

        let id = store
            .edit(&registry, |form| form.add_field(&registry, "email"))
            .unwrap();

        let form = store.load(&registry).unwrap();
        assert_eq!(form.len(), 1);
        assert_eq!(form.instances()[0].id, id);
    }

    #[test]
    fn test_failed_edit_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let registry = ComponentRegistry::builtin();
        store.create(false).unwrap();
        store
            .edit(&registry, |form| form.add_field(&registry, "text"))
            .unwrap();
        let before = std::fs::read_to_string(store.path()).unwrap();

        let result = store.edit(&registry, |form| {
            form.reset();
            form.add_field(&registry, "slider")
        });
        assert!(matches!(
            result,
            Err(CliError::Form(FormError::UnknownKind { .. }))
        ));
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn test_load_missing_and_invalid() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let registry = ComponentRegistry::builtin();

        assert!(matches!(
            store.load(&registry),
            Err(CliError::Document(DocumentError::NotFound { .. }))
        ));

        std::fs::write(store.path(), "{ not json").unwrap();
        assert!(matches!(
            store.load(&registry),
            Err(CliError::Document(DocumentError::Invalid { .. }))
        ));
    }
}
