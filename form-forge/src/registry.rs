//! Component registry for looking up field kinds.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{FormError, FormResult};
use crate::kind::FieldKind;
use crate::kinds;

/// A named palette group of field kinds.
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    kinds: Vec<Arc<dyn FieldKind>>,
}

impl Category {
    /// Category name as shown in palettes.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kinds in palette order.
    pub fn kinds(&self) -> impl Iterator<Item = &dyn FieldKind> {
        self.kinds.iter().map(|k| k.as_ref())
    }

    /// Number of kinds in this category.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Check if the category holds no kinds.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

/// A registry of field kinds grouped into ordered categories.
///
/// Kind identifiers are unique across the whole registry, not per
/// category. Descriptors are shared read-only; the registry never hands
/// out mutable access to them.
#[derive(Debug, Default, Clone)]
pub struct ComponentRegistry {
    categories: Vec<Category>,
    index: HashMap<&'static str, Arc<dyn FieldKind>>,
}

impl ComponentRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in kind.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (category, kinds) in kinds::builtin_categories() {
            for kind in kinds {
                // Built-in kind identifiers are distinct.
                if let Err(e) = registry.register(category, kind) {
                    tracing::error!(error = %e, "skipping built-in kind");
                }
            }
        }
        registry
    }

    /// Register a kind under `category`, creating the category on first use.
    pub fn register(&mut self, category: &str, kind: Arc<dyn FieldKind>) -> FormResult<()> {
        let id = kind.kind();
        if self.index.contains_key(id) {
            return Err(FormError::DuplicateKind {
                kind: id.to_string(),
            });
        }

        match self.categories.iter_mut().find(|c| c.name == category) {
            Some(existing) => existing.kinds.push(Arc::clone(&kind)),
            None => self.categories.push(Category {
                name: category.to_string(),
                kinds: vec![Arc::clone(&kind)],
            }),
        }
        self.index.insert(id, kind);
        tracing::debug!(kind = %id, category = %category, "kind registered");
        Ok(())
    }

    /// Look up a kind by identifier.
    pub fn lookup(&self, kind: &str) -> FormResult<&dyn FieldKind> {
        self.index
            .get(kind)
            .map(|k| k.as_ref())
            .ok_or_else(|| FormError::unknown_kind(kind))
    }

    /// Check if a kind is registered.
    pub fn contains(&self, kind: &str) -> bool {
        self.index.contains_key(kind)
    }

    /// Categories in registration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All kinds, category by category.
    pub fn kinds(&self) -> impl Iterator<Item = &dyn FieldKind> {
        self.categories.iter().flat_map(|c| c.kinds())
    }

    /// Get the number of registered kinds.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
