//! The editable form definition.
//!
//! A [`FormDefinition`] is an ordered list of [`FieldInstance`]s plus the
//! currently selected instance. Every operation is an atomic state
//! transition: it either fails without touching the state or applies fully.
//!
//! Invariants maintained by every operation:
//! - instance ids are unique;
//! - instance names are valid identifiers and unique;
//! - the selection, when present, refers to an existing instance.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{FormError, FormResult};
use crate::naming;
use crate::props::{CustomOptions, Props, PropsPatch};
use crate::registry::ComponentRegistry;

/// Fresh suffixes drawn before falling back to a numeric counter.
const MAX_SUFFIX_ATTEMPTS: usize = 32;

// =============================================================================
// Field ID (UUID v7 Newtype)
// =============================================================================

/// A unique, time-ordered field identifier based on UUID v7.
///
/// Displayed as `fld_<uuid>`; [`FieldId::parse`] accepts the value with or
/// without the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(Uuid);

impl FieldId {
    /// Create a new field ID using UUID v7.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse a field ID from a string.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        let uuid_str = s.strip_prefix("fld_").unwrap_or(s);
        Uuid::parse_str(uuid_str).map(Self)
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fld_{}", self.0)
    }
}

// =============================================================================
// Field Instance
// =============================================================================

/// One placed, user-configured field.
///
/// `kind` is a weak reference into the [`ComponentRegistry`]: it is resolved
/// by lookup at emission time, so instances stay plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInstance {
    /// Unique id, fixed for the instance's lifetime.
    pub id: FieldId,

    /// Key used in the generated schema and markup.
    pub name: String,

    /// Field kind identifier.
    pub kind: String,

    /// Visual configuration.
    pub props: Props,

    /// Validation-only configuration.
    #[serde(default)]
    pub custom_options: CustomOptions,
}

impl FieldInstance {
    /// Create an instance with the given parts.
    pub fn new(
        id: FieldId,
        name: impl Into<String>,
        kind: impl Into<String>,
        props: Props,
        custom_options: CustomOptions,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind: kind.into(),
            props,
            custom_options,
        }
    }

    /// Whether the field is marked as required.
    pub fn is_required(&self) -> bool {
        self.props.required
    }
}

// =============================================================================
// Form Definition
// =============================================================================

/// Ordered collection of field instances plus the current selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDefinition {
    instances: Vec<FieldInstance>,
    selected: Option<FieldId>,
}

impl FormDefinition {
    /// Create an empty form definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a definition from instances that were already validated.
    pub(crate) fn from_instances(instances: Vec<FieldInstance>) -> Self {
        Self {
            instances,
            selected: None,
        }
    }

    /// All instances in rendering order.
    pub fn instances(&self) -> &[FieldInstance] {
        &self.instances
    }

    /// Id of the selected instance, if any.
    pub fn selected_id(&self) -> Option<FieldId> {
        self.selected
    }

    /// The selected instance, if any.
    pub fn selected(&self) -> Option<&FieldInstance> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Look up an instance by id.
    pub fn get(&self, id: FieldId) -> Option<&FieldInstance> {
        self.instances.iter().find(|f| f.id == id)
    }

    /// Position of an instance in the rendering order.
    pub fn position(&self, id: FieldId) -> Option<usize> {
        self.instances.iter().position(|f| f.id == id)
    }

    /// Look up an instance by name.
    pub fn find_by_name(&self, name: &str) -> Option<&FieldInstance> {
        self.instances.iter().find(|f| f.name == name)
    }

    /// Number of instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the form has no instances.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Append a new instance of `kind` and select it.
    ///
    /// Props and custom options are seeded from the kind's defaults. The
    /// generated name is `<kind>_<suffix>` and is unique within the form.
    pub fn add_field(&mut self, registry: &ComponentRegistry, kind: &str) -> FormResult<FieldId> {
        let descriptor = registry.lookup(kind)?;

        let id = FieldId::new();
        let name = self.unique_default_name(kind, &id);
        let instance = FieldInstance::new(
            id,
            name,
            kind,
            descriptor.default_props(),
            descriptor.default_custom_options(),
        );

        debug!(id = %id, kind = %kind, name = %instance.name, "field added");
        self.instances.push(instance);
        self.selected = Some(id);
        Ok(id)
    }

    /// Remove an instance. Returns `false` when no such instance exists.
    ///
    /// Removing a missing id is not an error, so removal is idempotent.
    pub fn remove_field(&mut self, id: FieldId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        self.instances.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        debug!(id = %id, "field removed");
        true
    }

    /// Rename an instance.
    ///
    /// The name must be a valid identifier not used by any other instance.
    pub fn rename_field(&mut self, id: FieldId, new_name: &str) -> FormResult<()> {
        let index = self.index_of(id)?;
        naming::validate_name(new_name)?;

        if let Some(holder) = self.find_by_name(new_name).filter(|f| f.id != id) {
            return Err(FormError::DuplicateName {
                name: new_name.to_string(),
                holder: holder.id,
            });
        }

        let instance = &mut self.instances[index];
        debug!(id = %id, from = %instance.name, to = %new_name, "field renamed");
        instance.name = new_name.to_string();
        Ok(())
    }

    /// Merge a props patch into an instance.
    pub fn update_props(&mut self, id: FieldId, patch: PropsPatch) -> FormResult<()> {
        let index = self.index_of(id)?;
        self.instances[index].props.apply(patch);
        debug!(id = %id, "field props updated");
        Ok(())
    }

    /// Merge custom options into an instance.
    pub fn update_custom_options(&mut self, id: FieldId, partial: CustomOptions) -> FormResult<()> {
        let index = self.index_of(id)?;
        self.instances[index].custom_options.merge(partial);
        debug!(id = %id, "field custom options updated");
        Ok(())
    }

    /// Move `active` to the current position of `over`, shifting the
    /// instances in between by one.
    ///
    /// Returns `false` and leaves the order untouched when either id is
    /// missing or both are the same.
    pub fn move_field(&mut self, active: FieldId, over: FieldId) -> bool {
        if active == over {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(active), self.position(over)) else {
            return false;
        };

        let moved = self.instances.remove(from);
        self.instances.insert(to, moved);
        debug!(id = %active, from, to, "field moved");
        true
    }

    /// Select an instance, or clear the selection with `None`.
    pub fn select_field(&mut self, id: Option<FieldId>) -> FormResult<()> {
        if let Some(id) = id {
            self.index_of(id)?;
        }
        self.selected = id;
        debug!(selected = ?id.map(|id| id.to_string()), "selection changed");
        Ok(())
    }

    /// Remove every instance and clear the selection.
    pub fn reset(&mut self) {
        self.instances.clear();
        self.selected = None;
        debug!("form reset");
    }

    fn index_of(&self, id: FieldId) -> FormResult<usize> {
        self.position(id)
            .ok_or(FormError::UnknownInstance { id })
    }

    fn unique_default_name(&self, kind: &str, id: &FieldId) -> String {
        let mut name = naming::default_name(kind, id.as_uuid());
        let mut attempts = 0;

        while self.find_by_name(&name).is_some() {
            attempts += 1;
            name = if attempts < MAX_SUFFIX_ATTEMPTS {
                naming::default_name(kind, &Uuid::now_v7())
            } else {
                format!("{}_{}", naming::default_name(kind, id.as_uuid()), attempts)
            };
        }

        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ComponentRegistry {
        ComponentRegistry::builtin()
    }

    fn form_with(kinds: &[&str]) -> (FormDefinition, Vec<FieldId>) {
        let registry = registry();
        let mut form = FormDefinition::new();
        let ids = kinds
            .iter()
            .map(|kind| form.add_field(&registry, kind).unwrap())
            .collect();
        (form, ids)
    }

    fn order(form: &FormDefinition) -> Vec<FieldId> {
        form.instances().iter().map(|f| f.id).collect()
    }

    #[test]
    fn test_field_id_display_and_parse() {
        let id = FieldId::new();
        let shown = id.to_string();

        assert!(shown.starts_with("fld_"));
        assert_eq!(FieldId::parse(&shown).unwrap(), id);
        assert_eq!(FieldId::parse(&id.as_uuid().to_string()).unwrap(), id);
        assert!(FieldId::parse("fld_nope").is_err());
    }

    #[test]
    fn test_add_field_seeds_defaults_and_selects() {
        let registry = registry();
        let mut form = FormDefinition::new();
        let id = form.add_field(&registry, "email").unwrap();

        let field = form.get(id).unwrap();
        assert_eq!(field.kind, "email");
        assert!(field.name.starts_with("email_"));
        assert_eq!(field.props.label, "Email");
        assert!(field.props.required);
        assert_eq!(field.custom_options.get("allowedDomains"), Some(&"".into()));
        assert_eq!(form.selected_id(), Some(id));
    }

    #[test]
    fn test_add_field_unknown_kind_leaves_state_untouched() {
        let (mut form, _) = form_with(&["text"]);
        let before = form.clone();

        let err = form.add_field(&registry(), "slider").unwrap_err();
        assert!(matches!(err, FormError::UnknownKind { .. }));
        assert_eq!(form, before);
    }

    #[test]
    fn test_add_field_names_are_unique() {
        let (form, _) = form_with(&["text"; 50]);
        let mut names: Vec<_> = form.instances().iter().map(|f| f.name.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 50);
    }

    #[test]
    fn test_remove_field_is_idempotent_and_clears_selection() {
        let (mut form, ids) = form_with(&["text", "number"]);
        assert_eq!(form.selected_id(), Some(ids[1]));

        assert!(form.remove_field(ids[1]));
        assert_eq!(form.selected_id(), None);
        let after_first = form.clone();

        assert!(!form.remove_field(ids[1]));
        assert_eq!(form, after_first);
    }

    #[test]
    fn test_remove_unselected_field_keeps_selection() {
        let (mut form, ids) = form_with(&["text", "number"]);
        form.remove_field(ids[0]);
        assert_eq!(form.selected_id(), Some(ids[1]));
    }

    #[test]
    fn test_rename_field() {
        let (mut form, ids) = form_with(&["text"]);
        form.rename_field(ids[0], "full_name").unwrap();
        assert_eq!(form.get(ids[0]).unwrap().name, "full_name");
    }

    #[test]
    fn test_rename_field_rejects_invalid_names() {
        let (mut form, ids) = form_with(&["text"]);
        let before = form.clone();

        for bad in ["", "1st", "first name", "a-b"] {
            let err = form.rename_field(ids[0], bad).unwrap_err();
            assert!(matches!(err, FormError::InvalidName { .. }), "{bad:?}");
        }
        assert_eq!(form, before);
    }

    #[test]
    fn test_rename_field_rejects_duplicates() {
        let (mut form, ids) = form_with(&["text", "email"]);
        form.rename_field(ids[0], "contact").unwrap();

        let err = form.rename_field(ids[1], "contact").unwrap_err();
        assert!(matches!(err, FormError::DuplicateName { holder, .. } if holder == ids[0]));

        // Renaming to its own name is fine.
        form.rename_field(ids[0], "contact").unwrap();
    }

    #[test]
    fn test_rename_unknown_field() {
        let (mut form, _) = form_with(&["text"]);
        let err = form.rename_field(FieldId::new(), "x").unwrap_err();
        assert!(matches!(err, FormError::UnknownInstance { .. }));
    }

    #[test]
    fn test_update_props_merges() {
        let (mut form, ids) = form_with(&["text"]);
        form.update_props(ids[0], PropsPatch::new().required(true).label("Full name"))
            .unwrap();

        let props = &form.get(ids[0]).unwrap().props;
        assert!(props.required);
        assert_eq!(props.label, "Full name");
        assert_eq!(props.placeholder, "Enter your name");
    }

    #[test]
    fn test_update_custom_options_merges() {
        let (mut form, ids) = form_with(&["number"]);
        form.update_custom_options(ids[0], CustomOptions::new().with("min", 5))
            .unwrap();
        form.update_custom_options(ids[0], CustomOptions::new().with("max", 10))
            .unwrap();

        let options = &form.get(ids[0]).unwrap().custom_options;
        assert_eq!(options.get("min"), Some(&5.into()));
        assert_eq!(options.get("max"), Some(&10.into()));
    }

    #[test]
    fn test_update_unknown_field() {
        let (mut form, _) = form_with(&["text"]);
        let missing = FieldId::new();

        assert!(matches!(
            form.update_props(missing, PropsPatch::new()),
            Err(FormError::UnknownInstance { .. })
        ));
        assert!(matches!(
            form.update_custom_options(missing, CustomOptions::new()),
            Err(FormError::UnknownInstance { .. })
        ));
    }

    #[test]
    fn test_move_field_forward() {
        let (mut form, ids) = form_with(&["text", "email", "number", "phone"]);
        assert!(form.move_field(ids[0], ids[2]));
        assert_eq!(order(&form), vec![ids[1], ids[2], ids[0], ids[3]]);
    }

    #[test]
    fn test_move_field_backward() {
        let (mut form, ids) = form_with(&["text", "email", "number", "phone"]);
        assert!(form.move_field(ids[3], ids[1]));
        assert_eq!(order(&form), vec![ids[0], ids[3], ids[1], ids[2]]);
    }

    #[test]
    fn test_move_field_noops() {
        let (mut form, ids) = form_with(&["text", "email"]);
        let before = order(&form);

        assert!(!form.move_field(ids[0], ids[0]));
        assert!(!form.move_field(ids[0], FieldId::new()));
        assert!(!form.move_field(FieldId::new(), ids[1]));
        assert_eq!(order(&form), before);
    }

    #[test]
    fn test_select_field_validates_existence() {
        let (mut form, ids) = form_with(&["text", "email"]);

        form.select_field(Some(ids[0])).unwrap();
        assert_eq!(form.selected().unwrap().id, ids[0]);

        let err = form.select_field(Some(FieldId::new())).unwrap_err();
        assert!(matches!(err, FormError::UnknownInstance { .. }));
        assert_eq!(form.selected_id(), Some(ids[0]));

        form.select_field(None).unwrap();
        assert_eq!(form.selected_id(), None);
    }

    #[test]
    fn test_reset() {
        let (mut form, _) = form_with(&["text", "email"]);
        form.reset();
        assert!(form.is_empty());
        assert_eq!(form.selected_id(), None);
    }
}
