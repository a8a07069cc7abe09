//! Field kind descriptor trait.
//!
//! Each supported field type is a self-contained capability bundle: its
//! default configuration plus its emitters. The pipeline only talks to
//! kinds through this trait, so new kinds plug in without touching it.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::error::EmissionError;
use crate::model::FieldInstance;
use crate::props::{CustomOptions, Props};

/// Immutable definition of one field kind.
///
/// Emitters must be pure: the same instance always yields the same text.
///
/// # Example
///
/// ```rust
/// use form_forge::{ComponentRegistry, FieldKind};
///
/// let registry = ComponentRegistry::builtin();
/// let email = registry.lookup("email").unwrap();
/// assert_eq!(email.display_name(), "Email");
/// assert!(email.emit_imports().contains("@/components/ui/input"));
/// ```
pub trait FieldKind: Send + Sync + fmt::Debug {
    /// Globally unique kind identifier (e.g. `"email"`).
    fn kind(&self) -> &'static str;

    /// Human-readable name for palettes.
    fn display_name(&self) -> &'static str;

    /// Short description for palettes.
    fn description(&self) -> &'static str;

    /// Visual configuration new instances start with.
    fn default_props(&self) -> Props;

    /// Validation-only configuration new instances start with.
    fn default_custom_options(&self) -> CustomOptions;

    /// Render one instance as a self-contained JSX fragment.
    fn emit_markup(&self, field: &FieldInstance) -> Result<String, EmissionError>;

    /// Render one `name: z...` entry for the form's Zod object.
    ///
    /// The entry is optional exactly when `field.props.required` is false.
    fn emit_schema_field(&self, field: &FieldInstance) -> Result<String, EmissionError>;

    /// Import statements the markup of this kind needs.
    fn emit_imports(&self) -> String;

    /// Initial form value as a JS expression, placed in `defaultValues`.
    ///
    /// `None` leaves the field out, so its value starts `undefined`.
    fn emit_default_value(&self, _field: &FieldInstance) -> Result<Option<String>, EmissionError> {
        Ok(None)
    }
}

/// Decode a field's custom options into a kind's typed option struct.
pub(crate) fn decode_options<T: DeserializeOwned>(
    field: &FieldInstance,
) -> Result<T, EmissionError> {
    field.custom_options.decode().map_err(|e| {
        EmissionError::new(
            &field.kind,
            &field.name,
            format!("malformed custom options: {}", e),
        )
    })
}
