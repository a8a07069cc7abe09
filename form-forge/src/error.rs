//! Error types for the form model, registry, and code generation.
//!
//! Structural errors ([`FormError::UnknownKind`], [`FormError::UnknownInstance`], ...)
//! are integrity errors: the caller passed a stale id or an unregistered kind.
//! Emission errors are raised by a field kind that cannot render its current
//! configuration and are isolated per artifact by the pipeline.

use thiserror::Error;

use crate::model::FieldId;

/// Result type alias for form operations.
pub type FormResult<T> = Result<T, FormError>;

/// Main error type for registry and model operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    /// No field kind is registered under this identifier.
    #[error("Unknown field kind '{kind}'")]
    UnknownKind { kind: String },

    /// A field kind with this identifier is already registered.
    #[error("Field kind '{kind}' is already registered")]
    DuplicateKind { kind: String },

    /// No field instance exists with this id.
    #[error("No field with id {id}")]
    UnknownInstance { id: FieldId },

    /// The name is not a valid identifier.
    #[error("Invalid field name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Another field already uses this name.
    #[error("Field name '{name}' is already used by field {holder}")]
    DuplicateName { name: String, holder: FieldId },

    /// A field kind failed to emit code for its configuration.
    #[error(transparent)]
    Emission(#[from] EmissionError),

    /// A persisted document is structurally invalid.
    #[error("Invalid form document: {0}")]
    Document(String),
}

impl FormError {
    /// Create an unknown kind error.
    pub fn unknown_kind(kind: impl Into<String>) -> Self {
        Self::UnknownKind { kind: kind.into() }
    }

    /// Create an invalid name error.
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Error raised while emitting code for a single field.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Cannot emit {kind} field '{field}': {message}")]
pub struct EmissionError {
    /// Field kind identifier.
    pub kind: String,
    /// Name of the field instance being emitted.
    pub field: String,
    /// What was wrong with the configuration.
    pub message: String,
}

impl EmissionError {
    /// Create a new emission error.
    pub fn new(
        kind: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emission_error_display() {
        let err = EmissionError::new("number", "age", "min (10) is greater than max (5)");
        assert_eq!(
            err.to_string(),
            "Cannot emit number field 'age': min (10) is greater than max (5)"
        );
    }

    #[test]
    fn test_emission_error_converts_to_form_error() {
        let err: FormError = EmissionError::new("select", "color", "no options").into();
        assert!(matches!(err, FormError::Emission(_)));
        assert!(err.to_string().contains("color"));
    }

    #[test]
    fn test_unknown_kind_display() {
        assert_eq!(
            FormError::unknown_kind("slider").to_string(),
            "Unknown field kind 'slider'"
        );
    }
}
