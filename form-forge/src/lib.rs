//! # form-forge
//!
//! Build forms from typed field kinds and generate a React component plus
//! a matching [Zod](https://zod.dev/) schema from them.
//!
//! ## Overview
//!
//! A [`ComponentRegistry`] holds the available field kinds, grouped into
//! palette categories. A [`FormDefinition`] is the editable document: an
//! ordered list of [`FieldInstance`]s plus the current selection. The
//! code generation pipeline turns the instance list into two artifacts
//! that agree field-for-field on names and required status.
//!
//! ## Quick Start
//!
//! ```rust
//! use form_forge::{ComponentRegistry, FormDefinition, GeneratorConfig, generate_artifacts};
//!
//! let registry = ComponentRegistry::builtin();
//! let mut form = FormDefinition::new();
//!
//! let email = form.add_field(&registry, "email").unwrap();
//! form.rename_field(email, "work_email").unwrap();
//!
//! let artifacts = generate_artifacts(&registry, form.instances(), &GeneratorConfig::default());
//! assert!(artifacts.is_ok());
//! assert!(artifacts.markup.content.contains("name=\"work_email\""));
//! assert!(artifacts.schema.content.contains("work_email: z.string()"));
//! ```
//!
//! ## Built-in Kinds
//!
//! | Category | Kinds |
//! |----------|-------|
//! | Inputs | `text`, `password`, `email`, `number`, `phone`, `textarea`, `otp` |
//! | Selectors | `select`, `checkbox` |

pub mod codegen;
pub mod document;
pub mod error;
pub mod kind;
pub mod kinds;
pub mod model;
pub mod naming;
pub mod props;
pub mod registry;

// Re-export main types for convenience
pub use codegen::{
    Artifact, ArtifactGenerator, ArtifactKind, ArtifactStatus, Artifacts, GeneratorConfig,
    IndentStyle, LineEnding, MarkupGenerator, SchemaGenerator, generate_artifacts,
    generate_markup_artifact, generate_schema_artifact,
};
pub use document::{DOCUMENT_VERSION, FormDocument};
pub use error::{EmissionError, FormError, FormResult};
pub use kind::FieldKind;
pub use model::{FieldId, FieldInstance, FormDefinition};
pub use naming::{sanitize_name, validate_name};
pub use props::{CustomOptions, Props, PropsPatch};
pub use registry::{Category, ComponentRegistry};
