//! Code generation pipeline.
//!
//! Two independent generators run over the same ordered field list: the
//! [`MarkupGenerator`] emits the React form component and the
//! [`SchemaGenerator`] emits the matching Zod schema. A failure in one
//! never blocks the other; it is reported as a failed [`Artifact`] whose
//! content is a visible error comment.

use std::fmt;

use tracing::warn;

use crate::error::{FormError, FormResult};
use crate::model::FieldInstance;
use crate::registry::ComponentRegistry;

pub mod config;
pub mod markup;
pub mod schema;
pub mod text;

pub use config::{GeneratorConfig, IndentStyle, LineEnding};
pub use markup::{EMPTY_MARKUP, MarkupGenerator};
pub use schema::SchemaGenerator;

/// First line of a failed artifact's content.
pub const ERROR_BANNER: &str = "// Error generating code, please retry";

/// Trait for whole-form artifact generators.
///
/// Generators build text with two-space indentation and `\n` line
/// endings; [`run`] applies the configured style afterwards.
pub trait ArtifactGenerator: Send + Sync {
    /// Which artifact this generator produces.
    fn kind(&self) -> ArtifactKind;

    /// Generate the artifact for `instances` in sequence order.
    fn generate(
        &self,
        registry: &ComponentRegistry,
        instances: &[FieldInstance],
        config: &GeneratorConfig,
    ) -> FormResult<String>;
}

/// The two artifacts the pipeline produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// React component markup
    Markup,

    /// Zod validation schema
    Schema,
}

impl ArtifactKind {
    /// File extension for this artifact.
    pub fn file_extension(&self) -> &'static str {
        match self {
            ArtifactKind::Markup => "tsx",
            ArtifactKind::Schema => "ts",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Markup => write!(f, "markup"),
            ArtifactKind::Schema => write!(f, "schema"),
        }
    }
}

/// Outcome of one artifact's generation.
#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactStatus {
    Ok,
    Failed(FormError),
}

/// One generated text artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub content: String,
    pub status: ArtifactStatus,
}

impl Artifact {
    /// Check if generation succeeded.
    pub fn is_ok(&self) -> bool {
        matches!(self.status, ArtifactStatus::Ok)
    }

    /// The generation error, if any.
    pub fn error(&self) -> Option<&FormError> {
        match &self.status {
            ArtifactStatus::Ok => None,
            ArtifactStatus::Failed(e) => Some(e),
        }
    }
}

/// Both artifacts of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifacts {
    pub markup: Artifact,
    pub schema: Artifact,
}

impl Artifacts {
    /// Check if both artifacts were generated.
    pub fn is_ok(&self) -> bool {
        self.markup.is_ok() && self.schema.is_ok()
    }

    /// Iterate over the artifacts, markup first.
    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        [&self.markup, &self.schema].into_iter()
    }
}

/// Run one generator, turning a failure into an error artifact.
pub fn run(
    generator: &dyn ArtifactGenerator,
    registry: &ComponentRegistry,
    instances: &[FieldInstance],
    config: &GeneratorConfig,
) -> Artifact {
    let kind = generator.kind();
    match generator.generate(registry, instances, config) {
        Ok(content) => Artifact {
            kind,
            content: config.apply_style(&content),
            status: ArtifactStatus::Ok,
        },
        Err(error) => {
            warn!(artifact = %kind, error = %error, "artifact generation failed");
            let content = format!("{}\n// {}\n", ERROR_BANNER, error);
            Artifact {
                kind,
                content: config.apply_style(&content),
                status: ArtifactStatus::Failed(error),
            }
        }
    }
}

/// Generate the form component markup.
pub fn generate_markup_artifact(
    registry: &ComponentRegistry,
    instances: &[FieldInstance],
    config: &GeneratorConfig,
) -> Artifact {
    run(&MarkupGenerator, registry, instances, config)
}

/// Generate the Zod schema module.
pub fn generate_schema_artifact(
    registry: &ComponentRegistry,
    instances: &[FieldInstance],
    config: &GeneratorConfig,
) -> Artifact {
    run(&SchemaGenerator, registry, instances, config)
}

/// Generate both artifacts independently.
pub fn generate_artifacts(
    registry: &ComponentRegistry,
    instances: &[FieldInstance],
    config: &GeneratorConfig,
) -> Artifacts {
    Artifacts {
        markup: generate_markup_artifact(registry, instances, config),
        schema: generate_schema_artifact(registry, instances, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FormDefinition;
    use crate::props::CustomOptions;

    #[test]
    fn test_failure_is_isolated_per_artifact() {
        let registry = ComponentRegistry::builtin();
        let mut form = FormDefinition::new();
        let id = form.add_field(&registry, "text").unwrap();
        form.update_custom_options(
            id,
            CustomOptions::new().with("minLength", 10).with("maxLength", 1),
        )
        .unwrap();

        let artifacts = generate_artifacts(&registry, form.instances(), &GeneratorConfig::default());
        assert!(artifacts.markup.is_ok());
        assert!(!artifacts.schema.is_ok());
        assert!(!artifacts.is_ok());
        assert!(artifacts.schema.content.starts_with(ERROR_BANNER));
        assert!(
            artifacts
                .schema
                .content
                .contains("minLength (10) is greater than maxLength (1)")
        );
        assert!(matches!(
            artifacts.schema.error(),
            Some(FormError::Emission(_))
        ));
    }

    #[test]
    fn test_line_endings_applied() {
        let registry = ComponentRegistry::builtin();
        let config = GeneratorConfig::new().with_line_ending(LineEnding::CrLf);
        let artifact = generate_schema_artifact(&registry, &[], &config);
        assert!(artifact.content.contains("\r\n"));
        assert!(!artifact.content.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn test_idempotent() {
        let registry = ComponentRegistry::builtin();
        let mut form = FormDefinition::new();
        for kind in ["email", "otp", "select"] {
            form.add_field(&registry, kind).unwrap();
        }
        let config = GeneratorConfig::default();
        let first = generate_artifacts(&registry, form.instances(), &config);
        let second = generate_artifacts(&registry, form.instances(), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_artifact_kind() {
        assert_eq!(ArtifactKind::Markup.file_extension(), "tsx");
        assert_eq!(ArtifactKind::Schema.to_string(), "schema");
    }
}
