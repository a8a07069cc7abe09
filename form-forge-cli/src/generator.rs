//! Artifact generation and output for the CLI.

use std::path::PathBuf;

use form_forge::{Artifact, ArtifactKind, Artifacts, ComponentRegistry, FormDefinition, generate_artifacts};

use crate::config::Config;
use crate::error::CliResult;
use crate::writer::{FileWriter, WriteResult};

/// Outcome of writing one artifact.
#[derive(Debug)]
pub enum ArtifactOutcome {
    /// The artifact was generated and handed to the writer.
    Saved(WriteResult),
    /// Generation failed; nothing was written for this artifact.
    Failed { kind: ArtifactKind, message: String },
}

/// Difference between generated and on-disk artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Staleness {
    /// The file does not exist.
    Missing(PathBuf),
    /// The file exists with different content.
    Outdated(PathBuf),
}

/// Generates both artifacts with the configured settings.
#[derive(Debug, Clone)]
pub struct FormGenerator {
    registry: ComponentRegistry,
    config: Config,
}

impl FormGenerator {
    /// Create a generator from a registry and configuration.
    pub fn new(registry: ComponentRegistry, config: Config) -> Self {
        Self { registry, config }
    }

    /// Registry used to resolve field kinds.
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate both artifacts for `form`.
    pub fn generate(&self, form: &FormDefinition) -> Artifacts {
        generate_artifacts(
            &self.registry,
            form.instances(),
            &self.config.generator_config(),
        )
    }

    /// Destination of an artifact.
    pub fn output_path(&self, kind: ArtifactKind) -> PathBuf {
        self.config.output.path_for(kind)
    }

    /// Write every successful artifact. Failed artifacts are reported and
    /// leave their previous file in place.
    pub fn write(&self, artifacts: &Artifacts, writer: &FileWriter) -> CliResult<Vec<ArtifactOutcome>> {
        artifacts
            .iter()
            .map(|artifact| self.write_one(artifact, writer))
            .collect()
    }

    fn write_one(&self, artifact: &Artifact, writer: &FileWriter) -> CliResult<ArtifactOutcome> {
        match artifact.error() {
            Some(error) => Ok(ArtifactOutcome::Failed {
                kind: artifact.kind,
                message: error.to_string(),
            }),
            None => {
                let path = self.output_path(artifact.kind);
                Ok(ArtifactOutcome::Saved(writer.write(&path, &artifact.content)?))
            }
        }
    }

    /// Compare generated artifacts with the files on disk.
    pub fn check(&self, artifacts: &Artifacts) -> CliResult<Vec<Staleness>> {
        let mut stale = Vec::new();
        for artifact in artifacts.iter() {
            let path = self.output_path(artifact.kind);
            if !path.exists() {
                stale.push(Staleness::Missing(path));
                continue;
            }
            let existing = std::fs::read_to_string(&path)?;
            if existing != artifact.content {
                stale.push(Staleness::Outdated(path));
            }
        }
        Ok(stale)
    }
}

impl ArtifactOutcome {
    /// Check if this artifact failed to generate.
    pub fn is_failed(&self) -> bool {
        matches!(self, ArtifactOutcome::Failed { .. })
    }
}
