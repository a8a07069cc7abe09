//! Configuration management for the CLI.
//!
//! This module handles loading configuration from `form-forge.toml` files
//! and merging with command-line arguments.

use std::path::{Component, Path, PathBuf};

use form_forge::naming::is_valid_identifier;
use form_forge::{ArtifactKind, GeneratorConfig, IndentStyle, LineEnding};
use serde::Deserialize;

use crate::error::{CliResult, ConfigError};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "form-forge.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration.
    pub output: OutputConfig,

    /// Code generation settings.
    pub generator: GeneratorSection,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory for generated files.
    pub dir: PathBuf,

    /// Filename of the form component.
    pub markup_file: String,

    /// Filename of the Zod schema module.
    pub schema_file: String,
}

/// The `[generator]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorSection {
    /// Name of the exported form component.
    pub form_name: String,

    /// Name of the exported schema constant.
    pub schema_name: String,

    /// Name of the inferred values type.
    pub type_name: String,

    /// Submit button label.
    pub submit_label: String,

    /// Indentation style (`spaces2`, `spaces4`, `tabs`).
    pub indent: IndentStyle,

    /// Line ending style (`lf`, `crlf`).
    pub line_ending: LineEnding,

    /// Whether to export the inferred values type.
    pub generate_types: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./generated"),
            markup_file: "form.tsx".to_string(),
            schema_file: "form-schema.ts".to_string(),
        }
    }
}

impl Default for GeneratorSection {
    fn default() -> Self {
        let defaults = GeneratorConfig::default();
        Self {
            form_name: defaults.form_name,
            schema_name: defaults.schema_name,
            type_name: defaults.type_name,
            submit_label: defaults.submit_label,
            indent: defaults.indent,
            line_ending: defaults.line_ending,
            generate_types: defaults.generate_types,
        }
    }
}

impl OutputConfig {
    /// Path of the file an artifact is written to.
    pub fn path_for(&self, kind: ArtifactKind) -> PathBuf {
        match kind {
            ArtifactKind::Markup => self.dir.join(&self.markup_file),
            ArtifactKind::Schema => self.dir.join(&self.schema_file),
        }
    }

    /// Module specifier the form uses to import the schema: the schema
    /// file relative to the markup file's directory, without extension.
    pub fn schema_module(&self) -> String {
        let markup_dir = Path::new(&self.markup_file)
            .parent()
            .unwrap_or(Path::new(""));
        let from = normal_components(markup_dir);
        let to = normal_components(&Path::new(&self.schema_file).with_extension(""));
        let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

        let mut parts = vec!["..".to_string(); from.len() - common];
        parts.extend(to[common..].iter().cloned());
        let module = parts.join("/");
        if module.starts_with("..") {
            module
        } else {
            format!("./{}", module)
        }
    }
}

fn normal_components(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

impl Config {
    /// Check that the names emitted into generated code are identifiers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let names = [
            ("form_name", &self.generator.form_name),
            ("schema_name", &self.generator.schema_name),
            ("type_name", &self.generator.type_name),
        ];
        for (key, value) in names {
            if !is_valid_identifier(value) {
                return Err(ConfigError::InvalidIdentifier {
                    key: key.to_string(),
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    /// Generator settings for the core pipeline.
    ///
    /// The schema module is derived from the two output filenames.
    pub fn generator_config(&self) -> GeneratorConfig {
        let section = &self.generator;
        GeneratorConfig::new()
            .with_indent(section.indent)
            .with_line_ending(section.line_ending)
            .with_form_name(section.form_name.clone())
            .with_schema_name(section.schema_name.clone())
            .with_schema_module(self.output.schema_module())
            .with_type_name(section.type_name.clone())
            .with_generate_types(section.generate_types)
            .with_submit_label(section.submit_label.clone())
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// If the path is None, attempts to load from the default location.
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path, e.to_string()))?;
        config.validate()?;

        Ok(config)
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref output) = args.output {
            config.output.dir = output.clone();
        }

        if let Some(ref form_name) = args.form_name {
            config.generator.form_name = form_name.clone();
        }

        if let Some(generate_types) = args.generate_types {
            config.generator.generate_types = generate_types;
        }

        config
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# form-forge configuration file

[output]
# Output directory for generated files
dir = "./generated"

# Form component file name
markup_file = "form.tsx"

# Zod schema module file name (the component imports it from the same directory)
schema_file = "form-schema.ts"

[generator]
# Name of the exported React component
form_name = "ExampleForm"

# Name of the exported Zod object
schema_name = "formSchema"

# Name of the inferred values type (export type X = z.infer<typeof schema>)
type_name = "FormValues"

# Whether to export the inferred values type
generate_types = true

# Label of the submit button
submit_label = "Submit"

# Indentation (spaces2, spaces4, tabs)
indent = "spaces2"

# Line endings (lf, crlf)
line_ending = "lf"
"#
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Output directory override.
    pub output: Option<PathBuf>,

    /// Form component name override.
    pub form_name: Option<String>,

    /// Generate types override.
    pub generate_types: Option<bool>,
}
