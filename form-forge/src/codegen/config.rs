//! Generator configuration shared by the markup and schema emitters.

use serde::{Deserialize, Serialize};

/// Generator configuration options.
///
/// Controls naming inside the generated templates and the whitespace
/// style of the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Indentation style
    pub indent: IndentStyle,

    /// Line ending style
    pub line_ending: LineEnding,

    /// Name of the exported form component
    pub form_name: String,

    /// Name of the exported Zod object
    pub schema_name: String,

    /// Module the form imports the schema from
    pub schema_module: String,

    /// Name of the inferred values type
    pub type_name: String,

    /// Whether to emit `export type X = z.infer<typeof schema>`
    pub generate_types: bool,

    /// Label of the submit button
    pub submit_label: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            indent: IndentStyle::default(),
            line_ending: LineEnding::default(),
            form_name: "ExampleForm".to_string(),
            schema_name: "formSchema".to_string(),
            schema_module: "./form-schema".to_string(),
            type_name: "FormValues".to_string(),
            generate_types: true,
            submit_label: "Submit".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new generator config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation style.
    pub fn with_indent(mut self, indent: IndentStyle) -> Self {
        self.indent = indent;
        self
    }

    /// Set the line ending style.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Set the form component name.
    pub fn with_form_name(mut self, name: impl Into<String>) -> Self {
        self.form_name = name.into();
        self
    }

    /// Set the schema constant name.
    pub fn with_schema_name(mut self, name: impl Into<String>) -> Self {
        self.schema_name = name.into();
        self
    }

    /// Set the module path the form imports the schema from.
    pub fn with_schema_module(mut self, module: impl Into<String>) -> Self {
        self.schema_module = module.into();
        self
    }

    /// Set the inferred type name.
    pub fn with_type_name(mut self, name: impl Into<String>) -> Self {
        self.type_name = name.into();
        self
    }

    /// Set whether to generate type inference.
    pub fn with_generate_types(mut self, generate: bool) -> Self {
        self.generate_types = generate;
        self
    }

    /// Set the submit button label.
    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    /// Get the line ending string based on current settings.
    pub fn line_ending_str(&self) -> &str {
        self.line_ending.as_str()
    }

    /// Restyle text built with two-space indentation and `\n` line endings.
    pub(crate) fn apply_style(&self, text: &str) -> String {
        let restyled: Vec<String> = text
            .split('\n')
            .map(|line| {
                if self.indent == IndentStyle::Spaces2 {
                    return line.to_string();
                }
                let body = line.trim_start_matches(' ');
                let depth = line.len() - body.len();
                format!(
                    "{}{}{}",
                    self.indent.indent(depth / 2),
                    " ".repeat(depth % 2),
                    body
                )
            })
            .collect();
        restyled.join(self.line_ending_str())
    }
}

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    /// Use spaces for indentation (default: 2 spaces)
    #[default]
    #[serde(alias = "2")]
    Spaces2,

    /// Use 4 spaces for indentation
    #[serde(alias = "4")]
    Spaces4,

    /// Use tabs for indentation
    Tabs,
}

impl IndentStyle {
    /// Get the indentation string.
    pub fn as_str(&self) -> &str {
        match self {
            IndentStyle::Spaces2 => "  ",
            IndentStyle::Spaces4 => "    ",
            IndentStyle::Tabs => "\t",
        }
    }

    /// Create an indentation string for the given depth.
    pub fn indent(&self, depth: usize) -> String {
        self.as_str().repeat(depth)
    }
}

/// Line ending style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// Unix-style line endings (LF)
    #[default]
    Lf,

    /// Windows-style line endings (CRLF)
    CrLf,
}

impl LineEnding {
    /// Get the line ending string.
    pub fn as_str(&self) -> &str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.form_name, "ExampleForm");
        assert_eq!(config.schema_name, "formSchema");
        assert_eq!(config.schema_module, "./form-schema");
        assert_eq!(config.type_name, "FormValues");
        assert!(config.generate_types);
        assert_eq!(config.submit_label, "Submit");
        assert_eq!(config.indent.as_str(), "  ");
        assert_eq!(config.line_ending_str(), "\n");
    }

    #[test]
    fn test_apply_style_identity_by_default() {
        let text = "a {\n  b\n    c\n}";
        assert_eq!(GeneratorConfig::default().apply_style(text), text);
    }

    #[test]
    fn test_apply_style_tabs_and_crlf() {
        let config = GeneratorConfig::new()
            .with_indent(IndentStyle::Tabs)
            .with_line_ending(LineEnding::CrLf);
        assert_eq!(
            config.apply_style("a {\n  b\n     c\n\n}"),
            "a {\r\n\tb\r\n\t\t c\r\n\r\n}"
        );
    }

    #[test]
    fn test_apply_style_four_spaces() {
        let config = GeneratorConfig::new().with_indent(IndentStyle::Spaces4);
        assert_eq!(config.apply_style("x\n  y\n    z"), "x\n    y\n        z");
    }

    #[test]
    fn test_indent_style_serde() {
        let style: IndentStyle = serde_json::from_str("\"tabs\"").unwrap();
        assert_eq!(style, IndentStyle::Tabs);
        let ending: LineEnding = serde_json::from_str("\"crlf\"").unwrap();
        assert_eq!(ending, LineEnding::CrLf);
    }
}
