//! Zod schema emitter.

use tracing::debug;

use super::text::indent_lines;
use super::{ArtifactGenerator, ArtifactKind, GeneratorConfig};
use crate::error::FormResult;
use crate::model::FieldInstance;
use crate::registry::ComponentRegistry;

/// Generates the `z.object({...})` module validating the form's values.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaGenerator;

impl SchemaGenerator {
    /// Create a new schema generator.
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactGenerator for SchemaGenerator {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Schema
    }

    fn generate(
        &self,
        registry: &ComponentRegistry,
        instances: &[FieldInstance],
        config: &GeneratorConfig,
    ) -> FormResult<String> {
        let mut entries = Vec::with_capacity(instances.len());
        for instance in instances {
            let entry = registry
                .lookup(&instance.kind)?
                .emit_schema_field(instance)?;
            entries.push(entry);
        }
        debug!(fields = entries.len(), "schema generated");

        let mut out = String::from("import { z } from \"zod\";\n\n");
        if entries.is_empty() {
            out.push_str(&format!(
                "export const {} = z.object({{}});\n",
                config.schema_name
            ));
        } else {
            out.push_str(&format!(
                "export const {} = z.object({{\n",
                config.schema_name
            ));
            out.push_str(&indent_lines(&entries.join(",\n"), "  "));
            out.push_str("\n});\n");
        }

        if config.generate_types {
            out.push_str(&format!(
                "\nexport type {} = z.infer<typeof {}>;\n",
                config.type_name, config.schema_name
            ));
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FormDefinition;

    #[test]
    fn test_empty_form_accepts_empty_object() {
        let registry = ComponentRegistry::builtin();
        let out = SchemaGenerator
            .generate(&registry, &[], &GeneratorConfig::default())
            .unwrap();
        assert_eq!(
            out,
            concat!(
                "import { z } from \"zod\";\n\n",
                "export const formSchema = z.object({});\n\n",
                "export type FormValues = z.infer<typeof formSchema>;\n"
            )
        );
    }

    #[test]
    fn test_entries_joined_without_trailing_comma() {
        let registry = ComponentRegistry::builtin();
        let mut form = FormDefinition::new();
        let a = form.add_field(&registry, "checkbox").unwrap();
        let b = form.add_field(&registry, "checkbox").unwrap();
        form.rename_field(a, "terms").unwrap();
        form.rename_field(b, "newsletter").unwrap();

        let config = GeneratorConfig::new().with_generate_types(false);
        let out = SchemaGenerator
            .generate(&registry, form.instances(), &config)
            .unwrap();
        assert_eq!(
            out,
            concat!(
                "import { z } from \"zod\";\n\n",
                "export const formSchema = z.object({\n",
                "  terms: z.boolean().optional(),\n",
                "  newsletter: z.boolean().optional()\n",
                "});\n"
            )
        );
    }

    #[test]
    fn test_emission_error_propagates() {
        let registry = ComponentRegistry::builtin();
        let mut form = FormDefinition::new();
        let id = form.add_field(&registry, "select").unwrap();
        form.update_custom_options(
            id,
            crate::props::CustomOptions::new().with("options", serde_json::json!([])),
        )
        .unwrap();

        let err = SchemaGenerator
            .generate(&registry, form.instances(), &GeneratorConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("options must not be empty"));
    }
}
