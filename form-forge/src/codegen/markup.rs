//! React form component emitter.

use tracing::debug;

use super::text::{escape_jsx_text, escape_string, indent_lines};
use super::{ArtifactGenerator, ArtifactKind, GeneratorConfig};
use crate::error::FormResult;
use crate::model::FieldInstance;
use crate::registry::ComponentRegistry;

/// Emitted instead of the template when the form has no fields.
pub const EMPTY_MARKUP: &str = "// No fields added yet";

/// Field fragments are children of `<form>`, four levels deep.
const FIELD_DEPTH: &str = "        ";

/// Generates a `react-hook-form` + shadcn component for the whole form.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupGenerator;

impl MarkupGenerator {
    /// Create a new markup generator.
    pub fn new() -> Self {
        Self
    }

    /// Import statements of every kind present, deduplicated by text in
    /// first-seen order.
    fn kind_imports(
        &self,
        registry: &ComponentRegistry,
        instances: &[FieldInstance],
    ) -> FormResult<Vec<String>> {
        let mut imports: Vec<String> = Vec::new();
        for instance in instances {
            let statement = registry.lookup(&instance.kind)?.emit_imports();
            if !statement.is_empty() && !imports.contains(&statement) {
                imports.push(statement);
            }
        }
        Ok(imports)
    }

    /// `defaultValues` object: one `name: value` entry per field that has one.
    fn default_values(
        &self,
        registry: &ComponentRegistry,
        instances: &[FieldInstance],
    ) -> FormResult<String> {
        let mut entries = Vec::new();
        for instance in instances {
            if let Some(value) = registry.lookup(&instance.kind)?.emit_default_value(instance)? {
                entries.push(format!("      {}: {},", instance.name, value));
            }
        }
        if entries.is_empty() {
            Ok("{}".to_string())
        } else {
            Ok(format!("{{\n{}\n    }}", entries.join("\n")))
        }
    }

    fn fields(&self, registry: &ComponentRegistry, instances: &[FieldInstance]) -> FormResult<String> {
        let mut fragments = Vec::with_capacity(instances.len());
        for instance in instances {
            let fragment = registry.lookup(&instance.kind)?.emit_markup(instance)?;
            fragments.push(fragment);
        }
        Ok(indent_lines(&fragments.join("\n\n"), FIELD_DEPTH))
    }
}

impl ArtifactGenerator for MarkupGenerator {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Markup
    }

    fn generate(
        &self,
        registry: &ComponentRegistry,
        instances: &[FieldInstance],
        config: &GeneratorConfig,
    ) -> FormResult<String> {
        if instances.is_empty() {
            return Ok(format!("{}\n", EMPTY_MARKUP));
        }

        let imports = self.kind_imports(registry, instances)?;
        let fields = self.fields(registry, instances)?;
        let default_values = self.default_values(registry, instances)?;
        debug!(
            fields = instances.len(),
            imports = imports.len(),
            "markup generated"
        );

        let schema = &config.schema_name;
        let module = escape_string(&config.schema_module);
        let (schema_import, values_type) = if config.generate_types {
            (
                format!(
                    "import {{ {}, type {} }} from \"{}\";",
                    schema, config.type_name, module
                ),
                config.type_name.clone(),
            )
        } else {
            (
                format!(
                    "import {{ z }} from \"zod\";\nimport {{ {} }} from \"{}\";",
                    schema, module
                ),
                format!("z.infer<typeof {}>", schema),
            )
        };

        let mut out = String::new();
        out.push_str("\"use client\";\n\n");
        out.push_str("import { zodResolver } from \"@hookform/resolvers/zod\";\n");
        out.push_str("import { useForm } from \"react-hook-form\";\n");
        out.push_str("import { Button } from \"@/components/ui/button\";\n");
        out.push_str(concat!(
            "import {\n",
            "  Form,\n",
            "  FormControl,\n",
            "  FormDescription,\n",
            "  FormField,\n",
            "  FormItem,\n",
            "  FormLabel,\n",
            "  FormMessage,\n",
            "} from \"@/components/ui/form\";\n",
        ));
        for import in &imports {
            out.push_str(import);
            out.push('\n');
        }
        out.push_str(&schema_import);
        out.push_str("\n\n");

        out.push_str(&format!("export function {}() {{\n", config.form_name));
        out.push_str(&format!("  const form = useForm<{}>({{\n", values_type));
        out.push_str(&format!("    resolver: zodResolver({}),\n", schema));
        out.push_str(&format!("    defaultValues: {},\n", default_values));
        out.push_str("  });\n\n");
        out.push_str(&format!("  function onSubmit(values: {}) {{\n", values_type));
        out.push_str("    console.log(values);\n");
        out.push_str("  }\n\n");
        out.push_str("  return (\n");
        out.push_str("    <Form {...form}>\n");
        out.push_str(
            "      <form onSubmit={form.handleSubmit(onSubmit)} className=\"space-y-8\">\n",
        );
        out.push_str(&fields);
        out.push_str("\n\n");
        out.push_str(&format!(
            "        <Button type=\"submit\">{}</Button>\n",
            escape_jsx_text(&config.submit_label)
        ));
        out.push_str("      </form>\n");
        out.push_str("    </Form>\n");
        out.push_str("  );\n");
        out.push_str("}\n");

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;
    use crate::model::FormDefinition;
    use crate::props::CustomOptions;

    fn form(kinds: &[&str]) -> (ComponentRegistry, FormDefinition) {
        let registry = ComponentRegistry::builtin();
        let mut form = FormDefinition::new();
        for kind in kinds {
            form.add_field(&registry, kind).unwrap();
        }
        (registry, form)
    }

    #[test]
    fn test_empty_form_is_placeholder() {
        let registry = ComponentRegistry::builtin();
        let out = MarkupGenerator
            .generate(&registry, &[], &GeneratorConfig::default())
            .unwrap();
        assert_eq!(out, "// No fields added yet\n");
    }

    #[test]
    fn test_imports_deduplicated_in_first_seen_order() {
        let (registry, form) = form(&["email", "checkbox", "text", "email"]);
        let out = MarkupGenerator
            .generate(&registry, form.instances(), &GeneratorConfig::default())
            .unwrap();

        assert_eq!(out.matches("@/components/ui/input\"").count(), 1);
        assert_eq!(out.matches("@/components/ui/checkbox\"").count(), 1);
        let input = out.find("@/components/ui/input\"").unwrap();
        let checkbox = out.find("@/components/ui/checkbox\"").unwrap();
        assert!(input < checkbox);
    }

    #[test]
    fn test_fields_in_sequence_order_and_indented() {
        let (registry, form) = form(&["text", "number"]);
        let out = MarkupGenerator
            .generate(&registry, form.instances(), &GeneratorConfig::default())
            .unwrap();

        let first = &form.instances()[0].name;
        let second = &form.instances()[1].name;
        let a = out.find(&format!("name=\"{}\"", first)).unwrap();
        let b = out.find(&format!("name=\"{}\"", second)).unwrap();
        assert!(a < b);
        assert!(out.contains("\n        <FormField\n          control={form.control}\n"));
        assert!(out.contains("<Button type=\"submit\">Submit</Button>"));
    }

    #[test]
    fn test_config_names() {
        let (registry, form) = form(&["text"]);
        let config = GeneratorConfig::new()
            .with_form_name("SignupForm")
            .with_schema_name("signupSchema")
            .with_schema_module("@/schemas/signup")
            .with_generate_types(false)
            .with_submit_label("Sign up");
        let out = MarkupGenerator
            .generate(&registry, form.instances(), &config)
            .unwrap();

        assert!(out.contains("export function SignupForm() {"));
        assert!(out.contains("import { signupSchema } from \"@/schemas/signup\";"));
        assert!(out.contains("useForm<z.infer<typeof signupSchema>>"));
        assert!(out.contains("resolver: zodResolver(signupSchema)"));
        assert!(out.contains(">Sign up</Button>"));
    }

    #[test]
    fn test_default_values_from_kinds() {
        let (registry, mut form) = form(&["checkbox", "text", "checkbox"]);
        let ids: Vec<_> = form.instances().iter().map(|f| f.id).collect();
        form.rename_field(ids[0], "terms").unwrap();
        form.rename_field(ids[2], "newsletter").unwrap();
        form.update_custom_options(ids[0], CustomOptions::new().with("defaultChecked", true))
            .unwrap();

        let out = MarkupGenerator
            .generate(&registry, form.instances(), &GeneratorConfig::default())
            .unwrap();
        assert!(out.contains("    defaultValues: {\n      terms: true,\n    },\n"));
        assert!(!out.contains("newsletter: true"));
    }

    #[test]
    fn test_unknown_kind_fails() {
        let registry = ComponentRegistry::new();
        let (_, form) = form(&["text"]);
        let err = MarkupGenerator
            .generate(&registry, form.instances(), &GeneratorConfig::default())
            .unwrap_err();
        assert_eq!(err, FormError::unknown_kind("text"));
    }
}
