//! Email input with an optional domain allow-list.

use serde::Deserialize;

use super::{INPUT_IMPORT, ZodChain, form_field, input_control, label_or, message, standard_item};
use crate::codegen::text::escape_string;
use crate::error::EmissionError;
use crate::kind::{FieldKind, decode_options};
use crate::model::FieldInstance;
use crate::props::{CustomOptions, Props};

#[derive(Debug, Clone, Copy, Default)]
pub struct EmailInput;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct EmailOptions {
    /// Comma-separated list; blank entries are ignored.
    allowed_domains: String,
}

impl EmailOptions {
    fn domains(&self) -> Vec<&str> {
        self.allowed_domains
            .split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .collect()
    }
}

impl FieldKind for EmailInput {
    fn kind(&self) -> &'static str {
        "email"
    }

    fn display_name(&self) -> &'static str {
        "Email"
    }

    fn description(&self) -> &'static str {
        "Email input with format validation"
    }

    fn default_props(&self) -> Props {
        Props::new("Email")
            .with_required(true)
            .with_helper_text("Enter your email address")
            .with_placeholder("user@example.com")
    }

    fn default_custom_options(&self) -> CustomOptions {
        CustomOptions::new().with("allowedDomains", "")
    }

    fn emit_markup(&self, field: &FieldInstance) -> Result<String, EmissionError> {
        let control = input_control(&field.props, Some("email"), &[]);
        Ok(form_field(field, &standard_item(&field.props, &control)))
    }

    fn emit_schema_field(&self, field: &FieldInstance) -> Result<String, EmissionError> {
        let options: EmailOptions = decode_options(field)?;
        let required = field.props.required;
        let label = label_or(&field.props, "Email");
        let mut chain = ZodChain::new(field, "z.string()");

        if required {
            chain.push(format!(".min(1, {})", message(&format!("{} is required", label))));
        }
        chain.push(format!(
            ".email({})",
            message("Please enter a valid email address")
        ));

        let domains = options.domains();
        if !domains.is_empty() {
            let list = domains
                .iter()
                .map(|d| format!("\"{}\"", escape_string(d)))
                .collect::<Vec<_>>()
                .join(", ");
            chain.push(format!(
                concat!(
                    ".refine(\n",
                    "  (email) => {{\n",
                    "    const domain = email.split(\"@\")[1];\n",
                    "    return [{}].includes(domain);\n",
                    "  }},\n",
                    "  {}\n",
                    ")"
                ),
                list,
                message(&format!("Email domain not allowed. Use: {}", domains.join(", ")))
            ));
        }

        Ok(chain.finish(required))
    }

    fn emit_imports(&self) -> String {
        INPUT_IMPORT.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::test_support::instance;

    #[test]
    fn test_schema_without_domains() {
        let field = instance(&EmailInput, "email");
        assert_eq!(
            EmailInput.emit_schema_field(&field).unwrap(),
            concat!(
                r#"email: z.string().min(1, { message: "Email is required" })"#,
                r#".email({ message: "Please enter a valid email address" })"#
            )
        );
    }

    #[test]
    fn test_schema_with_domains() {
        let mut field = instance(&EmailInput, "work_email");
        field.props.required = false;
        field.custom_options = CustomOptions::new().with("allowedDomains", " acme.com, ,corp.io ");

        let schema = EmailInput.emit_schema_field(&field).unwrap();
        assert!(schema.contains(r#"return ["acme.com", "corp.io"].includes(domain);"#));
        assert!(schema.contains("Email domain not allowed. Use: acme.com, corp.io"));
        assert!(schema.ends_with("\n).optional()"));
    }

    #[test]
    fn test_markup() {
        let field = instance(&EmailInput, "email");
        let markup = EmailInput.emit_markup(&field).unwrap();
        assert!(markup.contains("type=\"email\""));
        assert!(markup.contains("placeholder=\"user@example.com\""));
        assert!(markup.contains("<FormLabel>Email *</FormLabel>"));
    }
}
