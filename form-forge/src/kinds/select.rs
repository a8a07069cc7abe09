//! Dropdown with a fixed list of options.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{ZodChain, attr, description, form_field, label, label_or};
use crate::codegen::text::{escape_jsx_text, escape_string, indent_lines};
use crate::error::EmissionError;
use crate::kind::{FieldKind, decode_options};
use crate::model::FieldInstance;
use crate::props::{CustomOptions, Props};

#[derive(Debug, Clone, Copy, Default)]
pub struct SelectInput;

/// One selectable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SelectOptions {
    options: Vec<SelectOption>,
}

impl SelectOptions {
    fn load(field: &FieldInstance) -> Result<Self, EmissionError> {
        let options: Self = decode_options(field)?;
        if options.options.is_empty() {
            return Err(EmissionError::new(
                &field.kind,
                &field.name,
                "options must not be empty",
            ));
        }
        let mut seen = HashSet::new();
        for option in &options.options {
            if !seen.insert(option.value.as_str()) {
                return Err(EmissionError::new(
                    &field.kind,
                    &field.name,
                    format!("duplicate option value '{}'", option.value),
                ));
            }
        }
        Ok(options)
    }
}

impl FieldKind for SelectInput {
    fn kind(&self) -> &'static str {
        "select"
    }

    fn display_name(&self) -> &'static str {
        "Select"
    }

    fn description(&self) -> &'static str {
        "Dropdown select field"
    }

    fn default_props(&self) -> Props {
        Props::new("Select Option")
            .with_helper_text("Select an option from the dropdown")
            .with_placeholder("Select an option")
    }

    fn default_custom_options(&self) -> CustomOptions {
        let options: Vec<_> = (1..=3)
            .map(|i| json!({ "label": format!("Option {}", i), "value": format!("option{}", i) }))
            .collect();
        CustomOptions::new().with("options", options)
    }

    fn emit_markup(&self, field: &FieldInstance) -> Result<String, EmissionError> {
        let options = SelectOptions::load(field)?;
        let props = &field.props;
        let placeholder = if props.placeholder.is_empty() {
            "Select an option"
        } else {
            props.placeholder.as_str()
        };

        let trigger = if props.class_name.is_empty() {
            "<SelectTrigger>".to_string()
        } else {
            format!("<SelectTrigger {}>", attr("className", &props.class_name))
        };
        let items = options
            .options
            .iter()
            .map(|o| {
                format!(
                    "<SelectItem {}>{}</SelectItem>",
                    attr("value", &o.value),
                    escape_jsx_text(&o.label)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let mut lines = vec![
            "<FormItem>".to_string(),
            format!("  {}", label(props)),
            "  <Select onValueChange={field.onChange} defaultValue={field.value}>".to_string(),
            "    <FormControl>".to_string(),
            format!("      {}", trigger),
            format!("        <SelectValue {} />", attr("placeholder", placeholder)),
            "      </SelectTrigger>".to_string(),
            "    </FormControl>".to_string(),
            "    <SelectContent>".to_string(),
            indent_lines(&items, "      "),
            "    </SelectContent>".to_string(),
            "  </Select>".to_string(),
        ];
        if let Some(description) = description(props) {
            lines.push(format!("  {}", description));
        }
        lines.push("  <FormMessage />".to_string());
        lines.push("</FormItem>".to_string());

        Ok(form_field(field, &lines.join("\n")))
    }

    fn emit_schema_field(&self, field: &FieldInstance) -> Result<String, EmissionError> {
        let options = SelectOptions::load(field)?;
        let values = options
            .options
            .iter()
            .map(|o| format!("\"{}\"", escape_string(&o.value)))
            .collect::<Vec<_>>()
            .join(", ");

        let required = field.props.required;
        let base = if required {
            format!(
                "z.enum([{}], {{ required_error: \"{} is required\" }})",
                values,
                escape_string(label_or(&field.props, "This field"))
            )
        } else {
            format!("z.enum([{}])", values)
        };

        Ok(ZodChain::new(field, &base).finish(required))
    }

    fn emit_imports(&self) -> String {
        [
            "import {",
            "  Select,",
            "  SelectContent,",
            "  SelectItem,",
            "  SelectTrigger,",
            "  SelectValue,",
            "} from \"@/components/ui/select\";",
        ]
        .join("\n")
    }
}
