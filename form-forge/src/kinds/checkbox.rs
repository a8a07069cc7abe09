//! Single boolean checkbox.

use serde::Deserialize;

use super::{ZodChain, attr, description, element, form_field, label, label_or, message};
use crate::codegen::text::indent_lines;
use crate::error::EmissionError;
use crate::kind::{FieldKind, decode_options};
use crate::model::FieldInstance;
use crate::props::{CustomOptions, Props};

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckboxInput;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CheckboxOptions {
    default_checked: bool,
}

impl FieldKind for CheckboxInput {
    fn kind(&self) -> &'static str {
        "checkbox"
    }

    fn display_name(&self) -> &'static str {
        "Checkbox"
    }

    fn description(&self) -> &'static str {
        "Simple checkbox input field"
    }

    fn default_props(&self) -> Props {
        Props::new("Accept terms and conditions")
    }

    fn default_custom_options(&self) -> CustomOptions {
        CustomOptions::new().with("defaultChecked", false)
    }

    fn emit_markup(&self, field: &FieldInstance) -> Result<String, EmissionError> {
        let _: CheckboxOptions = decode_options(field)?;
        let props = &field.props;

        let mut attrs = Vec::new();
        if !props.class_name.is_empty() {
            attrs.push(attr("className", &props.class_name));
        }
        attrs.push("checked={field.value}".to_string());
        attrs.push("onCheckedChange={field.onChange}".to_string());
        let control = element("Checkbox", &attrs);

        let mut lines = vec![
            r#"<FormItem className="flex flex-row items-start space-x-3 space-y-0">"#.to_string(),
            "  <FormControl>".to_string(),
            indent_lines(&control, "    "),
            "  </FormControl>".to_string(),
            r#"  <div className="space-y-1 leading-none">"#.to_string(),
            format!("    {}", label(props)),
        ];
        if let Some(description) = description(props) {
            lines.push(format!("    {}", description));
        }
        lines.push("    <FormMessage />".to_string());
        lines.push("  </div>".to_string());
        lines.push("</FormItem>".to_string());

        Ok(form_field(field, &lines.join("\n")))
    }

    fn emit_schema_field(&self, field: &FieldInstance) -> Result<String, EmissionError> {
        let _: CheckboxOptions = decode_options(field)?;
        let required = field.props.required;
        let mut chain = ZodChain::new(field, "z.boolean()");
        if required {
            let label = label_or(&field.props, "This field");
            chain.push(format!(
                ".refine((v) => v === true, {})",
                message(&format!("{} must be checked", label))
            ));
        }
        Ok(chain.finish(required))
    }

    fn emit_imports(&self) -> String {
        r#"import { Checkbox } from "@/components/ui/checkbox";"#.to_string()
    }

    fn emit_default_value(&self, field: &FieldInstance) -> Result<Option<String>, EmissionError> {
        let options: CheckboxOptions = decode_options(field)?;
        Ok(options.default_checked.then(|| "true".to_string()))
    }
}
