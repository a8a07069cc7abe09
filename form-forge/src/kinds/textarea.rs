//! Multi-line text input.

use serde::Deserialize;

use super::{
    ZodChain, check_bounds, common_attrs, decode_extra, element, form_field, label_or,
    message, standard_item,
};
use crate::error::EmissionError;
use crate::kind::{FieldKind, decode_options};
use crate::model::FieldInstance;
use crate::props::{CustomOptions, Props};

const DEFAULT_ROWS: u32 = 3;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextareaInput;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct TextareaOptions {
    min_length: Option<u32>,
    max_length: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct TextareaSettings {
    rows: u32,
}

impl Default for TextareaSettings {
    fn default() -> Self {
        Self { rows: DEFAULT_ROWS }
    }
}

impl FieldKind for TextareaInput {
    fn kind(&self) -> &'static str {
        "textarea"
    }

    fn display_name(&self) -> &'static str {
        "Textarea"
    }

    fn description(&self) -> &'static str {
        "Multi-line text input field"
    }

    fn default_props(&self) -> Props {
        Props::new("Description")
            .with_helper_text("Enter your details")
            .with_placeholder("Type your description here")
            .with_extra("rows", DEFAULT_ROWS)
    }

    fn default_custom_options(&self) -> CustomOptions {
        CustomOptions::new()
    }

    fn emit_markup(&self, field: &FieldInstance) -> Result<String, EmissionError> {
        let settings: TextareaSettings = decode_extra(field)?;
        let rows = if settings.rows == 0 { DEFAULT_ROWS } else { settings.rows };

        let mut attrs = common_attrs(&field.props);
        attrs.push(format!("rows={{{}}}", rows));
        attrs.push("{...field}".to_string());
        let control = element("Textarea", &attrs);
        Ok(form_field(field, &standard_item(&field.props, &control)))
    }

    fn emit_schema_field(&self, field: &FieldInstance) -> Result<String, EmissionError> {
        let options: TextareaOptions = decode_options(field)?;
        check_bounds(
            field,
            "minLength",
            options.min_length,
            "maxLength",
            options.max_length,
        )?;

        let required = field.props.required;
        let label = label_or(&field.props, "Text");
        let mut chain = ZodChain::new(field, "z.string()");

        if required {
            chain.push(format!(".min(1, {})", message(&format!("{} is required", label))));
        }
        let floor = if required { 1 } else { 0 };
        if let Some(min) = options.min_length.filter(|&min| min > floor) {
            chain.push(format!(
                ".min({}, {})",
                min,
                message(&format!("{} must be at least {} characters", label, min))
            ));
        }
        if let Some(max) = options.max_length {
            chain.push(format!(
                ".max({}, {})",
                max,
                message(&format!("{} must not exceed {} characters", label, max))
            ));
        }

        Ok(chain.finish(required))
    }

    fn emit_imports(&self) -> String {
        r#"import { Textarea } from "@/components/ui/textarea";"#.to_string()
    }
}
