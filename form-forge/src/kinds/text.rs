//! Single-line text input.

use serde::Deserialize;

use super::{
    INPUT_IMPORT, ZodChain, check_bounds, form_field, input_control, label_or, message,
    standard_item,
};
use crate::codegen::text::escape_string;
use crate::error::EmissionError;
use crate::kind::{FieldKind, decode_options};
use crate::model::FieldInstance;
use crate::props::{CustomOptions, Props};

/// Plain text field with optional length bounds and pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextInput;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextOptions {
    min_length: Option<u32>,
    max_length: Option<u32>,
    pattern: Option<String>,
}

impl FieldKind for TextInput {
    fn kind(&self) -> &'static str {
        "text"
    }

    fn display_name(&self) -> &'static str {
        "Text"
    }

    fn description(&self) -> &'static str {
        "Simple text input field"
    }

    fn default_props(&self) -> Props {
        Props::new("Name")
            .with_helper_text("Enter your name")
            .with_placeholder("Enter your name")
    }

    fn default_custom_options(&self) -> CustomOptions {
        CustomOptions::new()
    }

    fn emit_markup(&self, field: &FieldInstance) -> Result<String, EmissionError> {
        let control = input_control(&field.props, None, &[]);
        Ok(form_field(field, &standard_item(&field.props, &control)))
    }

    fn emit_schema_field(&self, field: &FieldInstance) -> Result<String, EmissionError> {
        let options: TextOptions = decode_options(field)?;
        check_bounds(
            field,
            "minLength",
            options.min_length,
            "maxLength",
            options.max_length,
        )?;

        let required = field.props.required;
        let label = label_or(&field.props, "This field");
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
        if let Some(pattern) = options.pattern.as_deref().filter(|p| !p.is_empty()) {
            chain.push(format!(
                ".regex(new RegExp(\"{}\"), {})",
                escape_string(pattern),
                message(&format!("{} format is invalid", label))
            ));
        }

        Ok(chain.finish(required))
    }

    fn emit_imports(&self) -> String {
        INPUT_IMPORT.to_string()
    }
}
