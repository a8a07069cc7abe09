//! Numeric input coerced to a number before validation.

use serde::Deserialize;

use super::{
    INPUT_IMPORT, ZodChain, attr, check_bounds, form_field, input_control, js_number, label_or,
    message, standard_item,
};
use crate::error::EmissionError;
use crate::kind::{FieldKind, decode_options};
use crate::model::FieldInstance;
use crate::props::{CustomOptions, Props};

#[derive(Debug, Clone, Copy, Default)]
pub struct NumberInput;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NumberOptions {
    min: Option<f64>,
    max: Option<f64>,
    step: Option<f64>,
}

impl NumberOptions {
    fn validate(&self, field: &FieldInstance) -> Result<(), EmissionError> {
        check_bounds(field, "min", self.min, "max", self.max)?;
        if let Some(step) = self.step {
            if step <= 0.0 || !step.is_finite() {
                return Err(EmissionError::new(
                    &field.kind,
                    &field.name,
                    format!("step must be positive, got {}", step),
                ));
            }
        }
        Ok(())
    }
}

impl FieldKind for NumberInput {
    fn kind(&self) -> &'static str {
        "number"
    }

    fn display_name(&self) -> &'static str {
        "Number"
    }

    fn description(&self) -> &'static str {
        "Numeric input with range validation"
    }

    fn default_props(&self) -> Props {
        Props::new("Number")
            .with_helper_text("Enter a number")
            .with_placeholder("Enter a number")
    }

    fn default_custom_options(&self) -> CustomOptions {
        CustomOptions::new()
    }

    fn emit_markup(&self, field: &FieldInstance) -> Result<String, EmissionError> {
        let options: NumberOptions = decode_options(field)?;
        options.validate(field)?;

        let mut extra = Vec::new();
        if let Some(min) = options.min {
            extra.push(attr("min", &js_number(min)));
        }
        if let Some(max) = options.max {
            extra.push(attr("max", &js_number(max)));
        }
        if let Some(step) = options.step {
            extra.push(attr("step", &js_number(step)));
        }

        let mut control = input_control(&field.props, Some("number"), &extra);
        // The number control reports strings; hand react-hook-form a number.
        control = control.replace(
            "{...field}",
            "{...field}\n  onChange={(e) => field.onChange(Number(e.target.value))}",
        );
        Ok(form_field(field, &standard_item(&field.props, &control)))
    }

    fn emit_schema_field(&self, field: &FieldInstance) -> Result<String, EmissionError> {
        let options: NumberOptions = decode_options(field)?;
        options.validate(field)?;

        let required = field.props.required;
        let label = label_or(&field.props, "Value");
        let mut chain = ZodChain::new(field, "z.coerce.number()");

        if let Some(min) = options.min {
            chain.push(format!(
                ".min({}, {})",
                js_number(min),
                message(&format!("{} must be at least {}", label, js_number(min)))
            ));
        }
        if let Some(max) = options.max {
            chain.push(format!(
                ".max({}, {})",
                js_number(max),
                message(&format!("{} must be at most {}", label, js_number(max)))
            ));
        }

        Ok(chain.finish(required))
    }

    fn emit_imports(&self) -> String {
        INPUT_IMPORT.to_string()
    }
}
