//! Telephone input validated against a number format.

use serde::Deserialize;

use super::{INPUT_IMPORT, ZodChain, form_field, input_control, label_or, message, standard_item};
use crate::codegen::text::escape_string;
use crate::error::EmissionError;
use crate::kind::{FieldKind, decode_options};
use crate::model::FieldInstance;
use crate::props::{CustomOptions, Props};

#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum PhoneFormat {
    International,
    National,
    #[default]
    Any,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PhoneOptions {
    format: PhoneFormat,
    country_code: String,
}

impl PhoneOptions {
    /// Calling code without the leading `+`, if one was configured.
    fn country_code(&self, field: &FieldInstance) -> Result<Option<String>, EmissionError> {
        let code = self.country_code.trim().trim_start_matches('+');
        if code.is_empty() {
            return Ok(None);
        }
        if code.len() > 3 || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(EmissionError::new(
                &field.kind,
                &field.name,
                format!("countryCode must be 1-3 digits, got '{}'", self.country_code),
            ));
        }
        Ok(Some(code.to_string()))
    }

    /// Anchored regex source and its error message.
    fn pattern(&self, field: &FieldInstance) -> Result<(String, String), EmissionError> {
        let pattern = match self.format {
            PhoneFormat::International => match self.country_code(field)? {
                Some(code) => (
                    format!(r"\+?{}\d{{4,14}}", code),
                    format!(
                        "Please enter a valid international phone number starting with +{}",
                        code
                    ),
                ),
                None => (
                    r"\+?[1-9]\d{1,14}".to_string(),
                    "Please enter a valid international phone number".to_string(),
                ),
            },
            PhoneFormat::National => (
                "[0-9]{3}[-. ]?[0-9]{3}[-. ]?[0-9]{4}".to_string(),
                "Please enter a valid phone number (e.g. 555-123-4567)".to_string(),
            ),
            PhoneFormat::Any => (
                r"[0-9\+\-\(\) ]{6,}".to_string(),
                "Please enter a valid phone number".to_string(),
            ),
        };
        Ok((format!("^{}$", pattern.0), pattern.1))
    }
}

impl FieldKind for PhoneInput {
    fn kind(&self) -> &'static str {
        "phone"
    }

    fn display_name(&self) -> &'static str {
        "Phone"
    }

    fn description(&self) -> &'static str {
        "Phone number input with format validation"
    }

    fn default_props(&self) -> Props {
        Props::new("Phone Number")
            .with_helper_text("Enter your phone number")
            .with_placeholder("Enter phone number")
    }

    fn default_custom_options(&self) -> CustomOptions {
        CustomOptions::new()
            .with("format", "any")
            .with("countryCode", "")
    }

    fn emit_markup(&self, field: &FieldInstance) -> Result<String, EmissionError> {
        let control = input_control(&field.props, Some("tel"), &[]);
        Ok(form_field(field, &standard_item(&field.props, &control)))
    }

    fn emit_schema_field(&self, field: &FieldInstance) -> Result<String, EmissionError> {
        let options: PhoneOptions = decode_options(field)?;
        let (pattern, error) = options.pattern(field)?;

        let required = field.props.required;
        let mut chain = ZodChain::new(field, "z.string()");
        if required {
            let label = label_or(&field.props, "Phone");
            chain.push(format!(".min(1, {})", message(&format!("{} is required", label))));
        }
        chain.push(format!(
            ".regex(new RegExp(\"{}\"), {})",
            escape_string(&pattern),
            message(&error)
        ));

        Ok(chain.finish(required))
    }

    fn emit_imports(&self) -> String {
        INPUT_IMPORT.to_string()
    }
}
