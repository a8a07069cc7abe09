//! Masked password input with strength rules.

use serde::Deserialize;

use super::{INPUT_IMPORT, ZodChain, form_field, input_control, label_or, message, standard_item};
use crate::error::EmissionError;
use crate::kind::{FieldKind, decode_options};
use crate::model::FieldInstance;
use crate::props::{CustomOptions, Props};

/// Minimum length enforced at every validation level except `none`.
const MIN_LENGTH: u32 = 8;

#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ValidationLevel {
    None,
    #[default]
    Medium,
    Strict,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PasswordOptions {
    validation_level: ValidationLevel,
}

impl FieldKind for PasswordInput {
    fn kind(&self) -> &'static str {
        "password"
    }

    fn display_name(&self) -> &'static str {
        "Password"
    }

    fn description(&self) -> &'static str {
        "Password input with strength validation"
    }

    fn default_props(&self) -> Props {
        Props::new("Password")
            .with_required(true)
            .with_helper_text("Enter your password")
            .with_placeholder("Enter password")
    }

    fn default_custom_options(&self) -> CustomOptions {
        CustomOptions::new().with("validationLevel", "medium")
    }

    fn emit_markup(&self, field: &FieldInstance) -> Result<String, EmissionError> {
        let control = input_control(&field.props, Some("password"), &[]);
        Ok(form_field(field, &standard_item(&field.props, &control)))
    }

    fn emit_schema_field(&self, field: &FieldInstance) -> Result<String, EmissionError> {
        let options: PasswordOptions = decode_options(field)?;
        let required = field.props.required;
        let label = label_or(&field.props, "Password");
        let mut chain = ZodChain::new(field, "z.string()");

        if required {
            chain.push(format!(".min(1, {})", message(&format!("{} is required", label))));
        }

        match options.validation_level {
            ValidationLevel::None => {}
            ValidationLevel::Medium => {
                chain.push(min_length_call());
                chain.push(format!(
                    ".regex(/(?=.*[a-z])(?=.*[A-Z])/, {})",
                    message("Password must contain both uppercase and lowercase letters")
                ));
            }
            ValidationLevel::Strict => {
                chain.push(min_length_call());
                chain.push(format!(
                    ".regex(/(?=.*[a-z])(?=.*[A-Z])(?=.*[0-9])(?=.*[!@#$%^&*])/, {})",
                    message(
                        "Password must contain uppercase, lowercase, number and special character"
                    )
                ));
            }
        }

        Ok(chain.finish(required))
    }

    fn emit_imports(&self) -> String {
        INPUT_IMPORT.to_string()
    }
}

fn min_length_call() -> String {
    format!(
        ".min({}, {})",
        MIN_LENGTH,
        message(&format!("Password must be at least {} characters", MIN_LENGTH))
    )
}
