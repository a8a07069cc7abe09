//! One-time code input rendered as grouped slots.

use serde::Deserialize;

use super::{ZodChain, attr, decode_extra, form_field, message, standard_item};
use crate::codegen::text::indent_lines;
use crate::error::EmissionError;
use crate::kind::FieldKind;
use crate::model::FieldInstance;
use crate::props::{CustomOptions, Props};

#[derive(Debug, Clone, Copy, Default)]
pub struct OtpInput;

/// Slot layout, read from the visual props.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct OtpSettings {
    length: u32,
    is_numeric: bool,
    show_groups: bool,
    group_size: u32,
    auto_focus: bool,
}

impl Default for OtpSettings {
    fn default() -> Self {
        Self {
            length: 6,
            is_numeric: true,
            show_groups: true,
            group_size: 3,
            auto_focus: false,
        }
    }
}

impl OtpSettings {
    fn load(field: &FieldInstance) -> Result<Self, EmissionError> {
        let settings: Self = decode_extra(field)?;
        if settings.length == 0 {
            return Err(EmissionError::new(
                &field.kind,
                &field.name,
                "length must be at least 1",
            ));
        }
        if settings.group_size == 0 {
            return Err(EmissionError::new(
                &field.kind,
                &field.name,
                "groupSize must be at least 1",
            ));
        }
        Ok(settings)
    }

    /// Slot groups, separated by `<InputOTPSeparator />` when grouping is on.
    fn slots(&self) -> String {
        let group_size = if self.show_groups {
            self.group_size
        } else {
            self.length
        };

        let mut blocks = Vec::new();
        let mut start = 0;
        while start < self.length {
            let end = (start + group_size).min(self.length);
            let slots = (start..end)
                .map(|i| format!("<InputOTPSlot index={{{}}} />", i))
                .collect::<Vec<_>>()
                .join("\n");
            if start > 0 {
                blocks.push("<InputOTPSeparator />".to_string());
            }
            blocks.push(format!(
                "<InputOTPGroup>\n{}\n</InputOTPGroup>",
                indent_lines(&slots, "  ")
            ));
            start = end;
        }
        blocks.join("\n")
    }
}

impl FieldKind for OtpInput {
    fn kind(&self) -> &'static str {
        "otp"
    }

    fn display_name(&self) -> &'static str {
        "OTP"
    }

    fn description(&self) -> &'static str {
        "One-time password input field"
    }

    fn default_props(&self) -> Props {
        let defaults = OtpSettings::default();
        Props::new("OTP Code")
            .with_required(true)
            .with_helper_text("Enter the verification code")
            .with_extra("length", defaults.length)
            .with_extra("isNumeric", defaults.is_numeric)
            .with_extra("showGroups", defaults.show_groups)
            .with_extra("groupSize", defaults.group_size)
            .with_extra("autoFocus", defaults.auto_focus)
    }

    fn default_custom_options(&self) -> CustomOptions {
        CustomOptions::new()
    }

    fn emit_markup(&self, field: &FieldInstance) -> Result<String, EmissionError> {
        let settings = OtpSettings::load(field)?;

        let mut attrs = vec![format!("maxLength={{{}}}", settings.length)];
        if settings.is_numeric {
            attrs.push(attr("pattern", "[0-9]*"));
        }
        if settings.auto_focus {
            attrs.push("autoFocus".to_string());
        }
        if !field.props.class_name.is_empty() {
            attrs.push(attr("className", &field.props.class_name));
        }
        attrs.push("{...field}".to_string());

        let mut control = String::from("<InputOTP");
        for a in &attrs {
            control.push_str("\n  ");
            control.push_str(a);
        }
        control.push_str("\n>\n");
        control.push_str(&indent_lines(&settings.slots(), "  "));
        control.push_str("\n</InputOTP>");

        Ok(form_field(field, &standard_item(&field.props, &control)))
    }

    fn emit_schema_field(&self, field: &FieldInstance) -> Result<String, EmissionError> {
        let settings = OtpSettings::load(field)?;
        let required = field.props.required;
        let mut chain = ZodChain::new(field, "z.string()");

        if required {
            chain.push(format!(
                ".length({}, {})",
                settings.length,
                message("Please enter a valid OTP code")
            ));
        }
        if settings.is_numeric {
            chain.push(format!(
                r".regex(/^\d+$/, {})",
                message("OTP must contain only digits")
            ));
        }

        Ok(chain.finish(required))
    }

    fn emit_imports(&self) -> String {
        r#"import { InputOTP, InputOTPGroup, InputOTPSlot, InputOTPSeparator } from "@/components/ui/input-otp";"#
            .to_string()
    }
}
