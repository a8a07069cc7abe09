//! Built-in field kinds and the markup/schema building blocks they share.
//!
//! Every kind wraps its control in the same `FormField` scaffold, so the
//! `name` binding and the required marker (` *` in the label) look the same
//! across kinds. Schema entries are built with [`ZodChain`], which appends
//! `.optional()` exactly when the field is not required.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::codegen::text::{escape_jsx_attr, escape_jsx_text, escape_string, indent_lines};
use crate::error::EmissionError;
use crate::kind::FieldKind;
use crate::model::FieldInstance;
use crate::props::Props;

pub mod checkbox;
pub mod email;
pub mod number;
pub mod otp;
pub mod password;
pub mod phone;
pub mod select;
pub mod text;
pub mod textarea;

pub use checkbox::CheckboxInput;
pub use email::EmailInput;
pub use number::NumberInput;
pub use otp::OtpInput;
pub use password::PasswordInput;
pub use phone::PhoneInput;
pub use select::SelectInput;
pub use text::TextInput;
pub use textarea::TextareaInput;

/// Import line for the shared `Input` control.
pub(crate) const INPUT_IMPORT: &str = r#"import { Input } from "@/components/ui/input";"#;

/// Built-in categories in palette order.
pub fn builtin_categories() -> Vec<(&'static str, Vec<Arc<dyn FieldKind>>)> {
    let inputs: Vec<Arc<dyn FieldKind>> = vec![
        Arc::new(TextInput),
        Arc::new(PasswordInput),
        Arc::new(EmailInput),
        Arc::new(NumberInput),
        Arc::new(PhoneInput),
        Arc::new(TextareaInput),
        Arc::new(OtpInput),
    ];
    let selectors: Vec<Arc<dyn FieldKind>> = vec![Arc::new(SelectInput), Arc::new(CheckboxInput)];

    vec![("Inputs", inputs), ("Selectors", selectors)]
}

// =============================================================================
// Markup helpers
// =============================================================================

/// `<FormLabel>` with the required marker.
pub(crate) fn label(props: &Props) -> String {
    format!(
        "<FormLabel>{}{}</FormLabel>",
        escape_jsx_text(&props.label),
        if props.required { " *" } else { "" }
    )
}

/// `<FormDescription>` for the helper text, if any.
pub(crate) fn description(props: &Props) -> Option<String> {
    if props.helper_text.is_empty() {
        None
    } else {
        Some(format!(
            "<FormDescription>{}</FormDescription>",
            escape_jsx_text(&props.helper_text)
        ))
    }
}

/// A self-closing JSX element with one attribute per line.
pub(crate) fn element(tag: &str, attrs: &[String]) -> String {
    let mut out = format!("<{}", tag);
    for attr in attrs {
        out.push_str("\n  ");
        out.push_str(attr);
    }
    out.push_str("\n/>");
    out
}

/// `name="value"` with the value attribute-escaped.
pub(crate) fn attr(name: &str, value: &str) -> String {
    format!("{}=\"{}\"", name, escape_jsx_attr(value))
}

/// Wrap a `<FormItem>` block in the `FormField` scaffold bound to the field's name.
pub(crate) fn form_field(field: &FieldInstance, item: &str) -> String {
    format!(
        "<FormField\n  control={{form.control}}\n  name=\"{}\"\n  render={{({{ field }}) => (\n{}\n  )}}\n/>",
        field.name,
        indent_lines(item, "    ")
    )
}

/// The usual item layout: label, control, helper text, message.
pub(crate) fn standard_item(props: &Props, control: &str) -> String {
    let mut lines = vec![
        "<FormItem>".to_string(),
        format!("  {}", label(props)),
        "  <FormControl>".to_string(),
        indent_lines(control, "    "),
        "  </FormControl>".to_string(),
    ];
    if let Some(description) = description(props) {
        lines.push(format!("  {}", description));
    }
    lines.push("  <FormMessage />".to_string());
    lines.push("</FormItem>".to_string());
    lines.join("\n")
}

/// `placeholder` and `className`, skipping the empty ones.
pub(crate) fn common_attrs(props: &Props) -> Vec<String> {
    let mut attrs = Vec::new();
    if !props.placeholder.is_empty() {
        attrs.push(attr("placeholder", &props.placeholder));
    }
    if !props.class_name.is_empty() {
        attrs.push(attr("className", &props.class_name));
    }
    attrs
}

/// `<Input>` control spreading the react-hook-form field binding.
pub(crate) fn input_control(props: &Props, input_type: Option<&str>, extra: &[String]) -> String {
    let mut attrs = Vec::new();
    if let Some(input_type) = input_type {
        attrs.push(attr("type", input_type));
    }
    attrs.extend(extra.iter().cloned());
    attrs.extend(common_attrs(props));
    attrs.push("{...field}".to_string());
    element("Input", &attrs)
}

// =============================================================================
// Schema helpers
// =============================================================================

/// Builder for one `name: z...` schema entry.
#[derive(Debug, Clone)]
pub(crate) struct ZodChain {
    code: String,
}

impl ZodChain {
    /// Start an entry for `field` with the given base schema.
    pub(crate) fn new(field: &FieldInstance, base: &str) -> Self {
        Self {
            code: format!("{}: {}", field.name, base),
        }
    }

    /// Append a method call such as `.min(1)`.
    pub(crate) fn push(&mut self, call: impl AsRef<str>) {
        self.code.push_str(call.as_ref());
    }

    /// Close the entry, making it optional when the field is not required.
    pub(crate) fn finish(mut self, required: bool) -> String {
        if !required {
            self.code.push_str(".optional()");
        }
        self.code
    }
}

/// `{ message: "..." }` argument.
pub(crate) fn message(text: &str) -> String {
    format!("{{ message: \"{}\" }}", escape_string(text))
}

/// The label, or `fallback` when the label is empty.
pub(crate) fn label_or<'a>(props: &'a Props, fallback: &'a str) -> &'a str {
    if props.label.trim().is_empty() {
        fallback
    } else {
        &props.label
    }
}

/// Render a JS number without a trailing `.0` for integral values.
pub(crate) fn js_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Reject a `min` greater than a `max`.
pub(crate) fn check_bounds<T: PartialOrd + std::fmt::Display>(
    field: &FieldInstance,
    min_key: &str,
    min: Option<T>,
    max_key: &str,
    max: Option<T>,
) -> Result<(), EmissionError> {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(EmissionError::new(
                &field.kind,
                &field.name,
                format!("{} ({}) is greater than {} ({})", min_key, min, max_key, max),
            ));
        }
    }
    Ok(())
}

/// Decode kind-specific visual props into a typed settings struct.
pub(crate) fn decode_extra<T: DeserializeOwned>(field: &FieldInstance) -> Result<T, EmissionError> {
    let map = field
        .props
        .extra
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    serde_json::from_value(Value::Object(map)).map_err(|e| {
        EmissionError::new(&field.kind, &field.name, format!("malformed props: {}", e))
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldId;
    use crate::props::CustomOptions;

    fn field(required: bool) -> FieldInstance {
        FieldInstance::new(
            FieldId::new(),
            "nickname",
            "text",
            Props::new("Nick <name>").with_required(required),
            CustomOptions::new(),
        )
    }

    #[test]
    fn test_label_marks_required() {
        assert_eq!(label(&field(true).props), "<FormLabel>Nick &lt;name&gt; *</FormLabel>");
        assert_eq!(label(&field(false).props), "<FormLabel>Nick &lt;name&gt;</FormLabel>");
    }

    #[test]
    fn test_description_skipped_when_empty() {
        let mut props = Props::new("X");
        assert_eq!(description(&props), None);
        props.helper_text = "Help".to_string();
        assert_eq!(
            description(&props).as_deref(),
            Some("<FormDescription>Help</FormDescription>")
        );
    }

    #[test]
    fn test_form_field_binds_name() {
        let out = form_field(&field(true), "<FormItem>\n</FormItem>");
        assert!(out.starts_with("<FormField\n  control={form.control}\n  name=\"nickname\""));
        assert!(out.contains("    <FormItem>"));
        assert!(out.ends_with(")}\n/>"));
    }

    #[test]
    fn test_zod_chain_optional_only_when_not_required() {
        let f = field(true);
        let mut chain = ZodChain::new(&f, "z.string()");
        chain.push(".min(1)");
        assert_eq!(chain.clone().finish(true), "nickname: z.string().min(1)");
        assert_eq!(chain.finish(false), "nickname: z.string().min(1).optional()");
    }

    #[test]
    fn test_js_number() {
        assert_eq!(js_number(5.0), "5");
        assert_eq!(js_number(-3.0), "-3");
        assert_eq!(js_number(0.5), "0.5");
    }

    #[test]
    fn test_check_bounds() {
        let f = field(false);
        assert!(check_bounds(&f, "min", Some(1), "max", Some(2)).is_ok());
        assert!(check_bounds(&f, "min", None, "max", Some(2)).is_ok());
        let err = check_bounds(&f, "min", Some(3), "max", Some(2)).unwrap_err();
        assert_eq!(err.message, "min (3) is greater than max (2)");
    }

    #[test]
    fn test_builtin_categories() {
        let categories = builtin_categories();
        let names: Vec<_> = categories.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["Inputs", "Selectors"]);
        assert_eq!(categories[0].1.len(), 7);
        assert_eq!(categories[1].1.len(), 2);
    }
}
