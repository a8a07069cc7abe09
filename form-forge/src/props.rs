//! Visual props and non-visual custom options carried by field instances.
//!
//! [`Props`] holds the configuration every kind renders (label, required
//! marker, helper text, ...) plus an `extra` map for kind-specific visual
//! settings. [`CustomOptions`] holds settings that only influence the
//! generated validation schema. Both merge shallowly: keys present in a
//! patch overwrite, everything else is retained.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Visual configuration of a field instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Props {
    /// Label shown above the control.
    pub label: String,

    /// Whether the field must be filled in.
    pub required: bool,

    /// Helper text rendered below the control. Empty means none.
    pub helper_text: String,

    /// Placeholder text. Empty means none.
    pub placeholder: String,

    /// Extra CSS classes for the control.
    pub class_name: String,

    /// Kind-specific visual settings (e.g. `rows`, `length`).
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Props {
    /// Create props with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the required flag.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the helper text.
    pub fn with_helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = text.into();
        self
    }

    /// Set the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set a kind-specific visual setting.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Merge a patch into these props.
    pub fn apply(&mut self, patch: PropsPatch) {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(required) = patch.required {
            self.required = required;
        }
        if let Some(helper_text) = patch.helper_text {
            self.helper_text = helper_text;
        }
        if let Some(placeholder) = patch.placeholder {
            self.placeholder = placeholder;
        }
        if let Some(class_name) = patch.class_name {
            self.class_name = class_name;
        }
        self.extra.extend(patch.extra);
    }
}

/// Partial update for [`Props`]; unset fields are left untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropsPatch {
    pub label: Option<String>,
    pub required: Option<bool>,
    pub helper_text: Option<String>,
    pub placeholder: Option<String>,
    pub class_name: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl PropsPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the required flag.
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Set the helper text.
    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    /// Set the placeholder.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the CSS classes.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set a kind-specific visual setting.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Build a patch from a single `key = value` pair.
    ///
    /// Known keys (`label`, `required`, ...) are type-checked; any other key
    /// becomes a kind-specific setting.
    pub fn from_pair(key: &str, value: Value) -> Result<Self, serde_json::Error> {
        let mut object = Map::new();
        object.insert(key.to_string(), value);
        serde_json::from_value(Value::Object(object))
    }
}

/// Non-visual configuration that only affects the generated schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomOptions(Map<String, Value>);

impl CustomOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option (builder style).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Set an option.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get an option by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Shallow merge: every key in `partial` overwrites the current value.
    pub fn merge(&mut self, partial: CustomOptions) {
        for (key, value) in partial.0 {
            self.0.insert(key, value);
        }
    }

    /// Decode the options into a kind's typed option struct.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.0.clone()))
    }

    /// Iterate over the options.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of options set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether no option is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for CustomOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
