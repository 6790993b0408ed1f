//! Input model: the Liquid object documentation (`objects.json`).
//!
//! Deserialization is deliberately lenient. Return-type descriptions stay
//! loosely typed so every shape decision is made by the classifier, never at
//! load time.

use serde::Deserialize;
use serde_json::Value;

use crate::comment::with_deprecation;
use crate::error::SchemaError;

/// One documented object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ObjectEntry {
    /// Liquid object name, e.g. `product` or `all_products`.
    pub name: String,
    /// Markdown description.
    pub summary: Option<String>,
    /// Template visibility; absent means global.
    pub access: Option<Access>,
    /// Documented fields.
    pub properties: Option<Vec<PropertyEntry>>,
    /// Type of the object itself, used by dictionary globals.
    pub return_type: Option<Vec<ReturnType>>,
    /// Marked deprecated in the documentation.
    pub deprecated: Option<bool>,
    /// Replacement advice for a deprecated object.
    pub deprecation_reason: Option<String>,
}

impl ObjectEntry {
    /// Visible in every template. Missing `access` counts as global.
    pub fn is_global(&self) -> bool {
        self.access
            .as_ref()
            .is_none_or(|access| access.global == Some(true))
    }

    /// Properties in documentation order.
    pub fn properties(&self) -> &[PropertyEntry] {
        self.properties.as_deref().unwrap_or_default()
    }

    /// Return-type descriptions of the object itself.
    pub fn return_types(&self) -> &[ReturnType] {
        self.return_type.as_deref().unwrap_or_default()
    }

    /// The deprecation reason (possibly empty) when the object is deprecated.
    pub fn deprecation(&self) -> Option<&str> {
        (self.deprecated == Some(true))
            .then(|| self.deprecation_reason.as_deref().unwrap_or_default())
    }

    /// Summary plus deprecation notice, as declaration doc text.
    pub fn doc(&self) -> Option<String> {
        with_deprecation(self.summary.as_deref(), self.deprecation())
    }
}

/// Where an object can be used.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Access {
    /// Available in every template.
    pub global: Option<bool>,
    /// Templates the object is limited to.
    pub template: Option<Vec<String>>,
}

/// One field of an object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PropertyEntry {
    /// Field name as accessed from Liquid.
    pub name: String,
    /// Markdown description.
    pub summary: Option<String>,
    /// Candidate types; several entries form a union.
    pub return_type: Option<Vec<ReturnType>>,
    /// Marked deprecated in the documentation.
    pub deprecated: Option<bool>,
}

impl PropertyEntry {
    /// Return-type descriptions; an absent list reads as empty.
    pub fn return_types(&self) -> &[ReturnType] {
        self.return_type.as_deref().unwrap_or_default()
    }

    /// Summary plus deprecation notice, as member doc text.
    pub fn doc(&self) -> Option<String> {
        let deprecation = (self.deprecated == Some(true)).then_some("");
        with_deprecation(self.summary.as_deref(), deprecation)
    }
}

/// One candidate type description.
///
/// `name` is usually a string but the documentation also carries bare
/// numbers for numeric literals, so it is kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReturnType {
    /// Type name: a scalar, an object name or `array`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Literal value for enum members.
    pub name: Option<Value>,
    /// Element type when `kind` is `array`.
    pub array_value: Option<String>,
}

impl ReturnType {
    /// The literal name as text. `None` when absent or not a scalar.
    pub fn name_text(&self) -> Option<String> {
        match self.name.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Parse the documentation array.
///
/// Structural errors carry the JSON path of the offending value.
pub fn load_objects(text: &str) -> Result<Vec<ObjectEntry>, SchemaError> {
    let de = &mut serde_json::Deserializer::from_str(text);
    serde_path_to_error::deserialize(de).map_err(|err| {
        let path = err.path().to_string();
        SchemaError::Invalid {
            path,
            source: err.into_inner(),
        }
    })
}
