//! Raw establishment attributes as submitted by callers.
//!
//! A record is an open map of attribute name to loosely typed value. Domain
//! modules pull the fields they need through the typed accessors below, which
//! coerce compatible representations (for example `"3"` where an integer is
//! expected) and reject the rest with an [`EncodingError`].

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Single attribute value. Deserialized untagged so plain JSON objects map
/// directly onto a [`RawAttributeRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Flag(bool),
    Integer(i64),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl AttributeValue {
    pub const fn kind(&self) -> &'static str {
        match self {
            AttributeValue::Flag(_) => "boolean",
            AttributeValue::Integer(_) => "integer",
            AttributeValue::Number(_) => "float",
            AttributeValue::Text(_) => "string",
            AttributeValue::List(_) => "list",
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for AttributeValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(str::to_string).collect())
    }
}

/// Failure to read a required field from a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("required field '{field}' is missing")]
    MissingField { field: String },
    #[error("field '{field}' must be {expected}, got {found}")]
    InvalidType {
        field: String,
        expected: &'static str,
        found: String,
    },
}

impl EncodingError {
    fn invalid(field: &str, expected: &'static str, found: impl Into<String>) -> Self {
        Self::InvalidType {
            field: field.to_string(),
            expected,
            found: found.into(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            EncodingError::MissingField { field } | EncodingError::InvalidType { field, .. } => {
                field
            }
        }
    }
}

/// One establishment to classify. Never mutated once handed to a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAttributeRecord {
    fields: BTreeMap<String, AttributeValue>,
}

impl RawAttributeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mainly for fixtures and the CSV importer.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        self.fields.remove(name)
    }

    /// Builder-style removal, the counterpart of [`RawAttributeRecord::with`].
    pub fn without(mut self, name: &str) -> Self {
        self.fields.remove(name);
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn require(&self, field: &str) -> Result<&AttributeValue, EncodingError> {
        self.fields
            .get(field)
            .ok_or_else(|| EncodingError::MissingField {
                field: field.to_string(),
            })
    }

    /// Categorical or free-text field. Numbers are rendered so that a bucket
    /// such as `"3"` may also arrive as the JSON number `3`.
    pub fn text(&self, field: &str) -> Result<Cow<'_, str>, EncodingError> {
        match self.require(field)? {
            AttributeValue::Text(value) => Ok(Cow::Borrowed(value.as_str())),
            AttributeValue::Integer(value) => Ok(Cow::Owned(value.to_string())),
            AttributeValue::Number(value) if value.fract() == 0.0 && value.is_finite() => {
                Ok(Cow::Owned(format!("{value:.0}")))
            }
            AttributeValue::Number(value) => Ok(Cow::Owned(value.to_string())),
            other => Err(EncodingError::invalid(field, "a string", other.kind())),
        }
    }

    pub fn flag(&self, field: &str) -> Result<bool, EncodingError> {
        match self.require(field)? {
            AttributeValue::Flag(value) => Ok(*value),
            AttributeValue::Integer(0) => Ok(false),
            AttributeValue::Integer(1) => Ok(true),
            AttributeValue::Text(raw) => parse_flag(raw)
                .ok_or_else(|| EncodingError::invalid(field, "a boolean", format!("'{raw}'"))),
            other => Err(EncodingError::invalid(field, "a boolean", other.kind())),
        }
    }

    pub fn integer(&self, field: &str) -> Result<i64, EncodingError> {
        match self.require(field)? {
            AttributeValue::Integer(value) => Ok(*value),
            AttributeValue::Number(value) => whole_number(*value)
                .ok_or_else(|| EncodingError::invalid(field, "an integer", value.to_string())),
            AttributeValue::Text(raw) => parse_integer(raw)
                .ok_or_else(|| EncodingError::invalid(field, "an integer", format!("'{raw}'"))),
            other => Err(EncodingError::invalid(field, "an integer", other.kind())),
        }
    }

    pub fn number(&self, field: &str) -> Result<f64, EncodingError> {
        match self.require(field)? {
            AttributeValue::Integer(value) => Ok(*value as f64),
            AttributeValue::Number(value) => Ok(*value),
            AttributeValue::Text(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| EncodingError::invalid(field, "a number", format!("'{raw}'"))),
            other => Err(EncodingError::invalid(field, "a number", other.kind())),
        }
    }

    /// List field. Text is split on `;` so CSV cells can carry lists.
    pub fn list(&self, field: &str) -> Result<Vec<String>, EncodingError> {
        match self.require(field)? {
            AttributeValue::List(values) => Ok(values.clone()),
            AttributeValue::Text(raw) => Ok(raw
                .split(';')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()),
            other => Err(EncodingError::invalid(field, "a list of strings", other.kind())),
        }
    }

    /// Optional number: absent is `None`, present-but-invalid is still an error.
    pub fn optional_number(&self, field: &str) -> Result<Option<f64>, EncodingError> {
        if self.contains(field) {
            self.number(field).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl FromIterator<(String, AttributeValue)> for RawAttributeRecord {
    fn from_iter<T: IntoIterator<Item = (String, AttributeValue)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "sí" | "si" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn parse_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    trimmed.parse::<f64>().ok().and_then(whole_number)
}

/// Whole float inside the `i64` range. `i64::MAX as f64` rounds up to 2^63,
/// so the upper bound is exclusive.
fn whole_number(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}
