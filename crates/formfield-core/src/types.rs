//! Core data types for validation reports and converted field errors
//!
//! This module defines the input side (the validation-failure report
//! produced by an upstream validator) and the output side (the flat
//! field-to-message map handed to form-rendering code). All inputs are
//! immutable once built; the output map is freshly allocated per
//! conversion call and owned by the caller.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Name carried by every structured field error record
pub const VALIDATOR_ERROR_NAME: &str = "ValidatorError";

/// Named values attached to an error detail, used to fill `${name}`
/// placeholders in message templates
pub type Context = HashMap<String, ContextValue>;

/// A single context value supplied by the upstream validator
///
/// The variants mirror the value shapes the upstream validator emits:
/// a string, a number, an explicitly-undefined marker, or the pattern
/// a field was matched against. The Display form is what placeholder
/// substitution writes into the message.
#[derive(Debug, Clone, PartialEq)]
pub enum ContextValue {
    /// The validator supplied no value for this key
    Undefined,
    String(String),
    Number(serde_json::Number),
    /// Source text of a regular expression, without delimiters
    Pattern(String),
}

impl ContextValue {
    /// Create a pattern value from regular-expression source text
    pub fn pattern<S: Into<String>>(source: S) -> Self {
        ContextValue::Pattern(source.into())
    }
}

impl fmt::Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextValue::Undefined => write!(f, "undefined"),
            ContextValue::String(s) => f.write_str(s),
            ContextValue::Number(n) => write!(f, "{}", n),
            ContextValue::Pattern(p) => write!(f, "/{}/", p),
        }
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        ContextValue::String(value.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        ContextValue::String(value)
    }
}

impl From<i32> for ContextValue {
    fn from(value: i32) -> Self {
        ContextValue::Number(value.into())
    }
}

impl From<i64> for ContextValue {
    fn from(value: i64) -> Self {
        ContextValue::Number(value.into())
    }
}

impl From<u64> for ContextValue {
    fn from(value: u64) -> Self {
        ContextValue::Number(value.into())
    }
}

impl From<serde_json::Number> for ContextValue {
    fn from(value: serde_json::Number) -> Self {
        ContextValue::Number(value)
    }
}

impl From<Value> for ContextValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ContextValue::Undefined,
            Value::Bool(b) => ContextValue::String(b.to_string()),
            Value::Number(n) => ContextValue::Number(n),
            Value::String(s) => ContextValue::String(s),
            // Arrays and objects keep their compact JSON text
            other => ContextValue::String(other.to_string()),
        }
    }
}

impl Serialize for ContextValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ContextValue::Undefined => serializer.serialize_unit(),
            ContextValue::String(s) => serializer.serialize_str(s),
            ContextValue::Number(n) => n.serialize(serializer),
            ContextValue::Pattern(_) => serializer.serialize_str(&self.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for ContextValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Value::deserialize(deserializer)?.into())
    }
}

/// One field-level validation failure from the upstream validator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Dotted path to the field where the failure happened
    pub path: String,
    /// Default human-readable message produced upstream
    pub message: String,
    /// Machine error-kind identifier, e.g. `string.min`
    #[serde(rename = "type")]
    pub kind: String,
    /// Named values providing context of the failure
    #[serde(default)]
    pub context: Context,
}

impl ErrorDetail {
    /// Create a new detail with an empty context
    pub fn new<P, M, K>(path: P, message: M, kind: K) -> Self
    where
        P: Into<String>,
        M: Into<String>,
        K: Into<String>,
    {
        Self {
            path: path.into(),
            message: message.into(),
            kind: kind.into(),
            context: Context::new(),
        }
    }

    /// Add a context value to this detail
    pub fn with_context<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<ContextValue>,
    {
        self.context.insert(name.into(), value.into());
        self
    }
}

/// A validation-failure report as produced by the upstream validator
///
/// A report without a `details` list is not a validation failure at
/// all; converting it yields `None` rather than an empty map. Unknown
/// fields in the upstream JSON shape are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Ordered sequence of per-field failures, or absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ErrorDetail>>,
}

impl ValidationReport {
    /// Create a report from a list of details
    pub fn new(details: Vec<ErrorDetail>) -> Self {
        Self {
            details: Some(details),
        }
    }
}

/// Output shape for converted field errors, fixed at converter
/// construction time and orthogonal to strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Bare message string per field
    Plain,
    /// Structured record per field, with name, path, and type
    Structured,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Structured => write!(f, "structured"),
        }
    }
}

/// Structured form of a converted field error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldErrorRecord {
    /// The resolved message
    pub message: String,
    /// Always [`VALIDATOR_ERROR_NAME`]
    pub name: String,
    /// Path of the failing field
    pub path: String,
    /// Machine error-kind identifier of the originating detail
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldErrorRecord {
    /// Create a record for a resolved message
    pub fn new<M, P, K>(message: M, path: P, kind: K) -> Self
    where
        M: Into<String>,
        P: Into<String>,
        K: Into<String>,
    {
        Self {
            message: message.into(),
            name: VALIDATOR_ERROR_NAME.to_string(),
            path: path.into(),
            kind: kind.into(),
        }
    }
}

/// A converted field error in either output format
///
/// Serializes untagged: the plain form is a bare JSON string, the
/// structured form is the record object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldError {
    Message(String),
    Record(FieldErrorRecord),
}

impl FieldError {
    /// The resolved message, regardless of output format
    pub fn message(&self) -> &str {
        match self {
            FieldError::Message(message) => message,
            FieldError::Record(record) => &record.message,
        }
    }
}

/// Mapping from field path to its converted error
pub type FieldErrorMap = HashMap<String, FieldError>;
