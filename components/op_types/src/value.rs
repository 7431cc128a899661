//! Operation payload values.
//!
//! This module provides the `OpValue` enum representing the values that
//! operations fulfill with. The representation is deliberately small:
//! aggregation never inspects payloads, it only moves them around.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The payload an operation fulfills with.
///
/// Values are serialized untagged, so scenario files and reports carry
/// plain JSON scalars.
///
/// # Examples
///
/// ```
/// use op_types::OpValue;
///
/// let v = OpValue::Text("payload".to_string());
/// assert_eq!(v.type_name(), "text");
/// assert_eq!(v.to_string(), "payload");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpValue {
    /// Absence of a meaningful payload
    Null,
    /// Boolean payload
    Bool(bool),
    /// Integer payload
    Int(i64),
    /// Floating-point payload
    Float(f64),
    /// Text payload
    Text(String),
}

impl OpValue {
    /// Returns the name of this value's variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            OpValue::Null => "null",
            OpValue::Bool(_) => "bool",
            OpValue::Int(_) => "int",
            OpValue::Float(_) => "float",
            OpValue::Text(_) => "text",
        }
    }

    /// Returns the text payload, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OpValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for OpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpValue::Null => write!(f, "null"),
            OpValue::Bool(b) => write!(f, "{}", b),
            OpValue::Int(n) => write!(f, "{}", n),
            OpValue::Float(n) => write!(f, "{}", n),
            OpValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for OpValue {
    fn from(s: &str) -> Self {
        OpValue::Text(s.to_string())
    }
}

impl From<String> for OpValue {
    fn from(s: String) -> Self {
        OpValue::Text(s)
    }
}

impl From<i64> for OpValue {
    fn from(n: i64) -> Self {
        OpValue::Int(n)
    }
}

impl From<bool> for OpValue {
    fn from(b: bool) -> Self {
        OpValue::Bool(b)
    }
}
