/*!
 * Copyright 2025 Schemaform Contributors
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Field values: a closed variant over the shapes a schema document can carry.
 */

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EngineError;

/// Current value of a control, or the expected value of a condition.
///
/// Equality is strict: variants never compare equal across kinds, so
/// `Number(0.0)` and `Text("0")` are different values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// The empty string, the initial value of text-like controls.
    pub fn empty_text() -> Self {
        FieldValue::Text(String::new())
    }

    /// `Null`, the empty string and the empty list count as "no input".
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Bool(_) | FieldValue::Number(_) => false,
        }
    }

    /// Length in characters (text) or items (list). Other values have no length.
    pub fn length(&self) -> Option<usize> {
        match self {
            FieldValue::Text(s) => Some(s.chars().count()),
            FieldValue::List(items) => Some(items.len()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Convert a decoded document value. Objects have no field-value counterpart.
    pub fn from_json(value: &Value) -> Result<Self, EngineError> {
        match value {
            Value::Null => Ok(FieldValue::Null),
            Value::Bool(b) => Ok(FieldValue::Bool(*b)),
            Value::Number(n) => n
                .as_f64()
                .map(FieldValue::Number)
                .ok_or_else(|| EngineError::UnsupportedValue(format!("number {n}"))),
            Value::String(s) => Ok(FieldValue::Text(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(FieldValue::from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(FieldValue::List),
            Value::Object(_) => Err(EngineError::UnsupportedValue(
                "objects cannot be used as field values".to_string(),
            )),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Null => Value::Null,
            FieldValue::Bool(b) => Value::Bool(*b),
            FieldValue::Number(n) => number_to_json(*n),
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::List(items) => Value::Array(items.iter().map(FieldValue::to_json).collect()),
        }
    }
}

fn number_to_json(n: f64) -> Value {
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

/// Textual rendering used by the pattern predicate.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("null"),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Number(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{n:.0}"),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl TryFrom<Value> for FieldValue {
    type Error = EngineError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        FieldValue::from_json(&value)
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        value.to_json()
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        FieldValue::List(values.into_iter().map(Into::into).collect())
    }
}
