/*!
 * Copyright 2025 Schemaform Contributors
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use serde_json::Value;

/// Type guard to check if value is a record/object. `null` and arrays are not.
pub fn is_record(value: &Value) -> bool {
    value.is_object()
}

/// Type guard for a present, non-empty string.
pub fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Type guard to check if value has a non-empty name property.
pub fn has_name(value: &Value) -> Option<&str> {
    non_empty_str(value.get("name"))
}

/// Name of the parent field referenced by a field's condition, if well-formed.
pub fn condition_field_name(value: &Value) -> Option<&str> {
    value
        .get("condition")
        .filter(|condition| is_record(condition))
        .and_then(|condition| non_empty_str(condition.get("fieldName")))
}

/// Type guard for an array whose items are all strings.
pub fn is_string_array(value: &Value) -> bool {
    value
        .as_array()
        .map(|items| items.iter().all(Value::is_string))
        .unwrap_or(false)
}

/// True if the value is an object or an array containing one at any depth.
pub fn contains_object(value: &Value) -> bool {
    match value {
        Value::Object(_) => true,
        Value::Array(items) => items.iter().any(contains_object),
        _ => false,
    }
}

/// Type guard for a number usable as a length bound.
pub fn is_length_bound(value: &Value) -> bool {
    value.as_u64().is_some()
}
