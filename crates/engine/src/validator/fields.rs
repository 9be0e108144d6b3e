/*!
 * Copyright 2025 Schemaform Contributors
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use serde_json::Value;

use crate::schema::{FieldType, Pattern};
use crate::validator::constants::SUGGESTION_THRESHOLD;
use crate::validator::error::ValidationError;
use crate::validator::type_guards::{
    contains_object, is_length_bound, is_record, is_string_array, non_empty_str,
};

/// Validate one entry of the `fields` array.
///
/// Every attribute is checked independently; a field that is not an object
/// yields a single error.
pub fn validate_field(field: &Value, index: usize) -> Vec<ValidationError> {
    let path = format!("fields[{index}]");

    if !is_record(field) {
        return vec![ValidationError::new(path, "Field must be an object")];
    }

    let mut errors = Vec::new();

    if non_empty_str(field.get("label")).is_none() {
        errors.push(ValidationError::new(
            format!("{path}.label"),
            "Label is required and must be a string",
        ));
    }

    if non_empty_str(field.get("name")).is_none() {
        errors.push(ValidationError::new(
            format!("{path}.name"),
            "Name is required and must be a string",
        ));
    }

    errors.extend(validate_type(&path, field.get("type")));

    if let Some(required) = field.get("required") {
        if !required.is_boolean() {
            errors.push(ValidationError::new(
                format!("{path}.required"),
                "Required must be a boolean",
            ));
        }
    }

    errors.extend(validate_length_bound(&path, field, "minLength", "MinLength"));
    errors.extend(validate_length_bound(&path, field, "maxLength", "MaxLength"));

    if let Some(options) = field.get("options") {
        if !options.is_array() {
            errors.push(ValidationError::new(
                format!("{path}.options"),
                "Options must be an array",
            ));
        } else if !is_string_array(options) {
            errors.push(ValidationError::new(
                format!("{path}.options"),
                "All options must be strings",
            ));
        }
    }

    if let Some(validation) = field.get("validation") {
        errors.extend(validate_validation_rule(&path, validation));
    }

    if let Some(condition) = field.get("condition") {
        errors.extend(validate_condition(&path, condition));
    }

    errors
}

fn validate_type(path: &str, field_type: Option<&Value>) -> Vec<ValidationError> {
    let Some(type_name) = non_empty_str(field_type) else {
        return vec![ValidationError::new(
            format!("{path}.type"),
            "Type is required and must be a string",
        )];
    };

    if FieldType::parse(type_name).is_some() {
        return Vec::new();
    }

    let valid_types: Vec<&str> = FieldType::ALL.iter().map(|t| t.as_str()).collect();
    vec![ValidationError::new(
        format!("{path}.type"),
        format!("Type must be one of: {}", valid_types.join(", ")),
    )
    .with_suggestion(suggest_field_type(type_name))]
}

/// Suggest the closest supported type name for a misspelled one.
fn suggest_field_type(type_name: &str) -> Option<String> {
    let lowered = type_name.to_lowercase();
    FieldType::ALL
        .iter()
        .map(|t| (t.as_str(), strsim::jaro_winkler(&lowered, t.as_str())))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(name, _)| format!("Did you mean '{name}'?"))
}

fn validate_length_bound(
    path: &str,
    field: &Value,
    key: &str,
    display_name: &str,
) -> Option<ValidationError> {
    let bound = field.get(key)?;
    if !bound.is_number() {
        return Some(ValidationError::new(
            format!("{path}.{key}"),
            format!("{display_name} must be a number"),
        ));
    }
    if !is_length_bound(bound) {
        return Some(ValidationError::new(
            format!("{path}.{key}"),
            format!("{display_name} must be a non-negative integer"),
        ));
    }
    None
}

fn validate_validation_rule(path: &str, validation: &Value) -> Vec<ValidationError> {
    if !is_record(validation) {
        return vec![ValidationError::new(
            format!("{path}.validation"),
            "Validation must be an object",
        )];
    }

    let mut errors = Vec::new();

    match non_empty_str(validation.get("pattern")) {
        None => errors.push(ValidationError::new(
            format!("{path}.validation.pattern"),
            "Pattern is required and must be a string",
        )),
        Some(source) => {
            if let Err(err) = Pattern::new(source) {
                let detail = err.to_string().split_whitespace().collect::<Vec<_>>().join(" ");
                errors.push(
                    ValidationError::new(
                        format!("{path}.validation.pattern"),
                        "Pattern must be a valid regular expression",
                    )
                    .with_suggestion(Some(detail)),
                );
            }
        }
    }

    if non_empty_str(validation.get("message")).is_none() {
        errors.push(ValidationError::new(
            format!("{path}.validation.message"),
            "Message is required and must be a string",
        ));
    }

    errors
}

fn validate_condition(path: &str, condition: &Value) -> Vec<ValidationError> {
    if !is_record(condition) {
        return vec![ValidationError::new(
            format!("{path}.condition"),
            "Condition must be an object",
        )];
    }

    let mut errors = Vec::new();

    if non_empty_str(condition.get("fieldName")).is_none() {
        errors.push(ValidationError::new(
            format!("{path}.condition.fieldName"),
            "FieldName is required and must be a string",
        ));
    }

    match condition.get("value") {
        None => errors.push(ValidationError::new(
            format!("{path}.condition.value"),
            "Value is required",
        )),
        Some(value) if contains_object(value) => errors.push(ValidationError::new(
            format!("{path}.condition.value"),
            "Value must be a primitive or an array of primitives",
        )),
        Some(_) => {}
    }

    errors
}
