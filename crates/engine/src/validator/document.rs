/*!
 * Copyright 2025 Schemaform Contributors
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use serde_json::Value;

use crate::validator::constants::ROOT_PATH;
use crate::validator::error::ValidationError;
use crate::validator::fields::validate_field;
use crate::validator::references::validate_references;
use crate::validator::type_guards::{is_record, non_empty_str};
use crate::validator::ValidationOptions;

/// Walk a raw schema document and collect every structural violation.
///
/// A missing or non-array `fields` stops the walk: nothing below it can be
/// interpreted.
pub fn validate_document(raw: &Value, options: &ValidationOptions) -> Vec<ValidationError> {
    if !is_record(raw) {
        return vec![ValidationError::new(ROOT_PATH, "Schema must be an object")];
    }

    let mut errors = Vec::new();

    if non_empty_str(raw.get("title")).is_none() {
        errors.push(ValidationError::new(
            "title",
            "Title is required and must be a string",
        ));
    }

    let Some(fields) = raw.get("fields").and_then(Value::as_array) else {
        errors.push(ValidationError::new(
            "fields",
            "Fields is required and must be an array",
        ));
        return errors;
    };

    for (index, field) in fields.iter().enumerate() {
        errors.extend(validate_field(field, index));
    }

    if options.check_references {
        errors.extend(validate_references(fields));
    }

    errors
}
