/*!
 * Copyright 2025 Schemaform Contributors
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use crate::validator::error::ValidationError;
use crate::validator::type_guards::{condition_field_name, has_name};

/// Cross-field rules: unique names and a well-formed condition graph.
///
/// Only fields whose name and condition already passed the per-field checks
/// take part, so a malformed attribute is never reported twice.
pub fn validate_references(fields: &[Value]) -> Vec<ValidationError> {
    let first_index = first_index_by_name(fields);

    let mut errors = Vec::new();
    errors.extend(validate_duplicate_field_names(fields, &first_index));
    errors.extend(validate_condition_targets(fields, &first_index));
    errors.extend(validate_condition_cycles(fields, &first_index));
    errors
}

fn first_index_by_name(fields: &[Value]) -> HashMap<&str, usize> {
    let mut first_index = HashMap::new();
    for (index, field) in fields.iter().enumerate() {
        if let Some(name) = has_name(field) {
            first_index.entry(name).or_insert(index);
        }
    }
    first_index
}

/// Names are control identities, so every repeat after the first is an error.
fn validate_duplicate_field_names(
    fields: &[Value],
    first_index: &HashMap<&str, usize>,
) -> Vec<ValidationError> {
    fields
        .iter()
        .enumerate()
        .filter_map(|(index, field)| {
            let name = has_name(field)?;
            (first_index.get(name) != Some(&index)).then(|| {
                ValidationError::new(
                    format!("fields[{index}].name"),
                    format!("Duplicate field name: '{name}'"),
                )
                .with_suggestion(Some(
                    "Field names must be unique. Rename this field or remove the duplicate."
                        .to_string(),
                ))
            })
        })
        .collect()
}

fn validate_condition_targets(
    fields: &[Value],
    first_index: &HashMap<&str, usize>,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let Some(parent) = condition_field_name(field) else {
            continue;
        };
        let path = format!("fields[{index}].condition.fieldName");

        if has_name(field) == Some(parent) {
            errors.push(ValidationError::new(
                path,
                "Condition cannot reference its own field",
            ));
        } else if !first_index.contains_key(parent) {
            errors.push(ValidationError::new(
                path,
                format!("Condition references unknown field '{parent}'"),
            ));
        }
    }

    errors
}

/// Report each cycle of two or more fields once, at its lowest-index member.
fn validate_condition_cycles(
    fields: &[Value],
    first_index: &HashMap<&str, usize>,
) -> Vec<ValidationError> {
    let mut parent_of: HashMap<&str, &str> = HashMap::new();
    for (index, field) in fields.iter().enumerate() {
        let (Some(name), Some(parent)) = (has_name(field), condition_field_name(field)) else {
            continue;
        };
        if first_index.get(name) == Some(&index)
            && name != parent
            && first_index.contains_key(parent)
        {
            parent_of.insert(name, parent);
        }
    }

    let mut reported: HashSet<&str> = HashSet::new();
    let mut errors = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let Some(start) = has_name(field) else {
            continue;
        };
        if first_index.get(start) != Some(&index) || reported.contains(start) {
            continue;
        }

        let mut chain = vec![start];
        let mut current = start;
        while let Some(&parent) = parent_of.get(current) {
            if let Some(position) = chain.iter().position(|name| *name == parent) {
                if position == 0 {
                    reported.extend(chain.iter().copied());
                    errors.push(ValidationError::new(
                        format!("fields[{index}].condition.fieldName"),
                        format!(
                            "Condition cycle detected: {} -> {start}",
                            chain.join(" -> ")
                        ),
                    ));
                }
                break;
            }
            chain.push(parent);
            current = parent;
        }
    }

    errors
}
