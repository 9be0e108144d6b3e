/*!
 * Copyright 2025 Schemaform Contributors
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Submission pipeline and per-field error messages.
 */

use serde::{Deserialize, Serialize};

use crate::error::SubmissionError;
use crate::form::control::ControlTree;
use crate::form::validators::ErrorKind;
use crate::schema::FormSchema;
use crate::value::FieldValue;

/// Message shown for any failed `required` predicate.
pub const REQUIRED_MESSAGE: &str = "Field is required.";

/// One submitted value, labeled from the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputEntry {
    pub field_name: String,
    pub label: String,
    pub value: FieldValue,
}

impl OutputEntry {
    /// Placeholder for a control with no matching schema field.
    pub fn sentinel() -> Self {
        Self {
            field_name: String::new(),
            label: String::new(),
            value: FieldValue::empty_text(),
        }
    }
}

/// Structured result of a successful submission, in control-tree order.
pub type OutputRecord = Vec<OutputEntry>;

/// Mark every control touched, then gate on validity and extract the record.
///
/// Controls become touched whatever the outcome, so per-field errors are
/// displayable right after a failed submission.
///
/// # Errors
///
/// Returns `SubmissionError::Invalid` if any present control fails any predicate.
pub fn submit(tree: &mut ControlTree, schema: &FormSchema) -> Result<OutputRecord, SubmissionError> {
    tree.mark_all_as_touched();

    if !tree.is_valid() {
        let invalid: Vec<&str> = tree
            .iter()
            .filter(|(_, control)| !control.is_valid())
            .map(|(name, _)| name)
            .collect();
        tracing::info!(?invalid, "submission rejected");
        return Err(SubmissionError::Invalid);
    }

    let record: OutputRecord = tree
        .iter()
        .map(|(name, control)| match schema.field(name) {
            Some(field) => OutputEntry {
                field_name: name.to_string(),
                label: field.label.clone(),
                value: control.value().clone(),
            },
            None => {
                tracing::warn!(field = %name, "control has no schema field, emitting sentinel");
                OutputEntry::sentinel()
            }
        })
        .collect();

    tracing::debug!(entries = record.len(), "submission accepted");
    Ok(record)
}

/// The single message to display for a field, if any.
///
/// `None` for unknown fields, absent or untouched controls and valid
/// controls. Otherwise the first failing kind in precedence order wins.
pub fn resolve_error(schema: &FormSchema, tree: &ControlTree, field_name: &str) -> Option<String> {
    let field = schema.field(field_name)?;
    let control = tree.get(field_name)?;
    if !control.touched() {
        return None;
    }

    let kind = control.errors().keys().next()?;
    let message = match kind {
        ErrorKind::Required => REQUIRED_MESSAGE.to_string(),
        ErrorKind::Pattern => field
            .validation
            .as_ref()
            .map(|rule| rule.message.as_str())
            .filter(|message| !message.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} is invalid.", field.label)),
        ErrorKind::MinLength => format!(
            "{} must be at least {} characters long",
            field.label,
            field.min_length.unwrap_or_default()
        ),
        ErrorKind::MaxLength => format!(
            "{} cannot exceed {} characters",
            field.label,
            field.max_length.unwrap_or_default()
        ),
    };
    Some(message)
}
