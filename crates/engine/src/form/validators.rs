/*!
 * Copyright 2025 Schemaform Contributors
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Validator derivation: declarative field constraints to value predicates.
 */

use std::fmt;

use serde::Serialize;

use crate::schema::{FormField, Pattern};
use crate::value::FieldValue;

/// Kind of a failed predicate.
///
/// Declaration order is the precedence used when resolving a single
/// message for a control with several failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Required,
    Pattern,
    MinLength,
    MaxLength,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Required => "required",
            ErrorKind::Pattern => "pattern",
            ErrorKind::MinLength => "minlength",
            ErrorKind::MaxLength => "maxlength",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostic payload of a failed predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ControlError {
    Required,
    Pattern {
        required_pattern: String,
        actual_value: String,
    },
    MinLength {
        required_length: usize,
        actual_length: usize,
    },
    MaxLength {
        required_length: usize,
        actual_length: usize,
    },
}

impl ControlError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ControlError::Required => ErrorKind::Required,
            ControlError::Pattern { .. } => ErrorKind::Pattern,
            ControlError::MinLength { .. } => ErrorKind::MinLength,
            ControlError::MaxLength { .. } => ErrorKind::MaxLength,
        }
    }
}

/// A pure predicate over a control value.
#[derive(Debug, Clone, PartialEq)]
pub enum Validator {
    /// The value must not be empty.
    Required,
    /// A non-empty value must fully match the pattern.
    Pattern(Pattern),
    /// A non-empty value with a length must have at least this many characters/items.
    MinLength(usize),
    /// A value with a length must have at most this many characters/items.
    MaxLength(usize),
}

impl Validator {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Validator::Required => ErrorKind::Required,
            Validator::Pattern(_) => ErrorKind::Pattern,
            Validator::MinLength(_) => ErrorKind::MinLength,
            Validator::MaxLength(_) => ErrorKind::MaxLength,
        }
    }

    /// `None` when the value passes.
    pub fn check(&self, value: &FieldValue) -> Option<ControlError> {
        match self {
            Validator::Required => value.is_empty().then_some(ControlError::Required),
            Validator::Pattern(pattern) => {
                if value.is_empty() {
                    return None;
                }
                let text = value.to_string();
                (!pattern.is_full_match(&text)).then(|| ControlError::Pattern {
                    required_pattern: pattern.as_str().to_string(),
                    actual_value: text,
                })
            }
            Validator::MinLength(min) => {
                if value.is_empty() {
                    return None;
                }
                let length = value.length()?;
                (length < *min).then_some(ControlError::MinLength {
                    required_length: *min,
                    actual_length: length,
                })
            }
            Validator::MaxLength(max) => {
                let length = value.length()?;
                (length > *max).then_some(ControlError::MaxLength {
                    required_length: *max,
                    actual_length: length,
                })
            }
        }
    }
}

/// Map a field's declarative constraints to its predicates.
///
/// Order is fixed (required, pattern, minLength, maxLength) so error
/// precedence is deterministic.
pub fn derive_validators(field: &FormField) -> Vec<Validator> {
    let mut validators = Vec::new();

    if field.is_required() {
        validators.push(Validator::Required);
    }
    if let Some(rule) = &field.validation {
        validators.push(Validator::Pattern(rule.pattern.clone()));
    }
    if let Some(min) = field.min_length {
        validators.push(Validator::MinLength(min));
    }
    if let Some(max) = field.max_length {
        validators.push(Validator::MaxLength(max));
    }

    validators
}
