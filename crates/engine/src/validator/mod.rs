/*!
 * Copyright 2025 Schemaform Contributors
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

pub mod constants;
pub mod document;
pub mod error;
pub mod fields;
pub mod references;
pub mod type_guards;


use serde_json::Value;

use crate::validator::document::validate_document;
use crate::validator::error::{SchemaValidation, ValidationError};

/// Switches for the checks that go beyond a field's own attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Reject duplicate names and self-referencing, dangling or cyclic conditions.
    pub check_references: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            check_references: true,
        }
    }
}

/// Structural validator for uploaded form schema documents.
///
/// Non-fail-fast: the whole document is walked and every violation is
/// reported, so a malformed schema can be fixed in one pass.
#[derive(Debug, Clone, Default)]
pub struct SchemaValidator {
    options: ValidationOptions,
}

impl SchemaValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ValidationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Validate a decoded document.
    pub fn validate(&self, raw: &Value) -> SchemaValidation {
        let errors = validate_document(raw, &self.options);
        if errors.is_empty() {
            tracing::debug!("schema document passed validation");
        } else {
            tracing::debug!(error_count = errors.len(), "schema document rejected");
        }
        SchemaValidation::from_errors(errors)
    }

    /// Human-readable report, one block per error. Empty when there is
    /// nothing to report.
    pub fn format_errors(&self, errors: &[ValidationError]) -> String {
        if errors.is_empty() {
            return String::new();
        }

        let mut report = format!("✗ Schema validation failed ({} errors)\n\n", errors.len());
        for error in errors {
            report.push_str(&format!("  Error: {}\n  Path: {}\n", error.message, error.path));
            if let Some(suggestion) = &error.suggestion {
                report.push_str(&format!("  Suggestion: {suggestion}\n"));
            }
            report.push('\n');
        }
        report
    }
}
