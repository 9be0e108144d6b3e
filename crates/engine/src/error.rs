/*!
 * Copyright 2025 Schemaform Contributors
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */
use thiserror::Error;

use crate::validator::error::ValidationError;

pub use crate::parser::error::ParseError;

/// Top-level error type for the form engine
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Schema rejected: {} validation error(s)", .0.len())]
    SchemaRejected(Vec<ValidationError>),

    #[error("Control not found: {0}")]
    ControlNotFound(String),

    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),
}

/// Outcome of a failed submission.
///
/// The gate is a single boolean: callers re-query per-field errors for display.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Form is invalid")]
    Invalid,
}
