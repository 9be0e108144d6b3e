/*!
 * Copyright 2025 Schemaform Contributors
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use thiserror::Error;

/// Why a document could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid JSON at line {line}, column {column}: {message}")]
    InvalidJson {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Invalid YAML: {0}")]
    InvalidYaml(String),

    /// Blank input, or YAML without a single document.
    #[error("Document is empty")]
    EmptyDocument,
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        ParseError::InvalidJson {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        }
    }
}
