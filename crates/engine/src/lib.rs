//! Schemaform Engine Library
//!
//! Copyright 2025 Schemaform Contributors
//! Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
//! See the LICENSE file in the project root for details.
//!
//! This library turns declarative form schemas into live, validated form state.
//! It works only with in-memory data (no file I/O): documents arrive as strings
//! or already-decoded values, and results leave as values.
//!
//! # Example
//!
//! ```rust
//! use schemaform_engine::{load_schema, DynamicForm};
//!
//! let schema_json = r#"{
//!   "title": "Signup",
//!   "fields": [
//!     { "label": "Status", "name": "status", "type": "dropdown",
//!       "options": ["Employed", "Student"], "required": true },
//!     { "label": "Company", "name": "company", "type": "text", "required": true,
//!       "condition": { "fieldName": "status", "value": "Employed" } }
//!   ]
//! }"#;
//!
//! let schema = load_schema(schema_json, Some("signup.json"))?;
//! let mut form = DynamicForm::new(schema);
//! form.set_value("status", "Student")?;
//! assert!(!form.tree().contains("company"));
//!
//! let record = form.submit().expect("form is valid");
//! assert_eq!(record[0].label, "Status");
//! # Ok::<(), schemaform_engine::EngineError>(())
//! ```

pub mod error;
pub mod form;
pub mod parser;
pub mod schema;
pub mod validator;
pub mod value;

#[cfg(test)]
mod test_fixtures;

use serde_json::Value;

// Re-export the public surface
pub use error::{EngineError, ParseError, SubmissionError};
pub use form::builder::build_form;
pub use form::control::{Control, ControlTree};
pub use form::submission::{submit, OutputEntry, OutputRecord};
pub use form::validators::{derive_validators, ControlError, ErrorKind, Validator};
pub use form::visibility::{is_field_visible, toggle_field_visibility, Subscriptions};
pub use form::DynamicForm;
pub use schema::{Condition, FieldType, FormField, FormSchema, Pattern, ValidationRule};
pub use validator::error::{SchemaValidation, ValidationError};
pub use validator::{SchemaValidator, ValidationOptions};
pub use value::FieldValue;

/// Decode a schema document from a YAML/JSON string.
///
/// # Errors
///
/// Returns `ParseError` if the input is blank or invalid YAML/JSON.
pub fn parse_schema(content: &str, file_path: Option<&str>) -> Result<Value, EngineError> {
    parser::parse_schema_document(content, file_path).map_err(EngineError::from)
}

/// Structurally validate an untrusted decoded document with default options.
pub fn validate_schema(raw: &Value) -> SchemaValidation {
    SchemaValidator::new().validate(raw)
}

/// Decode, validate and convert a schema document in one step.
///
/// # Errors
///
/// Returns `EngineError::Parse` for undecodable input and
/// `EngineError::SchemaRejected` with every violation for a malformed schema.
pub fn load_schema(content: &str, file_path: Option<&str>) -> Result<FormSchema, EngineError> {
    let raw = parse_schema(content, file_path)?;
    FormSchema::from_value(&raw)
}
