/*!
 * Copyright 2025 Schemaform Contributors
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Decoding of uploaded form schema documents.
 */

use serde_json::Value;

use crate::parser::error::ParseError;
use crate::parser::utils::parse_yaml_or_json;

/// Decode a form schema document from a YAML/JSON string.
///
/// Only decodes: the result is an untrusted value that still has to go
/// through [`crate::validate_schema`] before it can become a `FormSchema`.
///
/// # Arguments
///
/// * `content` - The YAML or JSON content as a string
/// * `file_path` - Optional file name used for format detection
///
/// # Errors
///
/// Returns `ParseError` if the content is blank or is not valid YAML/JSON.
pub fn parse_schema_document(content: &str, file_path: Option<&str>) -> Result<Value, ParseError> {
    if content.trim().is_empty() {
        return Err(ParseError::EmptyDocument);
    }
    parse_yaml_or_json(content, file_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_schema_document() {
        let content = r#"{"title": "Contact", "fields": []}"#;
        let value = parse_schema_document(content, Some("contact.json")).unwrap();
        assert_eq!(value["title"], "Contact");
        assert!(value["fields"].is_array());
    }

    #[test]
    fn test_parse_yaml_schema_document() {
        let content = r"
title: Contact
fields:
  - label: Email
    name: email
    type: email
    required: true
    minLength: 3
";
        let value = parse_schema_document(content, Some("contact.yaml")).unwrap();
        assert_eq!(value["fields"][0]["name"], "email");
        assert_eq!(value["fields"][0]["required"], true);
        assert_eq!(value["fields"][0]["minLength"], 3);
    }

    #[test]
    fn test_blank_document_is_rejected() {
        assert!(matches!(
            parse_schema_document("  \n", None),
            Err(ParseError::EmptyDocument)
        ));
    }

    #[test]
    fn test_malformed_json_with_json_extension() {
        let result = parse_schema_document(r#"{"title": "#, Some("schema.json"));
        assert!(matches!(result, Err(ParseError::InvalidJson { .. })));
    }
}
