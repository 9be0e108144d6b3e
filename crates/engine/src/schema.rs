/*!
 * Copyright 2025 Schemaform Contributors
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Schema model: the typed description of a form.
 */

use std::fmt;

use fancy_regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::EngineError;
use crate::validator::SchemaValidator;
use crate::value::FieldValue;

/// A form: a title and its fields in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    pub title: String,
    pub fields: Vec<FormField>,
}

impl FormSchema {
    /// Validate an untrusted decoded document and convert it into a schema.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::SchemaRejected` carrying every structural violation.
    pub fn from_value(raw: &Value) -> Result<Self, EngineError> {
        Self::from_value_with(&SchemaValidator::new(), raw)
    }

    /// Same as [`FormSchema::from_value`] with a configured validator.
    pub fn from_value_with(validator: &SchemaValidator, raw: &Value) -> Result<Self, EngineError> {
        let result = validator.validate(raw);
        if !result.is_valid {
            return Err(EngineError::SchemaRejected(result.errors));
        }
        // The validator has checked every shape serde relies on; what remains
        // is a value the model cannot express.
        serde_json::from_value(raw.clone())
            .map_err(|e| EngineError::UnsupportedValue(e.to_string()))
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// One named, typed unit of input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub label: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

impl FormField {
    /// A field with only the mandatory attributes set.
    pub fn new(label: impl Into<String>, name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            field_type,
            required: None,
            min_length: None,
            max_length: None,
            options: None,
            validation: None,
            condition: None,
        }
    }

    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    /// Choice options, empty when the schema omits them.
    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }
}

/// Supported input kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Date,
    Dropdown,
    Multiselect,
    Checkbox,
    Textarea,
    Email,
    Radiobutton,
}

impl FieldType {
    pub const ALL: [FieldType; 8] = [
        FieldType::Text,
        FieldType::Date,
        FieldType::Dropdown,
        FieldType::Multiselect,
        FieldType::Checkbox,
        FieldType::Textarea,
        FieldType::Email,
        FieldType::Radiobutton,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Date => "date",
            FieldType::Dropdown => "dropdown",
            FieldType::Multiselect => "multiselect",
            FieldType::Checkbox => "checkbox",
            FieldType::Textarea => "textarea",
            FieldType::Email => "email",
            FieldType::Radiobutton => "radiobutton",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    /// Types whose values are picked from `options`.
    pub fn is_choice(self) -> bool {
        matches!(
            self,
            FieldType::Dropdown | FieldType::Multiselect | FieldType::Radiobutton
        )
    }

    /// Initial value given by the form builder.
    pub fn empty_value(self) -> FieldValue {
        match self {
            FieldType::Multiselect => FieldValue::List(Vec::new()),
            FieldType::Checkbox => FieldValue::Null,
            _ => FieldValue::empty_text(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pattern constraint with its user-facing override message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRule {
    pub pattern: Pattern,
    pub message: String,
}

/// Makes a field's presence depend on another field's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub field_name: String,
    pub value: FieldValue,
}

impl Condition {
    pub fn new(field_name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            field_name: field_name.into(),
            value: value.into(),
        }
    }

    /// Strict comparison of a parent value against the expected value.
    pub fn is_met_by(&self, parent_value: &FieldValue) -> bool {
        *parent_value == self.value
    }
}

/// A regular expression that must match a whole value.
///
/// Compiled once when the schema is loaded; serializes back to its source.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// # Errors
    ///
    /// Returns the regex error when `source` does not compile.
    pub fn new(source: &str) -> Result<Self, fancy_regex::Error> {
        let regex = Regex::new(&format!("^(?:{source})$"))?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// A match that aborts (backtrack limit) counts as no match.
    pub fn is_full_match(&self, text: &str) -> bool {
        self.regex.is_match(text).unwrap_or_else(|e| {
            tracing::warn!(pattern = %self.source, error = %e, "pattern match aborted");
            false
        })
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Pattern::new(&source).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_field_with_all_attributes() {
        let field: FormField = serde_json::from_value(json!({
            "label": "Username",
            "name": "username",
            "type": "text",
            "required": true,
            "minLength": 5,
            "maxLength": 20,
            "validation": { "pattern": "^[a-zA-Z0-9_]+$", "message": "Letters only" },
            "condition": { "fieldName": "hasAccount", "value": true }
        }))
        .unwrap();

        assert_eq!(field.field_type, FieldType::Text);
        assert!(field.is_required());
        assert_eq!(field.min_length, Some(5));
        assert_eq!(field.max_length, Some(20));
        assert_eq!(field.validation.as_ref().unwrap().message, "Letters only");
        assert_eq!(
            field.condition,
            Some(Condition::new("hasAccount", FieldValue::Bool(true)))
        );
    }

    #[test]
    fn test_optional_attributes_are_omitted_when_serializing() {
        let field = FormField::new("City", "city", FieldType::Text);
        assert_eq!(
            serde_json::to_value(&field).unwrap(),
            json!({ "label": "City", "name": "city", "type": "text" })
        );
    }

    #[test]
    fn test_options_tolerate_absence() {
        let field = FormField::new("Country", "country", FieldType::Dropdown);
        assert!(field.options().is_empty());
        assert!(field.field_type.is_choice());
    }

    #[test]
    fn test_field_type_parse_round_trips_names() {
        for field_type in FieldType::ALL {
            assert_eq!(FieldType::parse(field_type.as_str()), Some(field_type));
        }
        assert_eq!(FieldType::parse("number"), None);
    }

    #[test]
    fn test_empty_values_are_type_appropriate() {
        assert_eq!(FieldType::Text.empty_value(), FieldValue::empty_text());
        assert_eq!(FieldType::Multiselect.empty_value(), FieldValue::List(Vec::new()));
        assert_eq!(FieldType::Checkbox.empty_value(), FieldValue::Null);
    }

    #[test]
    fn test_pattern_requires_full_match() {
        let pattern = Pattern::new("[0-9]{3}").unwrap();
        assert!(pattern.is_full_match("123"));
        assert!(!pattern.is_full_match("1234"));
        assert!(!pattern.is_full_match("a123"));

        let anchored = Pattern::new("^[a-z]+$").unwrap();
        assert!(anchored.is_full_match("abc"));
        assert_eq!(anchored.as_str(), "^[a-z]+$");
    }

    #[test]
    fn test_pattern_alternation_is_fully_anchored() {
        let pattern = Pattern::new("yes|no").unwrap();
        assert!(pattern.is_full_match("no"));
        assert!(!pattern.is_full_match("nope"));
    }

    #[test]
    fn test_pattern_look_ahead_and_backreference() {
        let password = Pattern::new("^(?=.*[0-9]).{8,}$").unwrap();
        assert!(password.is_full_match("secret99"));
        assert!(!password.is_full_match("secretpw"));
        assert!(!password.is_full_match("abc1"));

        let doubled = Pattern::new(r"^(a|b)\1$").unwrap();
        assert!(doubled.is_full_match("aa"));
        assert!(!doubled.is_full_match("ab"));
    }

    #[test]
    fn test_invalid_pattern_fails_deserialization() {
        let result: Result<ValidationRule, _> =
            serde_json::from_value(json!({ "pattern": "([a-z", "message": "x" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_condition_uses_strict_equality() {
        let condition = Condition::new("count", "0");
        assert!(condition.is_met_by(&FieldValue::from("0")));
        assert!(!condition.is_met_by(&FieldValue::Number(0.0)));
    }

    #[test]
    fn test_schema_field_lookup() {
        let schema = FormSchema {
            title: "T".to_string(),
            fields: vec![FormField::new("Name", "name", FieldType::Text)],
        };
        assert_eq!(schema.field("name").map(|f| f.label.as_str()), Some("Name"));
        assert!(schema.field("missing").is_none());
    }

    #[test]
    fn test_from_value_rejects_invalid_document() {
        let result = FormSchema::from_value(&json!({ "title": "T" }));
        match result {
            Err(EngineError::SchemaRejected(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].path, "fields");
            }
            other => panic!("Expected SchemaRejected, got {other:?}"),
        }
    }

    #[test]
    fn test_from_value_accepts_valid_document() {
        let schema = FormSchema::from_value(&json!({
            "title": "Contact",
            "fields": [
                { "label": "Email", "name": "email", "type": "email", "required": true }
            ]
        }))
        .unwrap();
        assert_eq!(schema.title, "Contact");
        assert_eq!(schema.fields[0].field_type, FieldType::Email);
    }
}
