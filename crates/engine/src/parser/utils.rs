/*!
 * Copyright 2025 Schemaform Contributors
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use serde_json::{Map, Number, Value};
use yaml_rust::{Yaml, YamlLoader};

use crate::parser::error::ParseError;

/// Encodings a document may arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Format implied by a file name's extension, if any.
    pub fn from_path(path: &str) -> Option<Self> {
        let extension = path.rsplit_once('.')?.1.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }
}

/// Decode `content` as YAML or JSON.
///
/// A recognised extension on `file_path` fixes the format. Otherwise JSON is
/// tried first; if that fails the YAML decoder gets the final say.
pub fn parse_yaml_or_json(content: &str, file_path: Option<&str>) -> Result<Value, ParseError> {
    match file_path.and_then(DocumentFormat::from_path) {
        Some(format) => decode(content, format),
        None => decode(content, DocumentFormat::Json)
            .or_else(|_| decode(content, DocumentFormat::Yaml)),
    }
}

pub fn decode(content: &str, format: DocumentFormat) -> Result<Value, ParseError> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(content)?),
        DocumentFormat::Yaml => decode_yaml(content),
    }
}

/// Only the first YAML document is used.
fn decode_yaml(content: &str) -> Result<Value, ParseError> {
    let documents =
        YamlLoader::load_from_str(content).map_err(|e| ParseError::InvalidYaml(e.to_string()))?;
    let first = documents.into_iter().next().ok_or(ParseError::EmptyDocument)?;
    yaml_to_value(first).ok_or_else(|| {
        ParseError::InvalidYaml("document root has no JSON representation".to_string())
    })
}

/// Convert a YAML node. Aliases and bad values have no JSON form and are
/// left out of their parent collection.
fn yaml_to_value(node: Yaml) -> Option<Value> {
    let value = match node {
        Yaml::Null => Value::Null,
        Yaml::Boolean(b) => Value::Bool(b),
        Yaml::Integer(i) => Value::from(i),
        Yaml::Real(text) => real_to_value(text),
        Yaml::String(s) => Value::String(s),
        Yaml::Array(items) => Value::Array(items.into_iter().filter_map(yaml_to_value).collect()),
        Yaml::Hash(entries) => {
            let mut map = Map::new();
            for (key, node) in entries {
                if let (Some(key), Some(value)) = (yaml_key(key), yaml_to_value(node)) {
                    map.insert(key, value);
                }
            }
            Value::Object(map)
        }
        Yaml::Alias(_) | Yaml::BadValue => return None,
    };
    Some(value)
}

/// Whole reals (`3.0`) become integers so `minLength: 3.0` reads like `3`.
/// Unparseable reals such as `.inf` stay text.
fn real_to_value(text: String) -> Value {
    match text.parse::<f64>() {
        Ok(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => Value::from(n as i64),
        Ok(n) => Number::from_f64(n).map_or(Value::String(text), Value::Number),
        Err(_) => Value::String(text),
    }
}

fn yaml_key(key: Yaml) -> Option<String> {
    match key {
        Yaml::String(s) | Yaml::Real(s) => Some(s),
        Yaml::Integer(i) => Some(i.to_string()),
        Yaml::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}
