//! Reading schema and value documents from disk

use crate::error::{CliError, CliResult};
use schemaform_engine::parser::parse_yaml_or_json;
use schemaform_engine::{parse_schema, EngineError, FieldValue};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

fn read_file(path: &str) -> CliResult<String> {
    if !Path::new(path).exists() {
        return Err(CliError::Message(format!("File not found: {path}")));
    }
    Ok(fs::read_to_string(path)?)
}

/// Read and decode a schema document. The result is not yet validated.
pub fn read_schema_document(path: &str) -> CliResult<Value> {
    let content = read_file(path)?;
    Ok(parse_schema(&content, Some(path))?)
}

/// Read a values document: a mapping from field name to value.
pub fn read_values_document(path: &str) -> CliResult<Map<String, Value>> {
    let content = read_file(path)?;
    if content.trim().is_empty() {
        return Ok(Map::new());
    }
    let value = parse_yaml_or_json(&content, Some(path)).map_err(EngineError::from)?;
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        _ => Err(CliError::Message(format!(
            "Values file must contain a mapping of field names to values: {path}"
        ))),
    }
}

/// Split a `name=value` assignment.
///
/// The value is decoded as JSON when possible (`42`, `true`, `["a","b"]`),
/// otherwise it is taken as text.
pub fn parse_assignment(assignment: &str) -> CliResult<(String, FieldValue)> {
    let (name, raw) = assignment.split_once('=').ok_or_else(|| {
        CliError::Message(format!(
            "Invalid assignment '{assignment}'. Expected NAME=VALUE"
        ))
    })?;
    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::Message(format!(
            "Invalid assignment '{assignment}'. Field name is empty"
        )));
    }

    let value = match serde_json::from_str::<Value>(raw) {
        Ok(json) => FieldValue::from_json(&json)?,
        Err(_) => FieldValue::Text(raw.to_string()),
    };
    Ok((name.to_string(), value))
}
