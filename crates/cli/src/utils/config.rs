//! Config file reading utilities

use crate::error::{CliError, CliResult};
use schemaform_engine::ValidationOptions;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "schemaform.yaml";

/// Full config file structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigFile {
    /// Log filter used when neither `RUST_LOG` nor `--verbose` is set
    pub log_level: Option<String>,
    pub validation: ValidationConfig,
    pub output: OutputConfig,
}

/// Schema validation switches
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationConfig {
    pub check_references: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            check_references: true,
        }
    }
}

impl ValidationConfig {
    pub fn options(&self) -> ValidationOptions {
        ValidationOptions {
            check_references: self.check_references,
        }
    }
}

/// Output rendering switches
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl OutputConfig {
    pub fn to_json<T: serde::Serialize>(&self, value: &T) -> CliResult<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.map_err(|e| CliError::Message(format!("Failed to render JSON: {e}")))
    }
}

/// Read the config file.
///
/// An explicit path must exist. Without one, a missing `schemaform.yaml`
/// means defaults.
pub fn read_config(explicit_path: Option<&Path>) -> CliResult<ConfigFile> {
    let config_path = explicit_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

    if !config_path.exists() {
        if explicit_path.is_some() {
            return Err(CliError::Config(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| CliError::Config(format!("Failed to read config file: {e}")))?;
    parse_config(&content)
}

/// Parse config file content. An empty file means defaults.
pub fn parse_config(content: &str) -> CliResult<ConfigFile> {
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_str(content)
        .map_err(|e| CliError::Config(format!("Failed to parse config file: {e}")))
}
