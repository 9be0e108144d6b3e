//! Errors surfaced by CLI commands. Every variant ends up as an
//! `  Error: ...` line and exit code 1.

use schemaform_engine::EngineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Decoding, schema rejection or a bad value from the engine
    #[error("{0}")]
    Engine(#[from] EngineError),

    /// Unreadable or malformed `schemaform.yaml`
    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Message(String),
}

pub type CliResult<T> = Result<T, CliError>;
