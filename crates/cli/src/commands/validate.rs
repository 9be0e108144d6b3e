//! Validate command implementation

use crate::error::{CliError, CliResult};
use crate::utils::config::ConfigFile;
use crate::utils::document::read_schema_document;
use clap::ValueEnum;
use schemaform_engine::validator::constants::ROOT_PATH;
use schemaform_engine::{FormSchema, SchemaValidation, SchemaValidator, ValidationError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct Options {
    pub file: String,
    pub format: OutputFormat,
    pub config: ConfigFile,
}

/// Validate a schema file and report every violation
pub fn run(options: &Options) -> i32 {
    let validator = SchemaValidator::with_options(options.config.validation.options());

    let (result, title_and_count) = match run_inner(options, &validator) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("✗ Validation failed");
            eprintln!("  Error: {e}");
            return 1;
        }
    };

    match options.format {
        OutputFormat::Json => match options.config.output.to_json(&result) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => {
                eprintln!("✗ Validation failed");
                eprintln!("  Error: {e}");
                return 1;
            }
        },
        OutputFormat::Text => {
            if let Some((title, count)) = &title_and_count {
                println!("✓ Schema is valid: {title} ({count} fields)");
            } else {
                eprint!("{}", validator.format_errors(&result.errors));
            }
        }
    }

    if result.is_valid {
        0
    } else {
        1
    }
}

/// Validate the file. An undecodable document is reported as a root error.
fn run_inner(
    options: &Options,
    validator: &SchemaValidator,
) -> CliResult<(SchemaValidation, Option<(String, usize)>)> {
    let raw = match read_schema_document(&options.file) {
        Ok(raw) => raw,
        Err(CliError::Engine(e)) => {
            tracing::debug!(file = %options.file, error = %e, "schema document could not be decoded");
            let error = ValidationError::new(
                ROOT_PATH,
                "Invalid schema file. Please provide a valid JSON or YAML document.",
            )
            .with_suggestion(Some(e.to_string()));
            return Ok((SchemaValidation::from_errors(vec![error]), None));
        }
        Err(e) => return Err(e),
    };

    let result = validator.validate(&raw);
    if !result.is_valid {
        return Ok((result, None));
    }

    let schema = FormSchema::from_value_with(validator, &raw)?;
    Ok((result, Some((schema.title, schema.fields.len()))))
}
