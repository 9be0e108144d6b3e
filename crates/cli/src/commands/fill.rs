//! Fill command implementation

use crate::error::{CliError, CliResult};
use crate::utils::config::ConfigFile;
use crate::utils::document::{parse_assignment, read_schema_document, read_values_document};
use schemaform_engine::{DynamicForm, FieldValue, FormSchema, OutputRecord, SchemaValidator};

pub struct Options {
    pub file: String,
    pub values: Option<String>,
    pub set: Vec<String>,
    pub config: ConfigFile,
}

/// Display message of one failing field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub label: String,
    pub name: String,
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.label, self.name, self.message)
    }
}

/// Result of filling and submitting a form
#[derive(Debug)]
pub enum FillOutcome {
    Submitted(OutputRecord),
    /// Failing fields in schema order
    Invalid(Vec<FieldError>),
}

/// Fill a form from a values file and `--set` assignments, then submit it
pub fn run(options: &Options) -> i32 {
    match run_inner(options) {
        Ok(FillOutcome::Submitted(record)) => match options.config.output.to_json(&record) {
            Ok(rendered) => {
                println!("{rendered}");
                0
            }
            Err(e) => {
                eprintln!("✗ Fill failed");
                eprintln!("  Error: {e}");
                1
            }
        },
        Ok(FillOutcome::Invalid(errors)) => {
            eprintln!("✗ Form is invalid");
            for error in errors {
                eprintln!("  {error}");
            }
            1
        }
        Err(e) => {
            eprintln!("✗ Fill failed");
            eprintln!("  Error: {e}");
            1
        }
    }
}

pub fn run_inner(options: &Options) -> CliResult<FillOutcome> {
    let raw = read_schema_document(&options.file)?;
    let validator = SchemaValidator::with_options(options.config.validation.options());
    let schema = FormSchema::from_value_with(&validator, &raw)?;
    let mut form = DynamicForm::new(schema);

    if let Some(values_path) = &options.values {
        let values = read_values_document(values_path)?;
        apply_values(&mut form, values)?;
    }

    for assignment in &options.set {
        let (name, value) = parse_assignment(assignment)?;
        form.set_value(&name, value).map_err(|_| {
            CliError::Message(format!(
                "Cannot set '{name}': no such field is currently shown"
            ))
        })?;
    }

    match form.submit() {
        Ok(record) => Ok(FillOutcome::Submitted(record)),
        Err(_) => Ok(FillOutcome::Invalid(collect_errors(&form))),
    }
}

/// Apply values-file entries in schema field order so parents are set before
/// the fields that depend on them are considered.
fn apply_values(
    form: &mut DynamicForm,
    mut values: serde_json::Map<String, serde_json::Value>,
) -> CliResult<()> {
    let names: Vec<String> = form.schema().fields.iter().map(|f| f.name.clone()).collect();

    for name in names {
        let Some(raw) = values.remove(&name) else {
            continue;
        };
        let value = FieldValue::from_json(&raw)?;
        if form.tree().contains(&name) {
            form.set_value(&name, value)?;
        } else {
            tracing::warn!(field = %name, "skipping value for hidden field");
        }
    }

    for name in values.keys() {
        tracing::warn!(field = %name, "ignoring value for unknown field");
    }
    Ok(())
}

fn collect_errors(form: &DynamicForm) -> Vec<FieldError> {
    form.schema()
        .fields
        .iter()
        .filter_map(|field| {
            form.get_error(&field.name).map(|message| FieldError {
                label: field.label.clone(),
                name: field.name.clone(),
                message,
            })
        })
        .collect()
}
