//! Inspect command implementation

use crate::error::{CliError, CliResult};
use crate::utils::config::ConfigFile;
use crate::utils::document::read_schema_document;
use schemaform_engine::{DynamicForm, EngineError, FormField, FormSchema, SchemaValidator};

pub struct Options {
    pub file: String,
    pub config: ConfigFile,
}

/// Print the form built from a schema file
pub fn run(options: &Options) -> i32 {
    match run_inner(options) {
        Ok(report) => {
            print!("{report}");
            0
        }
        Err(e) => {
            eprintln!("✗ Inspection failed");
            eprintln!("  Error: {e}");
            if let CliError::Engine(EngineError::SchemaRejected(errors)) = &e {
                eprint!("{}", SchemaValidator::new().format_errors(errors));
            }
            1
        }
    }
}

fn run_inner(options: &Options) -> CliResult<String> {
    let raw = read_schema_document(&options.file)?;
    let validator = SchemaValidator::with_options(options.config.validation.options());
    let schema = FormSchema::from_value_with(&validator, &raw)?;
    let form = DynamicForm::new(schema);
    Ok(render_form(&form))
}

/// Describe every schema field: type, validators, condition and whether its
/// control is currently mounted.
pub fn render_form(form: &DynamicForm) -> String {
    let schema = form.schema();
    let mut lines = vec![format!(
        "Form: {} ({} fields, {} mounted)",
        schema.title,
        schema.fields.len(),
        form.tree().len()
    )];

    for field in &schema.fields {
        lines.push(render_field(form, field));
    }

    if !form.subscriptions().is_empty() {
        lines.push(format!("Subscriptions: {}", form.subscriptions().len()));
    }

    lines.push(String::new());
    lines.join("\n")
}

fn render_field(form: &DynamicForm, field: &FormField) -> String {
    let mut line = format!("  {} [{}] {}", field.name, field.field_type, field.label);

    if let Some(control) = form.tree().get(&field.name) {
        let kinds: Vec<_> = control
            .validators()
            .iter()
            .map(|validator| validator.kind().as_str())
            .collect();
        if !kinds.is_empty() {
            line.push_str(&format!("\n      validators: {}", kinds.join(", ")));
        }
    }

    if field.field_type.is_choice() {
        line.push_str(&format!("\n      options: {}", field.options().join(", ")));
    }

    if let Some(condition) = &field.condition {
        line.push_str(&format!(
            "\n      shown when: {} == {}",
            condition.field_name,
            condition.value.to_json()
        ));
    }

    if !form.is_field_visible(field) {
        line.push_str("\n      hidden");
    }

    line
}
