//! Shell completion command implementation

use crate::error::{CliError, CliResult};
use crate::get_cli_command;
use clap::ValueEnum;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

pub struct Options {
    pub shell: String,
}

/// Print a completion script for the requested shell
pub fn run(options: &Options) -> i32 {
    match run_inner(options, &mut io::stdout()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("✗ Completion generation failed");
            eprintln!("  Error: {e}");
            1
        }
    }
}

fn supported_shells() -> String {
    Shell::value_variants()
        .iter()
        .filter_map(|shell| shell.to_possible_value())
        .map(|value| value.get_name().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn run_inner(options: &Options, out: &mut dyn Write) -> CliResult<()> {
    let name = options.shell.trim();
    if name.is_empty() {
        return Err(CliError::Message(format!(
            "Shell name is required. Supported shells: {}",
            supported_shells()
        )));
    }

    let shell = Shell::from_str(name, true).map_err(|_| {
        CliError::Message(format!(
            "Unsupported shell: {name}. Supported shells: {}",
            supported_shells()
        ))
    })?;

    let mut cmd = get_cli_command();
    generate(shell, &mut cmd, "schemaform", out);
    Ok(())
}
