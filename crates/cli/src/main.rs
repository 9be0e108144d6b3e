//! Schemaform CLI
//!
//! Copyright 2025 Schemaform Contributors
//! Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
//! See the LICENSE file in the project root for details.

mod commands;
mod error;
mod test_helpers;
mod utils;

use clap::{CommandFactory, Parser, Subcommand};
use commands::{completion, fill, inspect, validate};
use std::path::PathBuf;
use utils::config::read_config;

/// Schemaform CLI - Validate schemas and fill dynamic forms
#[derive(Parser)]
#[command(name = "schemaform")]
#[command(about = "Schemaform CLI - Validate schemas and fill dynamic forms", long_about = None)]
#[command(version = env!("SCHEMAFORM_VERSION"))]
struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ./schemaform.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a form schema file and report every violation
    Validate {
        /// Path to schema file (JSON or YAML)
        file: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = validate::OutputFormat::Text)]
        format: validate::OutputFormat,
    },
    /// Show the form built from a schema file
    Inspect {
        /// Path to schema file (JSON or YAML)
        file: String,
    },
    /// Fill a form with values, submit it and print the labeled output
    Fill {
        /// Path to schema file (JSON or YAML)
        file: String,
        /// Values file mapping field names to values (JSON or YAML)
        #[arg(long)]
        values: Option<String>,
        /// Set a field value (NAME=VALUE, VALUE parsed as JSON when possible)
        #[arg(long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, elvish, fish, powershell, zsh)
        shell: String,
    },
}

/// Command structure used by shell completion generation
pub fn get_cli_command() -> clap::Command {
    Cli::command()
}

fn main() {
    let cli = Cli::parse();

    let config = match read_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("✗ Failed to load config");
            eprintln!("  Error: {e}");
            std::process::exit(1);
        }
    };
    utils::logging::init(cli.verbose, config.log_level.as_deref());

    let exit_code = match cli.command {
        Commands::Validate { file, format } => {
            let opts = validate::Options {
                file,
                format,
                config,
            };
            validate::run(&opts)
        }
        Commands::Inspect { file } => {
            let opts = inspect::Options { file, config };
            inspect::run(&opts)
        }
        Commands::Fill { file, values, set } => {
            let opts = fill::Options {
                file,
                values,
                set,
                config,
            };
            fill::run(&opts)
        }
        Commands::Completion { shell } => {
            let opts = completion::Options { shell };
            completion::run(&opts)
        }
    };

    std::process::exit(exit_code);
}
