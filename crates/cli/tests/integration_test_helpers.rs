//! Test helpers for integration tests

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

const BINARY: &str = env!("CARGO_BIN_EXE_schemaform");

/// A scratch directory the binary runs in. Removed on drop.
pub struct TestProject {
    temp_dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// A project holding `form.json`
    pub fn with_schema(schema_content: &str) -> Self {
        let project = Self::new();
        project.write_file("form.json", schema_content);
        project
    }

    pub fn path(&self, relative_path: &str) -> PathBuf {
        self.temp_dir.path().join(relative_path)
    }

    pub fn write_file(&self, relative_path: &str, content: &str) {
        fs::write(self.path(relative_path), content).unwrap();
    }

    /// Run `schemaform <args>` in the project directory with logging left at
    /// its default level.
    pub fn run_command(&self, args: &[&str]) -> Output {
        Command::new(BINARY)
            .current_dir(self.temp_dir.path())
            .env_remove("RUST_LOG")
            .args(args)
            .output()
            .unwrap()
    }

    /// Run and require exit code 0. Returns stdout.
    #[allow(dead_code)] // Not every test file needs it
    pub fn run_command_success(&self, args: &[&str]) -> String {
        let output = self.run_command(args);
        assert!(
            output.status.success(),
            "schemaform {} exited with {:?}\nstdout: {}\nstderr: {}",
            args.join(" "),
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Run and require a non-zero exit code. Returns stderr.
    #[allow(dead_code)] // Not every test file needs it
    pub fn run_command_failure(&self, args: &[&str]) -> String {
        let output = self.run_command(args);
        assert!(
            !output.status.success(),
            "schemaform {} should have failed",
            args.join(" ")
        );
        String::from_utf8_lossy(&output.stderr).into_owned()
    }
}

/// A schema with one conditional field
#[allow(dead_code)] // Used across multiple test files
pub fn employment_schema() -> &'static str {
    r#"{
  "title": "Employment Details",
  "fields": [
    { "label": "Employment Status", "name": "employmentStatus", "type": "dropdown",
      "required": true, "options": ["Employed", "Unemployed", "Student"] },
    { "label": "Company Name", "name": "companyName", "type": "text", "required": true,
      "condition": { "fieldName": "employmentStatus", "value": "Employed" } }
  ]
}"#
}

/// A schema exercising length and pattern constraints
#[allow(dead_code)] // Used across multiple test files
pub fn signup_schema() -> &'static str {
    r"title: Signup
fields:
  - label: Username
    name: username
    type: text
    required: true
    minLength: 5
    maxLength: 20
    validation:
      pattern: '[a-zA-Z0-9_]+'
      message: Letters, numbers and underscores only
  - label: Interests
    name: interests
    type: multiselect
    options: [Music, Sports]
"
}
