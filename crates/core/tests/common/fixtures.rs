//! Test fixtures for creating sample configuration directories.

use std::path::Path;
use tempfile::TempDir;

pub const MODEL_CONFIG: &str = "model: gpt-4\ntemperature: 0.2\n";

pub const PROMPT_TEMPLATES: &str = r#"
system: |
  You are a data cleaning assistant.
column_typing: "Infer the semantic type of column {column}."
examples:
  - input: "1,2,3"
    output: integer
  - input: "a,b"
    output: category
"#;

pub const LOGGING_CONFIG: &str = r#"
version: 1
formatters:
  simple:
    format: "%(asctime)s %(levelname)s %(message)s"
handlers:
  console:
    class: logging.StreamHandler
    formatter: simple
root:
  level: INFO
  handlers: [console]
"#;

/// Create a temporary configuration root holding all three standard files.
///
/// Returns a TempDir that must be kept alive for the test duration.
#[allow(dead_code)]
pub fn create_config_dir() -> std::io::Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;
    write_file(temp_dir.path(), "model_config.yaml", MODEL_CONFIG)?;
    write_file(temp_dir.path(), "prompt_templates.yaml", PROMPT_TEMPLATES)?;
    write_file(temp_dir.path(), "logging_config.yaml", LOGGING_CONFIG)?;
    Ok(temp_dir)
}

/// Write `content` to `root/name`.
#[allow(dead_code)]
pub fn write_file(root: &Path, name: &str, content: &str) -> std::io::Result<()> {
    std::fs::write(root.join(name), content)
}
