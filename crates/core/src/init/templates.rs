//! Default configuration files embedded in the binary.
//!
//! This module uses `rust-embed` to embed the workspace `config/` directory
//! at compile time, so `init` can write the defaults anywhere without the
//! source tree being present.

use rust_embed::RustEmbed;
use tp_protocol::config_models::ConfigKind;

/// Embedded files from the workspace `config/` directory.
///
/// - `CARGO_MANIFEST_DIR` = `crates/core`
/// - `../../config` = workspace `config/`
///
/// With the `debug-embed` feature, debug builds embed the files as well
/// instead of reading them from disk at runtime.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../config"]
pub struct DefaultConfigAssets;

/// Embedded content of a file, by name (e.g. `"model_config.yaml"`).
pub fn get_template(name: &str) -> Option<String> {
    DefaultConfigAssets::get(name)
        .map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}

/// Embedded default for one of the standard files.
pub fn default_for(kind: ConfigKind) -> Option<String> {
    get_template(kind.file_name())
}

/// Names of all embedded files, sorted.
pub fn list_templates() -> Vec<String> {
    let mut names: Vec<String> = DefaultConfigAssets::iter()
        .map(|path| path.to_string())
        .collect();
    names.sort();
    names
}
