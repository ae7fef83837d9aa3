//! Writes the default configuration files into a directory.

use super::error::{InitError, InitResult};
use super::templates::get_template;
use std::fs;
use std::path::{Path, PathBuf};
use tp_protocol::config_models::ConfigKind;

/// Options for initializing a configuration directory.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Directory that receives the YAML files. Created if missing.
    pub target_dir: PathBuf,

    /// Overwrite files that already exist.
    pub force: bool,

    /// Write only this file instead of all three.
    pub only: Option<ConfigKind>,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            target_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            force: false,
            only: None,
        }
    }
}

/// Writes the embedded defaults into `options.target_dir`.
///
/// ```text
/// <target_dir>/
/// ├── model_config.yaml
/// ├── prompt_templates.yaml
/// └── logging_config.yaml
/// ```
///
/// Every target is checked before anything is written, so a refused run
/// leaves the directory untouched.
///
/// # Returns
/// The paths written, or an `InitError` if:
/// - A target file already exists (without force flag)
/// - A default cannot be found in the embedded assets
/// - File system operations fail
///
/// # Example
/// ```no_run
/// use tp_core::init::{generate_config_dir, InitOptions};
/// use std::path::PathBuf;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let options = InitOptions {
///     target_dir: PathBuf::from("config"),
///     force: false,
///     only: None,
/// };
///
/// let written = generate_config_dir(&options)?;
/// println!("Wrote {} files", written.len());
/// # Ok(())
/// # }
/// ```
pub fn generate_config_dir(options: &InitOptions) -> InitResult<Vec<PathBuf>> {
    let kinds: Vec<ConfigKind> = match options.only {
        Some(kind) => vec![kind],
        None => ConfigKind::ALL.to_vec(),
    };

    if !options.force {
        for kind in &kinds {
            let target = options.target_dir.join(kind.file_name());
            if target.exists() {
                return Err(InitError::FileExists(target));
            }
        }
    }

    fs::create_dir_all(&options.target_dir).map_err(|source| InitError::DirectoryCreate {
        path: options.target_dir.clone(),
        source,
    })?;

    kinds
        .into_iter()
        .map(|kind| write_default_file(&options.target_dir, kind))
        .collect()
}

fn write_default_file(target_dir: &Path, kind: ConfigKind) -> InitResult<PathBuf> {
    let name = kind.file_name();
    let content =
        get_template(name).ok_or_else(|| InitError::TemplateNotFound(name.to_string()))?;

    let target_path = target_dir.join(name);
    fs::write(&target_path, content).map_err(|source| InitError::FileWrite {
        path: target_path.clone(),
        source,
    })?;

    tracing::info!(path = %target_path.display(), "Wrote default configuration");
    Ok(target_path)
}
