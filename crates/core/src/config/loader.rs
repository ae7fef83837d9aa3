//! Configuration file loader.
//!
//! A [`ConfigLoader`] resolves file names against a fixed configuration root
//! and parses each file as a YAML mapping. There is no caching: every call
//! reads the file from disk again. The standard files are:
//! - `model_config.yaml`: Model selection and sampling parameters
//! - `prompt_templates.yaml`: Prompt templates
//! - `logging_config.yaml`: Logging setup
//!
//! The bundled root is located at runtime, next to the running executable,
//! falling back to the source tree the crate was built from. A bundled loader
//! also falls back to the copies embedded in the binary when a standard file
//! is missing on disk.

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::models::ConfigDocument;
use crate::init::templates::get_template;
use serde_yaml::Value;
use std::path::Path;
use std::path::PathBuf;
use tp_protocol::config_models::ConfigKind;

/// `config/` directory of the source tree this crate was built from.
pub const SOURCE_CONFIG_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config");

/// Path prefix reported for documents read from the embedded copies.
pub const EMBEDDED_ROOT: &str = "<embedded>";

/// Directories searched for the bundled configuration, in order.
///
/// For an executable at `<prefix>/bin/tabprep-config` these are
/// `<prefix>/bin/config`, `<prefix>/config`, then [`SOURCE_CONFIG_DIR`].
pub fn bundled_candidates(exe: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(exe_dir) = exe.and_then(Path::parent) {
        candidates.push(exe_dir.join("config"));
        if let Some(prefix) = exe_dir.parent() {
            candidates.push(prefix.join("config"));
        }
    }

    candidates.push(PathBuf::from(SOURCE_CONFIG_DIR));
    candidates
}

/// First existing candidate directory, or the first candidate when none exist.
pub fn locate_bundled_dir(exe: Option<&Path>) -> PathBuf {
    let candidates = bundled_candidates(exe);
    candidates
        .iter()
        .find(|dir| dir.is_dir())
        .or_else(|| candidates.first())
        .cloned()
        .unwrap_or_else(|| PathBuf::from(SOURCE_CONFIG_DIR))
}

/// Loads YAML configuration files from a single root directory.
///
/// The root is fixed when the loader is created. The loader holds no mutable
/// state, so it can be cloned and shared across threads freely.
///
/// # Example
///
/// ```rust,no_run
/// use tp_core::config::loader::ConfigLoader;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let loader = ConfigLoader::new("/etc/tabprep");
/// let prompts = loader.get_prompt_templates()?;
/// println!("Loaded {} prompt templates", prompts.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLoader {
    base_dir: PathBuf,
    embedded_fallback: bool,
}

impl ConfigLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            embedded_fallback: false,
        }
    }

    /// Loader rooted at the bundled configuration directory, with the
    /// embedded defaults as fallback.
    pub fn bundled() -> Self {
        let exe = std::env::current_exe().ok();
        Self::new(locate_bundled_dir(exe.as_deref())).with_embedded_fallback(true)
    }

    /// Serve the embedded default for a standard file that is missing on disk.
    pub fn with_embedded_fallback(mut self, enabled: bool) -> Self {
        self.embedded_fallback = enabled;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Full path a file name resolves to. No normalization is applied.
    pub fn resolve(&self, filename: &str) -> PathBuf {
        self.base_dir.join(filename)
    }

    /// Whether the standard file for `kind` is present.
    pub fn exists(&self, kind: ConfigKind) -> bool {
        self.resolve(kind.file_name()).exists()
    }

    /// Loads and parses `filename` from the configuration root.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - No file exists at the resolved path and no embedded fallback
    ///   applies (`NotFound`)
    /// - The file exists but cannot be read (`FileRead`)
    /// - The content is not valid YAML (`YamlParse`, with the parser error as source)
    /// - The top-level node is not a mapping (`NotAMapping`)
    pub fn load(&self, filename: &str) -> ConfigResult<ConfigDocument> {
        let path = self.resolve(filename);

        if !path.exists() {
            let embedded = self
                .embedded_fallback
                .then(|| get_template(filename))
                .flatten();
            if let Some(content) = embedded {
                tracing::debug!(missing = %path.display(), "Using embedded configuration");
                return parse_document(Path::new(EMBEDDED_ROOT).join(filename), &content);
            }
            return Err(ConfigError::NotFound { path });
        }

        tracing::debug!(path = %path.display(), "Loading configuration file");

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::FileRead {
            path: path.clone(),
            source,
        })?;

        parse_document(path, &content)
    }

    pub fn load_kind(&self, kind: ConfigKind) -> ConfigResult<ConfigDocument> {
        self.load(kind.file_name())
    }

    /// Loads `model_config.yaml`.
    pub fn get_model_config(&self) -> ConfigResult<ConfigDocument> {
        self.load_kind(ConfigKind::Model)
    }

    /// Loads `prompt_templates.yaml`.
    pub fn get_prompt_templates(&self) -> ConfigResult<ConfigDocument> {
        self.load_kind(ConfigKind::PromptTemplates)
    }

    /// Loads `logging_config.yaml`.
    pub fn get_logging_config(&self) -> ConfigResult<ConfigDocument> {
        self.load_kind(ConfigKind::Logging)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Parses YAML text into a document, expanding `<<` merge keys.
fn parse_document(path: PathBuf, content: &str) -> ConfigResult<ConfigDocument> {
    let mut value: Value = match serde_yaml::from_str(content) {
        Ok(value) => value,
        Err(source) => return Err(ConfigError::YamlParse { path, source }),
    };

    if let Err(source) = value.apply_merge() {
        return Err(ConfigError::YamlParse { path, source });
    }

    match value {
        Value::Mapping(mapping) => Ok(ConfigDocument::new(path, mapping)),
        other => Err(ConfigError::NotAMapping {
            path,
            found: describe(&other),
        }),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Loads `filename` from the bundled configuration directory.
pub fn load_yaml(filename: &str) -> ConfigResult<ConfigDocument> {
    ConfigLoader::bundled().load(filename)
}

/// Loads the bundled `model_config.yaml`.
pub fn get_model_config() -> ConfigResult<ConfigDocument> {
    ConfigLoader::bundled().get_model_config()
}

/// Loads the bundled `prompt_templates.yaml`.
pub fn get_prompt_templates() -> ConfigResult<ConfigDocument> {
    ConfigLoader::bundled().get_prompt_templates()
}

/// Loads the bundled `logging_config.yaml`.
pub fn get_logging_config() -> ConfigResult<ConfigDocument> {
    ConfigLoader::bundled().get_logging_config()
}
