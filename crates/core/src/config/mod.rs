//! Configuration loading.
//!
//! This module loads YAML configuration files from a configuration root
//! directory and returns them as untyped mappings.

pub mod error;
pub mod loader;
pub mod models;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    get_logging_config, get_model_config, get_prompt_templates, load_yaml, ConfigLoader,
    bundled_candidates, locate_bundled_dir, EMBEDDED_ROOT, SOURCE_CONFIG_DIR,
};
pub use models::ConfigDocument;
