//! Initialization of a configuration directory.
//!
//! Writes the default `model_config.yaml`, `prompt_templates.yaml` and
//! `logging_config.yaml` into a target directory, so a fresh deployment has a
//! complete configuration root to edit.
//!
//! # Example
//!
//! ```no_run
//! use tp_core::init::{generate_config_dir, InitOptions};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! generate_config_dir(&InitOptions::default())?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod templates;

// Re-export commonly used types for convenience
pub use error::{InitError, InitResult};
pub use generator::{generate_config_dir, InitOptions};
pub use templates::{default_for, get_template, list_templates};
