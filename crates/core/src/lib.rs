//! # tp-core
//!
//! YAML configuration loading for tabprep.
//!
//! This crate provides:
//! - Loading of named YAML files from a configuration root directory
//! - Accessors for the model, prompt template and logging configuration
//! - `tracing` setup driven by the logging configuration
//! - Generation of a default configuration directory
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading
//! - [`logging`]: Subscriber installation
//! - [`init`]: Default configuration files

pub mod config;
pub mod init;
pub mod logging;
