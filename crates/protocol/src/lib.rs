//! # tp-protocol
//!
//! Shared configuration models for tabprep.
//!
//! ## Modules
//!
//! - [`config_models`]: The standard configuration files and their names
//! - [`logging_models`]: Typed view over the logging configuration
//!
//! This crate has no dependency on other tabprep crates, so both the loader
//! and the consumers of loaded documents can depend on it.

pub mod config_models;
pub mod logging_models;

// Re-export all public types for convenience
pub use config_models::*;
pub use logging_models::*;
