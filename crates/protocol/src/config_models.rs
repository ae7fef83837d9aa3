//! Well-known configuration files living in the configuration root.
//!
//! Each [`ConfigKind`] maps to one fixed YAML file name. The loader itself
//! accepts any file name; these kinds exist so callers and the CLI can refer
//! to the standard files without repeating string literals.

use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the standard configuration files.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ConfigKind {
    /// Model selection and sampling parameters (`model_config.yaml`).
    Model,

    /// Prompt templates used by the prompting layer (`prompt_templates.yaml`).
    #[serde(alias = "prompts")]
    PromptTemplates,

    /// Logging setup (`logging_config.yaml`).
    Logging,
}

impl ConfigKind {
    /// Every standard kind, in the order they are usually listed.
    pub const ALL: [ConfigKind; 3] = [
        ConfigKind::Model,
        ConfigKind::PromptTemplates,
        ConfigKind::Logging,
    ];

    /// File name relative to the configuration root.
    pub fn file_name(self) -> &'static str {
        match self {
            ConfigKind::Model => "model_config.yaml",
            ConfigKind::PromptTemplates => "prompt_templates.yaml",
            ConfigKind::Logging => "logging_config.yaml",
        }
    }

    /// Short name used on the command line.
    pub fn short_name(self) -> &'static str {
        match self {
            ConfigKind::Model => "model",
            ConfigKind::PromptTemplates => "prompts",
            ConfigKind::Logging => "logging",
        }
    }
}

impl fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Returned when a string does not name a [`ConfigKind`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown config kind '{0}'. Expected one of: model, prompts, logging")]
pub struct UnknownConfigKind(pub String);

impl FromStr for ConfigKind {
    type Err = UnknownConfigKind;

    /// Accepts the short name, the kebab-case name, or the file name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "model" | "model_config.yaml" => Ok(ConfigKind::Model),
            "prompts" | "prompt-templates" | "prompt_templates.yaml" => {
                Ok(ConfigKind::PromptTemplates)
            }
            "logging" | "logging_config.yaml" => Ok(ConfigKind::Logging),
            other => Err(UnknownConfigKind(other.to_string())),
        }
    }
}
