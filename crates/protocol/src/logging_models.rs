//! Typed view over `logging_config.yaml`.
//!
//! The loader returns logging configuration as an untyped document. Code that
//! installs a subscriber decodes it into [`LoggingSettings`], which only picks
//! out the keys it understands and ignores the rest.

use serde::Deserialize;
use serde::Serialize;

/// Output format for log lines.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human oriented output.
    #[default]
    Pretty,

    /// Single-line human oriented output.
    Compact,

    /// One JSON object per event.
    Json,
}

/// Logging settings extracted from `logging_config.yaml`.
///
/// # Example
///
/// ```yaml
/// level: debug
/// format: json
/// directives: "tp_core=trace,warn"
/// ansi: false
/// ```
///
/// A `dictConfig`-style file is also accepted; its `root.level` is used when
/// there is no top-level `level`:
///
/// ```yaml
/// version: 1
/// root:
///   level: WARNING
///   handlers: [console]
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "RawLoggingSettings")]
pub struct LoggingSettings {
    /// Default level (`trace`, `debug`, `info`, `warn`, `error`).
    pub level: String,

    /// Output format.
    pub format: LogFormat,

    /// Full `EnvFilter` directive string; takes precedence over `level`.
    pub directives: Option<String>,

    /// Emit ANSI colour codes.
    pub ansi: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            directives: None,
            ansi: true,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Deserialize)]
struct RootSection {
    level: Option<String>,
}

#[derive(Deserialize)]
struct RawLoggingSettings {
    level: Option<String>,
    root: Option<RootSection>,
    #[serde(default)]
    format: LogFormat,
    directives: Option<String>,
    ansi: Option<bool>,
}

impl From<RawLoggingSettings> for LoggingSettings {
    fn from(raw: RawLoggingSettings) -> Self {
        let level = raw
            .level
            .or_else(|| raw.root.and_then(|root| root.level))
            .unwrap_or_else(default_level);

        Self {
            level,
            format: raw.format,
            directives: raw.directives,
            ansi: raw.ansi.unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_empty_mapping() {
        let settings: LoggingSettings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings, LoggingSettings::default());
        assert_eq!(settings.level, "info");
        assert_eq!(settings.format, LogFormat::Pretty);
        assert!(settings.ansi);
    }

    #[test]
    fn test_top_level_keys() {
        let yaml = "level: debug\nformat: json\ndirectives: \"tp_core=trace\"\nansi: false\n";
        let settings: LoggingSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.level, "debug");
        assert_eq!(settings.format, LogFormat::Json);
        assert_eq!(settings.directives.as_deref(), Some("tp_core=trace"));
        assert!(!settings.ansi);
    }

    #[test]
    fn test_dict_config_root_level_fallback() {
        let yaml = r#"
version: 1
formatters:
  simple:
    format: "%(levelname)s %(message)s"
root:
  level: WARNING
  handlers: [console]
"#;
        let settings: LoggingSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.level, "WARNING");
        assert_eq!(settings.format, LogFormat::Pretty);
    }

    #[test]
    fn test_top_level_wins_over_root() {
        let yaml = "level: error\nroot:\n  level: debug\n";
        let settings: LoggingSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.level, "error");
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result: Result<LoggingSettings, _> = serde_yaml::from_str("format: xml");
        assert!(result.is_err());
    }
}
