//! Installs a `tracing` subscriber from the logging configuration.
//!
//! `RUST_LOG` always wins over the configured level and directives, so a
//! single run can be made more verbose without editing `logging_config.yaml`.

use crate::config::error::ConfigError;
use crate::config::loader::ConfigLoader;
use std::io;
use thiserror::Error;
use tp_protocol::logging_models::LogFormat;
use tp_protocol::logging_models::LoggingSettings;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;

/// Errors raised while setting up logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{0}'. Must be one of: trace, debug, info, warn, error, off")]
    InvalidLevel(String),

    #[error("Invalid filter directives '{directives}': {source}")]
    InvalidDirectives {
        directives: String,
        source: ParseError,
    },

    #[error("Failed to install global subscriber: {0}")]
    Install(#[from] TryInitError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Parses a level name.
///
/// Matching is case-insensitive, and the Python level names `WARNING`,
/// `CRITICAL` and `NOTSET` are accepted so existing `dictConfig` files keep
/// working.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" | "notset" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" | "warning" => Ok(LevelFilter::WARN),
        "error" | "critical" | "fatal" => Ok(LevelFilter::ERROR),
        "off" => Ok(LevelFilter::OFF),
        _ => Err(LoggingError::InvalidLevel(level.to_string())),
    }
}

/// Builds the event filter: `RUST_LOG`, else `directives`, else `level`.
pub fn build_filter(settings: &LoggingSettings) -> Result<EnvFilter, LoggingError> {
    let level = parse_level(&settings.level)?;
    let builder = EnvFilter::builder().with_default_directive(level.into());

    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return Ok(builder.from_env_lossy());
    }

    match &settings.directives {
        Some(directives) => {
            builder
                .parse(directives)
                .map_err(|source| LoggingError::InvalidDirectives {
                    directives: directives.clone(),
                    source,
                })
        }
        None => Ok(builder.parse_lossy("")),
    }
}

/// Installs the global subscriber. Output goes to stderr so stdout stays
/// free for command output.
///
/// # Errors
///
/// Fails on an unknown level, malformed directives, or when a global
/// subscriber is already installed.
pub fn init_logging(settings: &LoggingSettings) -> Result<(), LoggingError> {
    let filter = build_filter(settings)?;

    match settings.format {
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .pretty()
                .with_writer(io::stderr)
                .with_ansi(settings.ansi)
                .with_target(true)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(io::stderr)
                .with_ansi(settings.ansi)
                .with_target(true)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_current_span(true)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
    }

    tracing::debug!(level = %settings.level, format = ?settings.format, "Logging initialized");
    Ok(())
}

/// Loads `logging_config.yaml` through `loader`, then installs the subscriber.
pub fn init_from_config(loader: &ConfigLoader) -> Result<LoggingSettings, LoggingError> {
    let settings: LoggingSettings = loader.get_logging_config()?.decode()?;
    init_logging(&settings)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_level_names() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level("INFO").unwrap(), LevelFilter::INFO);
        assert_eq!(parse_level("WARNING").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_level("CRITICAL").unwrap(), LevelFilter::ERROR);
        assert_eq!(parse_level(" off ").unwrap(), LevelFilter::OFF);
    }

    #[test]
    fn test_parse_level_rejects_unknown() {
        let err = parse_level("verbose").unwrap_err();
        assert!(matches!(err, LoggingError::InvalidLevel(ref l) if l == "verbose"));
    }

    #[test]
    fn test_build_filter_uses_level() {
        temp_env::with_var_unset("RUST_LOG", || {
            let settings = LoggingSettings {
                level: "warn".to_string(),
                ..LoggingSettings::default()
            };
            let filter = build_filter(&settings).unwrap();
            assert!(filter.to_string().contains("warn"));
        });
    }

    #[test]
    fn test_build_filter_uses_directives() {
        temp_env::with_var_unset("RUST_LOG", || {
            let settings = LoggingSettings {
                directives: Some("tp_core=trace".to_string()),
                ..LoggingSettings::default()
            };
            let filter = build_filter(&settings).unwrap();
            assert!(filter.to_string().contains("tp_core=trace"));
        });
    }

    #[test]
    fn test_build_filter_rejects_bad_directives() {
        temp_env::with_var_unset("RUST_LOG", || {
            let settings = LoggingSettings {
                directives: Some("tp_core=verbose".to_string()),
                ..LoggingSettings::default()
            };
            let err = build_filter(&settings).unwrap_err();
            assert!(matches!(err, LoggingError::InvalidDirectives { .. }));
        });
    }

    #[test]
    fn test_env_overrides_directives() {
        temp_env::with_var("RUST_LOG", Some("tp_protocol=error"), || {
            let settings = LoggingSettings {
                directives: Some("tp_core=verbose".to_string()),
                ..LoggingSettings::default()
            };
            let filter = build_filter(&settings).unwrap();
            assert!(filter.to_string().contains("tp_protocol=error"));
        });
    }

    #[test]
    fn test_init_from_config_missing_file() {
        let dir = tempdir().unwrap();
        let err = init_from_config(&ConfigLoader::new(dir.path())).unwrap_err();
        assert!(matches!(
            err,
            LoggingError::Config(ConfigError::NotFound { .. })
        ));
    }

    #[test]
    fn test_init_from_config_bad_level() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("logging_config.yaml"), "level: loud\n").unwrap();

        let err = init_from_config(&ConfigLoader::new(dir.path())).unwrap_err();
        assert!(matches!(err, LoggingError::InvalidLevel(_)));
    }

    #[test]
    fn test_second_install_fails() {
        let settings = LoggingSettings {
            level: "error".to_string(),
            ansi: false,
            ..LoggingSettings::default()
        };

        let _ = init_logging(&settings);
        let second = init_logging(&settings);
        assert!(matches!(second, Err(LoggingError::Install(_))));
    }
}
