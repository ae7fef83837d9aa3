use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{eyre, WrapErr};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tp_core::config::{ConfigDocument, ConfigError, ConfigLoader};
use tp_core::init::{generate_config_dir, InitOptions};
use tp_core::logging::{init_from_config, init_logging, LoggingError};
use tp_protocol::{ConfigKind, LoggingSettings};

/// Inspect and initialize tabprep YAML configuration.
#[derive(Debug, Parser)]
#[command(name = "tabprep-config", version, about)]
struct Cli {
    /// Configuration root. Defaults to the bundled `config/` directory.
    #[arg(long, env = "TABPREP_CONFIG_DIR", global = true)]
    config_dir: Option<PathBuf>,

    /// Output format for documents and values.
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load and print any YAML file from the configuration root.
    Show { file: String },

    /// Print model_config.yaml.
    Model,

    /// Print prompt_templates.yaml.
    Prompts,

    /// Print logging_config.yaml.
    Logging,

    /// Print one value by dotted key path, e.g. `get model tasks.column_typing`.
    Get { kind: ConfigKind, key: String },

    /// Report which standard files are present.
    List,

    /// Write the default configuration files.
    Init {
        /// Directory to write into. Defaults to --config-dir, then the current directory.
        #[arg(long)]
        target: Option<PathBuf>,

        /// Overwrite existing files.
        #[arg(long)]
        force: bool,

        /// Write only one file.
        #[arg(long)]
        only: Option<ConfigKind>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let loader = match &cli.config_dir {
        Some(dir) => ConfigLoader::new(dir),
        None => ConfigLoader::bundled(),
    };

    setup_logging(&loader);

    match cli.command {
        Command::Show { file } => emit_document(cli.format, &loader.load(&file)?),
        Command::Model => emit_document(cli.format, &loader.get_model_config()?),
        Command::Prompts => emit_document(cli.format, &loader.get_prompt_templates()?),
        Command::Logging => emit_document(cli.format, &loader.get_logging_config()?),
        Command::Get { kind, key } => {
            let doc = loader.load_kind(kind)?;
            let value = doc
                .lookup(&key)
                .ok_or_else(|| eyre!("Key '{key}' not found in {}", doc.path().display()))?;
            emit(cli.format, value, doc.path())
        }
        Command::List => {
            println!("{}", loader.base_dir().display());
            for kind in ConfigKind::ALL {
                let status = if loader.exists(kind) {
                    "present".green()
                } else {
                    "missing".red()
                };
                println!("  {:<24}{status}", kind.file_name());
            }
            Ok(())
        }
        Command::Init {
            target,
            force,
            only,
        } => {
            let target_dir = target
                .or(cli.config_dir)
                .unwrap_or_else(|| InitOptions::default().target_dir);
            let options = InitOptions {
                target_dir,
                force,
                only,
            };

            let written = generate_config_dir(&options)
                .wrap_err_with(|| format!("Failed to initialize {}", options.target_dir.display()))?;
            for path in written {
                println!("{} {}", "created".green(), path.display());
            }
            Ok(())
        }
    }
}

/// Uses the root's logging configuration when it loads, otherwise defaults.
fn setup_logging(loader: &ConfigLoader) {
    if let Err(err) = init_from_config(loader) {
        let fallback = LoggingSettings {
            level: "warn".to_string(),
            ..LoggingSettings::default()
        };
        if let Err(install_err) = init_logging(&fallback) {
            eprintln!("Failed to install logging: {install_err}");
            return;
        }
        if !matches!(err, LoggingError::Config(ConfigError::NotFound { .. })) {
            tracing::warn!(error = %err, "Falling back to default logging");
        }
    }
}

fn emit_document(format: OutputFormat, doc: &ConfigDocument) -> color_eyre::Result<()> {
    emit(format, doc, doc.path())
}

/// Prints `value`; render errors name the file it came from.
fn emit<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    source: &Path,
) -> color_eyre::Result<()> {
    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(value)
            .wrap_err_with(|| format!("Failed to render {} as YAML", source.display()))?,
        OutputFormat::Json => {
            serde_json::to_string_pretty(value)
                .wrap_err_with(|| format!("Failed to render {} as JSON", source.display()))?
                + "\n"
        }
    };
    print!("{rendered}");
    Ok(())
}
