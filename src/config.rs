//! Configuration assembled once at startup.
//!
//! Values come from two places, command line first:
//!
//! 1. The parsed [`Cli`]
//! 2. The TOML config file (`-c PATH`, default `~/.config/phoenix/phoenix.toml`)
//!
//! Boolean flags are OR-ed: a flag set in either place is set.
//!
//! # File Format
//!
//! ```toml
//! log_level = "debug"
//! log_file = "/tmp/phoenix.log"
//! style_file = "/home/user/.config/phoenix/style.css"
//!
//! [source]
//! and_exit = true
//! all = false
//! all_compact = false
//!
//! [target]
//! print_path = true
//! ```

use crate::cli::{Cli, Command};
use crate::domain::{ModeConfig, ModeFlags, PhoenixError, Result};
use crate::infrastructure::default_config_path;
use crate::observability::LogLevel;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of the config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Log level used when `--log-level` is absent.
    pub log_level: Option<LogLevel>,
    /// Log file used when `--log-file` is absent.
    pub log_file: Option<PathBuf>,
    /// CSS file replacing the built-in stylesheet.
    pub style_file: Option<PathBuf>,
    /// Defaults for the `source` subcommand.
    pub source: SourceSection,
    /// Defaults for the `target` subcommand.
    pub target: TargetSection,
}

/// `[source]` table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceSection {
    /// Same as `--and-exit`.
    pub and_exit: bool,
    /// Same as `--all`.
    pub all: bool,
    /// Same as `--all-compact`.
    pub all_compact: bool,
}

/// `[target]` table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetSection {
    /// Same as `--print-path`.
    pub print_path: bool,
}

impl FileConfig {
    /// Parses a config file.
    ///
    /// # Errors
    ///
    /// Returns [`PhoenixError::Config`] if the file cannot be read or is not
    /// valid config TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            PhoenixError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        toml::from_str(&text)
            .map_err(|e| PhoenixError::Config(format!("invalid config file {}: {e}", path.display())))
    }

    /// Loads the explicitly given file, or the default file if it exists.
    ///
    /// A missing default file yields an empty configuration; a missing
    /// explicit file is an error.
    ///
    /// # Errors
    ///
    /// See [`FileConfig::from_file`].
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// Where log output goes and how much of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSettings {
    /// Minimum level written.
    pub level: LogLevel,
    /// Rotating log file; stderr when `None`.
    pub file: Option<PathBuf>,
}

/// Complete, immutable startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Mode, flags and source files for the session.
    pub mode: ModeConfig,
    /// Logging sink settings.
    pub logging: LogSettings,
    /// Stylesheet override.
    pub style_file: Option<PathBuf>,
}

impl Config {
    /// Loads the config file named by (or defaulted from) `cli` and merges it.
    ///
    /// # Errors
    ///
    /// Returns [`PhoenixError::Config`] if the config file cannot be used.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let file = FileConfig::load(cli.config.as_deref())?;
        Ok(Self::merge(cli, file))
    }

    /// Merges command-line values over config-file values.
    #[must_use]
    pub fn merge(cli: Cli, file: FileConfig) -> Self {
        let mode = match cli.command {
            Command::Source(args) => ModeConfig::source(
                ModeFlags {
                    exit_after_drop: args.and_exit || file.source.and_exit,
                    drag_all: args.all || file.source.all,
                    drag_all_compact: args.all_compact || file.source.all_compact,
                    print_path: false,
                },
                args.files,
            ),
            Command::Target(args) => ModeConfig::target(ModeFlags {
                print_path: args.print_path || file.target.print_path,
                ..ModeFlags::default()
            }),
        };

        Self {
            mode,
            logging: LogSettings {
                level: cli.log_level.or(file.log_level).unwrap_or_default(),
                file: cli.log_file.or(file.log_file),
            },
            style_file: file.style_file,
        }
    }
}
