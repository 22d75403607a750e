//! Command-line surface.
//!
//! ```text
//! phoenix [-c PATH] [--log-level LEVEL] [--log-file PATH] source [-x] [-a] [-A] FILES...
//! phoenix [-c PATH] [--log-level LEVEL] [--log-file PATH] target [-p]
//! ```

use crate::observability::LogLevel;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Parsed command line.
#[derive(Parser, Debug)]
#[command(
    name = "phoenix",
    about = "phoenix - lightweight DnD source/target",
    version,
    disable_version_flag = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Show version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Config file [default: ~/.config/phoenix/phoenix.toml]
    #[arg(short = 'c', long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Change log level [default: info]
    #[arg(long = "log-level", value_name = "LEVEL", value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Write logs to this file instead of stderr
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Operating mode subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Act as a drag source
    Source(SourceArgs),
    /// Act as a drop target
    Target(TargetArgs),
}

/// Flags of the `source` subcommand.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Exit after a single completed drop
    #[arg(short = 'x', long = "and-exit")]
    pub and_exit: bool,

    /// Drag all files at once
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Drag all files at once, only displaying the number of files
    #[arg(short = 'A', long = "all-compact")]
    pub all_compact: bool,

    /// Files to drag
    #[arg(value_name = "FILES", required = true, num_args = 1..)]
    pub files: Vec<String>,
}

/// Flags of the `target` subcommand.
#[derive(Args, Debug, Default)]
pub struct TargetArgs {
    /// Print file paths instead of URIs
    #[arg(short = 'p', long = "print-path")]
    pub print_path: bool,
}
