//! Binary entry point.
//!
//! Thin shim over the library: parse the command line, merge the config file,
//! install logging, then hand stdin and stdout to the host bridge.
//!
//! # Lifecycle
//!
//! 1. **Parse**: clap handles `--help`, `--version` and usage errors (status 2)
//! 2. **Configure**: merge the config file; failure exits with status 1
//! 3. **Log**: install the subscriber; failure exits with status 1
//! 4. **Run**: process host messages until EOF or a close action (status 0)

use clap::Parser;
use phoenix::bridge::{Exit, Host};
use phoenix::cli::Cli;
use phoenix::observability::init_logging;
use phoenix::ui::Stylesheet;
use phoenix::{Config, Session};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_cli(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("phoenix: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("phoenix: {e}");
        return ExitCode::FAILURE;
    }

    let cwd = std::env::current_dir().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "cannot read working directory, using /");
        PathBuf::from("/")
    });

    tracing::info!(mode = ?config.mode.mode, version = env!("CARGO_PKG_VERSION"), "starting");

    let stylesheet = Stylesheet::load_or_default(config.style_file.as_deref());
    let session = Session::new(config.mode, &cwd);
    let mut host = Host::new(session, stylesheet, BufWriter::new(io::stdout().lock()));

    let result = host.start().and_then(|()| host.run(io::stdin().lock()));
    match result {
        Ok(Exit::EndOfInput | Exit::Closed) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "host bridge failed");
            ExitCode::FAILURE
        }
    }
}
