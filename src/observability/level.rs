//! Log level names accepted on the command line and in the config file.

use clap::ValueEnum;
use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;

/// Log verbosity, named the way the `--log-level` option spells it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-event spans.
    Trace,
    /// Registry, payload and drop details.
    Debug,
    /// Skipped inputs and lifecycle decisions.
    #[default]
    Info,
    /// Missing files and rejected drops.
    Warn,
    /// Errors only.
    Err,
    /// Errors only; kept for compatibility with the `critical` spelling.
    Critical,
    /// Nothing.
    Off,
}

impl LogLevel {
    /// The `tracing` filter for this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Trace => LevelFilter::TRACE,
            Self::Debug => LevelFilter::DEBUG,
            Self::Info => LevelFilter::INFO,
            Self::Warn => LevelFilter::WARN,
            Self::Err | Self::Critical => LevelFilter::ERROR,
            Self::Off => LevelFilter::OFF,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cli_spellings() {
        assert_eq!(LogLevel::from_str("err", false), Ok(LogLevel::Err));
        assert_eq!(LogLevel::from_str("critical", false), Ok(LogLevel::Critical));
        assert!(LogLevel::from_str("error", false).is_err());
    }

    #[test]
    fn err_and_critical_both_mean_error() {
        assert_eq!(LogLevel::Err.filter(), LevelFilter::ERROR);
        assert_eq!(LogLevel::Critical.filter(), LevelFilter::ERROR);
        assert_eq!(LogLevel::Off.filter(), LevelFilter::OFF);
    }

    #[test]
    fn deserializes_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            level: LogLevel,
        }
        let w: Wrapper = toml::from_str("level = \"warn\"").unwrap();
        assert_eq!(w.level, LogLevel::Warn);
    }
}
