//! Logging sink for reported conditions.
//!
//! Skipped inputs, rejected drops and lifecycle decisions are reported through
//! `tracing` macros across the crate. This module installs the subscriber that
//! turns them into lines on stderr or in a rotating log file.
//!
//! ```text
//! tracing macros → EnvFilter(level) → fmt layer → stderr | FileWriter
//! ```
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`level`]: `--log-level` names and their filters
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
pub mod init;
pub mod level;

pub use init::init_logging;
pub use level::LogLevel;
