//! Domain layer for phoenix.
//!
//! This module contains the core domain types, independent of any windowing
//! toolkit or of the host bridge.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`file_ref`]: Validated local file handles
//! - [`mode`]: Operating mode and flags fixed at startup

pub mod error;
pub mod file_ref;
pub mod mode;

pub use error::{PhoenixError, Result};
pub use file_ref::FileReference;
pub use mode::{Mode, ModeConfig, ModeFlags};
