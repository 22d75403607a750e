//! Infrastructure layer for filesystem and environment interactions.
//!
//! Helpers here touch the environment (home directory, file metadata) or do the
//! string-level work of telling paths and URIs apart. Nothing in this layer knows
//! about drag gestures.

pub mod content_type;
pub mod paths;

pub use paths::{absolutize, default_config_path, display_label, normalize, uri_scheme};

