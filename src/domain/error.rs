//! Error types for phoenix.
//!
//! This module defines the centralized error type [`PhoenixError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. Errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Only the startup variants (`Config`, `Logging`, `Io`) end the process. Everything
//! raised while a session is running is recovered locally and reported through
//! `tracing`.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for phoenix operations.
///
/// # Examples
///
/// ```
/// use phoenix::PhoenixError;
///
/// let err = PhoenixError::UnsupportedScheme {
///     scheme: "http".to_string(),
///     uri: "http://x/y".to_string(),
/// };
/// assert_eq!(err.to_string(), "uri scheme http not supported: http://x/y");
/// ```
#[derive(Debug, Error)]
pub enum PhoenixError {
    /// An input resolved to a URI whose scheme is not `file`.
    ///
    /// The entry is dropped from the registry and reported at info level.
    #[error("uri scheme {scheme} not supported: {uri}")]
    UnsupportedScheme {
        /// Scheme of the resolved URI (e.g. `http`).
        scheme: String,
        /// The URI as given on the command line.
        uri: String,
    },

    /// An input resolved to a local path that does not exist.
    ///
    /// The entry is dropped from the registry and reported at warn level.
    #[error("local file {} doesn't exist", .path.display())]
    MissingFile {
        /// Absolute, normalized path of the missing file.
        path: PathBuf,
    },

    /// A `file:` URI that cannot be parsed or has no local path.
    #[error("invalid uri {uri}: {reason}")]
    InvalidUri {
        /// The offending URI string.
        uri: String,
        /// What went wrong while parsing it.
        reason: String,
    },

    /// A delivered drop payload could not be decoded into file references.
    ///
    /// The drop is rejected and the target returns to idle.
    #[error("malformed drop payload: {0}")]
    MalformedDropPayload(String),

    /// A drag was requested from an affordance that does not exist.
    #[error("drag origin {index} out of range ({len} file(s) offered)")]
    UnknownItem {
        /// Requested registry index.
        index: usize,
        /// Number of files in the registry.
        len: usize,
    },

    /// A host bridge line could not be understood.
    #[error("Host protocol error: {0}")]
    Protocol(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The logging sink could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

/// A specialized `Result` type for phoenix operations.
pub type Result<T> = std::result::Result<T, PhoenixError>;
