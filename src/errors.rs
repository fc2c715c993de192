//! Defines application-specific error types.
//!
//! This module provides the [`Error`] enum, which categorizes the failures
//! that can occur during a run, offering more context than generic I/O or
//! `anyhow` errors, plus the [`ConfigError`] enum for structured
//! flag-combination problems detected before any I/O happens.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Application-specific errors used throughout `catfiles`.
#[derive(Error, Debug)]
pub enum Error {
    // --- I/O Errors ---
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    // --- Configuration Errors ---
    /// Invalid configuration settings or combinations, detected before any I/O.
    #[error(transparent)]
    Config(#[from] ConfigError),

    // --- Input Resolution Errors ---
    /// A directory root passed for traversal does not exist or is not a directory.
    #[error("Input root '{path}' does not exist or is not a directory.")]
    InvalidRoot {
        /// The offending root path.
        path: String,
    },

    /// An explicitly listed input file does not exist or is not a regular file.
    #[error("Input file '{path}' does not exist or is not a regular file.")]
    InvalidFile {
        /// The offending file path.
        path: String,
    },

    // --- Rendering Errors ---
    /// The template text is malformed or an explicit template file is unreadable.
    /// Fatal, since every file would fail to render identically.
    #[error("Invalid template: {0}")]
    Template(String),

    // --- Empty Result Errors ---
    /// No files were found that matched the given criteria.
    #[error("No files found matching the specified criteria.")]
    NoFilesFound,

    /// Every discovered path was rejected by separator conflict checking.
    #[error("No valid paths remain after separator conflict checking.")]
    NoValidPaths,
}

/// Structured configuration errors raised by option validation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Two options that cannot be used together were both given.
    #[error("Invalid configuration: cannot use {option1} together with {option2}.")]
    Conflict {
        /// The first conflicting option.
        option1: String,
        /// The second conflicting option.
        option2: String,
    },

    /// An option was given without another option it depends on.
    #[error("Invalid configuration: {option} requires {required}.")]
    MissingDependency {
        /// The option that was given.
        option: String,
        /// The option it depends on.
        required: String,
    },

    /// An option value (or the overall input selection) is unusable.
    #[error("Invalid configuration: {option}: {reason}")]
    InvalidValue {
        /// The option carrying the bad value.
        option: String,
        /// Why the value is rejected.
        reason: String,
    },
}

/// Helper function to create an [`Error::Io`] with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
