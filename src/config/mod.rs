//! Defines the core `Config` struct and related types for application configuration.
//!
//! This module consolidates all the settings parsed and validated from the
//! CLI, making them available to the rest of the pipeline in a structured
//! and type-safe manner.

use crate::constants::{DEFAULT_DIR_SEPARATOR, DEFAULT_PREFIX_SEPARATOR};
use crate::errors::{ConfigError, Result};
use crate::filtering::ExclusionSet;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
mod parsing;
mod validation;

/// Where input files come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// An explicit file list; every path must name an existing regular file.
    Files(Vec<PathBuf>),
    /// One or more directory roots walked recursively.
    Directories(Vec<PathBuf>),
}

/// Represents the destination for the generated output.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum OutputDestination {
    /// Write to standard output.
    Stdout,
    /// Write to the specified file path; in split modes this path doubles
    /// as the output prefix for synthetic filenames.
    File(PathBuf),
}

/// How rendered output is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLayout {
    /// All rendered bodies appended to one destination in sorted order.
    SingleStream,
    /// One synthetic output file per input file.
    SplitPerFile,
    /// One synthetic output file per parent-directory group.
    SplitPerDirectory,
}

/// Validated application configuration, ready to be used by the core logic.
#[derive(Debug, Clone)]
pub struct Config {
    /// The input source (explicit files or directory roots).
    pub source: InputSource,
    /// Dot-normalized extension allow-list; `None` keeps every file.
    pub extensions: Option<Vec<String>>,
    /// Directory names pruned from traversal (defaults plus user additions).
    pub exclusions: ExclusionSet,
    /// Template file to load; `None` uses the built-in default template.
    pub template_path: Option<PathBuf>,
    /// Where single-stream output goes, or the prefix for split modes.
    pub output_destination: OutputDestination,
    /// The selected output layout.
    pub layout: OutputLayout,
    /// Separator between the output prefix and the rest of a synthetic filename.
    pub prefix_separator: String,
    /// Stand-in for `/` inside grouped output filenames.
    pub dir_separator: String,
}

impl Config {
    /// The output prefix used to synthesize split-mode filenames.
    ///
    /// Validation guarantees split modes carry a file destination; this
    /// turns an out-of-band `Stdout` into the same configuration error.
    pub fn output_prefix(&self) -> Result<String> {
        match &self.output_destination {
            OutputDestination::File(path) => Ok(path.display().to_string()),
            OutputDestination::Stdout => Err(ConfigError::MissingDependency {
                option: "--split".to_string(),
                required: "--output <PATH>".to_string(),
            }
            .into()),
        }
    }

    /// Creates a default `Config` for testing purposes.
    ///
    /// This function is hidden from public documentation and is intended
    /// for use in tests and doc tests only.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            source: InputSource::Directories(vec![PathBuf::from(".")]),
            extensions: None,
            exclusions: ExclusionSet::with_defaults(),
            template_path: None,
            output_destination: OutputDestination::Stdout,
            layout: OutputLayout::SingleStream,
            prefix_separator: DEFAULT_PREFIX_SEPARATOR.to_string(),
            dir_separator: DEFAULT_DIR_SEPARATOR.to_string(),
        }
    }
}
