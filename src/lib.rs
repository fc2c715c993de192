//! `catfiles` is a library and command-line tool for collecting files from
//! directory trees (or explicit file lists) and rendering their contents
//! through a small two-placeholder template.
//!
//! It is designed for gathering scattered plain-text files into review-ready
//! bundles: everything into one stream, one output file per input file, or
//! one output file per source directory.
//!
//! As a library, it provides a modular pipeline:
//! 1.  **Discover**: Find files by walking directory roots with extension and
//!     directory-name filters, or by validating an explicit file list.
//! 2.  **Render**: Expand each file through a template with `{filename}` and
//!     `{content}` placeholders.
//! 3.  **Write**: Emit the rendered bodies in the configured layout.
//!
//! This design allows programmatic use of its components, such as running the
//! discovery walk on its own or rendering through a custom template.
//!
//! # Example: Library Usage
//!
//! The following example discovers files in a temporary directory and renders
//! them through the default template into an in-memory buffer.
//!
//! ```
//! use catfiles::{discover, ConfigBuilder, Template};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. Set up a temporary directory with some files.
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join("notes.txt"), "All meetings moved to Monday.").unwrap();
//! fs::write(temp_dir.path().join("todo.md"), "- ship the release").unwrap();
//!
//! // 2. Create a Config object programmatically using the builder.
//! let config = ConfigBuilder::new()
//!     .directory(temp_dir.path().to_str().unwrap())
//!     .extensions(["txt"])
//!     .build()
//!     .unwrap();
//!
//! // 3. Discover matching files.
//! let entries = discover(&config).unwrap();
//! assert_eq!(entries.len(), 1);
//!
//! // 4. Render them through the default template into a buffer.
//! let template = Template::load(None).unwrap();
//! let mut buffer = Vec::new();
//! catfiles::output::write_single_stream(&entries, &template, &config, &mut buffer).unwrap();
//!
//! let rendered = String::from_utf8(buffer).unwrap();
//! assert!(rendered.contains("=== START:"));
//! assert!(rendered.contains("All meetings moved to Monday."));
//! ```

// Make modules public if they contain public types used in the API
pub mod cli;
pub mod config;
pub mod conflict;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod grouping;
pub mod output;
pub mod template;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder, InputSource, OutputDestination, OutputLayout};
pub use core_types::{ConflictReport, FileEntry, RunReport, SeparatorConflict};
pub use discovery::discover;
pub use errors::{Error, Result};
pub use filtering::ExclusionSet;
pub use template::Template;

/// Executes the complete catfiles pipeline: load the template, discover
/// files, and write the rendered output in the configured layout.
///
/// This is the primary entry point for running the tool's logic
/// programmatically in a way that mirrors the command-line execution. For
/// more granular control, or to capture output in memory, use [`discover`]
/// and the [`output`] module functions directly, as shown in the crate-level
/// documentation example.
///
/// Split layouts run separator conflict checking before writing: paths that
/// contain a reserved separator are skipped with a warning and counted in
/// the returned report instead of aborting the run. Every other failure is
/// fatal.
///
/// # Arguments
/// * `config` - The configuration for the entire run.
///
/// # Returns
/// A `Result` containing a [`RunReport`] with processed and skipped counts.
/// Returns [`Error::NoFilesFound`] when discovery yields nothing and
/// [`Error::NoValidPaths`] when conflict checking rejects every discovered
/// file. Other errors are propagated from the underlying stages.
pub fn run(config: &Config) -> Result<RunReport> {
    let template = Template::load(config.template_path.as_deref())?;
    let entries = discover(config)?;

    match config.layout {
        OutputLayout::SingleStream => {
            let mut writer = output::writer::setup_output_writer(&config.output_destination)?;
            let processed = output::write_single_stream(&entries, &template, config, &mut writer)?;
            Ok(RunReport {
                processed,
                skipped: 0,
            })
        }
        OutputLayout::SplitPerFile | OutputLayout::SplitPerDirectory => {
            let report =
                conflict::partition(entries, &config.prefix_separator, &config.dir_separator);
            if report.valid.is_empty() {
                return Err(Error::NoValidPaths);
            }
            let prefix = config.output_prefix()?;
            let processed = if config.layout == OutputLayout::SplitPerFile {
                output::write_split_files(&report.valid, &template, config, &prefix)?
            } else {
                output::write_grouped_files(&report.valid, &template, config, &prefix)?
            };
            Ok(RunReport {
                processed,
                skipped: report.skipped(),
            })
        }
    }
}
