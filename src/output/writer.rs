// src/output/writer.rs

//! Manages the output destination (stdout or a file) and builds the
//! synthetic filenames used by the split output modes.

use crate::config::OutputDestination;
use crate::constants::{GROUP_FILE_SUFFIX, ROOT_GROUP_STEM};
use crate::errors::{io_error_with_path, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Creates the appropriate output writer for single-stream mode.
///
/// # Errors
/// Returns an error if the destination file cannot be created.
pub fn setup_output_writer(destination: &OutputDestination) -> Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = match destination {
        OutputDestination::Stdout => Box::new(io::stdout()),
        OutputDestination::File(path) => {
            let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
            Box::new(BufWriter::new(file)) // Use BufWriter for file I/O
        }
    };
    Ok(writer)
}

/// Builds the per-file synthetic name `<prefix><separator><fileName>`.
pub fn split_file_name(prefix: &str, separator: &str, file_name: &str) -> String {
    format!("{prefix}{separator}{file_name}")
}

/// Builds the per-group synthetic name
/// `<prefix><separator><safeDirPath>.txt`, where the group key's `/` is
/// replaced with the directory separator. The empty (root) key becomes
/// `<prefix><separator>root.txt`.
pub fn group_file_name(
    prefix: &str,
    separator: &str,
    dir_separator: &str,
    group_key: &str,
) -> String {
    let stem = if group_key.is_empty() {
        ROOT_GROUP_STEM.to_string()
    } else {
        group_key.replace('/', dir_separator)
    };
    format!("{prefix}{separator}{stem}{GROUP_FILE_SUFFIX}")
}

/// Creates the parent directories of a synthetic output path on demand.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| io_error_with_path(e, parent))?;
        }
    }
    Ok(())
}
