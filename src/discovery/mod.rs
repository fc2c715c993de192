//! Discovers files based on configuration, either from an explicit file
//! list or by walking directory roots.

use crate::config::{Config, InputSource};
use crate::core_types::FileEntry;
use crate::errors::{io_error_with_path, Error, Result};
use log::debug;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::instrument;

mod walker;

use walker::walk_roots;

/// Resolves the configured input source into a sorted list of file entries.
///
/// In directory-scan mode every root is validated up front, excluded
/// subtrees are pruned during the walk, and the merged results are sorted
/// lexicographically by path string; an empty result is an error. In
/// explicit-file mode every listed path must name an existing regular file
/// (the first offender aborts the run) and the list is sorted the same way.
/// File contents are not read at this stage.
///
/// # Errors
/// Returns [`Error::InvalidRoot`] or [`Error::InvalidFile`] for unusable
/// inputs, [`Error::Io`] for filesystem failures during the walk, and
/// [`Error::NoFilesFound`] when a directory scan matches nothing.
///
/// # Examples
///
/// ```
/// use catfiles::config::ConfigBuilder;
/// use catfiles::discover;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ConfigBuilder::new().directory("src").build()?;
/// let entries = discover(&config)?;
/// println!("Found {} files.", entries.len());
/// # Ok(())
/// # }
/// ```
#[instrument(level = "debug", skip_all)]
pub fn discover(config: &Config) -> Result<Vec<FileEntry>> {
    let entries = match &config.source {
        InputSource::Files(paths) => resolve_file_list(paths)?,
        InputSource::Directories(roots) => {
            let entries = walk_roots(roots, config.extensions.as_deref(), &config.exclusions)?;
            if entries.is_empty() {
                return Err(Error::NoFilesFound);
            }
            entries
        }
    };
    debug!("Discovery complete. Files: {}", entries.len());
    Ok(entries)
}

/// Validates an explicit file list and sorts it like walker output.
fn resolve_file_list(paths: &[PathBuf]) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::with_capacity(paths.len());
    for path in paths {
        match fs::metadata(path) {
            Ok(meta) if meta.is_file() => entries.push(FileEntry::new(path.clone())),
            Ok(_) => {
                return Err(Error::InvalidFile {
                    path: path.display().to_string(),
                })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::InvalidFile {
                    path: path.display().to_string(),
                })
            }
            Err(e) => return Err(io_error_with_path(e, path)),
        }
    }
    entries.sort_by_cached_key(|entry| entry.path_str());
    Ok(entries)
}
