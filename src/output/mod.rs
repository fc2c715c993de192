// src/output/mod.rs

//! Renders discovered files through the template and writes the result in
//! one of three layouts: a single stream, one synthetic file per input
//! file, or one synthetic file per directory group. Also formats the plain
//! path listing. File contents are read lazily, one file at a time.

use crate::config::{Config, InputSource, OutputDestination};
use crate::core_types::FileEntry;
use crate::errors::{io_error_with_path, Error, Result};
use crate::grouping::group_by_parent;
use crate::template::Template;
use log::debug;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod writer;

/// The string substituted for `{filename}`: the bare file name in
/// explicit-file mode, the normalized relative path in directory mode.
pub fn display_path(entry: &FileEntry, config: &Config) -> String {
    match config.source {
        InputSource::Files(_) => entry.file_name(),
        InputSource::Directories(_) => entry.path_str(),
    }
}

/// Appends every rendered body to one destination in input (sorted) order,
/// each followed by a separator newline.
pub fn write_single_stream(
    entries: &[FileEntry],
    template: &Template,
    config: &Config,
    writer: &mut dyn Write,
) -> Result<usize> {
    debug!("Writing single-stream output for {} file(s)", entries.len());
    let destination = destination_name(config);
    for entry in entries {
        let content = read_file_content(entry)?;
        let rendered = template.render(&display_path(entry, config), &content);
        writer
            .write_all(rendered.as_bytes())
            .and_then(|_| writeln!(writer))
            .map_err(|e| Error::Io {
                path: destination.clone(),
                source: e,
            })?;
    }
    writer.flush().map_err(|e| Error::Io {
        path: destination,
        source: e,
    })?;
    Ok(entries.len())
}

/// Writes one synthetic file per entry, named
/// `<prefix><prefixSeparator><fileName>`.
pub fn write_split_files(
    entries: &[FileEntry],
    template: &Template,
    config: &Config,
    prefix: &str,
) -> Result<usize> {
    debug!("Writing split output for {} file(s)", entries.len());
    for entry in entries {
        let content = read_file_content(entry)?;
        let rendered = template.render(&display_path(entry, config), &content);
        let name = writer::split_file_name(prefix, &config.prefix_separator, &entry.file_name());
        let path = PathBuf::from(&name);
        writer::ensure_parent_dir(&path)?;
        fs::write(&path, rendered).map_err(|e| io_error_with_path(e, &path))?;
        debug!("Wrote '{}'", path.display());
    }
    Ok(entries.len())
}

/// Writes one synthetic file per parent-directory group, each body joined
/// in sorted order with a newline separator and written as one write.
pub fn write_grouped_files(
    entries: &[FileEntry],
    template: &Template,
    config: &Config,
    prefix: &str,
) -> Result<usize> {
    let groups = group_by_parent(entries);
    debug!(
        "Writing grouped output: {} file(s) in {} group(s)",
        entries.len(),
        groups.len()
    );
    let mut processed = 0;
    for (key, members) in &groups {
        let name = writer::group_file_name(
            prefix,
            &config.prefix_separator,
            &config.dir_separator,
            key,
        );
        let path = PathBuf::from(&name);
        writer::ensure_parent_dir(&path)?;

        let mut body = String::new();
        for (index, entry) in members.iter().enumerate() {
            if index > 0 {
                body.push('\n');
            }
            let content = read_file_content(entry)?;
            body.push_str(&template.render(&display_path(entry, config), &content));
        }
        fs::write(&path, body).map_err(|e| io_error_with_path(e, &path))?;
        debug!("Wrote group '{key}' to '{}'", path.display());
        processed += members.len();
    }
    Ok(processed)
}

/// Formats entries as a single space-joined line, sorted by extension and
/// then by path. The extension key keeps its leading dot; files without an
/// extension sort first.
pub fn format_path_list(entries: &[FileEntry]) -> String {
    let mut sorted: Vec<&FileEntry> = entries.iter().collect();
    sorted.sort_by_cached_key(|entry| (extension_key(entry), entry.path_str()));
    sorted
        .iter()
        .map(|entry| entry.path_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn extension_key(entry: &FileEntry) -> String {
    entry
        .path()
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

fn read_file_content(entry: &FileEntry) -> Result<String> {
    fs::read_to_string(entry.path()).map_err(|e| io_error_with_path(e, entry.path()))
}

fn destination_name(config: &Config) -> String {
    match &config.output_destination {
        OutputDestination::File(path) => path.display().to_string(),
        OutputDestination::Stdout => "<stdout>".to_string(),
    }
}
