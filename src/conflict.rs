//! Separator conflict checking for synthetic output filenames.
//!
//! Split-mode filenames are built as `<prefix><separator><name>`; a path
//! that already contains one of the reserved separators would make those
//! names ambiguous to reverse, so such paths are skipped.

use crate::core_types::{ConflictReport, FileEntry, SeparatorConflict};
use log::warn;
use tracing::instrument;

/// Partitions entries into those safe for synthetic filenames and those
/// containing a reserved separator substring.
///
/// The prefix separator is tested first, so with the defaults a path
/// containing `___` is reported against `___` even though it necessarily
/// also contains `__`. Each invalid entry is logged as a warning and the
/// run continues; whether an empty `valid` set is fatal is the caller's
/// decision.
#[instrument(level = "debug", skip(entries))]
pub fn partition(
    entries: Vec<FileEntry>,
    prefix_separator: &str,
    dir_separator: &str,
) -> ConflictReport {
    let mut report = ConflictReport::default();
    for entry in entries {
        let path = entry.path_str();
        let offender = if path.contains(prefix_separator) {
            Some(prefix_separator)
        } else if path.contains(dir_separator) {
            Some(dir_separator)
        } else {
            None
        };
        match offender {
            Some(separator) => {
                warn!("Skipping '{path}': path contains reserved separator '{separator}'");
                report.invalid.push(SeparatorConflict {
                    entry,
                    separator: separator.to_string(),
                });
            }
            None => report.valid.push(entry),
        }
    }
    report
}
