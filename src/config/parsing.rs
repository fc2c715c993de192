// src/config/parsing.rs

use crate::filtering::normalize_extensions;

/// Dot-normalizes the optional extension allow-list.
///
/// Empty entries are dropped; a list left empty after that (or `Some` of
/// an empty vector) collapses to `None`, meaning "keep every file".
pub(super) fn prepare_extensions(extensions: Option<Vec<String>>) -> Option<Vec<String>> {
    let normalized = normalize_extensions(extensions?);
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}
