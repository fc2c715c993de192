//! Defines core data structures used throughout the application pipeline.
//!
//! These structs, `FileEntry`, `ConflictReport`, and `RunReport`, are central
//! to how files are discovered, conflict-checked, and reported on.

use std::path::{Component, Path, PathBuf};

/// A path known to reference a regular file at discovery time.
///
/// Entries are immutable once discovered. All string accessors normalize
/// platform path separators to `/`, so downstream ordering, grouping, and
/// synthetic filenames are identical across platforms.
///
/// # Examples
///
/// ```
/// use catfiles::core_types::FileEntry;
///
/// let entry = FileEntry::new("./src/lib/a.rs");
/// assert_eq!(entry.path_str(), "src/lib/a.rs");
/// assert_eq!(entry.file_name(), "a.rs");
/// assert_eq!(entry.parent_key(), "src/lib");
///
/// let top_level = FileEntry::new("notes.txt");
/// assert_eq!(top_level.parent_key(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
}

impl FileEntry {
    /// Creates an entry, stripping any leading `./` components so that
    /// `./a.py` and `a.py` compare, group, and render identically.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut components = path.components().peekable();
        while matches!(components.peek(), Some(Component::CurDir)) {
            components.next();
        }
        let stripped: PathBuf = components.collect();
        let path = if stripped.as_os_str().is_empty() {
            path
        } else {
            stripped
        };
        Self { path }
    }

    /// The underlying filesystem path, used for reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full path as a `/`-separated string. This is the string the
    /// lexicographic ordering and the conflict checker operate on.
    pub fn path_str(&self) -> String {
        self.path.to_string_lossy().replace('\\', "/")
    }

    /// The bare file name, used as the display path in explicit-file mode
    /// and as the right half of per-file synthetic output names.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path_str())
    }

    /// The parent-directory grouping key. Direct children of a traversal
    /// root map to the empty string.
    pub fn parent_key(&self) -> String {
        match self.path.parent() {
            Some(parent) => parent.to_string_lossy().replace('\\', "/"),
            None => String::new(),
        }
    }
}

/// A discovered path rejected because it contains a reserved separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorConflict {
    /// The rejected entry.
    pub entry: FileEntry,
    /// The separator substring found inside the path.
    pub separator: String,
}

/// The partition produced by separator conflict checking.
///
/// `valid` entries are safe to use when synthesizing output filenames;
/// `invalid` entries are skipped with a warning and counted in the final
/// summary.
#[derive(Debug, Clone, Default)]
pub struct ConflictReport {
    /// Entries free of both reserved separators, in input order.
    pub valid: Vec<FileEntry>,
    /// Entries containing a reserved separator, paired with the offender.
    pub invalid: Vec<SeparatorConflict>,
}

impl ConflictReport {
    /// Number of entries rejected by the check.
    pub fn skipped(&self) -> usize {
        self.invalid.len()
    }
}

/// Processed/skipped totals reported after a run.
///
/// # Examples
///
/// ```
/// use catfiles::core_types::RunReport;
///
/// let report: RunReport = Default::default();
/// assert_eq!(report.processed, 0);
/// assert_eq!(report.skipped, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Files rendered and written.
    pub processed: usize,
    /// Files dropped by conflict checking.
    pub skipped: usize,
}
