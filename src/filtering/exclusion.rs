// src/filtering/exclusion.rs

use crate::constants::DEFAULT_EXCLUDED_DIRS;
use std::collections::HashSet;
use std::path::Path;

/// A set of directory names pruned from traversal regardless of depth.
///
/// Matching is per path component, case-sensitive, exact string equality;
/// there is no glob support. Because every component of a candidate path is
/// checked, exclusion is transitive: a directory named `node_modules`
/// anywhere in a path hides its entire subtree, and a plain file whose own
/// name matches an entry is skipped too.
///
/// # Examples
///
/// ```
/// use catfiles::filtering::ExclusionSet;
///
/// let set = ExclusionSet::with_defaults();
/// assert!(set.is_excluded("node_modules/left-pad/index.js"));
/// assert!(set.is_excluded("src/__pycache__"));
/// assert!(!set.is_excluded("src/main.rs"));
///
/// // Case-sensitive, exact match per segment.
/// assert!(!set.is_excluded("Node_Modules/x.js"));
/// assert!(!set.is_excluded("my_node_modules/x.js"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    /// An empty set; nothing is excluded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in defaults: VCS metadata, virtual envs, build/dist
    /// output, dependency and cache directories, editor/OS metadata.
    pub fn with_defaults() -> Self {
        let names = DEFAULT_EXCLUDED_DIRS
            .iter()
            .map(|name| (*name).to_string())
            .collect();
        Self { names }
    }

    /// Adds caller-supplied names to the set. Trailing path separators are
    /// trimmed so `venv/` registers as `venv`; empty entries are dropped.
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let trimmed = name.as_ref().trim_end_matches(['/', '\\']);
            if !trimmed.is_empty() {
                self.names.insert(trimmed.to_string());
            }
        }
    }

    /// Returns true if any component of `path` exactly matches a set entry.
    pub fn is_excluded(&self, path: impl AsRef<Path>) -> bool {
        if self.names.is_empty() {
            return false;
        }
        path.as_ref().components().any(|component| {
            component
                .as_os_str()
                .to_str()
                .is_some_and(|segment| self.names.contains(segment))
        })
    }

    /// Whether `name` itself (a single segment) is in the set.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of entries in the set.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_common_directories() {
        let set = ExclusionSet::with_defaults();
        for name in [".git", "node_modules", "__pycache__", "target", "vendor"] {
            assert!(set.contains(name), "expected default entry {name}");
        }
        assert!(!set.contains("src"));
    }

    #[test]
    fn test_exclusion_is_transitive_to_descendants() {
        let set = ExclusionSet::with_defaults();
        assert!(set.is_excluded("node_modules"));
        assert!(set.is_excluded("node_modules/pkg"));
        assert!(set.is_excluded("a/b/node_modules/c/d.js"));
    }

    #[test]
    fn test_match_is_exact_and_case_sensitive() {
        let set = ExclusionSet::with_defaults();
        assert!(!set.is_excluded("NODE_MODULES/x.js"));
        assert!(!set.is_excluded("node_modules_backup/x.js"));
        assert!(!set.is_excluded("targets/x.rs"));
    }

    #[test]
    fn test_egg_info_entry_is_a_no_op() {
        // The literal `*.egg-info` default never matches a real directory
        // name because the matcher has no glob support.
        let set = ExclusionSet::with_defaults();
        assert!(set.contains("*.egg-info"));
        assert!(!set.is_excluded("mypkg.egg-info/PKG-INFO"));
    }

    #[test]
    fn test_extend_normalizes_trailing_separators() {
        let mut set = ExclusionSet::empty();
        set.extend(["docs/", "tmp", ""]);
        assert!(set.contains("docs"));
        assert!(set.contains("tmp"));
        assert_eq!(set.len(), 2);
        assert!(set.is_excluded("docs/guide.md"));
    }

    #[test]
    fn test_empty_set_excludes_nothing() {
        let set = ExclusionSet::empty();
        assert!(set.is_empty());
        assert!(!set.is_excluded("node_modules/x.js"));
    }
}
