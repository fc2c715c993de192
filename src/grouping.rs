//! Parent-directory grouping for grouped-split output.

use crate::core_types::FileEntry;
use std::collections::BTreeMap;

/// Groups entries by their parent-directory key, preserving input order
/// within each group.
///
/// Direct children of a traversal root land under the empty-string key.
/// The `BTreeMap` keeps group iteration deterministic (the root group
/// sorts first).
///
/// # Examples
///
/// ```
/// use catfiles::core_types::FileEntry;
/// use catfiles::grouping::group_by_parent;
///
/// let entries = vec![
///     FileEntry::new("readme.txt"),
///     FileEntry::new("src/lib/a.rs"),
///     FileEntry::new("src/lib/b.rs"),
/// ];
/// let groups = group_by_parent(&entries);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[""].len(), 1);
/// assert_eq!(groups["src/lib"].len(), 2);
/// ```
pub fn group_by_parent(entries: &[FileEntry]) -> BTreeMap<String, Vec<FileEntry>> {
    let mut groups: BTreeMap<String, Vec<FileEntry>> = BTreeMap::new();
    for entry in entries {
        groups
            .entry(entry.parent_key())
            .or_default()
            .push(entry.clone());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(paths: &[&str]) -> Vec<FileEntry> {
        paths.iter().copied().map(FileEntry::new).collect()
    }

    #[test]
    fn test_union_of_groups_equals_input() {
        let input = entries(&["a.py", "src/b.py", "src/lib/c.py", "src/d.py"]);
        let groups = group_by_parent(&input);

        let mut regrouped: Vec<FileEntry> = groups.values().flatten().cloned().collect();
        regrouped.sort_by_cached_key(|e| e.path_str());
        let mut sorted_input = input.clone();
        sorted_input.sort_by_cached_key(|e| e.path_str());
        assert_eq!(regrouped, sorted_input);

        for (key, members) in &groups {
            for member in members {
                assert_eq!(&member.parent_key(), key);
            }
        }
    }

    #[test]
    fn test_root_files_use_the_empty_key() {
        let groups = group_by_parent(&entries(&["top.txt", "sub/inner.txt"]));
        assert!(groups.contains_key(""));
        assert_eq!(groups[""][0].file_name(), "top.txt");
    }

    #[test]
    fn test_input_order_is_preserved_within_groups() {
        let groups = group_by_parent(&entries(&["src/a.py", "src/b.py", "src/c.py"]));
        let names: Vec<String> = groups["src"].iter().map(|e| e.file_name()).collect();
        assert_eq!(names, vec!["a.py", "b.py", "c.py"]);
    }

    #[test]
    fn test_group_iteration_is_sorted_root_first() {
        let groups = group_by_parent(&entries(&["zz/x.txt", "aa/y.txt", "top.txt"]));
        let keys: Vec<&String> = groups.keys().collect();
        assert_eq!(keys, vec!["", "aa", "zz"]);
    }
}
