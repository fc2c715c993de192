use crate::core_types::FileEntry;
use crate::errors::{io_error_with_path, Error, Result};
use crate::filtering::{matches_extension, normalize_extensions, ExclusionSet};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Walks every root depth-first, pruning excluded subtrees before they are
/// opened, and returns the merged results sorted lexicographically by path
/// string.
///
/// Only regular files are emitted (symlinks are not followed). The
/// exclusion check runs against the full path of every entry, so an
/// excluded name anywhere in a path hides the entry, files included.
pub(super) fn walk_roots(
    roots: &[PathBuf],
    extensions: Option<&[String]>,
    exclusions: &ExclusionSet,
) -> Result<Vec<FileEntry>> {
    // All roots are validated before the first one is opened.
    for root in roots {
        validate_root(root)?;
    }

    let normalized = extensions.map(normalize_extensions);
    let mut entries = Vec::new();

    for root in roots {
        debug!("Walking root: {}", root.display());
        let walker = WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| keep_entry(entry, exclusions));

        for entry in walker {
            let entry = entry.map_err(|err| walk_error(err, root))?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(exts) = normalized.as_deref() {
                let file_name = entry.file_name().to_string_lossy();
                if !matches_extension(&file_name, exts) {
                    continue;
                }
            }
            entries.push(FileEntry::new(entry.into_path()));
        }
    }

    entries.sort_by_cached_key(|entry| entry.path_str());
    debug!("Walk finished. Matching files: {}", entries.len());
    Ok(entries)
}

/// A root must exist and be a directory before any traversal begins.
fn validate_root(root: &Path) -> Result<()> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::InvalidRoot {
            path: root.display().to_string(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::InvalidRoot {
            path: root.display().to_string(),
        }),
        Err(e) => Err(io_error_with_path(e, root)),
    }
}

fn keep_entry(entry: &DirEntry, exclusions: &ExclusionSet) -> bool {
    if exclusions.is_excluded(entry.path()) {
        debug!("Pruning excluded path: {}", entry.path().display());
        false
    } else {
        true
    }
}

fn walk_error(err: walkdir::Error, root: &Path) -> Error {
    let path = err.path().unwrap_or(root).display().to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("directory walk failed"));
    Error::Io { path, source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn touch(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        File::create(path)
            .unwrap()
            .write_all(content.as_bytes())
            .unwrap();
    }

    fn names(entries: &[FileEntry]) -> Vec<String> {
        entries.iter().map(|e| e.file_name()).collect()
    }

    #[test]
    fn test_walk_filters_by_extension_and_sorts() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("b.py"), "B");
        touch(&dir.path().join("a.py"), "A");
        touch(&dir.path().join("sub/c.py"), "C");
        touch(&dir.path().join("notes.txt"), "ignored");

        let exts = vec![".py".to_string()];
        let entries = walk_roots(
            &[dir.path().to_path_buf()],
            Some(&exts),
            &ExclusionSet::empty(),
        )
        .unwrap();

        assert_eq!(names(&entries), vec!["a.py", "b.py", "c.py"]);
        // Sorted by full path string, so the nested file comes last.
        assert!(entries[2].path_str().ends_with("sub/c.py"));
    }

    #[test]
    fn test_excluded_directory_never_appears() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("keep.js"), "K");
        touch(&dir.path().join("node_modules/x.js"), "X");
        touch(&dir.path().join("nested/node_modules/deep/y.js"), "Y");

        let entries = walk_roots(
            &[dir.path().to_path_buf()],
            None,
            &ExclusionSet::with_defaults(),
        )
        .unwrap();

        assert_eq!(names(&entries), vec!["keep.js"]);
    }

    #[test]
    fn test_excluded_name_also_hides_plain_files() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("build"), "not a directory");
        touch(&dir.path().join("keep.txt"), "K");

        let entries = walk_roots(
            &[dir.path().to_path_buf()],
            None,
            &ExclusionSet::with_defaults(),
        )
        .unwrap();

        assert_eq!(names(&entries), vec!["keep.txt"]);
    }

    #[test]
    fn test_suffix_match_includes_compound_extensions() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("guide.md"), "g");
        touch(&dir.path().join("guide.old.md"), "o");
        touch(&dir.path().join("guide.mdx"), "x");

        let exts = vec![".md".to_string()];
        let entries = walk_roots(
            &[dir.path().to_path_buf()],
            Some(&exts),
            &ExclusionSet::empty(),
        )
        .unwrap();

        assert_eq!(names(&entries), vec!["guide.md", "guide.old.md"]);
    }

    #[test]
    fn test_multiple_roots_are_merged_and_sorted() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("one/z.txt"), "z");
        touch(&dir.path().join("two/a.txt"), "a");

        let entries = walk_roots(
            &[dir.path().join("two"), dir.path().join("one")],
            None,
            &ExclusionSet::empty(),
        )
        .unwrap();

        // Lexicographic on the full path string regardless of root order.
        assert!(entries[0].path_str().ends_with("one/z.txt"));
        assert!(entries[1].path_str().ends_with("two/a.txt"));
    }

    #[test]
    fn test_walk_is_deterministic_across_runs() {
        let dir = tempdir().unwrap();
        for name in ["m.rs", "a.rs", "z.rs", "sub/k.rs"] {
            touch(&dir.path().join(name), name);
        }

        let roots = [dir.path().to_path_buf()];
        let first = walk_roots(&roots, None, &ExclusionSet::empty()).unwrap();
        let second = walk_roots(&roots, None, &ExclusionSet::empty()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_root_is_fatal_before_traversal() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = walk_roots(&[missing.clone()], None, &ExclusionSet::empty()).unwrap_err();
        match err {
            Error::InvalidRoot { path } => assert!(path.contains("nope")),
            other => panic!("expected InvalidRoot, got {other:?}"),
        }
    }

    #[test]
    fn test_file_as_root_is_rejected() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.txt");
        touch(&file, "f");

        let err = walk_roots(&[file], None, &ExclusionSet::empty()).unwrap_err();
        assert!(matches!(err, Error::InvalidRoot { .. }));
    }

    #[test]
    fn test_symlinks_are_not_followed() {
        #[cfg(unix)]
        {
            let dir = tempdir().unwrap();
            touch(&dir.path().join("real.txt"), "r");
            std::os::unix::fs::symlink(
                dir.path().join("real.txt"),
                dir.path().join("link.txt"),
            )
            .unwrap();

            let entries =
                walk_roots(&[dir.path().to_path_buf()], None, &ExclusionSet::empty()).unwrap();
            assert_eq!(names(&entries), vec!["real.txt"]);
        }
    }
}
