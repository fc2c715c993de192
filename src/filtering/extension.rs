// src/filtering/extension.rs

/// Prepends a leading dot if the extension does not already carry one.
///
/// # Examples
///
/// ```
/// use catfiles::filtering::normalize_extension;
///
/// assert_eq!(normalize_extension("md"), ".md");
/// assert_eq!(normalize_extension(".md"), ".md");
/// assert_eq!(normalize_extension("tar.gz"), ".tar.gz");
/// ```
pub fn normalize_extension(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}

/// Dot-normalizes a whole allow-list, dropping empty entries.
pub fn normalize_extensions<I, S>(extensions: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extensions
        .into_iter()
        .filter(|ext| !ext.as_ref().is_empty())
        .map(|ext| normalize_extension(ext.as_ref()))
        .collect()
}

/// Checks whether `file_name` ends with one of the allowed suffixes.
///
/// The comparison is a case-sensitive suffix match on the whole filename,
/// not just the final extension segment, so a `.md` filter matches both
/// `notes.md` and `notes.old.md`. `extensions` is expected to be
/// dot-normalized; pass the output of [`normalize_extensions`].
///
/// # Examples
///
/// ```
/// use catfiles::filtering::{matches_extension, normalize_extensions};
///
/// let exts = normalize_extensions(["py", ".md"]);
/// assert!(matches_extension("a.py", &exts));
/// assert!(matches_extension("notes.old.md", &exts));
/// assert!(!matches_extension("a.rs", &exts));
/// assert!(!matches_extension("a.PY", &exts));
/// ```
pub fn matches_extension(file_name: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
}
