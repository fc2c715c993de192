// src/constants.rs

/// Template applied when no template file is configured.
pub const DEFAULT_TEMPLATE: &str =
    "\n\n=== START: {filename} ===\n\n{content}\n\n=== END: {filename} ===\n\n";

/// Placeholder substituted with a file's display path.
pub const PLACEHOLDER_FILENAME: &str = "filename";

/// Placeholder substituted with a file's content.
pub const PLACEHOLDER_CONTENT: &str = "content";

/// Default separator between the output prefix and the rest of a synthetic filename.
pub const DEFAULT_PREFIX_SEPARATOR: &str = "___";

/// Default stand-in for the path separator inside grouped output filenames.
pub const DEFAULT_DIR_SEPARATOR: &str = "__";

/// Group key and filename stem used for files directly under a traversal root.
pub const ROOT_GROUP_STEM: &str = "root";

/// Suffix appended to grouped-split output filenames.
pub const GROUP_FILE_SUFFIX: &str = ".txt";

/// Directory names pruned from traversal by default.
///
/// Note: `*.egg-info` is matched literally like every other entry, so it
/// never actually excludes anything. It is kept for parity with the
/// historical default list.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    ".venv",
    "venv",
    "env",
    "__pycache__",
    "build",
    "dist",
    "*.egg-info",
    "node_modules",
    ".idea",
    ".vscode",
    ".DS_Store",
    ".cache",
    ".pytest_cache",
    ".mypy_cache",
    ".tox",
    "target",
    "vendor",
];
