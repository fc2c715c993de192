// src/config/validation.rs

use super::ConfigBuilder;
use crate::errors::ConfigError;

/// Validates combinations of options that clap cannot easily express.
///
/// Rules:
/// 1. At least one input (explicit file or directory root) is required.
/// 2. `--group-dirs` only makes sense on top of `--split`.
/// 3. `--split` needs `--output` to supply the synthetic filename prefix.
/// 4. Separator overrides must be non-empty; an empty separator would be
///    found inside every path and reject the entire input.
pub(super) fn validate_options(builder: &ConfigBuilder) -> Result<(), ConfigError> {
    if builder.files.is_empty() && builder.directories.is_empty() {
        return Err(ConfigError::InvalidValue {
            option: "input".to_string(),
            reason: "at least one input file or directory root is required".to_string(),
        });
    }

    if builder.group_dirs && !builder.split {
        return Err(ConfigError::MissingDependency {
            option: "--group-dirs".to_string(),
            required: "--split".to_string(),
        });
    }

    if builder.split && builder.output.is_none() {
        return Err(ConfigError::MissingDependency {
            option: "--split".to_string(),
            required: "--output <PATH>".to_string(),
        });
    }

    if builder.prefix_separator.is_empty() {
        return Err(ConfigError::InvalidValue {
            option: "--prefix-separator".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    if builder.dir_separator.is_empty() {
        return Err(ConfigError::InvalidValue {
            option: "--dir-separator".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    Ok(())
}
