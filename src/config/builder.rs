use super::parsing::prepare_extensions;
use super::validation::validate_options;
use super::{Config, InputSource, OutputDestination, OutputLayout};
use crate::cli::{CatCli, LsCli};
use crate::constants::{DEFAULT_DIR_SEPARATOR, DEFAULT_PREFIX_SEPARATOR};
use crate::errors::{Error, Result};
use crate::filtering::ExclusionSet;
use log::warn;
use std::path::PathBuf;

/// Fluent builder for [`Config`], shared by both CLI surfaces and library
/// callers. All flag-combination validation happens in [`build`].
///
/// # Examples
///
/// ```
/// use catfiles::config::{ConfigBuilder, OutputLayout};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ConfigBuilder::new()
///     .directory("src")
///     .extensions(["rs"])
///     .output_file("out")
///     .split(true)
///     .build()?;
/// assert_eq!(config.layout, OutputLayout::SplitPerFile);
/// # Ok(())
/// # }
/// ```
///
/// [`build`]: ConfigBuilder::build
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    pub(super) files: Vec<PathBuf>,
    pub(super) directories: Vec<PathBuf>,
    pub(super) extensions: Option<Vec<String>>,
    pub(super) omit_dirs: Vec<String>,
    pub(super) template_path: Option<PathBuf>,
    pub(super) output: Option<String>,
    pub(super) split: bool,
    pub(super) group_dirs: bool,
    pub(super) prefix_separator: String,
    pub(super) dir_separator: String,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            directories: Vec::new(),
            extensions: None,
            omit_dirs: Vec::new(),
            template_path: None,
            output: None,
            split: false,
            group_dirs: false,
            prefix_separator: DEFAULT_PREFIX_SEPARATOR.to_string(),
            dir_separator: DEFAULT_DIR_SEPARATOR.to_string(),
        }
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one explicit input file.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Adds explicit input files.
    pub fn files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Adds one directory root to scan.
    pub fn directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.directories.push(path.into());
        self
    }

    /// Adds directory roots to scan.
    pub fn directories<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.directories.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Sets the extension allow-list; dot-normalized during `build`.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    /// Adds directory names to the exclusion set.
    pub fn omit_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.omit_dirs.extend(names.into_iter().map(Into::into));
        self
    }

    /// Uses a template file instead of the built-in default.
    pub fn template_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = Some(path.into());
        self
    }

    /// Writes output to this path (or uses it as the split-mode prefix).
    pub fn output_file(mut self, path: impl Into<String>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Enables one-output-file-per-input-file mode.
    pub fn split(mut self, split: bool) -> Self {
        self.split = split;
        self
    }

    /// Groups split output by parent directory.
    pub fn group_dirs(mut self, group_dirs: bool) -> Self {
        self.group_dirs = group_dirs;
        self
    }

    /// Overrides the prefix separator (default `___`).
    pub fn prefix_separator(mut self, separator: impl Into<String>) -> Self {
        self.prefix_separator = separator.into();
        self
    }

    /// Overrides the directory separator (default `__`).
    pub fn dir_separator(mut self, separator: impl Into<String>) -> Self {
        self.dir_separator = separator.into();
        self
    }

    /// Validates the collected options and produces a [`Config`].
    ///
    /// # Errors
    /// Returns [`Error::Config`] for invalid flag combinations: no input
    /// at all, grouping without split, split without an output target, or
    /// an empty separator override.
    pub fn build(self) -> Result<Config> {
        validate_options(&self)?;

        let source = determine_source(self.files, self.directories);
        let extensions = prepare_extensions(self.extensions);
        let mut exclusions = ExclusionSet::with_defaults();
        exclusions.extend(&self.omit_dirs);
        let (output_destination, layout) =
            determine_destination(self.output, self.split, self.group_dirs);

        Ok(Config {
            source,
            extensions,
            exclusions,
            template_path: self.template_path,
            output_destination,
            layout,
            prefix_separator: self.prefix_separator,
            dir_separator: self.dir_separator,
        })
    }
}

/// Directory mode wins when both inputs are given; the explicit file list
/// is dropped with a warning.
fn determine_source(files: Vec<PathBuf>, directories: Vec<PathBuf>) -> InputSource {
    if directories.is_empty() {
        InputSource::Files(files)
    } else {
        if !files.is_empty() {
            warn!(
                "Ignoring {} explicit file argument(s) because directory roots were given.",
                files.len()
            );
        }
        InputSource::Directories(directories)
    }
}

fn determine_destination(
    output: Option<String>,
    split: bool,
    group_dirs: bool,
) -> (OutputDestination, OutputLayout) {
    let destination = match output {
        Some(path) => OutputDestination::File(PathBuf::from(path)),
        None => OutputDestination::Stdout,
    };
    let layout = if group_dirs {
        OutputLayout::SplitPerDirectory
    } else if split {
        OutputLayout::SplitPerFile
    } else {
        OutputLayout::SingleStream
    };
    (destination, layout)
}

impl TryFrom<CatCli> for Config {
    type Error = Error;

    fn try_from(cli: CatCli) -> Result<Self> {
        let mut builder = ConfigBuilder::new()
            .files(cli.files)
            .split(cli.split)
            .group_dirs(cli.group_dirs)
            .prefix_separator(cli.prefix_separator)
            .dir_separator(cli.dir_separator);
        if let Some(dirs) = cli.dirs {
            builder = builder.directories(dirs);
        }
        if let Some(extensions) = cli.extensions {
            builder = builder.extensions(extensions);
        }
        if let Some(omit_dirs) = cli.omit_dirs {
            builder = builder.omit_dirs(omit_dirs);
        }
        if let Some(output) = cli.output {
            builder = builder.output_file(output);
        }
        if let Some(template) = cli.template {
            builder = builder.template_path(template);
        }
        builder.build()
    }
}

impl TryFrom<LsCli> for Config {
    type Error = Error;

    fn try_from(cli: LsCli) -> Result<Self> {
        let mut builder = ConfigBuilder::new()
            .directories(cli.roots)
            .extensions(cli.extensions);
        if let Some(omit_dirs) = cli.omit_dirs {
            builder = builder.omit_dirs(omit_dirs);
        }
        builder.build()
    }
}
