// src/cli.rs

use crate::constants::{DEFAULT_DIR_SEPARATOR, DEFAULT_PREFIX_SEPARATOR};
use clap::Parser;

/// Concatenates files through a text template.
///
/// catfiles takes either an explicit file list or one or more directory
/// roots, renders every matching file through a template with `{filename}`
/// and `{content}` placeholders, and writes the result to a single stream
/// or to synthetic per-file/per-directory output files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CatCli {
    /// Input files to concatenate. Ignored when --dirs is given.
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    // --- Input Selection ---
    /// Scan these directory roots recursively instead of using an explicit file list.
    #[arg(short = 'd', long = "dirs", value_name = "DIR", num_args = 1..)]
    pub dirs: Option<Vec<String>>,

    /// Include only files whose names end with these extensions (a missing leading dot is added, repeatable).
    #[arg(short = 'e', long = "ext", value_name = "EXT", num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    /// Additional directory names to exclude from the walk (added to the built-in defaults).
    #[arg(long = "omit-dirs", value_name = "DIR", num_args = 1..)]
    pub omit_dirs: Option<Vec<String>>,

    // --- Output ---
    /// Write output to this file instead of stdout; in split modes this is the output prefix.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<String>,

    /// Template file containing the {filename} and {content} placeholders.
    #[arg(short = 't', long = "template", value_name = "FILE")]
    pub template: Option<String>,

    /// Write one synthetic output file per input file. Requires --output.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub split: bool,

    /// Group split output into one file per parent directory. Requires --split.
    #[arg(short = 'g', long = "group-dirs", action = clap::ArgAction::SetTrue)]
    pub group_dirs: bool,

    // --- Separator Overrides ---
    /// Separator between the output prefix and the rest of a synthetic filename.
    #[arg(long = "prefix-separator", value_name = "SEP", default_value = DEFAULT_PREFIX_SEPARATOR)]
    pub prefix_separator: String,

    /// Stand-in for the path separator inside grouped output filenames.
    #[arg(long = "dir-separator", value_name = "SEP", default_value = DEFAULT_DIR_SEPARATOR)]
    pub dir_separator: String,
}

/// Lists files matching an extension allow-list.
///
/// lsfiles walks the given roots (default: the current directory) with the
/// same exclusion pruning as catfiles and prints the matching paths,
/// sorted by extension and then by path, space-joined on a single line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct LsCli {
    /// Directory roots to scan.
    #[arg(value_name = "ROOT", default_value = ".")]
    pub roots: Vec<String>,

    /// Extensions to match (a missing leading dot is added, repeatable).
    #[arg(short = 'e', long = "extensions", value_name = "EXT", num_args = 1.., required = true)]
    pub extensions: Vec<String>,

    /// Additional directory names to exclude from the walk (added to the built-in defaults).
    #[arg(short = 'o', long = "omit-dirs", value_name = "DIR", num_args = 1..)]
    pub omit_dirs: Option<Vec<String>>,
}
