//! CLI argument definitions using clap.
//!
//! The default invocation audits a strings file:
//!
//! ```text
//! loccheck <SOURCE_FILE> <PROJECT_PATH> <MIN_OCCURRENCES> [OPTIONS]
//! ```
//!
//! Any positional argument may be omitted when `.loccheckrc.json` provides it.
//! The `init` subcommand writes a starter config file.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::CountStrategy;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub check: CheckArgs,
}

#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// File holding the keys to check, e.g. en.lproj/Localizable.strings
    pub source_file: Option<PathBuf>,

    /// Project directory searched for each key
    pub project_path: Option<PathBuf>,

    /// A key found this many times or fewer is reported as unused.
    /// Count every strings file inside the project (one per language) unless
    /// --extensions excludes them; with --extensions swift, 0 is usually right.
    pub min_occurrences: Option<usize>,

    /// Only search files with these extensions (comma separated, no dot)
    #[arg(long, value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Also warn about keys whose value is empty, e.g. "help.text" = "";
    #[arg(long, visible_alias = "report-empty-values")]
    pub log_empty_values: bool,

    /// Also print keys that are used, with their count
    #[arg(short, long, visible_alias = "anxious-mode")]
    pub verbose: bool,

    /// How occurrences are counted
    #[arg(long, value_enum)]
    pub strategy: Option<CountStrategy>,

    /// Exit with status 1 when at least one key is unused
    #[arg(long)]
    pub fail_on_unused: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .loccheckrc.json configuration file
    Init,
}
