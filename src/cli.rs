use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "cmake-lint")]
#[command(author, version, about = "Lint CMake listfiles for style and structural mistakes")]
#[command(long_about = "A linter for CMake listfiles. Reports style and correctness problems\n\
    without running the build.\n\n\
    Exit codes:\n  \
    0 - No problems found\n  \
    1 - Violations found\n  \
    32 - Usage error (bad filter, unreadable config, no input files)")]
pub struct Cli {
    /// Files or directories to lint; directories are searched recursively
    /// for CMakeLists.txt and *.cmake files
    pub files: Vec<PathBuf>,

    /// Comma separated list of filters to apply; an empty value lists the
    /// known categories
    #[arg(long, value_name = "-X,+Y", allow_hyphen_values = true)]
    pub filter: Option<String>,

    /// Use the given configuration file instead of searching
    /// $PWD/.cmakelintrc, the platform config dir and ~/.cmakelintrc.
    /// Use the value "None" to skip configuration entirely
    #[arg(long)]
    pub config: Option<String>,

    /// Indentation should be a multiple of N spaces
    #[arg(long)]
    pub spaces: Option<usize>,

    /// Allowed line length for the project
    #[arg(long)]
    pub linelength: Option<usize>,

    /// Suppress the summary unless errors occur
    #[arg(short, long)]
    pub quiet: bool,

    /// Exclude patterns for directory scans (glob syntax, repeatable)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
