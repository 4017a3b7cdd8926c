//! Command line arguments

use crate::logging::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Scan, parse and resolve a dl source, printing the results as JSON
#[derive(Debug, Clone, Parser)]
#[command(name = "dl", version)]
pub struct Cli {
    /// Source file to read
    #[arg(short, long, default_value = "main.dl")]
    pub file: PathBuf,

    /// Inline source text, used instead of --file
    #[arg(short, long, conflicts_with = "file")]
    pub eval: Option<String>,

    /// Print the token sequence
    #[arg(long)]
    pub tokens: bool,

    /// Print the syntax tree
    #[arg(long)]
    pub ast: bool,

    /// Print the symbol mapping
    #[arg(long)]
    pub symbols: bool,

    /// Write scanner and parser trace lines to stderr
    #[arg(long)]
    pub trace: bool,

    /// Diagnostic log level; overrides DL_LOG
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

impl Cli {
    /// Arguments for running `path` with default output
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            file: path.into(),
            eval: None,
            tokens: false,
            ast: false,
            symbols: false,
            trace: false,
            log_level: None,
        }
    }

    /// Which outputs to print as (tokens, ast, symbols). With no output flag
    /// set, everything is printed.
    pub fn outputs(&self) -> (bool, bool, bool) {
        if !(self.tokens || self.ast || self.symbols) {
            return (true, true, true);
        }
        (self.tokens, self.ast, self.symbols)
    }
}
