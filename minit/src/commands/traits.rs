//! Command trait for the minit CLI.
//!
//! Every subcommand is built from its arguments plus the loaded
//! configuration, then executed once.

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all minit commands implement.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// Create a new command instance.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command, returning the outcome to report.
    fn execute(&self) -> Result<Outcome>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// What a command run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Number of files scanned.
    pub files: usize,
    /// Number of tokens produced, `EOF` tokens included.
    pub tokens: usize,
    /// Number of diagnostics recorded across all files.
    pub diagnostics: usize,
}

impl Outcome {
    /// True when no diagnostic was recorded.
    pub fn is_clean(&self) -> bool {
        self.diagnostics == 0
    }

    /// Add the counts of one file.
    pub fn record(&mut self, tokens: usize, diagnostics: usize) {
        self.files += 1;
        self.tokens += tokens;
        self.diagnostics += diagnostics;
    }
}
