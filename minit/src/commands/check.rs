//! Check command implementation.
//!
//! Scans every input file and prints only diagnostics and a summary.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use tracing::info;

use crate::commands::common::{effective_color, lex_file, DiagnosticPrinter, OutputFormat};
use crate::commands::traits::{Command, Outcome};
use crate::config::Config;
use crate::error::{MinitError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files to scan.
    pub files: Vec<PathBuf>,
    /// Diagnostic format, overriding the configuration.
    pub format: Option<OutputFormat>,
    /// Disable colored diagnostics.
    pub no_color: bool,
    /// Print nothing but diagnostics.
    pub quiet: bool,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl Command for CheckCommand {
    type Args = CheckArgs;

    fn new(args: CheckArgs, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Outcome> {
        let is_tty = io::stderr().is_terminal();
        let mut out = io::stdout().lock();
        let mut err = io::stderr().lock();
        self.run(&mut out, &mut err, is_tty)
    }

    fn name() -> &'static str {
        "check"
    }
}

impl CheckCommand {
    /// Run against explicit output streams.
    pub fn run(&self, out: &mut impl Write, err: &mut impl Write, is_tty: bool) -> Result<Outcome> {
        if self.args.files.is_empty() {
            return Err(MinitError::Validation("no input files".to_string()));
        }

        let format = self.args.format.unwrap_or(self.config.format);
        let printer = DiagnosticPrinter::new(
            format,
            effective_color(self.config.color, self.args.no_color),
            is_tty,
            self.config.lexer.max_errors,
        );

        let mut outcome = Outcome::default();
        for path in &self.args.files {
            let report = lex_file(path, &self.config.lexer)?;
            info!(
                path = %path.display(),
                diagnostics = report.diagnostics.len(),
                identifiers = report.identifiers,
                "checked"
            );
            printer.print(&report, err)?;
            outcome.record(report.tokens.len(), report.diagnostics.len());
        }

        if !self.args.quiet {
            writeln!(
                out,
                "{} file(s) checked, {} diagnostic(s)",
                outcome.files, outcome.diagnostics
            )?;
        }
        Ok(outcome)
    }
}
