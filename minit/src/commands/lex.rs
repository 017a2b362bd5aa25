//! Lex command implementation.
//!
//! Prints every token of every input file, followed by the diagnostics of
//! that file.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use tracing::info;

use crate::commands::common::{effective_color, lex_file, DiagnosticPrinter, OutputFormat, Tagged};
use crate::commands::traits::{Command, Outcome};
use crate::config::Config;
use crate::error::{MinitError, Result};

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Files to scan.
    pub files: Vec<PathBuf>,
    /// Output format, overriding the configuration.
    pub format: Option<OutputFormat>,
    /// Disable colored diagnostics.
    pub no_color: bool,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
    config: Config,
}

impl Command for LexCommand {
    type Args = LexArgs;

    fn new(args: LexArgs, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Outcome> {
        let is_tty = io::stderr().is_terminal();
        let mut out = io::stdout().lock();
        let mut err = io::stderr().lock();
        self.run(&mut out, &mut err, is_tty)
    }

    fn name() -> &'static str {
        "lex"
    }
}

impl LexCommand {
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
        let multiple = self.args.files.len() > 1;

        let mut outcome = Outcome::default();
        for path in &self.args.files {
            let report = lex_file(path, &self.config.lexer)?;
            info!(path = %path.display(), tokens = report.tokens.len(), "lexed");

            match format {
                OutputFormat::Text => {
                    if multiple {
                        writeln!(out, "==> {} <==", path.display())?;
                    }
                    for token in &report.tokens {
                        writeln!(out, "{}", token)?;
                    }
                },
                OutputFormat::Json => {
                    for token in &report.tokens {
                        writeln!(out, "{}", serde_json::to_string(&Tagged::new(path, token))?)?;
                    }
                },
            }

            printer.print(&report, err)?;
            outcome.record(report.tokens.len(), report.diagnostics.len());
        }

        out.flush()?;
        Ok(outcome)
    }
}
