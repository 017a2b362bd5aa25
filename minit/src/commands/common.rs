//! Common types and utilities for minit commands.
//!
//! Both commands lex files the same way and print diagnostics the same way;
//! that shared part lives here.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use minic_lex::{Lexer, SourceReader, SymbolTable, Token};
use minic_util::diagnostic::{ColorConfig, SourceSnippet};
use minic_util::{Diagnostic, SourceFile};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LexerConfig;
use crate::error::{MinitError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for tokens and diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `line:column KIND lexeme` line per token
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

// ============================================================================
// Lexing
// ============================================================================

/// Everything one lexer run produced for a file.
#[derive(Debug)]
pub struct FileReport {
    /// File that was scanned.
    pub path: PathBuf,
    /// Tokens, the final `EOF` included.
    pub tokens: Vec<Token>,
    /// Diagnostics in the order they were recorded.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of distinct identifiers.
    pub identifiers: usize,
}

/// Lex one file with its own diagnostics sink and symbol table.
pub fn lex_file(path: &Path, config: &LexerConfig) -> Result<FileReport> {
    let source = SourceReader::from_path(path).map_err(|source| MinitError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let handler = minic_util::Handler::new();
    let mut symbols = SymbolTable::with_reserved_words(&config.reserved_words);
    let tokens = Lexer::new(source, &handler, &mut symbols).tokenize();

    let stats = symbols.stats();
    debug!(
        path = %path.display(),
        tokens = tokens.len(),
        identifiers = symbols.len(),
        intern_hit_rate = stats.hit_rate(),
        "lexed file"
    );

    Ok(FileReport {
        path: path.to_path_buf(),
        tokens,
        diagnostics: handler.into_diagnostics(),
        identifiers: symbols.len(),
    })
}

// ============================================================================
// Diagnostics
// ============================================================================

/// A token or diagnostic tagged with the file it came from, for JSON output.
#[derive(Serialize)]
pub struct Tagged<'a, T> {
    file: String,
    #[serde(flatten)]
    item: &'a T,
}

impl<'a, T: Serialize> Tagged<'a, T> {
    /// Tag `item` with `path`.
    pub fn new(path: &Path, item: &'a T) -> Self {
        Self {
            file: path.display().to_string(),
            item,
        }
    }
}

/// Resolve the color setting, `--no-color` winning over the configuration.
pub fn effective_color(configured: ColorConfig, no_color: bool) -> ColorConfig {
    if no_color {
        ColorConfig::Never
    } else {
        configured
    }
}

/// Prints diagnostics in the configured format.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticPrinter {
    format: OutputFormat,
    color: bool,
    max_errors: usize,
}

impl DiagnosticPrinter {
    /// Create a printer. `max_errors == 0` prints everything.
    pub fn new(format: OutputFormat, color: ColorConfig, is_tty: bool, max_errors: usize) -> Self {
        Self {
            format,
            color: color.use_color(is_tty),
            max_errors,
        }
    }

    /// Print the diagnostics of `report` to `out`.
    pub fn print(&self, report: &FileReport, out: &mut impl Write) -> Result<()> {
        if report.diagnostics.is_empty() {
            return Ok(());
        }

        let limit = match self.max_errors {
            0 => report.diagnostics.len(),
            n => n.min(report.diagnostics.len()),
        };
        let shown = &report.diagnostics[..limit];

        match self.format {
            OutputFormat::Json => {
                for diagnostic in shown {
                    let record = Tagged::new(&report.path, diagnostic);
                    writeln!(out, "{}", serde_json::to_string(&record)?)?;
                }
            },
            OutputFormat::Text => {
                let file = std::fs::read_to_string(&report.path)
                    .ok()
                    .map(|content| SourceFile::new(report.path.display().to_string(), content));
                for diagnostic in shown {
                    writeln!(out, "{}", self.render(diagnostic, &report.path, file.as_ref()))?;
                }
                let hidden = report.diagnostics.len() - limit;
                if hidden > 0 {
                    writeln!(out, "... and {} more diagnostic(s)", hidden)?;
                }
            },
        }
        Ok(())
    }

    /// Render one diagnostic with the offending line underneath.
    pub fn render(&self, diagnostic: &Diagnostic, path: &Path, file: Option<&SourceFile>) -> String {
        let kind = diagnostic.kind;
        let mut header = ColorConfig::paint(self.color, kind.color_code(), kind.name());
        if let Some(code) = diagnostic.code {
            header.push_str(&format!("[{}]", code));
        }

        let mut text = format!(
            "{}: {}\n  --> {}:{}",
            header,
            diagnostic.message,
            path.display(),
            diagnostic.position
        );

        if let Some(line) = file.and_then(|f| f.line_text(diagnostic.line()).ok()) {
            let width = diagnostic
                .lexeme
                .lines()
                .next()
                .map_or(1, |l| l.chars().count() as u64);
            let snippet = SourceSnippet::at(line, diagnostic.position, width);
            text.push('\n');
            text.push_str(&snippet.format());
        }

        for help in &diagnostic.helps {
            text.push_str(&format!("\n  = help: {}", help));
        }
        text
    }
}
