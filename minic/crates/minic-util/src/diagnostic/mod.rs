//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides the structured [`Diagnostic`] record and the
//! [`Handler`] that collects them. The handler is an append-only sink: it
//! never fails, never halts the caller, and preserves insertion order so
//! error reports are deterministic.
//!
//! # Examples
//!
//! ## Recording directly
//!
//! ```
//! use minic_util::diagnostic::{ErrorKind, Handler};
//! use minic_util::span::Position;
//!
//! let handler = Handler::new();
//! handler.record(ErrorKind::Lexical, "@", "invalid character", Position::new(1, 1));
//!
//! if handler.has_errors() {
//!     eprintln!("Compilation failed");
//! }
//! ```
//!
//! ## Using the fluent builder API
//!
//! ```
//! use minic_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
//! use minic_util::span::Position;
//!
//! let diag = DiagnosticBuilder::lexical("invalid operator")
//!     .lexeme("<x")
//!     .at(Position::new(4, 9))
//!     .code(DiagnosticCode::INVALID_ASSIGN)
//!     .build();
//! assert_eq!(diag.to_string(), "lexical error[E0006]: invalid operator at 4:9 near `<x`");
//! ```

mod builder;
mod codes;
mod level;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use level::{ColorConfig, ErrorKind};

use crate::span::Position;
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;

/// A structured compiler diagnostic
///
/// Diagnostics have no identity beyond their insertion order in the
/// [`Handler`] that recorded them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Diagnostic kind
    pub kind: ErrorKind,
    /// The offending lexeme as accumulated when the error was detected
    pub lexeme: String,
    /// Main diagnostic message
    pub message: String,
    /// Position of the first character of the lexeme
    pub position: Position,
    /// Optional diagnostic code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(
        kind: ErrorKind,
        lexeme: impl Into<String>,
        message: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            message: message.into(),
            position,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Line of the offending lexeme
    #[inline]
    pub fn line(&self) -> u64 {
        self.position.line
    }

    /// Column of the offending lexeme
    #[inline]
    pub fn column(&self) -> u64 {
        self.position.column
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {} at {}", self.message, self.position)?;
        if !self.lexeme.is_empty() {
            write!(f, " near `{}`", self.lexeme.escape_debug())?;
        }
        Ok(())
    }
}

/// Handler for collecting diagnostics
///
/// The `Handler` is an append-only sink owned by one compilation run and
/// passed by reference to the phases that report into it. Recording takes
/// `&self`, so a phase may hold a shared reference while the driver inspects
/// the diagnostics gathered so far.
///
/// # Examples
///
/// ```
/// use minic_util::diagnostic::{ErrorKind, Handler};
/// use minic_util::span::Position;
///
/// let handler = Handler::new();
/// handler.record(ErrorKind::Lexical, "\"abc", "unterminated literal", Position::new(2, 1));
/// assert_eq!(handler.error_count(), 1);
/// assert_eq!(handler.diagnostics()[0].line(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Record a diagnostic from its parts
    pub fn record(
        &self,
        kind: ErrorKind,
        lexeme: impl Into<String>,
        message: impl Into<String>,
        position: Position,
    ) {
        self.emit_diagnostic(Diagnostic::new(kind, lexeme, message, position));
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any diagnostics have been recorded
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Get the number of recorded diagnostics
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Get the number of diagnostics of one kind
    pub fn count_of(&self, kind: ErrorKind) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.kind == kind)
            .count()
    }

    /// Get all diagnostics, in insertion order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Consume the handler, returning its diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }
}
