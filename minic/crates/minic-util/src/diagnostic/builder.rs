//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for showing the
//! offending source line under a rendered diagnostic.

use super::{Diagnostic, DiagnosticCode, ErrorKind, Handler};
use crate::span::Position;

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic and the range of
/// columns to underline.
///
/// # Examples
///
/// ```
/// use minic_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("x <- $xy;", 1, 6, 8, Some("here"));
/// let text = snippet.format();
/// assert!(text.contains("x <- $xy;"));
/// assert!(text.contains("^^ here"));
/// ```
#[derive(Clone, Debug)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: u64,
    /// Column where the issue starts (1-based)
    pub start_column: u64,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: u64,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: u64,
        start_column: u64,
        end_column: u64,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Create a snippet underlining `width` characters starting at `position`
    pub fn at(line: impl Into<String>, position: Position, width: u64) -> Self {
        Self {
            line: line.into(),
            line_number: position.line,
            start_column: position.column,
            end_column: position.column + width.max(1),
            label: None,
        }
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Returns the source line with a gutter, and a caret line underneath.
    /// Tabs before the caret are preserved so the caret lines up.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1) as usize;
        for c in self.line.chars().take(underline_start) {
            result.push(if c == '\t' { '\t' } else { ' ' });
        }
        // Line may be shorter than the column (diagnostic at end of input)
        let missing = underline_start.saturating_sub(self.line.chars().count());
        result.extend(std::iter::repeat(' ').take(missing));

        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.extend(std::iter::repeat('^').take(underline_len as usize));

        if let Some(ref label) = self.label {
            result.push_str(&format!(" {}", label));
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use minic_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
/// use minic_util::span::Position;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::lexical("unterminated literal")
///     .lexeme("\"abc")
///     .at(Position::new(2, 4))
///     .code(DiagnosticCode::UNTERMINATED_LITERAL)
///     .emit(&handler);
///
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct DiagnosticBuilder {
    kind: ErrorKind,
    message: String,
    lexeme: String,
    position: Position,
    code: Option<DiagnosticCode>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            lexeme: String::new(),
            position: Position::DUMMY,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Create a builder for a lexical error
    pub fn lexical(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Lexical, message)
    }

    /// Create a builder for a processing error
    pub fn processing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Processing, message)
    }

    /// Set the offending lexeme
    pub fn lexeme(mut self, lexeme: impl Into<String>) -> Self {
        self.lexeme = lexeme.into();
        self
    }

    /// Set the position of the offending lexeme
    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a help suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Finish building
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            kind: self.kind,
            lexeme: self.lexeme,
            message: self.message,
            position: self.position,
            code: self.code,
            helps: self.helps,
        }
    }

    /// Build and record into `handler`
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_snippet_new() {
        let snippet = SourceSnippet::new("x <- 1;", 1, 3, 5, Some("assign"));
        assert_eq!(snippet.line, "x <- 1;");
        assert_eq!(snippet.line_number, 1);
        assert_eq!(snippet.start_column, 3);
        assert_eq!(snippet.end_column, 5);
        assert_eq!(snippet.label, Some("assign".to_string()));
    }

    #[test]
    fn test_source_snippet_at() {
        let snippet = SourceSnippet::at("a # b", Position::new(7, 3), 0);
        assert_eq!(snippet.line_number, 7);
        assert_eq!(snippet.start_column, 3);
        assert_eq!(snippet.end_column, 4);
    }

    #[test]
    fn test_source_snippet_format_caret_position() {
        let snippet = SourceSnippet::at("a # b", Position::new(1, 3), 1);
        let formatted = snippet.format();
        let caret_line = formatted.lines().nth(1).unwrap();
        assert_eq!(caret_line, "    |   ^");
    }

    #[test]
    fn test_source_snippet_format_keeps_tabs() {
        let snippet = SourceSnippet::at("\t@", Position::new(1, 2), 1);
        let formatted = snippet.format();
        let caret_line = formatted.lines().nth(1).unwrap();
        assert_eq!(caret_line, "    | \t^");
    }

    #[test]
    fn test_source_snippet_with_label() {
        let snippet = SourceSnippet::at("x", Position::START, 1).with_label("here");
        assert!(snippet.format().ends_with("^ here"));
    }

    #[test]
    fn test_builder_lexical() {
        let diag = DiagnosticBuilder::lexical("invalid character")
            .lexeme("@")
            .at(Position::new(1, 2))
            .build();

        assert_eq!(diag.kind, ErrorKind::Lexical);
        assert_eq!(diag.message, "invalid character");
        assert_eq!(diag.lexeme, "@");
        assert_eq!(diag.position, Position::new(1, 2));
        assert_eq!(diag.code, None);
    }

    #[test]
    fn test_builder_processing() {
        let diag = DiagnosticBuilder::processing("error reading source")
            .code(DiagnosticCode::SOURCE_UNREADABLE)
            .build();

        assert_eq!(diag.kind, ErrorKind::Processing);
        assert_eq!(diag.code, Some(DiagnosticCode::SOURCE_UNREADABLE));
        assert!(diag.lexeme.is_empty());
    }

    #[test]
    fn test_builder_helps() {
        let diag = DiagnosticBuilder::lexical("invalid operator")
            .help("assignment is written `<-`")
            .build();
        assert_eq!(diag.helps, vec!["assignment is written `<-`"]);
    }
}
