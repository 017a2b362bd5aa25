//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the dispatch loop and the
//! lookahead primitives the recognizers are built on.

use minic_util::span::Position;
use minic_util::{DiagnosticBuilder, DiagnosticCode, Handler, SourceResult};
use tracing::{debug, trace};

use crate::charclass::{is_digit, is_ident_start, is_whitespace};
use crate::source::CharSource;
use crate::symbol_table::SymbolTable;
use crate::token::{Token, TokenKind};

/// Lexeme of the EOF token returned when the source could not be read.
pub const PROCESSING_ERROR_MARKER: &str = "processing error";

/// Lexer for the minic language.
///
/// The lexer pulls characters from a [`CharSource`], records malformed input
/// in a [`Handler`] and hands identifiers to a [`SymbolTable`]. Both are
/// borrowed for the lifetime of the lexer, so every run owns its own state.
///
/// # Example
///
/// ```
/// use minic_lex::{Lexer, SourceReader, SymbolTable, TokenKind};
/// use minic_util::Handler;
///
/// let handler = Handler::new();
/// let mut symbols = SymbolTable::new();
/// let mut lexer = Lexer::new(SourceReader::from_str("x <- 1;"), &handler, &mut symbols);
///
/// let kinds: Vec<_> = lexer.tokenize().iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     vec![TokenKind::Id, TokenKind::Assign, TokenKind::NumInt, TokenKind::Term, TokenKind::Eof]
/// );
/// assert!(!handler.has_errors());
/// ```
pub struct Lexer<'a, S> {
    /// Character source being scanned.
    source: S,

    /// Sink for lexical and processing diagnostics.
    handler: &'a Handler,

    /// Identifier table shared with later phases.
    symbols: &'a mut SymbolTable,

    /// Characters consumed by the current attempt.
    pub(crate) lexeme: String,

    /// Position of the first character of the current attempt.
    pub(crate) token_start: Position,

    /// The last character in `lexeme` stands in for end of input.
    synthetic: bool,

    /// A first character has been read and `token_start` marks it.
    in_attempt: bool,

    /// Set after a read failure; no further reads happen.
    halted: bool,
}

impl<'a, S: CharSource> Lexer<'a, S> {
    /// Creates a new lexer over `source`.
    pub fn new(source: S, handler: &'a Handler, symbols: &'a mut SymbolTable) -> Self {
        Self {
            source,
            handler,
            symbols,
            lexeme: String::new(),
            token_start: Position::START,
            synthetic: false,
            in_attempt: false,
            halted: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace, comments and malformed lexemes (recording a
    /// diagnostic for the latter) until a token is found. Once input is
    /// exhausted every call returns an `EOF` token.
    ///
    /// A read failure records a processing diagnostic and returns an `EOF`
    /// token whose lexeme is [`PROCESSING_ERROR_MARKER`]; the lexer is halted
    /// afterwards. Both sit at the start of the lexeme being read, or at the
    /// last character read when the failure hit between lexemes.
    pub fn next_token(&mut self) -> Token {
        if self.halted {
            return Token::eof(self.source.position());
        }

        match self.scan() {
            Ok(token) => token,
            Err(err) => {
                let position = if self.in_attempt {
                    self.token_start
                } else {
                    self.source.position()
                };
                debug!(%position, error = %err, "halting lexer");
                DiagnosticBuilder::processing(format!("error reading source: {}", err))
                    .at(position)
                    .code(DiagnosticCode::SOURCE_UNREADABLE)
                    .emit(self.handler);
                self.halted = true;
                Token::new(TokenKind::Eof, PROCESSING_ERROR_MARKER, position)
            },
        }
    }

    /// Scans every remaining token, the final `EOF` included.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Returns true once a read failure has stopped the lexer.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Position of the last character read.
    pub fn position(&self) -> Position {
        self.source.position()
    }

    /// The identifier table filled by this lexer.
    pub fn symbols(&self) -> &SymbolTable {
        self.symbols
    }

    fn scan(&mut self) -> SourceResult<Token> {
        loop {
            self.in_attempt = false;
            let first = loop {
                match self.source.next_char()? {
                    None => return Ok(Token::eof(self.source.position())),
                    Some(c) if is_whitespace(c) => continue,
                    Some(c) => break c,
                }
            };

            self.token_start = self.source.position();
            self.lexeme.clear();
            self.lexeme.push(first);
            self.synthetic = false;
            self.in_attempt = true;

            let token = match first {
                '+' | '-' => Some(self.emit(TokenKind::ArithAdditive)),
                '*' | '/' => Some(self.emit(TokenKind::ArithMultiplicative)),
                ';' => Some(self.emit(TokenKind::Term)),
                '(' => Some(self.emit(TokenKind::LParen)),
                ')' => Some(self.emit(TokenKind::RParen)),
                '{' => {
                    self.skip_comment()?;
                    None
                },
                '"' => self.lex_literal()?,
                '$' => self.lex_relop()?,
                '<' => self.lex_assign()?,
                c if is_ident_start(c) => Some(self.lex_identifier()?),
                c if is_digit(c) => self.lex_number()?,
                _ => {
                    self.report(DiagnosticCode::INVALID_CHARACTER, "invalid character");
                    None
                },
            };

            if let Some(token) = token {
                trace!(kind = %token.kind(), lexeme = token.lexeme(), position = %token.position(), "token");
                return Ok(token);
            }
        }
    }

    /// Reads one character into the lexeme. End of input is `None`.
    pub(crate) fn consume(&mut self) -> SourceResult<Option<char>> {
        let c = self.source.next_char()?;
        self.synthetic = false;
        if let Some(c) = c {
            self.lexeme.push(c);
        }
        Ok(c)
    }

    /// Like [`consume`](Self::consume), but end of input reads as a space.
    pub(crate) fn lookahead(&mut self) -> SourceResult<char> {
        match self.consume()? {
            Some(c) => Ok(c),
            None => {
                self.lexeme.push(' ');
                self.synthetic = true;
                Ok(' ')
            },
        }
    }

    /// Gives back the last consumed character.
    ///
    /// Must follow a `consume` that returned a character, or a `lookahead`.
    pub(crate) fn pushback(&mut self) {
        if !self.synthetic {
            self.source.unread();
        }
        self.synthetic = false;
        self.lexeme.pop();
    }

    /// Token of `kind` spelled by the current lexeme.
    pub(crate) fn emit(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.lexeme.as_str(), self.token_start)
    }

    /// Hands the current lexeme to the symbol table.
    pub(crate) fn emit_identifier(&mut self) -> Token {
        self.symbols.intern_identifier(&self.lexeme, self.token_start)
    }

    /// Records a lexical error for the current lexeme.
    pub(crate) fn report(&self, code: DiagnosticCode, message: impl Into<String>) {
        self.lexical_error(code, message.into()).emit(self.handler);
    }

    /// Like [`report`](Self::report), with a hint on the correct spelling.
    pub(crate) fn report_with_help(
        &self,
        code: DiagnosticCode,
        message: impl Into<String>,
        help: &str,
    ) {
        self.lexical_error(code, message.into())
            .help(help)
            .emit(self.handler);
    }

    fn lexical_error(&self, code: DiagnosticCode, message: String) -> DiagnosticBuilder {
        let lexeme = if self.synthetic {
            &self.lexeme[..self.lexeme.len() - 1]
        } else {
            self.lexeme.as_str()
        };
        debug!(%code, lexeme, position = %self.token_start, "{}", message);
        DiagnosticBuilder::lexical(message)
            .lexeme(lexeme)
            .at(self.token_start)
            .code(code)
    }
}

impl<'a, S: CharSource> Iterator for Lexer<'a, S> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
