//! Token definitions.
//!
//! A [`Token`] is an immutable value: a [`TokenKind`], the exact characters
//! of the lexeme, and the position of its first character. Identifier tokens
//! also carry the interned [`Symbol`] that gives them their identity.

use minic_util::span::Position;
use minic_util::Symbol;
use serde::Serialize;
use std::fmt;

/// The closed set of token categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// `+` or `-`
    #[serde(rename = "ARIT_AS")]
    ArithAdditive,
    /// `*` or `/`
    #[serde(rename = "ARIT_MD")]
    ArithMultiplicative,
    /// `;`
    #[serde(rename = "TERM")]
    Term,
    /// `(`
    #[serde(rename = "L_PAR")]
    LParen,
    /// `)`
    #[serde(rename = "R_PAR")]
    RParen,
    /// A double-quoted string literal, quotes included
    #[serde(rename = "LITERAL")]
    Literal,
    /// `$lt`, `$gt`, `$ge`, `$le`, `$eq` or `$df`
    #[serde(rename = "RELOP")]
    Relop,
    /// `<-`
    #[serde(rename = "ASSIGN")]
    Assign,
    /// Integer literal, optionally with an `E+` exponent
    #[serde(rename = "NUM_INT")]
    NumInt,
    /// Decimal literal, optionally with an `E+` exponent
    #[serde(rename = "NUM_FLOAT")]
    NumFloat,
    /// Identifier or reserved word
    #[serde(rename = "ID")]
    Id,
    /// End of input
    #[serde(rename = "EOF")]
    Eof,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 12] = [
        TokenKind::ArithAdditive,
        TokenKind::ArithMultiplicative,
        TokenKind::Term,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::Literal,
        TokenKind::Relop,
        TokenKind::Assign,
        TokenKind::NumInt,
        TokenKind::NumFloat,
        TokenKind::Id,
        TokenKind::Eof,
    ];

    /// Upper-case name used in listings.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::ArithAdditive => "ARIT_AS",
            TokenKind::ArithMultiplicative => "ARIT_MD",
            TokenKind::Term => "TERM",
            TokenKind::LParen => "L_PAR",
            TokenKind::RParen => "R_PAR",
            TokenKind::Literal => "LITERAL",
            TokenKind::Relop => "RELOP",
            TokenKind::Assign => "ASSIGN",
            TokenKind::NumInt => "NUM_INT",
            TokenKind::NumFloat => "NUM_FLOAT",
            TokenKind::Id => "ID",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexical token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    line: u64,
    column: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    symbol: Option<Symbol>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    reserved: bool,
}

impl Token {
    /// Creates a token with no symbol.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line: position.line,
            column: position.column,
            symbol: None,
            reserved: false,
        }
    }

    /// Creates an identifier token bound to `symbol`.
    pub fn identifier(
        lexeme: impl Into<String>,
        position: Position,
        symbol: Symbol,
        reserved: bool,
    ) -> Self {
        Self {
            kind: TokenKind::Id,
            lexeme: lexeme.into(),
            line: position.line,
            column: position.column,
            symbol: Some(symbol),
            reserved,
        }
    }

    /// Creates an end-of-input token.
    pub fn eof(position: Position) -> Self {
        Self::new(TokenKind::Eof, "", position)
    }

    /// Same token at another position.
    pub(crate) fn relocated(&self, position: Position) -> Self {
        Self {
            line: position.line,
            column: position.column,
            ..self.clone()
        }
    }

    /// Token category.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Exact source characters of the token.
    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Line of the first character.
    #[inline]
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Column of the first character.
    #[inline]
    pub fn column(&self) -> u64 {
        self.column
    }

    /// Position of the first character.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Interned identity of an identifier token.
    #[inline]
    pub fn symbol(&self) -> Option<Symbol> {
        self.symbol
    }

    /// True for identifier tokens spelling a reserved word.
    #[inline]
    pub fn is_reserved(&self) -> bool {
        self.reserved
    }

    /// True for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.line, self.column, self.kind)?;
        if !self.lexeme.is_empty() {
            write!(f, " {}", self.lexeme)?;
        }
        Ok(())
    }
}
