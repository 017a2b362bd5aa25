//! Identifier table.
//!
//! The [`SymbolTable`] turns identifier lexemes into tokens. The first time a
//! lexeme is seen it is interned and the resulting token is kept; later
//! occurrences get a token with the same [`Symbol`], stamped with their own
//! position.

use std::hash::BuildHasherDefault;

use indexmap::IndexMap;
use minic_util::span::Position;
use minic_util::{Interner, InternerStats, Symbol};
use rustc_hash::FxHasher;

use crate::token::Token;

/// Reserved words of the language, interned before any identifier.
pub const RESERVED_WORDS: &[&str] = &[
    "program", "begin", "end", "declare", "int", "float", "char", "string", "if", "then", "else",
    "for", "while", "do", "read", "write", "and", "or", "not",
];

/// Identifier table for one compilation run.
///
/// # Example
///
/// ```
/// use minic_lex::symbol_table::SymbolTable;
/// use minic_lex::TokenKind;
/// use minic_util::span::Position;
///
/// let mut table = SymbolTable::new();
/// let a = table.intern_identifier("total", Position::new(1, 1));
/// let b = table.intern_identifier("total", Position::new(3, 5));
///
/// assert_eq!(a.kind(), TokenKind::Id);
/// assert_eq!(a.symbol(), b.symbol());
/// assert_eq!(b.line(), 3);
/// assert!(table.intern_identifier("while", Position::START).is_reserved());
/// ```
#[derive(Debug)]
pub struct SymbolTable {
    interner: Interner,

    /// First-occurrence token of every identifier, in order of appearance.
    entries: IndexMap<Symbol, Token, BuildHasherDefault<FxHasher>>,
}

impl SymbolTable {
    /// Creates a table preloaded with [`RESERVED_WORDS`].
    pub fn new() -> Self {
        Self::with_reserved_words(std::iter::empty::<&str>())
    }

    /// Creates a table preloaded with [`RESERVED_WORDS`] followed by `extra`.
    pub fn with_reserved_words<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra: Vec<S> = extra.into_iter().collect();
        let words = RESERVED_WORDS
            .iter()
            .copied()
            .chain(extra.iter().map(AsRef::as_ref));
        Self {
            interner: Interner::with_reserved(words),
            entries: IndexMap::default(),
        }
    }

    /// Creates a table with no reserved words.
    pub fn without_reserved_words() -> Self {
        Self {
            interner: Interner::new(),
            entries: IndexMap::default(),
        }
    }

    /// Returns the `ID` token for `lexeme` found at `position`.
    ///
    /// Idempotent per lexeme: every call with the same lexeme yields the same
    /// symbol. The token cached on first sight keeps its original position.
    pub fn intern_identifier(&mut self, lexeme: &str, position: Position) -> Token {
        let symbol = self.interner.intern(lexeme);
        if let Some(first) = self.entries.get(&symbol) {
            return first.relocated(position);
        }

        let token = Token::identifier(lexeme, position, symbol, self.interner.is_reserved(symbol));
        self.entries.insert(symbol, token.clone());
        token
    }

    /// First-occurrence token of `lexeme`, if it was scanned.
    pub fn lookup(&self, lexeme: &str) -> Option<&Token> {
        let symbol = self.interner.get(lexeme)?;
        self.entries.get(&symbol)
    }

    /// Text of a symbol.
    pub fn resolve(&self, symbol: Symbol) -> Option<&str> {
        self.interner.resolve(symbol)
    }

    /// True if `symbol` names a reserved word.
    pub fn is_reserved(&self, symbol: Symbol) -> bool {
        self.interner.is_reserved(symbol)
    }

    /// First-occurrence tokens in order of appearance.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.entries.values()
    }

    /// Number of distinct identifiers scanned.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no identifier was scanned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Statistics of the underlying interner.
    pub fn stats(&self) -> InternerStats {
        self.interner.stats()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
