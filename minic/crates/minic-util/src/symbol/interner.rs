//! String interner backed by an insertion-ordered hash set.
//!
//! The symbol of a string is its index in an [`IndexSet`], so resolving a
//! symbol back to text is an indexed lookup and interning never reorders
//! existing entries. Hashing uses `FxHasher`, which is fast on the short
//! ASCII identifiers the lexer produces.

use indexmap::IndexSet;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

use super::{InternerStats, Symbol};

type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;

/// Per-run string table
///
/// Strings are never removed; an interner lives as long as the compilation
/// run that owns it.
#[derive(Debug, Default)]
pub struct Interner {
    strings: FxIndexSet<Box<str>>,

    /// Number of reserved strings, interned first
    reserved_end: usize,

    hits: usize,
    misses: usize,
}

impl Interner {
    /// Create a new empty interner
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an interner whose first entries are `words`
    ///
    /// Duplicate words are interned once.
    pub fn with_reserved<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut interner = Self::new();
        for word in words {
            interner.strings.insert(word.as_ref().into());
        }
        interner.reserved_end = interner.strings.len();
        interner
    }

    /// Intern a string, returning its symbol
    ///
    /// Returns the existing symbol if `string` was seen before.
    pub fn intern(&mut self, string: &str) -> Symbol {
        if let Some(index) = self.strings.get_index_of(string) {
            self.hits += 1;
            return Symbol::from_index(index);
        }

        self.misses += 1;
        let (index, _) = self.strings.insert_full(string.into());
        Symbol::from_index(index)
    }

    /// Look up a string without interning it
    pub fn get(&self, string: &str) -> Option<Symbol> {
        self.strings.get_index_of(string).map(Symbol::from_index)
    }

    /// Get the string for a symbol
    pub fn resolve(&self, symbol: Symbol) -> Option<&str> {
        self.strings.get_index(symbol.as_usize()).map(|s| &**s)
    }

    /// Returns true if `symbol` is one of the reserved words
    #[inline]
    pub fn is_reserved(&self, symbol: Symbol) -> bool {
        symbol.as_usize() < self.reserved_end
    }

    /// Number of interned strings, reserved words included
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns true if nothing has been interned
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Get interner statistics
    pub fn stats(&self) -> InternerStats {
        InternerStats {
            count: self.strings.len(),
            reserved: self.reserved_end,
            hits: self.hits,
            misses: self.misses,
        }
    }
}
