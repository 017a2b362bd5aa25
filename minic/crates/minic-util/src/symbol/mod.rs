//! Symbol module - String interning for identifier handling.
//!
//! This module provides the [`Symbol`] type, a compact (4-byte) handle to a
//! string interned in an [`Interner`]. Two symbols from the same interner are
//! equal exactly when their strings are equal, which gives every distinct
//! identifier a stable identity for the lifetime of a compilation run.
//!
//! # Overview
//!
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `Interner::intern()` (hit) | O(1) | String already interned |
//! | `Interner::intern()` (miss) | O(1) | New string allocation |
//! | `Symbol` comparison | O(1) | Index comparison only |
//! | `Interner::resolve()` | O(1) | Indexed lookup |
//!
//! # Reserved Range
//!
//! An interner may be created with a list of reserved words. Those are
//! interned first, so their symbols occupy the indices `0..reserved_count`
//! and [`Interner::is_reserved`] is a single comparison.
//!
//! # Examples
//!
//! ```
//! use minic_util::symbol::Interner;
//!
//! let mut interner = Interner::with_reserved(["if", "while"]);
//! let a = interner.intern("count");
//! let b = interner.intern("count");
//! let kw = interner.intern("while");
//!
//! assert_eq!(a, b);
//! assert!(interner.is_reserved(kw));
//! assert!(!interner.is_reserved(a));
//! assert_eq!(interner.resolve(a), Some("count"));
//! ```

mod interner;

pub use interner::Interner;

use serde::{Serialize, Serializer};
use std::fmt;

/// Statistics about an interner for profiling
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InternerStats {
    /// Number of interned strings
    pub count: usize,
    /// Number of reserved strings at the start of the table
    pub reserved: usize,
    /// Number of cache hits (string already interned)
    pub hits: usize,
    /// Number of cache misses (new string allocation)
    pub misses: usize,
}

impl InternerStats {
    /// Get the cache hit rate (0.0 - 1.0)
    ///
    /// # Examples
    ///
    /// ```
    /// use minic_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats { count: 1, reserved: 0, hits: 3, misses: 1 };
    /// assert_eq!(stats.hit_rate(), 0.75);
    /// ```
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Get total number of intern operations
    pub fn total_operations(&self) -> usize {
        self.hits + self.misses
    }
}

/// Symbol - An interned string identifier
///
/// A `Symbol` is only meaningful together with the [`Interner`] that
/// produced it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    pub(crate) index: u32,
}

impl Symbol {
    /// Get the raw index value
    #[inline]
    pub const fn as_u32(&self) -> u32 {
        self.index
    }

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        Self {
            index: index as u32,
        }
    }

    #[inline]
    pub(crate) const fn as_usize(&self) -> usize {
        self.index as usize
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.index)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.index)
    }
}
