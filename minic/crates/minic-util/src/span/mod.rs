//! Span module - Source location tracking.
//!
//! This module provides the [`Position`] marker attached to every token and
//! diagnostic, and [`SourceFile`] for looking up the text of a line when a
//! diagnostic is rendered.
//!
//! # Examples
//!
//! ```
//! use minic_util::span::Position;
//!
//! let pos = Position::new(3, 7);
//! assert_eq!(pos.to_string(), "3:7");
//! ```

mod source_map;

pub use source_map::SourceFile;

use serde::Serialize;
use std::fmt;

/// A 1-based `(line, column)` location in a source.
///
/// Lines advance on `'\n'`; columns count characters within a line. The
/// position of a token or diagnostic is the position of its first character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    /// Line number (1-based)
    pub line: u64,
    /// Column number (1-based)
    pub column: u64,
}

impl Position {
    /// Position reported before anything has been read.
    ///
    /// # Examples
    ///
    /// ```
    /// use minic_util::span::Position;
    ///
    /// assert_eq!(Position::DUMMY.line, 0);
    /// assert_eq!(Position::DUMMY.column, 0);
    /// ```
    pub const DUMMY: Position = Position { line: 0, column: 0 };

    /// The first character of a source.
    pub const START: Position = Position { line: 1, column: 1 };

    /// Create a new position
    #[inline]
    pub const fn new(line: u64, column: u64) -> Self {
        Self { line, column }
    }

    /// Returns the position of the character that follows `c` when `c` sits
    /// at `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use minic_util::span::Position;
    ///
    /// let pos = Position::START;
    /// assert_eq!(pos.advance('a'), Position::new(1, 2));
    /// assert_eq!(pos.advance('\n'), Position::new(2, 1));
    /// ```
    #[inline]
    pub const fn advance(self, c: char) -> Self {
        if c == '\n' {
            Self {
                line: self.line + 1,
                column: 1,
            }
        } else {
            Self {
                line: self.line,
                column: self.column + 1,
            }
        }
    }

    /// Returns true for the placeholder position.
    #[inline]
    pub const fn is_dummy(&self) -> bool {
        self.line == 0 && self.column == 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
