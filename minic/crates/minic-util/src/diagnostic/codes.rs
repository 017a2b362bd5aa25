//! Diagnostic codes for categorizing lexer diagnostics.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, so users can look a code up and tooling can match on
//! it without parsing message text.
//!
//! # Examples
//!
//! ```
//! use minic_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::INVALID_CHARACTER;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1);
//! assert_eq!(code.as_str(), "E0001");
//! ```

use serde::{Serialize, Serializer};

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where `prefix` is
/// "E" and `number` is padded to four digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E0001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXICAL ERROR CODES (E0001-E0099)
    // =========================================================================

    /// E0001: Character that cannot start any token
    pub const INVALID_CHARACTER: Self = Self::new("E", 1);
    /// E0002: String literal closed by newline or end of input
    pub const UNTERMINATED_LITERAL: Self = Self::new("E", 2);
    /// E0003: `{` not followed by `#`
    pub const MALFORMED_COMMENT: Self = Self::new("E", 3);
    /// E0004: End of input inside a comment
    pub const UNTERMINATED_COMMENT: Self = Self::new("E", 4);
    /// E0005: `$` not followed by a known relational mnemonic
    pub const INVALID_RELOP: Self = Self::new("E", 5);
    /// E0006: `<` not followed by `-`
    pub const INVALID_ASSIGN: Self = Self::new("E", 6);
    /// E0007: Malformed integer or float literal
    pub const INVALID_NUMBER: Self = Self::new("E", 7);

    // =========================================================================
    // PROCESSING ERROR CODES (E0100-E0199)
    // =========================================================================

    /// E0100: The source could not be read
    pub const SOURCE_UNREADABLE: Self = Self::new("E", 100);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for DiagnosticCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_code() {
        let code = DiagnosticCode::new("E", 42);
        assert_eq!(code.prefix(), "E");
        assert_eq!(code.number(), 42);
    }

    #[test]
    fn test_as_str_pads() {
        assert_eq!(DiagnosticCode::INVALID_NUMBER.as_str(), "E0007");
        assert_eq!(DiagnosticCode::SOURCE_UNREADABLE.as_str(), "E0100");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", DiagnosticCode::INVALID_RELOP), "E0005");
    }

    #[test]
    fn test_debug() {
        assert_eq!(
            format!("{:?}", DiagnosticCode::INVALID_ASSIGN),
            "DiagnosticCode(E0006)"
        );
    }

    #[test]
    fn test_lexical_codes_are_distinct() {
        let codes = [
            DiagnosticCode::INVALID_CHARACTER,
            DiagnosticCode::UNTERMINATED_LITERAL,
            DiagnosticCode::MALFORMED_COMMENT,
            DiagnosticCode::UNTERMINATED_COMMENT,
            DiagnosticCode::INVALID_RELOP,
            DiagnosticCode::INVALID_ASSIGN,
            DiagnosticCode::INVALID_NUMBER,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
