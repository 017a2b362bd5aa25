//! Character classification for the lexer.
//!
//! Classification is ASCII-only. Characters outside ASCII are never
//! letters, digits or whitespace, so they reach the lexer's invalid
//! character path.

/// Checks if a character separates tokens.
///
/// Whitespace is space, tab, newline, vertical tab, form feed, carriage
/// return and the ASCII information separators `0x1C..=0x1F`.
///
/// # Example
///
/// ```
/// use minic_lex::charclass::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\x0B'));
/// assert!(!is_whitespace('\u{A0}'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r' | '\x1C'..='\x1F')
}

/// Checks if a character is an ASCII letter.
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Checks if a character is an ASCII decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character can start an identifier.
///
/// # Example
///
/// ```
/// use minic_lex::charclass::is_ident_start;
///
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('x'));
/// assert!(!is_ident_start('7'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || is_letter(c)
}

/// Checks if a character can continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || is_letter(c) || is_digit(c)
}
