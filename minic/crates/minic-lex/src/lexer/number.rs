//! Number literal lexing.
//!
//! This module handles integer and decimal literals:
//!
//! ```text
//! NUM_INT   = digit+ ( 'E' '+' digit* )?
//! NUM_FLOAT = digit+ '.' digit+ ( 'E' '+' digit* )?
//! ```
//!
//! End of input terminates a number like any other non-digit.

use minic_util::{DiagnosticCode, SourceResult};

use crate::charclass::is_digit;
use crate::source::CharSource;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a, S: CharSource> Lexer<'a, S> {
    /// Lexes a number whose first digit was just consumed.
    ///
    /// # Returns
    ///
    /// A `NUM_INT` or `NUM_FLOAT` token, or `None` after reporting a
    /// malformed fraction or exponent.
    pub(crate) fn lex_number(&mut self) -> SourceResult<Option<Token>> {
        let mut kind = TokenKind::NumInt;

        let mut c = self.lookahead()?;
        while is_digit(c) {
            c = self.lookahead()?;
        }

        if c == '.' {
            c = self.lookahead()?;
            if !is_digit(c) {
                self.pushback();
                self.report(
                    DiagnosticCode::INVALID_NUMBER,
                    "invalid float literal, expected a digit to finish the number",
                );
                return Ok(None);
            }
            while is_digit(c) {
                c = self.lookahead()?;
            }
            kind = TokenKind::NumFloat;
        }

        if c == 'E' {
            c = self.lookahead()?;
            if c != '+' {
                self.pushback();
                let message = match kind {
                    TokenKind::NumFloat => "invalid float literal, expected `+` after `E`".to_string(),
                    _ => format!("invalid integer literal, expected `+` after `{}`", self.lexeme),
                };
                self.report(DiagnosticCode::INVALID_NUMBER, message);
                return Ok(None);
            }

            c = self.lookahead()?;
            while is_digit(c) {
                c = self.lookahead()?;
            }
        }

        self.pushback();
        Ok(Some(self.emit(kind)))
    }
}
