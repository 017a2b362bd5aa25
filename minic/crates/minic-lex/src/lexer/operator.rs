//! Relational and assignment operator lexing.
//!
//! Relational operators are spelled `$lt`, `$gt`, `$ge`, `$le`, `$eq` and
//! `$df`. Assignment is `<-`.

use minic_util::{DiagnosticCode, SourceResult};

use crate::source::CharSource;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a, S: CharSource> Lexer<'a, S> {
    /// Lexes a relational operator whose `$` was just consumed.
    ///
    /// End of input after the selector still yields a `RELOP` token
    /// carrying the characters read so far. A `$` that ends the input is
    /// dropped without a diagnostic.
    pub(crate) fn lex_relop(&mut self) -> SourceResult<Option<Token>> {
        let Some(selector) = self.consume()? else {
            return Ok(None);
        };

        let accepted: &[char] = match selector {
            'l' | 'g' => &['t', 'e'],
            'e' => &['q'],
            'd' => &['f'],
            _ => {
                self.pushback();
                self.report(
                    DiagnosticCode::INVALID_RELOP,
                    "invalid relational operator, expected $lt|$gt|$ge|$le|$eq|$df",
                );
                return Ok(None);
            },
        };

        match self.consume()? {
            None => Ok(Some(self.emit(TokenKind::Relop))),
            Some(c) if accepted.contains(&c) => Ok(Some(self.emit(TokenKind::Relop))),
            Some(c) => {
                self.pushback();
                let expected = accepted
                    .iter()
                    .map(|a| format!("`{}{}`", self.lexeme, a))
                    .collect::<Vec<_>>()
                    .join(" or ");
                self.report(
                    DiagnosticCode::INVALID_RELOP,
                    format!("unexpected `{}`, expected {}", c.escape_debug(), expected),
                );
                Ok(None)
            },
        }
    }

    /// Lexes an assignment whose `<` was just consumed.
    ///
    /// The character after `<` is consumed even when it is not `-`. A `<`
    /// that ends the input is dropped without a diagnostic.
    pub(crate) fn lex_assign(&mut self) -> SourceResult<Option<Token>> {
        match self.consume()? {
            Some('-') => Ok(Some(self.emit(TokenKind::Assign))),
            Some(_) => {
                self.report_with_help(
                    DiagnosticCode::INVALID_ASSIGN,
                    "invalid operator",
                    "assignment is written `<-`",
                );
                Ok(None)
            },
            None => Ok(None),
        }
    }
}
