//! Identifier lexing.

use minic_util::SourceResult;

use crate::charclass::is_ident_continue;
use crate::source::CharSource;
use crate::token::Token;
use crate::Lexer;

impl<'a, S: CharSource> Lexer<'a, S> {
    /// Lexes an identifier whose first character was just consumed.
    ///
    /// The token comes from the symbol table, so repeated identifiers share
    /// a symbol and reserved words are flagged.
    pub(crate) fn lex_identifier(&mut self) -> SourceResult<Token> {
        loop {
            match self.consume()? {
                Some(c) if is_ident_continue(c) => {},
                Some(_) => {
                    self.pushback();
                    break;
                },
                None => break,
            }
        }

        Ok(self.emit_identifier())
    }
}
