//! String literal lexing.
//!
//! Literals are delimited by `"` and may not span lines. There are no
//! escape sequences.

use minic_util::{DiagnosticCode, SourceResult};

use crate::source::CharSource;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a, S: CharSource> Lexer<'a, S> {
    /// Lexes a literal whose opening `"` was just consumed.
    ///
    /// The token lexeme keeps both quotes. A newline before the closing
    /// quote is given back to the source and the literal is reported as
    /// unterminated, as is running out of input.
    pub(crate) fn lex_literal(&mut self) -> SourceResult<Option<Token>> {
        loop {
            match self.consume()? {
                Some('"') => return Ok(Some(self.emit(TokenKind::Literal))),
                Some('\n') => {
                    self.pushback();
                    break;
                },
                Some(_) => {},
                None => break,
            }
        }

        self.report(DiagnosticCode::UNTERMINATED_LITERAL, "unterminated literal");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, SourceReader, SymbolTable, Token, TokenKind};
    use minic_util::span::Position;
    use minic_util::{DiagnosticCode, Handler};

    fn lex_all(source: &str) -> (Vec<Token>, Handler) {
        let handler = Handler::new();
        let mut symbols = SymbolTable::new();
        let tokens = Lexer::new(SourceReader::from_str(source), &handler, &mut symbols).tokenize();
        (tokens, handler)
    }

    #[test]
    fn test_simple_literal() {
        let (tokens, handler) = lex_all("\"hello\"");
        assert_eq!(tokens[0].kind(), TokenKind::Literal);
        assert_eq!(tokens[0].lexeme(), "\"hello\"");
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_empty_literal() {
        let (tokens, _) = lex_all("\"\"");
        assert_eq!(tokens[0].lexeme(), "\"\"");
    }

    #[test]
    fn test_literal_keeps_inner_symbols() {
        let (tokens, handler) = lex_all("\"a {# $xx <y @\" ;");
        assert_eq!(tokens[0].lexeme(), "\"a {# $xx <y @\"");
        assert_eq!(tokens[1].kind(), TokenKind::Term);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_unterminated_at_newline() {
        let (tokens, handler) = lex_all("\"hello\nx");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme(), "x");
        assert_eq!(tokens[0].position(), Position::new(2, 1));

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "unterminated literal");
        assert_eq!(diags[0].lexeme, "\"hello");
        assert_eq!(diags[0].code, Some(DiagnosticCode::UNTERMINATED_LITERAL));
    }

    #[test]
    fn test_unterminated_at_eof() {
        let (tokens, handler) = lex_all("  \"hello");
        assert_eq!(tokens.len(), 1);

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].lexeme, "\"hello");
        assert_eq!(diags[0].position, Position::new(1, 3));
    }
}
