//! Comment skipping.
//!
//! Comments open with `{#` and close with `#}`. They do not nest. The
//! character following any `#` in the body is consumed with it, so a `#}`
//! only closes when its `#` starts a pair.

use minic_util::{DiagnosticCode, SourceResult};

use crate::source::CharSource;
use crate::Lexer;

impl<'a, S: CharSource> Lexer<'a, S> {
    /// Skips a comment whose `{` was just consumed.
    ///
    /// A `{` not followed by `#` is reported as malformed, and the rest is
    /// still skipped as a comment body. Running out of input before `#}` is
    /// reported as an unfinished comment.
    pub(crate) fn skip_comment(&mut self) -> SourceResult<()> {
        match self.consume()? {
            Some('#') => {},
            Some(_) => self.report_with_help(
                DiagnosticCode::MALFORMED_COMMENT,
                "malformed comment",
                "comments are written `{# ... #}`",
            ),
            None => return self.unfinished_comment(),
        }

        loop {
            let closed = match self.consume()? {
                Some('#') => match self.consume()? {
                    Some(c) => c == '}',
                    None => return self.unfinished_comment(),
                },
                Some(_) => false,
                None => return self.unfinished_comment(),
            };
            if closed {
                return Ok(());
            }
        }
    }

    fn unfinished_comment(&self) -> SourceResult<()> {
        self.report(DiagnosticCode::UNTERMINATED_COMMENT, "comment not finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, SourceReader, SymbolTable, Token, TokenKind};
    use minic_util::{DiagnosticCode, Handler};

    fn lex_all(source: &str) -> (Vec<Token>, Handler) {
        let handler = Handler::new();
        let mut symbols = SymbolTable::new();
        let tokens = Lexer::new(SourceReader::from_str(source), &handler, &mut symbols).tokenize();
        (tokens, handler)
    }

    #[test]
    fn test_comment_is_skipped() {
        let (tokens, handler) = lex_all("{# a comment #} x");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme(), "x");
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_multiline_comment() {
        let (tokens, handler) = lex_all("{# line one\n line two\n#}\ny");
        assert_eq!(tokens[0].lexeme(), "y");
        assert_eq!(tokens[0].line(), 4);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_double_hash_spends_closing_candidate() {
        let (tokens, handler) = lex_all("{# ##} x");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "comment not finished");
    }

    #[test]
    fn test_hash_pairs_then_close() {
        let (tokens, handler) = lex_all("{# ## ###} ;");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind(), TokenKind::Term);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_hash_at_end_of_input() {
        let (tokens, handler) = lex_all("{# open #");
        assert_eq!(tokens.len(), 1);
        assert_eq!(handler.diagnostics()[0].code, Some(DiagnosticCode::UNTERMINATED_COMMENT));
    }

    #[test]
    fn test_hash_then_other_does_not_close() {
        let (tokens, handler) = lex_all("{# #x } #} ;");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind(), TokenKind::Term);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_empty_comment() {
        let (tokens, handler) = lex_all("{##}");
        assert_eq!(tokens.len(), 1);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_opener_hash_does_not_close() {
        let (tokens, handler) = lex_all("{#}");
        assert_eq!(tokens.len(), 1);
        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "comment not finished");
    }

    #[test]
    fn test_unterminated_comment() {
        let (tokens, handler) = lex_all("x {# never closed");
        assert_eq!(tokens.len(), 2);
        assert!(tokens[1].is_eof());

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "comment not finished");
        assert_eq!(diags[0].code, Some(DiagnosticCode::UNTERMINATED_COMMENT));
        assert_eq!(diags[0].column(), 3);
    }

    #[test]
    fn test_brace_at_end_of_input() {
        let (tokens, handler) = lex_all("{");
        assert_eq!(tokens.len(), 1);
        assert_eq!(handler.diagnostics()[0].code, Some(DiagnosticCode::UNTERMINATED_COMMENT));
    }

    #[test]
    fn test_malformed_comment_still_skips_body() {
        let (tokens, handler) = lex_all("{ body #} z");
        assert_eq!(tokens[0].lexeme(), "z");

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "malformed comment");
        assert_eq!(diags[0].lexeme, "{ ");
        assert_eq!(diags[0].code, Some(DiagnosticCode::MALFORMED_COMMENT));
        assert_eq!(diags[0].helps, vec!["comments are written `{# ... #}`".to_string()]);
    }
}
