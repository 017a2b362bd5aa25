//! minic-lex - Lexical Analyzer for the minic language
//!
//! This crate turns a stream of characters into a stream of tokens for the
//! minic parser. Malformed input never stops the scan: it is recorded in a
//! [`Handler`](minic_util::Handler) and the lexer moves on to the next
//! token.
//!
//! # Example Usage
//!
//! ```
//! use minic_lex::{Lexer, SourceReader, SymbolTable, TokenKind};
//! use minic_util::Handler;
//!
//! let handler = Handler::new();
//! let mut symbols = SymbolTable::new();
//! let mut lexer = Lexer::new(
//!     SourceReader::from_str("if x $ge 10 then y <- \"big\";"),
//!     &handler,
//!     &mut symbols,
//! );
//!
//! let first = lexer.next_token();
//! assert_eq!(first.kind(), TokenKind::Id);
//! assert!(first.is_reserved());
//!
//! // The lexer is also an iterator over the remaining tokens
//! let rest: Vec<_> = lexer.map(|t| t.kind()).collect();
//! assert_eq!(rest[1], TokenKind::Relop);
//! assert!(!handler.has_errors());
//! ```
//!
//! # Module Structure
//!
//! - [`source`] - Character sources with one character of pushback
//! - [`charclass`] - ASCII character classification
//! - [`token`] - Token type definitions
//! - [`symbol_table`] - Identifier table and reserved words
//! - [`lexer`] - Main lexer implementation
//!
//! # Token Categories
//!
//! | Kind | Lexemes |
//! |------|---------|
//! | `ARIT_AS` | `+` `-` |
//! | `ARIT_MD` | `*` `/` |
//! | `TERM` | `;` |
//! | `L_PAR`, `R_PAR` | `(` `)` |
//! | `LITERAL` | `"any text on one line"` |
//! | `RELOP` | `$lt` `$gt` `$ge` `$le` `$eq` `$df` |
//! | `ASSIGN` | `<-` |
//! | `NUM_INT` | `42`, `3E+10` |
//! | `NUM_FLOAT` | `4.8`, `3.10E+10` |
//! | `ID` | `[A-Za-z_][A-Za-z0-9_]*`, reserved words included |
//! | `EOF` | end of input |
//!
//! Comments are written `{# ... #}` and produce no token.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod charclass;
pub mod lexer;
pub mod source;
pub mod symbol_table;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use lexer::{Lexer, PROCESSING_ERROR_MARKER};
pub use source::{CharSource, SourceReader};
pub use symbol_table::{SymbolTable, RESERVED_WORDS};
pub use token::{Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;
    use minic_util::{ErrorKind, Handler};

    /// Helper to collect all tokens from source, EOF excluded.
    fn lex_all(source: &str) -> (Vec<Token>, Handler) {
        let handler = Handler::new();
        let mut symbols = SymbolTable::new();
        let tokens: Vec<_> = Lexer::new(SourceReader::from_str(source), &handler, &mut symbols).collect();
        (tokens, handler)
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(Token::kind).collect()
    }

    #[test]
    fn test_small_program() {
        let source = r#"
            {# sum the first n numbers #}
            program sum;
            declare n int;
            declare total int;
            begin
                read(n);
                total <- 0;
                while n $gt 0 do
                begin
                    total <- total + n;
                    n <- n - 1
                end;
                write("total:");
                write(total)
            end
        "#;
        let (tokens, handler) = lex_all(source);
        assert!(!handler.has_errors(), "{:?}", handler.diagnostics());

        let reserved: Vec<_> = tokens
            .iter()
            .filter(|t| t.is_reserved())
            .map(Token::lexeme)
            .collect();
        assert_eq!(
            reserved,
            vec![
                "program", "declare", "int", "declare", "int", "begin", "read", "while", "do",
                "begin", "end", "write", "write", "end"
            ]
        );

        let totals: Vec<_> = tokens.iter().filter(|t| t.lexeme() == "total").collect();
        assert_eq!(totals.len(), 5);
        assert!(totals.iter().all(|t| t.symbol() == totals[0].symbol()));

        assert!(tokens
            .iter()
            .any(|t| t.kind() == TokenKind::Literal && t.lexeme() == "\"total:\""));
    }

    #[test]
    fn test_expression_kinds() {
        let (tokens, _) = lex_all("a <- (b + 2.5) * c / 4E+2;");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Id,
                TokenKind::Assign,
                TokenKind::LParen,
                TokenKind::Id,
                TokenKind::ArithAdditive,
                TokenKind::NumFloat,
                TokenKind::RParen,
                TokenKind::ArithMultiplicative,
                TokenKind::Id,
                TokenKind::ArithMultiplicative,
                TokenKind::NumInt,
                TokenKind::Term,
            ]
        );
    }

    #[test]
    fn test_error_recovery_continues() {
        let (tokens, handler) = lex_all("x @ <y \"open\n$ 1.;\nz");
        assert_eq!(kinds(&tokens), vec![TokenKind::Id, TokenKind::Term, TokenKind::Id]);
        assert_eq!(tokens[2].line(), 3);

        let messages: Vec<_> = handler.diagnostics().into_iter().map(|d| d.message).collect();
        assert_eq!(
            messages,
            vec![
                "invalid character",
                "invalid operator",
                "unterminated literal",
                "invalid relational operator, expected $lt|$gt|$ge|$le|$eq|$df",
                "invalid float literal, expected a digit to finish the number",
            ]
        );
        assert_eq!(handler.count_of(ErrorKind::Lexical), 5);
    }

    #[test]
    fn test_line_column_tracking() {
        let (tokens, _) = lex_all("a\n  bb $lt\n\n   \"s\"");
        let positions: Vec<_> = tokens.iter().map(|t| (t.line(), t.column())).collect();
        assert_eq!(positions, vec![(1, 1), (2, 3), (2, 6), (4, 4)]);
    }

    #[test]
    fn test_empty_source() {
        let (tokens, handler) = lex_all("");
        assert!(tokens.is_empty());
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_whitespace_only() {
        let (tokens, handler) = lex_all("  \t\n\r\n\x0B\x0C\x1F  ");
        assert!(tokens.is_empty());
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_comments_only() {
        let (tokens, handler) = lex_all("{# one #}\n{# two\n lines #}");
        assert!(tokens.is_empty());
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_separate_runs_are_isolated() {
        let (first, first_handler) = lex_all("@ alpha");
        let (second, second_handler) = lex_all("beta");
        assert_eq!(first_handler.error_count(), 1);
        assert!(!second_handler.has_errors());
        // Each table numbers its own identifiers
        assert_eq!(first[0].symbol(), second[0].symbol());
    }
}
