//! Edge case and property tests for minic-lex
