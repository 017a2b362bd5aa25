//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch loop and lookahead primitives
//! - `identifier` - Identifier lexing through the symbol table
//! - `number` - Integer and decimal literal lexing
//! - `string` - String literal lexing
//! - `operator` - Relational and assignment operator lexing
//! - `comment` - Comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::{Lexer, PROCESSING_ERROR_MARKER};
