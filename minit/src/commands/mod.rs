//! Command modules for the minit CLI.
//!
//! Each subcommand is implemented in its own file following the pattern
//! set by the [`traits::Command`] trait.

pub mod common;
pub mod traits;

pub mod check;
pub mod lex;

// Re-export command types
pub use check::{CheckArgs, CheckCommand};
pub use lex::{LexArgs, LexCommand};
pub use traits::{Command, Outcome};
