//! minic-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate provides the small set of data holders shared by every phase of
//! the minic compiler front end:
//!
//! - [`span`] - Source positions (`line`, `column`) and source files used to
//!   render snippets under a diagnostic.
//! - [`diagnostic`] - The append-only diagnostic sink ([`Handler`]), the
//!   structured [`Diagnostic`] record and its fluent builder.
//! - [`symbol`] - String interning. A [`Symbol`] is a compact handle whose
//!   equality is identity of the underlying identifier text.
//! - [`error`] - `thiserror` error types for I/O on sources and source maps.
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. EXPLICIT STATE
//!    Nothing here is a process-wide singleton. A compilation run creates
//!    its own [`Handler`] and [`Interner`] and hands them to the lexer.
//!
//! 2. NEVER FAIL ON USER ERRORS
//!    Malformed input is recorded as a [`Diagnostic`]; only I/O on the
//!    source itself surfaces as a Rust error.
//
// ============================================================================
// POSITIONS
// ============================================================================
//
// Positions are 1-based (line, column) pairs. Line advances on '\n', column
// counts characters (not bytes) within a line. A position always names the
// first character of a lexeme.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, ErrorKind, Handler};
pub use error::{SourceError, SourceMapError, SourceResult};
pub use span::{Position, SourceFile};
pub use symbol::{Interner, InternerStats, Symbol};

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
