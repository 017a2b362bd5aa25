//! Diagnostic kinds and color configuration.
//!
//! Every diagnostic the front end records is an error of one of two kinds:
//! a malformed token shape ([`ErrorKind::Lexical`]) or a failure to read the
//! source at all ([`ErrorKind::Processing`]).
//!
//! # Examples
//!
//! ```
//! use minic_util::diagnostic::ErrorKind;
//!
//! assert_eq!(format!("{}", ErrorKind::Lexical), "lexical error");
//! assert!(ErrorKind::Processing.is_fatal());
//! ```

use serde::Serialize;
use std::fmt;

/// Diagnostic kind
///
/// The kind decides how the scanner reacts after recording the diagnostic:
/// lexical errors discard the current lexeme and scanning resumes, processing
/// errors end the scan with an EOF token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Malformed token: bad character, unterminated literal or comment,
    /// malformed relational operator, assignment or number.
    Lexical,
    /// The source could not be read.
    Processing,
}

impl ErrorKind {
    /// Returns true if scanning cannot continue after this kind of error
    #[inline]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, ErrorKind::Processing)
    }

    /// Returns the canonical name for this kind
    ///
    /// # Examples
    ///
    /// ```
    /// use minic_util::diagnostic::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::Lexical.name(), "lexical error");
    /// assert_eq!(ErrorKind::Processing.name(), "processing error");
    /// ```
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            ErrorKind::Lexical => "lexical error",
            ErrorKind::Processing => "processing error",
        }
    }

    /// Returns the ANSI color code for this kind
    #[inline]
    pub const fn color_code(&self) -> &'static str {
        match self {
            ErrorKind::Lexical => "31",    // Red
            ErrorKind::Processing => "35", // Magenta
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Color configuration for diagnostic rendering
///
/// # Examples
///
/// ```
/// use minic_util::diagnostic::ColorConfig;
///
/// assert!(ColorConfig::Always.use_color(false));
/// assert!(!ColorConfig::Never.use_color(true));
/// assert!(ColorConfig::Auto.use_color(true));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorConfig {
    /// Automatically detect terminal color support
    #[default]
    Auto,
    /// Always use colors, even in pipes
    Always,
    /// Never use colors
    Never,
}

impl ColorConfig {
    /// Returns true if colors should be used for the given environment
    pub fn use_color(&self, is_tty: bool) -> bool {
        match self {
            ColorConfig::Auto => is_tty,
            ColorConfig::Always => true,
            ColorConfig::Never => false,
        }
    }

    /// Wraps `text` in the ANSI escape for `code` when `enabled`.
    pub fn paint(enabled: bool, code: &str, text: &str) -> String {
        if enabled {
            format!("\x1b[1;{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }
}
