//! Source files for diagnostic rendering.
//!
//! The lexer never needs random access to its input. Rendering a diagnostic
//! does: it shows the offending line under the message. [`SourceFile`] keeps
//! the whole text plus precomputed line starts for that purpose.

use std::sync::Arc;

use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use minic_util::span::SourceFile;
///
/// let file = SourceFile::new("main.mc", "x <- 1;");
/// assert_eq!(file.name(), "main.mc");
/// assert_eq!(file.content(), "x <- 1;");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = Vec::new();
        line_starts.push(0);

        for (i, ch) in content.char_indices() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }

        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// # Examples
    ///
    /// ```
    /// use minic_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.mc", "line1\nline2\nline3");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get a specific source line (1-indexed), without its line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use minic_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.mc", "line1\nline2\r\nline3");
    /// assert_eq!(file.line_at(1), Some("line1"));
    /// assert_eq!(file.line_at(2), Some("line2"));
    /// assert_eq!(file.line_at(4), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = *self.line_starts.get(line - 1)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());

        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Like [`line_at`](Self::line_at), reporting out-of-range lines as errors.
    pub fn line_text(&self, line: u64) -> SourceMapResult<&str> {
        let max_lines = self.line_count();
        usize::try_from(line)
            .ok()
            .and_then(|l| self.line_at(l))
            .ok_or(SourceMapError::InvalidLineNumber {
                line: line as usize,
                max_lines,
            })
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}
