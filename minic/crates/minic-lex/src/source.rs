//! Character sources for the lexer.
//!
//! This module provides the [`CharSource`] trait the lexer pulls characters
//! from, and [`SourceReader`], a buffered implementation over any
//! [`BufRead`]. A source yields one character at a time, keeps track of the
//! line and column of the character it returned last, and can take back that
//! one character so the lexer gets a single character of lookahead.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::Path;

use minic_util::span::Position;
use minic_util::{SourceError, SourceResult};

/// A stream of characters with one character of pushback.
///
/// End of input is `Ok(None)` and is sticky: once reached, every later call
/// returns `Ok(None)` again. Failures of the underlying reader are `Err`.
pub trait CharSource {
    /// Read the next character.
    fn next_char(&mut self) -> SourceResult<Option<char>>;

    /// Give back the character returned by the last `next_char` call.
    ///
    /// The next `next_char` returns it again, and `line`/`column` go back to
    /// the character before it. Only one character can be outstanding; after
    /// end of input this does nothing.
    fn unread(&mut self);

    /// Line of the last character read (1-based).
    fn line(&self) -> u64;

    /// Column of the last character read (1-based).
    fn column(&self) -> u64;

    /// Position of the last character read.
    fn position(&self) -> Position {
        Position::new(self.line(), self.column())
    }
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn next_char(&mut self) -> SourceResult<Option<char>> {
        (**self).next_char()
    }

    fn unread(&mut self) {
        (**self).unread()
    }

    fn line(&self) -> u64 {
        (**self).line()
    }

    fn column(&self) -> u64 {
        (**self).column()
    }
}

/// A [`CharSource`] reading from a buffered reader one line at a time.
///
/// # Example
///
/// ```
/// use minic_lex::source::{CharSource, SourceReader};
///
/// let mut source = SourceReader::from_str("ab\nc");
/// assert_eq!(source.next_char().unwrap(), Some('a'));
/// assert_eq!(source.next_char().unwrap(), Some('b'));
/// source.unread();
/// assert_eq!(source.column(), 1);
/// assert_eq!(source.next_char().unwrap(), Some('b'));
/// assert_eq!(source.next_char().unwrap(), Some('\n'));
/// assert_eq!(source.next_char().unwrap(), Some('c'));
/// assert_eq!((source.line(), source.column()), (2, 1));
/// assert_eq!(source.next_char().unwrap(), None);
/// ```
pub struct SourceReader<R> {
    reader: R,

    /// Current line of input and the byte offset of the next character in it.
    buf: String,
    offset: usize,

    /// Number of lines pulled from `reader`.
    lines_read: u64,

    /// Position of the last character returned.
    mark: Position,

    /// Position of the next character not yet read from `buf`.
    next: Position,

    /// Last character returned, with the mark that preceded it.
    last: Option<(char, Position)>,

    /// Character given back by `unread`, with its position.
    pushed: Option<(char, Position)>,

    at_eof: bool,
}

impl<R: BufRead> SourceReader<R> {
    /// Creates a source over `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            offset: 0,
            lines_read: 0,
            mark: Position::DUMMY,
            next: Position::START,
            last: None,
            pushed: None,
            at_eof: false,
        }
    }

    /// Pulls the next line into `buf`. Returns false at end of input.
    fn fill(&mut self) -> SourceResult<bool> {
        if self.at_eof {
            return Ok(false);
        }

        self.buf.clear();
        self.offset = 0;
        let read = self.reader.read_line(&mut self.buf).map_err(|err| {
            if err.kind() == io::ErrorKind::InvalidData {
                SourceError::InvalidUtf8 {
                    line: self.lines_read + 1,
                }
            } else {
                SourceError::Io(err)
            }
        })?;

        if read == 0 {
            self.at_eof = true;
            return Ok(false);
        }
        self.lines_read += 1;
        Ok(true)
    }
}

impl SourceReader<BufReader<File>> {
    /// Opens the file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> SourceResult<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<'a> SourceReader<Cursor<&'a [u8]>> {
    /// Reads from an in-memory string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(source: &'a str) -> Self {
        Self::new(Cursor::new(source.as_bytes()))
    }
}

impl<R: BufRead> CharSource for SourceReader<R> {
    fn next_char(&mut self) -> SourceResult<Option<char>> {
        if let Some((c, pos)) = self.pushed.take() {
            self.last = Some((c, self.mark));
            self.mark = pos;
            return Ok(Some(c));
        }

        if self.offset >= self.buf.len() && !self.fill()? {
            self.last = None;
            self.mark = self.next;
            return Ok(None);
        }

        let Some(c) = self.buf[self.offset..].chars().next() else {
            return Ok(None);
        };
        self.offset += c.len_utf8();
        self.last = Some((c, self.mark));
        self.mark = self.next;
        self.next = self.next.advance(c);
        Ok(Some(c))
    }

    fn unread(&mut self) {
        if let Some((c, prev)) = self.last.take() {
            self.pushed = Some((c, self.mark));
            self.mark = prev;
        }
    }

    fn line(&self) -> u64 {
        self.mark.line
    }

    fn column(&self) -> u64 {
        self.mark.column
    }
}
