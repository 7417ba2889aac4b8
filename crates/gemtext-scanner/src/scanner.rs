//! Line-by-line scanning of a text/gemini byte stream.
//!
//! The [`Scanner`] reads from any [`Read`] source into a single growable
//! buffer and hands out views into it. Lines are delimited by LF or CRLF.
//! Scanning stops for good at the end of input, at the first I/O error, or
//! at a line too large for the maximum buffer size.

use std::fmt;
use std::io::{ErrorKind, Read};
use std::ops::Range;

use gemtext_core::{LineKind, ScanError};
use log::{debug, trace};

use crate::classify::{classify, Classified};
use crate::line::{Line, OwnedLine};

/// Default maximum size of one line, terminator included (64 KiB).
pub const MAX_LINE_SIZE: usize = 64 * 1024;

/// Default size of the first buffer allocation.
pub const START_BUFFER_SIZE: usize = 4096;

/// Streaming text/gemini scanner.
///
/// Each call to [`advance`](Scanner::advance) reads the next line and
/// classifies it; the result is available through [`line`](Scanner::line)
/// and the shorthand accessors. When `advance` returns `false`,
/// [`err`](Scanner::err) tells a clean end of input (`None`) apart from a
/// failure.
///
/// The scanner takes ownership of its reader but never closes it; use
/// [`into_inner`](Scanner::into_inner) to get it back.
///
/// # Example
///
/// ```
/// use gemtext_scanner::{LineKind, Scanner};
///
/// let mut scanner = Scanner::new(&b"```lang\n\tLINE1\n```\n"[..]);
/// let mut kinds = Vec::new();
/// while scanner.advance() {
///     kinds.push(scanner.kind());
/// }
/// assert_eq!(kinds, [LineKind::PreformatStart, LineKind::PreformatBody, LineKind::PreformatEnd]);
/// ```
pub struct Scanner<R> {
    reader: R,
    buf: Vec<u8>,
    /// First byte of `buf` not yet handed out as a line
    start: usize,
    /// End of the valid data in `buf`
    end: usize,
    start_size: usize,
    max_line_size: usize,
    /// Current line within `buf`, terminator removed
    line: Range<usize>,
    classified: Classified,
    number: usize,
    preformatted: bool,
    started: bool,
    eof: bool,
    done: bool,
    err: Option<ScanError>,
}

impl<R: Read> Scanner<R> {
    /// Create a scanner reading from `reader` with the default buffer sizes.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            start: 0,
            end: 0,
            start_size: START_BUFFER_SIZE,
            max_line_size: MAX_LINE_SIZE,
            line: 0..0,
            classified: Classified::default(),
            number: 0,
            preformatted: false,
            started: false,
            eof: false,
            done: false,
            err: None,
        }
    }

    /// Set the initial buffer size and the maximum line size.
    ///
    /// The largest line that can be scanned, terminator included, is the
    /// larger of `capacity` and `max`. If `max <= capacity` the buffer is
    /// allocated once and never grows.
    ///
    /// # Panics
    ///
    /// Panics if called after scanning has started.
    pub fn buffer(&mut self, capacity: usize, max: usize) {
        if self.started {
            panic!("Scanner::buffer called after scanning started");
        }
        self.start_size = capacity;
        self.max_line_size = capacity.max(max);
    }

    /// Builder form of [`buffer`](Scanner::buffer).
    pub fn with_buffer(mut self, capacity: usize, max: usize) -> Self {
        self.buffer(capacity, max);
        self
    }

    /// Advance to the next line.
    ///
    /// Returns `false` once the input is exhausted or an error occurred;
    /// every later call returns `false` as well.
    pub fn advance(&mut self) -> bool {
        self.line = 0..0;
        self.classified.text = 0..0;
        self.classified.url = 0..0;

        if self.done {
            return false;
        }
        self.started = true;

        match self.next_line() {
            Ok(Some(mut line)) => {
                if line.end > line.start && self.buf[line.end - 1] == b'\r' {
                    line.end -= 1;
                }
                self.number += 1;
                self.classified = classify(&self.buf[line.clone()], self.preformatted);
                self.line = line;

                match self.classified.kind {
                    LineKind::PreformatStart => self.preformatted = true,
                    LineKind::PreformatEnd => self.preformatted = false,
                    _ => {}
                }

                trace!("line {}: {}", self.number, self.classified.kind);
                true
            }
            Ok(None) => {
                debug!("end of input after {} lines", self.number);
                self.done = true;
                false
            }
            Err(err) => {
                debug!("scanning stopped after {} lines: {}", self.number, err);
                self.err = Some(err);
                self.done = true;
                false
            }
        }
    }

    /// Locate the next line in the buffer, reading more input as needed.
    fn next_line(&mut self) -> Result<Option<Range<usize>>, ScanError> {
        loop {
            if let Some(idx) = memchr::memchr(b'\n', &self.buf[self.start..self.end]) {
                let line = self.start..self.start + idx;
                self.start += idx + 1;
                return Ok(Some(line));
            }

            if self.eof {
                if self.start < self.end {
                    let line = self.start..self.end;
                    self.start = self.end;
                    return Ok(Some(line));
                }
                return Ok(None);
            }

            self.fill()?;
        }
    }

    /// Read more input, compacting or growing the buffer first.
    fn fill(&mut self) -> Result<(), ScanError> {
        if self.start > 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }

        if self.end == self.buf.len() {
            if self.buf.len() >= self.max_line_size {
                return Err(ScanError::LineTooLarge {
                    line: self.number + 1,
                    max: self.max_line_size,
                });
            }
            let size = (self.buf.len() * 2)
                .max(self.start_size)
                .max(1)
                .min(self.max_line_size);
            self.buf.resize(size, 0);
        }

        loop {
            match self.reader.read(&mut self.buf[self.end..]) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.end += n;
                    return Ok(());
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Convert into an iterator of owned lines.
    ///
    /// A scan error is yielded once as the last item.
    pub fn into_lines(self) -> OwnedLines<R> {
        OwnedLines {
            scanner: self,
            reported: false,
        }
    }
}

impl<R> Scanner<R> {
    /// View of the current line. Before the first advance, and after the
    /// scan stopped, the text and url are empty.
    ///
    /// The view borrows the scanner's buffer, which the next advance
    /// overwrites. Copy it with [`Line::to_owned_line`] to keep it longer.
    ///
    /// ```
    /// use gemtext_scanner::{LineKind, Scanner};
    ///
    /// let mut scanner = Scanner::new(&b"# Title\n=> gemini://example.tld/ Home\n"[..]);
    /// assert!(scanner.advance());
    /// let title = scanner.line().to_owned_line();
    ///
    /// assert!(scanner.advance());
    /// let link = scanner.line();
    /// assert_eq!(link.kind(), LineKind::Link);
    /// assert_eq!(link.url(), "gemini://example.tld/");
    ///
    /// assert_eq!(title.kind, LineKind::Heading1);
    /// assert_eq!(title.text, "Title");
    /// ```
    pub fn line(&self) -> Line<'_> {
        let line = &self.buf[self.line.clone()];
        Line {
            number: self.number,
            kind: self.classified.kind,
            text: self.classified.text(line),
            url: self.classified.url(line),
        }
    }

    /// Number of the current line (0 before the first advance).
    pub fn number(&self) -> usize {
        self.number
    }

    /// Kind of the current line.
    pub fn kind(&self) -> LineKind {
        self.classified.kind
    }

    /// Payload bytes of the current line.
    pub fn text_bytes(&self) -> &[u8] {
        self.line().text_bytes()
    }

    /// Payload of the current line as an owned `String`.
    pub fn text(&self) -> String {
        self.line().text()
    }

    /// Link target bytes of the current line.
    pub fn url_bytes(&self) -> &[u8] {
        self.line().url_bytes()
    }

    /// Link target of the current line as an owned `String`.
    pub fn url(&self) -> String {
        self.line().url()
    }

    /// Whether the scanner is inside a preformatted block.
    pub fn in_preformatted(&self) -> bool {
        self.preformatted
    }

    /// The error that stopped scanning, if any. A clean end of input
    /// is not an error.
    pub fn err(&self) -> Option<&ScanError> {
        self.err.as_ref()
    }

    /// Recover the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R> fmt::Debug for Scanner<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("number", &self.number)
            .field("kind", &self.classified.kind)
            .field("preformatted", &self.preformatted)
            .field("max_line_size", &self.max_line_size)
            .field("err", &self.err)
            .finish_non_exhaustive()
    }
}

/// Iterator over owned lines, created by [`Scanner::into_lines`].
#[derive(Debug)]
pub struct OwnedLines<R> {
    scanner: Scanner<R>,
    reported: bool,
}

impl<R: Read> Iterator for OwnedLines<R> {
    type Item = Result<OwnedLine, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.scanner.advance() {
            return Some(Ok(self.scanner.line().to_owned_line()));
        }
        match self.scanner.err() {
            Some(err) if !self.reported => {
                self.reported = true;
                Some(Err(err.clone()))
            }
            _ => None,
        }
    }
}
