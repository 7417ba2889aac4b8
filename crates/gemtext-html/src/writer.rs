//! Output helper that attaches line context to write failures.

use std::io::Write;

use gemtext_core::{GemtextError, LineKind, Result};

/// Writes the fragments of one line.
///
/// Every failure is reported as [`GemtextError::Write`] carrying the number
/// and kind of the line being written.
pub(crate) struct HtmlWriter<'w, W> {
    writer: &'w mut W,
    line: usize,
    kind: LineKind,
    escape: bool,
}

impl<'w, W: Write> HtmlWriter<'w, W> {
    pub(crate) fn new(writer: &'w mut W, line: usize, kind: LineKind, escape: bool) -> Self {
        Self {
            writer,
            line,
            kind,
            escape,
        }
    }

    /// Write markup as is.
    pub(crate) fn raw(&mut self, markup: &str) -> Result<()> {
        self.bytes(markup.as_bytes())
    }

    /// Write scanned text or URL bytes, escaped if enabled.
    pub(crate) fn text(&mut self, text: &[u8]) -> Result<()> {
        if !self.escape {
            return self.bytes(text);
        }
        let text = String::from_utf8_lossy(text);
        let escaped = html_escape::encode_quoted_attribute(&*text);
        self.bytes(escaped.as_bytes())
    }

    fn bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let (line, kind) = (self.line, self.kind);
        self.writer
            .write_all(bytes)
            .map_err(|source| GemtextError::Write { line, kind, source })
    }

    /// Error for a line kind the current rule cannot write.
    pub(crate) fn unsupported(&self) -> GemtextError {
        GemtextError::UnsupportedLineKind {
            line: self.line,
            kind: self.kind,
        }
    }
}
