//! Views of scanned lines.

use gemtext_core::LineKind;

/// Borrowed view of the line most recently scanned.
///
/// The byte slices point into the scanner's buffer, so a `Line` cannot
/// outlive the next call to [`Scanner::advance`](crate::Scanner::advance).
/// Use [`Line::to_owned_line`] to keep a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub(crate) number: usize,
    pub(crate) kind: LineKind,
    pub(crate) text: &'a [u8],
    pub(crate) url: &'a [u8],
}

impl<'a> Line<'a> {
    /// 1-based line number; 0 before the first line was scanned.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Kind of the line.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Payload bytes: heading caption, text, list or quote body,
    /// preformatted body or alt text, link label.
    pub fn text_bytes(&self) -> &'a [u8] {
        self.text
    }

    /// Link target bytes; empty for anything but [`LineKind::Link`].
    pub fn url_bytes(&self) -> &'a [u8] {
        self.url
    }

    /// Payload copied into a `String`. Invalid UTF-8 is replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(self.text).into_owned()
    }

    /// Link target copied into a `String`. Invalid UTF-8 is replaced.
    pub fn url(&self) -> String {
        String::from_utf8_lossy(self.url).into_owned()
    }

    /// Copy the line so it survives the next advance.
    pub fn to_owned_line(&self) -> OwnedLine {
        OwnedLine {
            number: self.number,
            kind: self.kind,
            text: self.text(),
            url: self.url(),
        }
    }
}

/// A scanned line that owns its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedLine {
    /// 1-based line number
    pub number: usize,
    /// Kind of the line
    pub kind: LineKind,
    /// Payload text
    pub text: String,
    /// Link target (empty unless `kind` is `Link`)
    pub url: String,
}

impl From<Line<'_>> for OwnedLine {
    fn from(line: Line<'_>) -> Self {
        line.to_owned_line()
    }
}
