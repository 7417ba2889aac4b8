//! Classification of a single text/gemini line.
//!
//! The classifier never allocates: it returns byte ranges into the line it
//! was given. Whitespace is a space or a tab, nothing else.

use std::ops::Range;

use gemtext_core::LineKind;

/// Fence that opens and closes a preformatted block.
pub const TOK_PRE: &[u8] = b"```";
/// Introducer of a link line.
pub const TOK_LINK: &[u8] = b"=>";
/// Introducer of a list item (mark plus exactly one space).
pub const TOK_LIST: &[u8] = b"* ";
/// Introducer of a quote line.
pub const TOK_QUOTE: u8 = b'>';
/// Heading mark.
pub const TOK_HEADING: u8 = b'#';

/// Number of leading heading marks that are counted as a level.
const HEADING_WINDOW: usize = 3;

/// Result of classifying one line.
///
/// `text` and `url` are ranges into the line passed to [`classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    /// Kind of the line
    pub kind: LineKind,
    /// Range of the kind-specific payload
    pub text: Range<usize>,
    /// Range of the link target; empty unless `kind` is [`LineKind::Link`]
    pub url: Range<usize>,
}

impl Default for Classified {
    fn default() -> Self {
        Self::new(LineKind::Text, 0..0)
    }
}

impl Classified {
    fn new(kind: LineKind, text: Range<usize>) -> Self {
        Self { kind, text, url: 0..0 }
    }

    /// Payload bytes of `line`.
    pub fn text<'a>(&self, line: &'a [u8]) -> &'a [u8] {
        &line[self.text.clone()]
    }

    /// Link target bytes of `line`.
    pub fn url<'a>(&self, line: &'a [u8]) -> &'a [u8] {
        &line[self.url.clone()]
    }
}

/// Check if a byte is text/gemini whitespace (space or tab).
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Range of `line` starting at `from` with the leading whitespace run removed.
fn trim_start(line: &[u8], from: usize) -> Range<usize> {
    let skipped = line[from..]
        .iter()
        .position(|&b| !is_whitespace(b))
        .unwrap_or(line.len() - from);
    from + skipped..line.len()
}

/// Classify one line with its terminator already removed.
///
/// `preformatted` tells whether the line sits inside a preformatted block.
/// The caller owns that state: a [`LineKind::PreformatStart`] result opens
/// a block and a [`LineKind::PreformatEnd`] result closes it.
///
/// # Example
///
/// ```
/// use gemtext_scanner::{classify, LineKind};
///
/// let line = b"=> gemini://x/ Label";
/// let c = classify(line, false);
/// assert_eq!(c.kind, LineKind::Link);
/// assert_eq!(c.url(line), b"gemini://x/");
/// assert_eq!(c.text(line), b"Label");
/// ```
pub fn classify(line: &[u8], preformatted: bool) -> Classified {
    if preformatted {
        if line.starts_with(TOK_PRE) {
            return Classified::new(LineKind::PreformatEnd, 0..0);
        }
        return Classified::new(LineKind::PreformatBody, 0..line.len());
    }

    if line.starts_with(TOK_PRE) {
        return Classified::new(LineKind::PreformatStart, TOK_PRE.len()..line.len());
    }

    if line.starts_with(TOK_LINK) {
        return classify_link(line);
    }

    if line.first() == Some(&TOK_HEADING) {
        return classify_heading(line);
    }

    if line.starts_with(TOK_LIST) {
        return Classified::new(LineKind::ListItem, trim_start(line, TOK_LIST.len()));
    }

    if line.first() == Some(&TOK_QUOTE) {
        return Classified::new(LineKind::Quote, trim_start(line, 1));
    }

    Classified::new(LineKind::Text, 0..line.len())
}

fn classify_link(line: &[u8]) -> Classified {
    let url = trim_start(line, TOK_LINK.len());

    match memchr::memchr2(b' ', b'\t', &line[url.clone()]) {
        None => Classified {
            kind: LineKind::Link,
            text: 0..0,
            url,
        },
        Some(idx) => {
            let url_end = url.start + idx;
            Classified {
                kind: LineKind::Link,
                text: trim_start(line, url_end),
                url: url.start..url_end,
            }
        }
    }
}

/// Only a window of three marks is inspected. A longer run does not fit
/// a level, so the line falls back to level 1 and keeps the extra marks
/// in its caption.
fn classify_heading(line: &[u8]) -> Classified {
    let marks = line
        .iter()
        .take(HEADING_WINDOW + 1)
        .take_while(|&&b| b == TOK_HEADING)
        .count();

    let (kind, marks) = match marks {
        3 => (LineKind::Heading3, 3),
        2 => (LineKind::Heading2, 2),
        _ => (LineKind::Heading1, 1),
    };

    Classified::new(kind, trim_start(line, marks))
}
