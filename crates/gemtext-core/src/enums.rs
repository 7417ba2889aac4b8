//! Line kinds of the text/gemini format.

use serde::{Deserialize, Serialize};

/// The kind of a single physical line of text/gemini.
///
/// Exactly one kind is assigned to every line. [`LineKind::Text`] is the
/// fallback for lines that carry no recognized introducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Level 1 heading, introduced by `#`
    Heading1,
    /// Level 2 heading, introduced by `##`
    Heading2,
    /// Level 3 heading, introduced by `###`
    Heading3,
    /// Plain text line (default)
    Text,
    /// Link line, introduced by `=>` and followed by a URL and optional label
    Link,
    /// Opening fence (```) of a preformatted block; text holds the alt text
    PreformatStart,
    /// Line inside a preformatted block, kept verbatim
    PreformatBody,
    /// Closing fence of a preformatted block
    PreformatEnd,
    /// Unordered list item, introduced by `* `
    ListItem,
    /// Quote line, introduced by `>`
    Quote,
}

impl LineKind {
    /// Every line kind, in declaration order.
    pub const ALL: [LineKind; 10] = [
        LineKind::Heading1,
        LineKind::Heading2,
        LineKind::Heading3,
        LineKind::Text,
        LineKind::Link,
        LineKind::PreformatStart,
        LineKind::PreformatBody,
        LineKind::PreformatEnd,
        LineKind::ListItem,
        LineKind::Quote,
    ];

    /// Check if this is one of the heading kinds.
    pub fn is_heading(&self) -> bool {
        self.heading_level().is_some()
    }

    /// Heading level (1-3), or `None` for non-heading lines.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            LineKind::Heading1 => Some(1),
            LineKind::Heading2 => Some(2),
            LineKind::Heading3 => Some(3),
            _ => None,
        }
    }

    /// Check if this line belongs to a preformatted block, fences included.
    pub fn is_preformatted(&self) -> bool {
        matches!(
            self,
            LineKind::PreformatStart | LineKind::PreformatBody | LineKind::PreformatEnd
        )
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineKind::Heading1 => write!(f, "Heading1"),
            LineKind::Heading2 => write!(f, "Heading2"),
            LineKind::Heading3 => write!(f, "Heading3"),
            LineKind::Text => write!(f, "Text"),
            LineKind::Link => write!(f, "Link"),
            LineKind::PreformatStart => write!(f, "PreformatStart"),
            LineKind::PreformatBody => write!(f, "PreformatBody"),
            LineKind::PreformatEnd => write!(f, "PreformatEnd"),
            LineKind::ListItem => write!(f, "ListItem"),
            LineKind::Quote => write!(f, "Quote"),
        }
    }
}
