//! Gemtext Scanner
//!
//! A streaming line scanner for text/gemini. Each call to
//! [`Scanner::advance`] reads exactly one more physical line from the
//! underlying reader and classifies it as one of the [`LineKind`]s.
//!
//! # Overview
//!
//! - [`classify`] - Pure classification of one line, given the
//!   preformatted state
//! - [`Scanner`] - Owns the reader, the line buffer, the line counter and
//!   the preformatted state
//! - [`Line`] - Borrowed view of the current line, valid until the next
//!   advance
//! - [`OwnedLine`] - Independent copy of a line
//!
//! # Example
//!
//! ```
//! use gemtext_scanner::{LineKind, Scanner};
//!
//! let input = "# Example Gemini\nThis is a line of text.\n=> gemini://gemini.circumlunar.space/ Gemini";
//! let mut scanner = Scanner::new(input.as_bytes());
//!
//! let mut out = Vec::new();
//! while scanner.advance() {
//!     let line = scanner.line();
//!     if line.kind() == LineKind::Link {
//!         out.push(format!("line {}: {}: url {}: {}", line.number(), line.kind(), line.url(), line.text()));
//!     } else {
//!         out.push(format!("line {}: {}: {}", line.number(), line.kind(), line.text()));
//!     }
//! }
//! assert!(scanner.err().is_none());
//!
//! assert_eq!(out, [
//!     "line 1: Heading1: Example Gemini",
//!     "line 2: Text: This is a line of text.",
//!     "line 3: Link: url gemini://gemini.circumlunar.space/: Gemini",
//! ]);
//! ```

pub mod classify;
pub mod line;
pub mod scanner;

pub use classify::{classify, is_whitespace, Classified};
pub use gemtext_core::{LineKind, ScanError};
pub use line::{Line, OwnedLine};
pub use scanner::{OwnedLines, Scanner, MAX_LINE_SIZE, START_BUFFER_SIZE};
