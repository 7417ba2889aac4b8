//! Gemtext HTML
//!
//! This crate renders a scanned text/gemini stream as HTML, one line at a
//! time. The only state kept between lines is the kind of the previously
//! rendered line.
//!
//! # Output
//!
//! | line kind | HTML |
//! |---|---|
//! | headings | `<h1>`, `<h2>`, `<h3>` |
//! | text | the text, with `<br>` before a text line that follows a text line |
//! | link | `<a href="URL">LABEL</a>`, the URL doubling as label when there is none |
//! | preformatted | `<pre>` or `<pre class="ALT">` ... `</pre>` |
//! | list items | `<li>` elements, each run wrapped in `<ul>` |
//! | quotes | `<p>` elements, each run wrapped in `<blockquote>` |
//!
//! Every fragment ends with a newline. Text and URLs are HTML-escaped unless
//! [`RenderOptions::escape`] is turned off.
//!
//! # Example
//!
//! ```
//! use gemtext_html::Renderer;
//! use gemtext_scanner::Scanner;
//!
//! let mut output = Vec::new();
//! let scanner = Scanner::new(&b"# Hello\n=> gemini://example.tld/"[..]);
//! Renderer::new(scanner, &mut output).render().unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "<h1>Hello</h1>\n<a href=\"gemini://example.tld/\">gemini://example.tld/</a>\n"
//! );
//! ```

mod lines;
mod writer;

pub use lines::{finish, write_line};

use std::io::{Read, Write};

use gemtext_core::{GemtextError, LineKind, Result};
use gemtext_scanner::Scanner;
use log::debug;

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape `&`, `<`, `>`, `"` and `'` in text and URLs.
    ///
    /// Turning this off writes the scanned bytes as they are.
    pub escape: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { escape: true }
    }
}

/// Where a renderer stands between calls to [`Renderer::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Rendering,
    Finished,
    Failed,
}

/// Text/gemini to HTML renderer.
///
/// Drives a [`Scanner`] to completion and writes HTML to `writer`.
pub struct Renderer<R, W> {
    scanner: Scanner<R>,
    writer: W,
    options: RenderOptions,
    previous: Option<LineKind>,
    state: State,
}

impl<R: Read, W: Write> Renderer<R, W> {
    /// Create a renderer with default options.
    pub fn new(scanner: Scanner<R>, writer: W) -> Self {
        Self::with_options(scanner, writer, RenderOptions::default())
    }

    /// Create a renderer with custom options.
    pub fn with_options(scanner: Scanner<R>, writer: W, options: RenderOptions) -> Self {
        Self {
            scanner,
            writer,
            options,
            previous: None,
            state: State::Rendering,
        }
    }

    /// Start building a renderer.
    pub fn builder() -> RendererBuilder<R, W> {
        RendererBuilder::new()
    }

    /// Get the options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Get the scanner.
    pub fn scanner(&self) -> &Scanner<R> {
        &self.scanner
    }

    /// Render every remaining line.
    ///
    /// Stops at the first write failure, which is returned with the line
    /// number and kind being written. A scanner failure is returned after
    /// the lines scanned before it have been written. On a clean end of
    /// input, open list, quote and preformatted blocks are closed.
    ///
    /// Once rendering has failed the scanner is never advanced again, and
    /// later calls return [`GemtextError::Halted`] (or the scanner's error).
    /// Calling it again after a clean finish writes nothing.
    pub fn render(&mut self) -> Result<()> {
        match self.state {
            State::Finished => return Ok(()),
            State::Failed => {
                return Err(match self.scanner.err() {
                    Some(err) => GemtextError::from(err.clone()),
                    None => GemtextError::Halted {
                        line: self.scanner.number(),
                    },
                })
            }
            State::Rendering => {}
        }

        let result = self.render_lines();
        self.state = match result {
            Ok(()) => State::Finished,
            Err(_) => State::Failed,
        };
        result
    }

    fn render_lines(&mut self) -> Result<()> {
        while self.scanner.advance() {
            let line = self.scanner.line();
            write_line(&mut self.writer, &line, self.previous, &self.options)?;
            self.previous = Some(line.kind());
        }

        if let Some(err) = self.scanner.err() {
            return Err(GemtextError::from(err.clone()));
        }

        finish(
            &mut self.writer,
            self.scanner.number(),
            self.previous.take(),
            &self.options,
        )?;
        debug!("rendered {} lines", self.scanner.number());
        Ok(())
    }

    /// Consume the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Builder for [`Renderer`].
///
/// Building fails with [`GemtextError::MisconfiguredRenderer`] when no
/// scanner or no writer was given.
pub struct RendererBuilder<R, W> {
    scanner: Option<Scanner<R>>,
    writer: Option<W>,
    options: RenderOptions,
}

impl<R, W> Default for RendererBuilder<R, W> {
    fn default() -> Self {
        Self {
            scanner: None,
            writer: None,
            options: RenderOptions::default(),
        }
    }
}

impl<R: Read, W: Write> RendererBuilder<R, W> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scanner to read lines from.
    pub fn scanner(mut self, scanner: Scanner<R>) -> Self {
        self.scanner = Some(scanner);
        self
    }

    /// Set the output writer.
    pub fn writer(mut self, writer: W) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Set the rendering options.
    pub fn options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the renderer.
    pub fn build(self) -> Result<Renderer<R, W>> {
        match (self.scanner, self.writer) {
            (Some(scanner), Some(writer)) => {
                Ok(Renderer::with_options(scanner, writer, self.options))
            }
            _ => Err(GemtextError::MisconfiguredRenderer),
        }
    }
}

/// Render a complete text/gemini document to an HTML string.
pub fn to_html(input: &[u8]) -> Result<String> {
    to_html_with(input, RenderOptions::default())
}

/// Render a complete document with custom options.
pub fn to_html_with(input: &[u8], options: RenderOptions) -> Result<String> {
    let mut output = Vec::with_capacity(input.len() + input.len() / 4);
    Renderer::with_options(Scanner::new(input), &mut output, options).render()?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}
