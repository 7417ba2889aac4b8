//! Per-kind HTML rules.

use std::io::Write;

use gemtext_core::{LineKind, Result};
use gemtext_scanner::Line;
use log::trace;

use crate::writer::HtmlWriter;
use crate::RenderOptions;

/// Write the HTML for one scanned line.
///
/// `previous` is the kind of the last line written, `None` at the start of
/// a document. It decides paragraph breaks between text lines and where
/// list and quote runs open and close.
pub fn write_line<W: Write>(
    writer: &mut W,
    line: &Line<'_>,
    previous: Option<LineKind>,
    options: &RenderOptions,
) -> Result<()> {
    let mut out = HtmlWriter::new(writer, line.number(), line.kind(), options.escape);

    close_run(&mut out, previous, Some(line.kind()))?;

    match line.kind() {
        LineKind::Heading1 | LineKind::Heading2 | LineKind::Heading3 => {
            write_heading(&mut out, line)
        }
        LineKind::Text => write_text(&mut out, line, previous),
        LineKind::Link => write_link(&mut out, line),
        LineKind::PreformatStart | LineKind::PreformatBody | LineKind::PreformatEnd => {
            write_preformatted(&mut out, line)
        }
        LineKind::ListItem => write_list_item(&mut out, line, previous),
        LineKind::Quote => write_quote(&mut out, line, previous),
    }
}

/// Close whatever the last line left open at the end of a document.
///
/// `number` and `previous` are the number and kind of the last line.
pub fn finish<W: Write>(
    writer: &mut W,
    number: usize,
    previous: Option<LineKind>,
    options: &RenderOptions,
) -> Result<()> {
    let Some(kind) = previous else {
        return Ok(());
    };
    let mut out = HtmlWriter::new(writer, number, kind, options.escape);

    close_run(&mut out, previous, None)?;
    if matches!(kind, LineKind::PreformatStart | LineKind::PreformatBody) {
        out.raw("</pre>\n")?;
    }
    Ok(())
}

fn close_run<W: Write>(
    out: &mut HtmlWriter<'_, W>,
    previous: Option<LineKind>,
    current: Option<LineKind>,
) -> Result<()> {
    if previous == current {
        return Ok(());
    }
    match previous {
        Some(LineKind::ListItem) => out.raw("</ul>\n"),
        Some(LineKind::Quote) => out.raw("</blockquote>\n"),
        _ => Ok(()),
    }
}

fn write_heading<W: Write>(out: &mut HtmlWriter<'_, W>, line: &Line<'_>) -> Result<()> {
    let (start, end) = match line.kind() {
        LineKind::Heading1 => ("<h1>", "</h1>\n"),
        LineKind::Heading2 => ("<h2>", "</h2>\n"),
        LineKind::Heading3 => ("<h3>", "</h3>\n"),
        _ => return Err(out.unsupported()),
    };

    out.raw(start)?;
    out.text(line.text_bytes())?;
    out.raw(end)
}

fn write_text<W: Write>(
    out: &mut HtmlWriter<'_, W>,
    line: &Line<'_>,
    previous: Option<LineKind>,
) -> Result<()> {
    if line.kind() != LineKind::Text {
        return Err(out.unsupported());
    }

    if previous == Some(LineKind::Text) {
        out.raw("<br>")?;
    }
    out.text(line.text_bytes())?;
    out.raw("\n")
}

fn write_link<W: Write>(out: &mut HtmlWriter<'_, W>, line: &Line<'_>) -> Result<()> {
    if line.kind() != LineKind::Link {
        return Err(out.unsupported());
    }

    out.raw("<a href=\"")?;
    out.text(line.url_bytes())?;
    out.raw("\">")?;

    if line.text_bytes().is_empty() {
        out.text(line.url_bytes())?;
    } else {
        out.text(line.text_bytes())?;
    }

    out.raw("</a>\n")
}

fn write_preformatted<W: Write>(out: &mut HtmlWriter<'_, W>, line: &Line<'_>) -> Result<()> {
    match line.kind() {
        LineKind::PreformatStart => {
            if line.text_bytes().is_empty() {
                return out.raw("<pre>\n");
            }
            out.raw("<pre class=\"")?;
            out.text(line.text_bytes())?;
            out.raw("\">\n")
        }
        LineKind::PreformatBody => {
            out.text(line.text_bytes())?;
            out.raw("\n")
        }
        LineKind::PreformatEnd => out.raw("</pre>\n"),
        _ => Err(out.unsupported()),
    }
}

fn write_list_item<W: Write>(
    out: &mut HtmlWriter<'_, W>,
    line: &Line<'_>,
    previous: Option<LineKind>,
) -> Result<()> {
    if line.kind() != LineKind::ListItem {
        return Err(out.unsupported());
    }

    if previous != Some(LineKind::ListItem) {
        trace!("line {}: opening list", line.number());
        out.raw("<ul>\n")?;
    }
    out.raw("<li>")?;
    out.text(line.text_bytes())?;
    out.raw("</li>\n")
}

fn write_quote<W: Write>(
    out: &mut HtmlWriter<'_, W>,
    line: &Line<'_>,
    previous: Option<LineKind>,
) -> Result<()> {
    if line.kind() != LineKind::Quote {
        return Err(out.unsupported());
    }

    if previous != Some(LineKind::Quote) {
        trace!("line {}: opening quote", line.number());
        out.raw("<blockquote>\n")?;
    }
    out.raw("<p>")?;
    out.text(line.text_bytes())?;
    out.raw("</p>\n")
}
