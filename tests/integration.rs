//! Integration tests for gemtext.
//!
//! These tests scan and render the fixture in `testdata/example.gmi`, which
//! covers every line kind and most of the edge cases of the format.

use gemtext_html::{to_html, to_html_with, RenderOptions, Renderer};
use gemtext_scanner::{LineKind, ScanError, Scanner};

const EXAMPLE: &[u8] = include_bytes!("../testdata/example.gmi");

fn expect_start<R: std::io::Read>(s: &Scanner<R>) {
    assert_eq!(s.number(), 0, "initial line number");
    assert!(s.err().is_none(), "initial error");
    assert_eq!(s.text(), "");
    assert!(s.text_bytes().is_empty());
    assert_eq!(s.url(), "");
    assert!(s.url_bytes().is_empty());
}

fn expect_line<R: std::io::Read>(s: &mut Scanner<R>, num: usize, kind: LineKind, text: &str) {
    assert!(s.advance(), "line {} should scan", num);
    assert_eq!(s.number(), num);
    assert!(s.err().is_none(), "line {}: unexpected error {:?}", num, s.err());
    assert_eq!(s.kind(), kind, "line {}: kind", num);
    assert_eq!(s.text(), text, "line {}: text", num);
    assert_eq!(s.text_bytes(), text.as_bytes(), "line {}: text bytes", num);
    assert_eq!(s.url(), "", "line {}: url should be empty", num);
    assert!(s.url_bytes().is_empty());
}

fn expect_link<R: std::io::Read>(s: &mut Scanner<R>, num: usize, url: &str, text: &str) {
    assert!(s.advance(), "line {} should scan", num);
    assert_eq!(s.number(), num);
    assert!(s.err().is_none());
    assert_eq!(s.kind(), LineKind::Link, "line {}: kind", num);
    assert_eq!(s.url(), url, "line {}: url", num);
    assert_eq!(s.url_bytes(), url.as_bytes());
    assert_eq!(s.text(), text, "line {}: text", num);
    assert_eq!(s.text_bytes(), text.as_bytes());
}

fn expect_end<R: std::io::Read>(s: &mut Scanner<R>, num: usize) {
    assert!(!s.advance(), "scanner should be finished");
    assert_eq!(s.number(), num);
    assert!(s.err().is_none(), "unexpected error {:?}", s.err());
    assert_eq!(s.text(), "");
    assert!(s.text_bytes().is_empty());
    assert_eq!(s.url(), "");
    assert!(s.url_bytes().is_empty());
}

#[test]
fn test_scan_example() {
    let mut s = Scanner::new(EXAMPLE);
    expect_start(&s);
    expect_line(&mut s, 1, LineKind::Heading1, "This is my test Gemini ");
    expect_line(&mut s, 2, LineKind::Heading1, "Heading #1");
    expect_line(&mut s, 3, LineKind::Heading1, "");
    expect_line(&mut s, 4, LineKind::Heading1, "");
    expect_line(&mut s, 5, LineKind::Heading2, "This is a level two heading.");
    expect_line(&mut s, 6, LineKind::Heading2, "Heading #2 ");
    expect_line(&mut s, 7, LineKind::Heading2, "");
    expect_line(&mut s, 8, LineKind::Heading2, "");
    expect_line(&mut s, 9, LineKind::Heading3, "This is a level three heading.");
    expect_line(&mut s, 10, LineKind::Heading3, "Heading #3 ");
    expect_line(&mut s, 11, LineKind::Heading3, "");
    expect_line(&mut s, 12, LineKind::Heading3, "");
    expect_line(&mut s, 13, LineKind::Text, "");
    expect_line(&mut s, 14, LineKind::Text, "This is a text line.");
    expect_line(&mut s, 15, LineKind::Text, "Another text line with trailing whitespace.   ");
    expect_line(&mut s, 16, LineKind::Text, "");
    expect_line(&mut s, 17, LineKind::ListItem, "List 1");
    expect_line(&mut s, 18, LineKind::Text, "*List 2");
    expect_line(&mut s, 19, LineKind::Text, "*");
    expect_line(&mut s, 20, LineKind::ListItem, "");
    expect_line(&mut s, 21, LineKind::Text, "");
    expect_line(&mut s, 22, LineKind::Quote, "Lorem ipsum dolor sit amet, consectetur adipiscing elit.");
    expect_line(&mut s, 23, LineKind::Quote, "Ut enim ad minim veniam, quis nostrud exercitation.");
    expect_line(&mut s, 24, LineKind::Quote, "");
    expect_line(&mut s, 25, LineKind::Text, "");
    expect_link(&mut s, 26, "https://example.tld/", "");
    expect_link(&mut s, 27, "gemini://example.tld/", "");
    expect_link(&mut s, 28, "gemini://example.tld/", "Example link with a description");
    expect_link(&mut s, 29, "foo/bar/baz.txt", "A relative link ");
    expect_line(&mut s, 30, LineKind::PreformatStart, "go ");
    expect_line(&mut s, 31, LineKind::PreformatBody, "package main");
    expect_line(&mut s, 32, LineKind::PreformatBody, r#"import "fmt""#);
    expect_line(&mut s, 33, LineKind::PreformatBody, "func main() {");
    expect_line(&mut s, 34, LineKind::PreformatBody, "\tfmt.Println(\"hello world\")");
    expect_line(&mut s, 35, LineKind::PreformatBody, "}");
    expect_line(&mut s, 36, LineKind::PreformatEnd, "");
    expect_line(&mut s, 37, LineKind::PreformatStart, "");
    expect_line(&mut s, 38, LineKind::PreformatBody, "Normal preformatted text");
    expect_line(&mut s, 39, LineKind::PreformatEnd, "");
    expect_end(&mut s, 39);
    expect_end(&mut s, 39);
    expect_end(&mut s, 39);
}

#[test]
fn test_scan_example_with_crlf() {
    let crlf = String::from_utf8(EXAMPLE.to_vec()).unwrap().replace('\n', "\r\n");
    let lf: Vec<_> = Scanner::new(EXAMPLE).into_lines().collect::<Result<_, _>>().unwrap();
    let dos: Vec<_> = Scanner::new(crlf.as_bytes())
        .into_lines()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(lf, dos);
}

#[test]
fn test_scan_with_tiny_buffer() {
    let input = "# This is my test Gemini\n## This is a level two heading.";
    let mut s = Scanner::new(input.as_bytes());
    s.buffer(24, 25);
    expect_start(&s);
    expect_line(&mut s, 1, LineKind::Heading1, "This is my test Gemini");

    assert!(!s.advance(), "scanner should have stopped");
    assert!(matches!(s.err(), Some(ScanError::LineTooLarge { .. })));
    assert!(!s.advance());
    assert!(matches!(s.err(), Some(ScanError::LineTooLarge { .. })));
    assert_eq!(s.number(), 1);
}

#[test]
fn test_later_lines_are_not_produced_after_too_large() {
    let input = "ok\nwaaaaaaaaaaaaaaaay too long\nok\n";
    let lines: Vec<_> = Scanner::new(input.as_bytes())
        .with_buffer(8, 8)
        .into_lines()
        .collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].is_ok());
    assert!(matches!(lines[1], Err(ScanError::LineTooLarge { line: 2, max: 8 })));
}

#[test]
fn test_independent_scanners() {
    let mut a = Scanner::new(&b"```\ninside"[..]);
    let mut b = Scanner::new(&b"outside\n```"[..]);
    assert!(a.advance());
    assert!(b.advance());
    assert!(a.advance());
    assert!(b.advance());
    assert_eq!(a.kind(), LineKind::PreformatBody);
    assert_eq!(b.kind(), LineKind::PreformatStart);
}

#[test]
fn test_scanner_runs_on_another_thread() {
    let scanner = Scanner::new(std::io::Cursor::new(EXAMPLE.to_vec()));
    let count = std::thread::spawn(move || scanner.into_lines().count())
        .join()
        .unwrap();
    assert_eq!(count, 39);
}

const EXAMPLE_HTML: &str = "<h1>This is my test Gemini </h1>\n\
<h1>Heading #1</h1>\n\
<h1></h1>\n\
<h1></h1>\n\
<h2>This is a level two heading.</h2>\n\
<h2>Heading #2 </h2>\n\
<h2></h2>\n\
<h2></h2>\n\
<h3>This is a level three heading.</h3>\n\
<h3>Heading #3 </h3>\n\
<h3></h3>\n\
<h3></h3>\n\
\n\
<br>This is a text line.\n\
<br>Another text line with trailing whitespace.   \n\
<br>\n\
<ul>\n\
<li>List 1</li>\n\
</ul>\n\
*List 2\n\
<br>*\n\
<ul>\n\
<li></li>\n\
</ul>\n\
\n\
<blockquote>\n\
<p>Lorem ipsum dolor sit amet, consectetur adipiscing elit.</p>\n\
<p>Ut enim ad minim veniam, quis nostrud exercitation.</p>\n\
<p></p>\n\
</blockquote>\n\
\n\
<a href=\"https://example.tld/\">https://example.tld/</a>\n\
<a href=\"gemini://example.tld/\">gemini://example.tld/</a>\n\
<a href=\"gemini://example.tld/\">Example link with a description</a>\n\
<a href=\"foo/bar/baz.txt\">A relative link </a>\n\
<pre class=\"go \">\n\
package main\n\
import &quot;fmt&quot;\n\
func main() {\n\
\tfmt.Println(&quot;hello world&quot;)\n\
}\n\
</pre>\n\
<pre>\n\
Normal preformatted text\n\
</pre>\n";

#[test]
fn test_render_example() {
    assert_eq!(to_html(EXAMPLE).unwrap(), EXAMPLE_HTML);
}

#[test]
fn test_render_example_raw() {
    let raw = to_html_with(EXAMPLE, RenderOptions { escape: false }).unwrap();
    assert_eq!(raw, EXAMPLE_HTML.replace("&quot;", "\""));
}

#[test]
fn test_render_into_writer() {
    let mut output = Vec::new();
    let mut renderer = Renderer::new(Scanner::new(EXAMPLE), &mut output);
    renderer.render().unwrap();
    assert_eq!(renderer.scanner().number(), 39);
    assert_eq!(String::from_utf8(output).unwrap(), EXAMPLE_HTML);
}
