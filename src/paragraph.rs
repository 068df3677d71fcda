//! Paragraph wrapping and whitespace normalization.
//!
//! The last pipeline stage. Runs three passes:
//! 1. Wrap every non-empty line that is not already a block element in `<p>`
//! 2. Delete paragraphs with an empty or whitespace-only body
//! 3. Collapse each run of newlines into a single newline

use memchr::{memchr, memmem};

use crate::HtmlWriter;

/// Run all three passes.
pub fn normalize(text: &str) -> String {
    let text = wrap_paragraphs(text);
    let text = strip_empty_paragraphs(&text);
    collapse_newlines(&text)
}

/// Wrap every non-empty line that does not start with a block tag.
pub fn wrap_paragraphs(text: &str) -> String {
    let mut writer = HtmlWriter::with_capacity_for(text.len());

    for line in text.split('\n') {
        writer.start_line();
        if line.is_empty() || starts_with_block_tag(line) {
            writer.write_str(line);
        } else {
            writer.paragraph_start();
            writer.write_str(line);
            writer.paragraph_end();
        }
    }

    writer.into_string()
}

/// Check if a line starts with a heading, list container or list item tag.
///
/// The closing `</ul>` counts as a list container tag: the list wrapper
/// always puts it on a line of its own, and wrapping it would produce
/// `<p></ul></p>`.
pub fn starts_with_block_tag(line: &str) -> bool {
    match line.as_bytes() {
        [b'<', b'h', b'1'..=b'6', ..] => true,
        _ => line.starts_with("<ul") || line.starts_with("</ul") || line.starts_with("<li"),
    }
}

/// Delete `<p>…</p>` elements whose body is empty or only spaces/tabs.
pub fn strip_empty_paragraphs(text: &str) -> String {
    const OPEN: &str = "<p>";
    const CLOSE: &str = "</p>";

    let bytes = text.as_bytes();
    let finder = memmem::Finder::new(OPEN);
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;

    while let Some(offset) = finder.find(&bytes[pos..]) {
        let open = pos + offset;
        let body_start = open + OPEN.len();
        let body_len = bytes[body_start..]
            .iter()
            .take_while(|&&b| b == b' ' || b == b'\t' || b == b'\r')
            .count();
        let close = body_start + body_len;

        if text[close..].starts_with(CLOSE) {
            out.push_str(&text[copied..open]);
            copied = close + CLOSE.len();
            pos = copied;
        } else {
            pos = body_start;
        }
    }
    out.push_str(&text[copied..]);

    out
}

/// Collapse every run of one or more `\n` into exactly one.
pub fn collapse_newlines(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(offset) = memchr(b'\n', &bytes[pos..]) {
        let nl = pos + offset;
        out.push_str(&text[pos..=nl]);
        pos = nl + 1;
        while bytes.get(pos) == Some(&b'\n') {
            pos += 1;
        }
    }
    out.push_str(&text[pos..]);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_plain_line() {
        assert_eq!(wrap_paragraphs("hello"), "<p>hello</p>");
    }

    #[test]
    fn test_wrap_single_character() {
        assert_eq!(wrap_paragraphs("a"), "<p>a</p>");
    }

    #[test]
    fn test_wrap_skips_block_lines() {
        assert_eq!(
            wrap_paragraphs("<h2>t</h2>\n<ul>\n<li>x</li>\n</ul>\ntext"),
            "<h2>t</h2>\n<ul>\n<li>x</li>\n</ul>\n<p>text</p>"
        );
    }

    #[test]
    fn test_wrap_inline_tag_lines() {
        assert_eq!(
            wrap_paragraphs("<strong>a</strong> b\n<a href=\"x\">y</a>"),
            "<p><strong>a</strong> b</p>\n<p><a href=\"x\">y</a></p>"
        );
    }

    #[test]
    fn test_wrap_keeps_blank_lines() {
        assert_eq!(wrap_paragraphs("a\n\nb"), "<p>a</p>\n\n<p>b</p>");
    }

    #[test]
    fn test_block_tag_detection() {
        for level in 1..=6 {
            assert!(starts_with_block_tag(&format!("<h{level}>x</h{level}>")));
        }
        assert!(starts_with_block_tag("<ul>"));
        assert!(starts_with_block_tag("</ul>"));
        assert!(starts_with_block_tag("<li>x</li>"));
        assert!(!starts_with_block_tag("<h7>x"));
        assert!(!starts_with_block_tag("<hr>"));
        assert!(!starts_with_block_tag("<em>x</em>"));
        assert!(!starts_with_block_tag("</li>"));
        assert!(!starts_with_block_tag("text"));
    }

    #[test]
    fn test_strip_empty() {
        assert_eq!(strip_empty_paragraphs("<p></p>"), "");
        assert_eq!(strip_empty_paragraphs("a<p> \t</p>b"), "ab");
        assert_eq!(strip_empty_paragraphs("<p>x</p>"), "<p>x</p>");
        assert_eq!(strip_empty_paragraphs("<p><p></p>"), "<p>");
    }

    #[test]
    fn test_collapse_newlines() {
        assert_eq!(collapse_newlines("a\n\n\n\nb"), "a\nb");
        assert_eq!(collapse_newlines("\n\na\n"), "\na\n");
        assert_eq!(collapse_newlines("a\nb"), "a\nb");
        assert_eq!(collapse_newlines(""), "");
    }

    #[test]
    fn test_normalize_whitespace_line() {
        assert_eq!(normalize("a\n   \nb"), "<p>a</p>\n<p>b</p>");
    }

    #[test]
    fn test_normalize_three_blank_lines() {
        assert_eq!(normalize("one\n\n\n\ntwo"), "<p>one</p>\n<p>two</p>");
    }
}
