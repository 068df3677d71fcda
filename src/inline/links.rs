//! Inline links: `[text](url)`.
//!
//! The text is one or more characters other than `]`, the URL one or more
//! characters other than `)`. Both may contain newlines. Nothing is
//! re-escaped; the URL comes from already escaped text.

use std::ops::Range;

use memchr::memchr;

use crate::HtmlWriter;

/// A resolved link, as byte ranges into the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Position of the opening `[`.
    pub start: usize,
    /// Link body, between `[` and `]`.
    pub text: Range<usize>,
    /// Destination, between `(` and `)`.
    pub url: Range<usize>,
    /// Position after the closing `)`.
    pub end: usize,
}

/// Find all non-overlapping links, left to right.
pub fn resolve_links(text: &str) -> Vec<Link> {
    let bytes = text.as_bytes();
    let mut links = Vec::new();
    let mut pos = 0;

    while let Some(offset) = memchr(b'[', &bytes[pos..]) {
        let start = pos + offset;

        // Without a later `]`, no opener from here on can form a link.
        if memchr(b']', &bytes[start..]).is_none() {
            break;
        }

        match parse_link_at(bytes, start) {
            Some(link) => {
                pos = link.end;
                links.push(link);
            }
            None => pos = start + 1,
        }
    }

    links
}

/// Parse a link whose `[` is at `start`.
///
/// The body ends at the first `]` and the destination at the first `)`;
/// neither may be empty, and `(` must follow `]` directly.
fn parse_link_at(bytes: &[u8], start: usize) -> Option<Link> {
    let text_start = start + 1;
    let text_end = text_start + memchr(b']', &bytes[text_start..])?;
    if text_end == text_start || bytes.get(text_end + 1) != Some(&b'(') {
        return None;
    }

    let url_start = text_end + 2;
    let url_end = url_start + memchr(b')', &bytes[url_start..])?;
    if url_end == url_start {
        return None;
    }

    Some(Link {
        start,
        text: text_start..text_end,
        url: url_start..url_end,
        end: url_end + 1,
    })
}

/// Replace every link with an anchor element.
pub fn apply_links(text: &str) -> String {
    let links = resolve_links(text);
    if links.is_empty() {
        return text.to_owned();
    }

    let mut writer = HtmlWriter::with_capacity_for(text.len());
    let mut copied = 0;
    for link in &links {
        writer.write_str(&text[copied..link.start]);
        writer.link_start(&text[link.url.clone()]);
        writer.write_str(&text[link.text.clone()]);
        writer.link_end();
        copied = link.end;
    }
    writer.write_str(&text[copied..]);

    writer.into_string()
}
