//! Strong and regular emphasis.
//!
//! Delimiters pair up leftmost-first with the shortest non-empty span
//! between them. Spans may cross line breaks and block tags; there is no
//! flanking check and no escaping, so a stray `*` used as a multiplication
//! sign pairs with the next one.

use memchr::memmem;

use crate::HtmlWriter;

/// Emphasis flavour, selected by delimiter length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// `**text**` → `<strong>`
    Strong,
    /// `*text*` → `<em>`
    Regular,
}

impl Emphasis {
    /// Delimiter that opens and closes this kind of span.
    pub fn delimiter(self) -> &'static str {
        match self {
            Self::Strong => "**",
            Self::Regular => "*",
        }
    }

    fn open(self, writer: &mut HtmlWriter) {
        match self {
            Self::Strong => writer.strong_start(),
            Self::Regular => writer.em_start(),
        }
    }

    fn close(self, writer: &mut HtmlWriter) {
        match self {
            Self::Strong => writer.strong_end(),
            Self::Regular => writer.em_end(),
        }
    }
}

/// A matched opener/closer pair, as byte offsets into the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmphasisMatch {
    /// Start of the opening delimiter.
    pub opener_start: usize,
    /// Start of the enclosed content.
    pub content_start: usize,
    /// Start of the closing delimiter (end of content).
    pub closer_start: usize,
    /// End of the closing delimiter.
    pub closer_end: usize,
}

/// Find all non-overlapping delimiter pairs for `kind`, left to right.
pub fn resolve_emphasis(text: &str, kind: Emphasis) -> Vec<EmphasisMatch> {
    let bytes = text.as_bytes();
    let delim = kind.delimiter().as_bytes();
    let finder = memmem::Finder::new(delim);
    let mut matches = Vec::new();
    let mut pos = 0;

    while let Some(offset) = finder.find(&bytes[pos..]) {
        let opener_start = pos + offset;
        let content_start = opener_start + delim.len();

        // Content must be non-empty, so the closer starts one byte later at
        // the earliest. `*` is ASCII, so any hit is on a char boundary.
        let search_from = content_start + 1;
        let Some(closer_offset) = bytes.get(search_from..).and_then(|rest| finder.find(rest))
        else {
            // A later opener would only search a suffix of this range.
            break;
        };

        let closer_start = search_from + closer_offset;
        let closer_end = closer_start + delim.len();
        matches.push(EmphasisMatch {
            opener_start,
            content_start,
            closer_start,
            closer_end,
        });
        pos = closer_end;
    }

    matches
}

/// Replace every delimiter pair of `kind` with its HTML element.
pub fn apply_emphasis(text: &str, kind: Emphasis) -> String {
    let matches = resolve_emphasis(text, kind);
    if matches.is_empty() {
        return text.to_owned();
    }

    let mut writer = HtmlWriter::with_capacity_for(text.len());
    let mut copied = 0;
    for m in &matches {
        writer.write_str(&text[copied..m.opener_start]);
        kind.open(&mut writer);
        writer.write_str(&text[m.content_start..m.closer_start]);
        kind.close(&mut writer);
        copied = m.closer_end;
    }
    writer.write_str(&text[copied..]);

    writer.into_string()
}
