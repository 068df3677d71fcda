//! Block structure recognition.
//!
//! Line-oriented rewriting of the escaped document text. Each rule is a
//! full pass over the text, and the passes run in a fixed order:
//! - Setext headings (`=` underline, then `-` underline)
//! - ATX headings, from `### ` down to `# `
//! - List items (`* `)
//!
//! A line rewritten by one rule starts with `<` afterwards, and since the
//! input was escaped no other line can, so later rules never see it again.

mod heading;
mod list;

pub use heading::{is_underline, rewrite_setext};
pub use list::{is_list_item, wrap_lists};

use crate::HtmlWriter;

/// Element produced by a prefix rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    /// Heading of the given level (1-6).
    Heading(u8),
    /// Unordered list item.
    ListItem,
}

impl BlockTag {
    fn open(self, writer: &mut HtmlWriter) {
        match self {
            Self::Heading(level) => writer.heading_start(level),
            Self::ListItem => writer.li_start(),
        }
    }

    fn close(self, writer: &mut HtmlWriter) {
        match self {
            Self::Heading(level) => writer.heading_end(level),
            Self::ListItem => writer.li_end(),
        }
    }
}

/// Line-prefix rules, in application order.
///
/// `### ` must come before `## ` and `# `: the rules are applied one
/// after another, and the longer marker has to be claimed first.
pub const PREFIX_RULES: [(&str, BlockTag); 4] = [
    ("### ", BlockTag::Heading(3)),
    ("## ", BlockTag::Heading(2)),
    ("# ", BlockTag::Heading(1)),
    ("* ", BlockTag::ListItem),
];

/// Recognize headings and list items in escaped text.
pub fn recognize_blocks(text: &str) -> String {
    let text = rewrite_setext(text, b'=', 1);
    let mut text = rewrite_setext(&text, b'-', 2);
    for (prefix, tag) in PREFIX_RULES {
        text = rewrite_prefixed(&text, prefix, tag);
    }
    text
}

/// Rewrite every line that starts with `prefix` and has at least one
/// character after it; the prefix is stripped and the rest wrapped in `tag`.
pub fn rewrite_prefixed(text: &str, prefix: &str, tag: BlockTag) -> String {
    let mut writer = HtmlWriter::with_capacity_for(text.len());

    for line in text.split('\n') {
        writer.start_line();
        match line.strip_prefix(prefix) {
            Some(rest) if !rest.is_empty() => {
                tag.open(&mut writer);
                writer.write_str(rest);
                tag.close(&mut writer);
            }
            _ => writer.write_str(line),
        }
    }

    writer.into_string()
}
