//! Inline formatting.
//!
//! Three whole-text passes, in this order:
//! 1. Strong emphasis (`**`)
//! 2. Emphasis (`*`)
//! 3. Links (`[text](url)`)
//!
//! Strong must run first: the single-asterisk pass would otherwise split
//! every `**` pair into two mismatched `<em>` tags.

mod emphasis;
mod links;

pub use emphasis::{apply_emphasis, resolve_emphasis, Emphasis, EmphasisMatch};
pub use links::{apply_links, resolve_links, Link};

/// Apply strong, emphasis and link substitutions across the whole text.
pub fn format_inline(text: &str) -> String {
    let text = apply_emphasis(text, Emphasis::Strong);
    let text = apply_emphasis(&text, Emphasis::Regular);
    apply_links(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_then_italic() {
        assert_eq!(
            format_inline("**bold** and *italic*"),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn test_italic_inside_bold() {
        assert_eq!(
            format_inline("**a *b* c**"),
            "<strong>a <em>b</em> c</strong>"
        );
    }

    #[test]
    fn test_emphasis_in_link_text() {
        assert_eq!(
            format_inline("[**go**](/x)"),
            "<a href=\"/x\"><strong>go</strong></a>"
        );
    }

    #[test]
    fn test_spans_cross_block_tags() {
        assert_eq!(
            format_inline("<li>*a</li>\n<li>b*</li>"),
            "<li><em>a</li>\n<li>b</em></li>"
        );
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(format_inline("nothing here"), "nothing here");
    }
}
