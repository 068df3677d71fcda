//! tidemark: small Markdown dialect to HTML fragment compiler.
//!
//! Converts headings (`#`, `##`, `###` and `=`/`-` underlines), `* ` list
//! items, `**strong**`, `*emphasis*`, `[links](url)` and paragraphs into
//! an HTML fragment meant for an existing page body.
//!
//! # Pipeline
//! Five whole-text stages, each consuming the full output of the previous:
//! 1. Escape HTML metacharacters in the raw input
//! 2. Recognize headings and list items, line by line
//! 3. Wrap runs of list items in `<ul>`
//! 4. Apply strong, emphasis and link substitutions
//! 5. Wrap remaining lines in `<p>`, drop empty paragraphs, collapse newlines
//!
//! The order is load-bearing: headings must exist before paragraph
//! wrapping, and strong before emphasis. Rendering never fails; malformed
//! delimiters degrade to plain text or mismatched-but-harmless tags.
//! Applying the transformer to its own output is not meaningful.

pub mod block;
pub mod escape;
pub mod inline;
pub mod loader;
pub mod page;
pub mod paragraph;
pub mod render;
pub mod report;

// Re-export primary types
pub use loader::{load_bytes, load_into_page, load_page, LoadError, MarkdownPage};
pub use page::{Page, PageOptions, PageStyles, StyleHook};
pub use render::HtmlWriter;
pub use report::{ErrorReporter, ReportError};

/// A pipeline stage: whole text in, whole text out.
type Stage = fn(&str) -> String;

/// The stages, in execution order.
const PIPELINE: [(&str, Stage); 5] = [
    ("escape", escape::escape),
    ("blocks", block::recognize_blocks),
    ("lists", block::wrap_lists),
    ("inline", inline::format_inline),
    ("paragraphs", paragraph::normalize),
];

/// Convert Markdown to an HTML fragment.
///
/// # Example
/// ```
/// let html = tidemark::to_html("# Hello\n\nWorld");
/// assert_eq!(html, "<h1>Hello</h1>\n<p>World</p>");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_hook(input, &mut ())
}

/// Convert Markdown to an HTML fragment and notify `hook` that markdown
/// styles are needed.
///
/// The hook fires exactly once, after the last stage.
pub fn to_html_with_hook<H>(input: &str, hook: &mut H) -> String
where
    H: StyleHook + ?Sized,
{
    let mut text = input.to_owned();
    for (name, stage) in PIPELINE {
        text = stage(&text);
        log::trace!("after {name}: {text:?}");
    }
    hook.register_markdown_styles();
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_order() {
        let names: Vec<&str> = PIPELINE.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["escape", "blocks", "lists", "inline", "paragraphs"]);
    }

    #[test]
    fn test_hook_called_once() {
        struct Counter(usize);

        impl StyleHook for Counter {
            fn register_markdown_styles(&mut self) {
                self.0 += 1;
            }
        }

        let mut counter = Counter(0);
        to_html_with_hook("a", &mut counter);
        assert_eq!(counter.0, 1);
        to_html_with_hook("", &mut counter);
        assert_eq!(counter.0, 2);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_html(""), "");
    }
}
