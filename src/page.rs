//! Page shell around a rendered fragment.
//!
//! The transformer itself knows nothing about pages. It only calls a
//! [`StyleHook`] once a parse completes, so that whoever owns the page
//! can add the markdown stylesheet when the document is finished.

use html_escape::{encode_double_quoted_attribute, encode_text};

/// Stylesheet for rendered markdown content.
///
/// Colors come from the page theme variables, with defaults for pages
/// that do not define them.
pub const MARKDOWN_CSS: &str = "\
.markdown-content h1 {
    font-size: 2.5em;
    margin: 1.5em 0 0.5em;
    padding-bottom: 0.3em;
    border-bottom: 2px solid var(--theme-start, #4a90e2);
}
.markdown-content h2 {
    font-size: 2em;
    margin: 1.3em 0 0.5em;
    padding-bottom: 0.2em;
    border-bottom: 1px solid var(--theme-end, #357abd);
}
.markdown-content h3 {
    font-size: 1.5em;
    margin: 1em 0 0.5em;
}
.markdown-content ul {
    padding-left: 2em;
    margin: 1em 0;
}
.markdown-content li {
    margin: 0.5em 0;
    line-height: 1.6;
}
.markdown-content p {
    margin: 1em 0;
    line-height: 1.6;
}
";

/// Receiver for the end-of-parse styling notification.
pub trait StyleHook {
    /// Called once per completed parse.
    fn register_markdown_styles(&mut self);
}

/// No-op hook for callers without a page.
impl StyleHook for () {
    fn register_markdown_styles(&mut self) {}
}

/// Styles requested for a page while its content was produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageStyles {
    markdown: bool,
}

impl PageStyles {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether markdown content was rendered into the page.
    pub fn has_markdown(&self) -> bool {
        self.markdown
    }

    /// The stylesheet to emit, if any.
    pub fn stylesheet(&self) -> Option<&'static str> {
        self.markdown.then_some(MARKDOWN_CSS)
    }
}

impl StyleHook for PageStyles {
    fn register_markdown_styles(&mut self) {
        self.markdown = true;
    }
}

/// Page-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    /// Site name, shown before the page title.
    pub site_title: String,
    /// Value of the `lang` attribute.
    pub lang: String,
    /// Class of the element holding the content.
    pub content_class: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            site_title: "My Website".to_owned(),
            lang: "en".to_owned(),
            content_class: "markdown-content".to_owned(),
        }
    }
}

impl PageOptions {
    /// Set the site title.
    pub fn with_site_title(mut self, site_title: impl Into<String>) -> Self {
        self.site_title = site_title.into();
        self
    }

    /// Set the document language.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Set the content element class.
    pub fn with_content_class(mut self, class: impl Into<String>) -> Self {
        self.content_class = class.into();
        self
    }
}

/// A single page being assembled.
///
/// Build one per request; the style record is per page and must not be
/// shared between concurrent renders.
#[derive(Debug, Clone, Default)]
pub struct Page {
    options: PageOptions,
    title: String,
    content: String,
    styles: PageStyles,
}

impl Page {
    /// Create an empty page.
    pub fn new(options: PageOptions) -> Self {
        Self {
            options,
            title: String::new(),
            content: String::new(),
            styles: PageStyles::new(),
        }
    }

    /// Page title (without the site title).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the page title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Content region so far.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Append an HTML fragment to the content region.
    pub fn push_content(&mut self, html: &str) {
        self.content.push_str(html);
    }

    /// Styles registered so far.
    pub fn styles(&self) -> &PageStyles {
        &self.styles
    }

    /// Page options.
    pub fn options(&self) -> &PageOptions {
        &self.options
    }

    /// Take the content region only, without the document shell.
    pub fn into_content(self) -> String {
        self.content
    }

    /// Emit the complete HTML document.
    pub fn finish(self) -> String {
        let site_title = encode_text(&self.options.site_title);
        let title = if self.title.is_empty() {
            site_title.into_owned()
        } else {
            format!("{site_title} - {}", encode_text(&self.title))
        };

        let mut out = String::with_capacity(self.content.len() + 512);
        out.push_str("<!DOCTYPE html>\n<html lang=\"");
        out.push_str(&encode_double_quoted_attribute(&self.options.lang));
        out.push_str("\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        out.push_str("<title>");
        out.push_str(&title);
        out.push_str("</title>\n");
        if let Some(css) = self.styles.stylesheet() {
            out.push_str("<style>\n");
            out.push_str(css);
            out.push_str("</style>\n");
        }
        out.push_str("</head>\n<body>\n<div class=\"");
        out.push_str(&encode_double_quoted_attribute(&self.options.content_class));
        out.push_str("\">\n");
        out.push_str(&self.content);
        if !self.content.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("</div>\n</body>\n</html>\n");
        out
    }
}

impl StyleHook for Page {
    fn register_markdown_styles(&mut self) {
        self.styles.register_markdown_styles();
    }
}
