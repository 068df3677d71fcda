//! HTML output writer shared by every pipeline stage.
//!
//! Each stage rebuilds the whole document text, so the writer is
//! pre-sized from the input length and only ever appends.

/// Line-aware HTML output writer.
///
/// # Example
/// ```
/// use tidemark::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(32);
/// writer.paragraph_start();
/// writer.write_str("Hello");
/// writer.paragraph_end();
///
/// assert_eq!(writer.into_string(), "<p>Hello</p>");
/// ```
#[derive(Debug)]
pub struct HtmlWriter {
    out: String,
    /// Lines started with `start_line`.
    lines: usize,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Markup adds roughly a quarter on top of the text it wraps.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self::with_capacity(input_len + input_len / 4)
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            lines: 0,
        }
    }

    /// Write a string verbatim.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write a single character.
    #[inline]
    pub fn write_char(&mut self, c: char) {
        self.out.push(c);
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Begin an output line.
    ///
    /// Writes the separating newline for every line but the first, so a
    /// stage that emits `n` lines produces exactly `n - 1` newlines.
    #[inline]
    pub fn start_line(&mut self) {
        if self.lines > 0 {
            self.newline();
        }
        self.lines += 1;
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    /// Write paragraph start: `<p>`
    #[inline]
    pub fn paragraph_start(&mut self) {
        self.write_str("<p>");
    }

    /// Write paragraph end: `</p>`
    #[inline]
    pub fn paragraph_end(&mut self) {
        self.write_str("</p>");
    }

    /// Write heading start: `<hN>`
    #[inline]
    pub fn heading_start(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.write_str("<h");
        self.write_char(char::from(b'0' + level));
        self.write_char('>');
    }

    /// Write heading end: `</hN>`
    #[inline]
    pub fn heading_end(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.write_str("</h");
        self.write_char(char::from(b'0' + level));
        self.write_char('>');
    }

    /// Write list start (unordered): `<ul>`
    #[inline]
    pub fn ul_start(&mut self) {
        self.write_str("<ul>");
    }

    /// Write list end (unordered): `</ul>`
    #[inline]
    pub fn ul_end(&mut self) {
        self.write_str("</ul>");
    }

    /// Write list item start: `<li>`
    #[inline]
    pub fn li_start(&mut self) {
        self.write_str("<li>");
    }

    /// Write list item end: `</li>`
    #[inline]
    pub fn li_end(&mut self) {
        self.write_str("</li>");
    }

    /// Write emphasis start: `<em>`
    #[inline]
    pub fn em_start(&mut self) {
        self.write_str("<em>");
    }

    /// Write emphasis end: `</em>`
    #[inline]
    pub fn em_end(&mut self) {
        self.write_str("</em>");
    }

    /// Write strong start: `<strong>`
    #[inline]
    pub fn strong_start(&mut self) {
        self.write_str("<strong>");
    }

    /// Write strong end: `</strong>`
    #[inline]
    pub fn strong_end(&mut self) {
        self.write_str("</strong>");
    }

    /// Write link start: `<a href="url">`
    ///
    /// The URL is written as-is. It comes from already escaped text, so it
    /// cannot contain a raw quote.
    #[inline]
    pub fn link_start(&mut self, url: &str) {
        self.write_str("<a href=\"");
        self.write_str(url);
        self.write_str("\">");
    }

    /// Write link end: `</a>`
    #[inline]
    pub fn link_end(&mut self) {
        self.write_str("</a>");
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_new() {
        let writer = HtmlWriter::new();
        assert_eq!(writer.as_str(), "");
        assert_eq!(writer.lines, 0);
    }

    #[test]
    fn test_writer_capacity() {
        let writer = HtmlWriter::with_capacity_for(1000);
        assert!(writer.out.capacity() >= 1250);
    }

    #[test]
    fn test_writer_paragraph() {
        let mut writer = HtmlWriter::new();
        writer.paragraph_start();
        writer.write_str("Hello");
        writer.paragraph_end();
        assert_eq!(writer.as_str(), "<p>Hello</p>");
    }

    #[test]
    fn test_writer_heading_levels() {
        for level in 1..=6 {
            let mut writer = HtmlWriter::new();
            writer.heading_start(level);
            writer.heading_end(level);
            let expected = format!("<h{level}></h{level}>");
            assert_eq!(writer.as_str(), expected);
        }
    }

    #[test]
    fn test_writer_list() {
        let mut writer = HtmlWriter::new();
        writer.ul_start();
        writer.li_start();
        writer.write_str("a");
        writer.li_end();
        writer.ul_end();
        assert_eq!(writer.as_str(), "<ul><li>a</li></ul>");
    }

    #[test]
    fn test_writer_link() {
        let mut writer = HtmlWriter::new();
        writer.link_start("https://example.com?a=1&amp;b=2");
        writer.write_str("link");
        writer.link_end();
        assert_eq!(
            writer.as_str(),
            "<a href=\"https://example.com?a=1&amp;b=2\">link</a>"
        );
    }

    #[test]
    fn test_writer_start_line() {
        let mut writer = HtmlWriter::new();
        writer.start_line();
        writer.write_str("one");
        writer.start_line();
        writer.start_line();
        writer.write_str("three");
        assert_eq!(writer.as_str(), "one\n\nthree");
    }
}
