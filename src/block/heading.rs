//! Setext and ATX heading recognition.

use crate::HtmlWriter;

/// Rewrite setext headings underlined with `marker`.
///
/// A non-blank line directly followed by a line made only of `marker`
/// (trailing whitespace allowed) becomes an `<hN>` element and the
/// underline is consumed. Scanning resumes after the underline, so
/// `A\n===\n===` yields one heading followed by a literal `===`.
pub fn rewrite_setext(text: &str, marker: u8, level: u8) -> String {
    let mut writer = HtmlWriter::with_capacity_for(text.len());
    let mut lines = text.split('\n').peekable();

    while let Some(line) = lines.next() {
        writer.start_line();
        let underlined = !is_blank(line)
            && lines
                .peek()
                .is_some_and(|next| is_underline(next, marker));

        if underlined {
            lines.next();
            writer.heading_start(level);
            writer.write_str(line);
            writer.heading_end(level);
        } else {
            writer.write_str(line);
        }
    }

    writer.into_string()
}

/// Check if a line is a setext underline: one or more `marker` bytes,
/// then optional whitespace.
#[inline]
pub fn is_underline(line: &str, marker: u8) -> bool {
    let body = line.trim_ascii_end();
    !body.is_empty() && body.bytes().all(|b| b == marker)
}

#[inline]
fn is_blank(line: &str) -> bool {
    line.trim_ascii().is_empty()
}
