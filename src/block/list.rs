//! Unordered list items and their `<ul>` containers.

use crate::HtmlWriter;

/// Wrap every maximal run of list-item lines in a `<ul>` container.
///
/// The container tags get lines of their own, directly before the first
/// item and directly after the last. Any other line ends the run, blank
/// lines included, so two runs are never merged into one list.
pub fn wrap_lists(text: &str) -> String {
    let mut writer = HtmlWriter::with_capacity_for(text.len());
    let mut in_list = false;

    for line in text.split('\n') {
        let item = is_list_item(line);
        if item != in_list {
            writer.start_line();
            if item {
                writer.ul_start();
            } else {
                writer.ul_end();
            }
            in_list = item;
        }
        writer.start_line();
        writer.write_str(line);
    }

    if in_list {
        writer.start_line();
        writer.ul_end();
    }

    writer.into_string()
}

/// Check if a line is a complete list-item element.
#[inline]
pub fn is_list_item(line: &str) -> bool {
    line.starts_with("<li>") && line.ends_with("</li>")
}
