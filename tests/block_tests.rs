use tidemark::to_html;

// Headings

#[test]
fn setext_level_one() {
    let result = to_html("Title\n=====");
    assert_eq!(result, "<h1>Title</h1>");
}

#[test]
fn setext_level_two_single_marker() {
    let result = to_html("a\n-\nb");
    assert_eq!(result, "<h2>a</h2>\n<p>b</p>");
}

#[test]
fn setext_title_keeps_trailing_spaces() {
    let result = to_html("Title  \n==");
    assert_eq!(result, "<h1>Title  </h1>");
}

#[test]
fn setext_needs_non_blank_title() {
    let result = to_html("  \n===");
    assert_eq!(result, "\n<p>===</p>");
}

#[test]
fn setext_followed_by_list() {
    let result = to_html("Setext\n---\n* item");
    assert_eq!(result, "<h2>Setext</h2>\n<ul>\n<li>item</li>\n</ul>");
}

#[test]
fn atx_heading_formats_inline() {
    let result = to_html("# *x*");
    assert_eq!(result, "<h1><em>x</em></h1>");
}

#[test]
fn atx_heading_with_link() {
    let result = to_html("## *a* [b](c)");
    assert_eq!(result, "<h2><em>a</em> <a href=\"c\">b</a></h2>");
}

#[test]
fn four_hashes_is_paragraph() {
    let result = to_html("#### Fourth");
    assert_eq!(result, "<p>#### Fourth</p>");
}

#[test]
fn bare_prefix_is_not_heading() {
    let result = to_html("# ");
    assert_eq!(result, "<p># </p>");
}

// Lists

#[test]
fn list_after_paragraph() {
    let result = to_html("x\n* a");
    assert_eq!(result, "<p>x</p>\n<ul>\n<li>a</li>\n</ul>");
}

#[test]
fn list_after_setext_heading() {
    let result = to_html("Title\n===\n* a\n* b");
    assert_eq!(result, "<h1>Title</h1>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
}

#[test]
fn heading_splits_list() {
    let result = to_html("* a\n## h\n* b");
    assert_eq!(
        result,
        "<ul>\n<li>a</li>\n</ul>\n<h2>h</h2>\n<ul>\n<li>b</li>\n</ul>"
    );
}

#[test]
fn closing_ul_never_wrapped_in_paragraph() {
    let result = to_html("\n* a\n* b\n\nafter");
    assert_eq!(result, "\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<p>after</p>");
    assert!(!result.contains("<p></ul>"));
}

#[test]
fn trailing_blank_lines_after_list() {
    let result = to_html("* a\n* b\n\n\n\n");
    assert_eq!(result, "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
}

#[test]
fn empty_item_is_paragraph() {
    let result = to_html("x\n* \ny");
    assert_eq!(result, "<p>x</p>\n<p>* </p>\n<p>y</p>");
}

#[test]
fn item_with_emphasis() {
    let result = to_html("* *x*");
    assert_eq!(result, "<ul>\n<li><em>x</em></li>\n</ul>");
}

#[test]
fn literal_closing_ul_is_escaped() {
    let result = to_html("* a\n</ul>");
    assert_eq!(result, "<ul>\n<li>a</li>\n</ul>\n<p>&lt;/ul&gt;</p>");
}
