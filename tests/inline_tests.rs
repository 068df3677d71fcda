use tidemark::to_html;

// Strong and emphasis

#[test]
fn adjacent_strong_spans() {
    let result = to_html("**x**y**z**");
    assert_eq!(result, "<p><strong>x</strong>y<strong>z</strong></p>");
}

#[test]
fn adjacent_emphasis_spans() {
    let result = to_html("*a* *b*");
    assert_eq!(result, "<p><em>a</em> <em>b</em></p>");
}

#[test]
fn strong_then_emphasis() {
    let result = to_html("**a**b*c*");
    assert_eq!(result, "<p><strong>a</strong>b<em>c</em></p>");
}

#[test]
fn lone_trailing_star() {
    let result = to_html("text*");
    assert_eq!(result, "<p>text*</p>");
}

#[test]
fn emphasis_across_lines_mismatches_tags() {
    let result = to_html("*\n*");
    assert_eq!(result, "<p><em></p>\n<p></em></p>");
}

// Links

#[test]
fn two_links_on_one_line() {
    let result = to_html("[a](b) [c](d)");
    assert_eq!(result, "<p><a href=\"b\">a</a> <a href=\"d\">c</a></p>");
}

#[test]
fn url_ends_at_first_paren() {
    let result = to_html("[a](b)c)");
    assert_eq!(result, "<p><a href=\"b\">a</a>c)</p>");
}

#[test]
fn quote_in_url_is_escaped() {
    let result = to_html("[a](b\"c)");
    assert_eq!(result, "<p><a href=\"b&quot;c\">a</a></p>");
}

#[test]
fn existing_entity_is_escaped_again() {
    let result = to_html("&amp;");
    assert_eq!(result, "<p>&amp;amp;</p>");
}
