use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_input_is_a_bare_newline() {
    html("", "\n");
    html("   ", "\n");
    html("\n\n\n", "\n");
    html(" \t \n \t ", "\n");
}

#[test]
fn paragraphs_split_on_blank_lines() {
    html("a\n\nb", "<p>a</p>\n\n<p>b</p>\n");
    html("a\nstill a\n\nb", "<p>a\nstill a</p>\n\n<p>b</p>\n");
}

#[test]
fn line_endings_normalize() {
    html("a\r\n\r\nb", "<p>a</p>\n\n<p>b</p>\n");
    html("a\r\rb", "<p>a</p>\n\n<p>b</p>\n");
}

#[test]
fn trailing_spaces_break_lines() {
    html("line  \nbreak", "<p>line<br />\nbreak</p>\n");
    html("one space \nis not enough", "<p>one space \nis not enough</p>\n");
}

#[test]
fn leading_whitespace_never_reaches_the_paragraph() {
    html("  indented a bit", "<p>indented a bit</p>\n");
}

#[test]
fn scenarios_from_the_dialect() {
    html("This is **bold**.", "<p>This is <strong>bold</strong>.</p>\n");
    html("* * *", "<hr />\n");
    html(
        "[1]: http://example.com\n\n[link][1]",
        "<p><a href=\"http://example.com\">link</a></p>\n",
    );
    html("\\`foo\\`", "<p>`foo`</p>\n");
}

#[test]
fn transform_is_deterministic() {
    let input = "# h\n\n* a\n* b\n\n<x@y.com> and `code` and ![i][1]\n\n[1]: /pic";
    let options = Options::default();
    assert_eq!(
        markdown_to_html(input, &options),
        markdown_to_html(input, &options)
    );
}
