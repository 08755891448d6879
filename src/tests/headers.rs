use super::*;

#[test]
fn atx_and_setext_h1() {
    html(
        "#Header 1\nHeader 1\n========",
        "<h1>Header 1</h1>\n\n<h1>Header 1</h1>\n",
    );
}

#[test]
fn atx_and_setext_h2() {
    html(
        "##Header 2\nHeader 2\n--------",
        "<h2>Header 2</h2>\n\n<h2>Header 2</h2>\n",
    );
}

#[test]
fn single_atx_header() {
    html("# Header\n", "<h1>Header</h1>\n");
    html("### Third\n", "<h3>Third</h3>\n");
    html("###### Sixth\n", "<h6>Sixth</h6>\n");
}

#[test]
fn trailing_hashes_are_stripped() {
    html("## Two ##", "<h2>Two</h2>\n");
    html("# One ####", "<h1>One</h1>\n");
}

#[test]
fn setext_underline_beats_horizontal_rule() {
    html("Para\n---", "<h2>Para</h2>\n");
}

#[test]
fn header_text_runs_through_spans() {
    html("# *Em* text", "<h1><em>Em</em> text</h1>\n");
    html("## `code` here", "<h2><code>code</code> here</h2>\n");
}

#[test]
fn header_then_paragraph() {
    html("# H\n\nbody", "<h1>H</h1>\n\n<p>body</p>\n");
}
