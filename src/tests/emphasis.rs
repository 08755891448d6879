use super::*;

#[test]
fn bold() {
    html(
        "This is **bold**. This is also __bold__.",
        "<p>This is <strong>bold</strong>. This is also <strong>bold</strong>.</p>\n",
    );
}

#[test]
fn italic() {
    html(
        "This is *italic*. This is also _italic_.",
        "<p>This is <em>italic</em>. This is also <em>italic</em>.</p>\n",
    );
}

#[test]
fn bold_italic_nest() {
    html("***foo***", "<p><strong><em>foo</em></strong></p>\n");
}

#[test]
fn intraword_emphasis_in_loose_mode() {
    html(
        "before**bold**after before_italic_after",
        "<p>before<strong>bold</strong>after before<em>italic</em>after</p>\n",
    );
}

#[test]
fn strict_mode_requires_boundaries() {
    html_opts(
        "before*bold*after before_italic_after",
        "<p>before*bold*after before_italic_after</p>\n",
        |o| o.strict_bold_italic = true,
    );
    html_opts(
        "a **bold** word",
        "<p>a <strong>bold</strong> word</p>\n",
        |o| o.strict_bold_italic = true,
    );
    html_opts(
        "*start* of text",
        "<p><em>start</em> of text</p>\n",
        |o| o.strict_bold_italic = true,
    );
}

#[test]
fn unclosed_delimiters_stay_literal() {
    html("not **closed", "<p>not **closed</p>\n");
    html("stray * star", "<p>stray * star</p>\n");
}

#[test]
fn escaped_delimiters_stay_literal() {
    html("\\*not em\\*", "<p>*not em*</p>\n");
    html("\\_\\_not bold\\_\\_", "<p>__not bold__</p>\n");
}

#[test]
fn emphasis_spans_newlines() {
    html("*two\nlines*", "<p><em>two\nlines</em></p>\n");
}
