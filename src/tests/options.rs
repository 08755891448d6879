use super::*;
use crate::EmptyElementSuffix;
use pretty_assertions::assert_eq;

#[test]
fn defaults_match_the_classic_dialect() {
    let options = Options::default();
    assert_eq!(options.empty_element_suffix, EmptyElementSuffix::Xhtml);
    assert_eq!(options.tab_width, 4);
    assert_eq!(options.max_nesting_depth, 6);
    assert!(options.link_emails);
    assert!(!options.strict_bold_italic);
    assert!(!options.auto_newlines);
    assert!(!options.auto_hyperlink);
    assert!(!options.encode_problem_url_characters);
}

#[test]
fn empty_element_suffix_switches_output_style() {
    html("* * *", "<hr />\n");
    html_opts("* * *", "<hr>\n", |o| {
        o.empty_element_suffix = EmptyElementSuffix::Html
    });
    html_opts("a  \nb", "<p>a<br>\nb</p>\n", |o| {
        o.empty_element_suffix = EmptyElementSuffix::Html
    });
    html_opts(
        "![i](/p.png)",
        "<p><img src=\"/p.png\" alt=\"i\"></p>\n",
        |o| o.empty_element_suffix = EmptyElementSuffix::Html,
    );
}

#[test]
fn auto_newlines_make_every_newline_a_break() {
    html("Line1\nLine2", "<p>Line1\nLine2</p>\n");
    html_opts("Line1\nLine2", "<p>Line1<br />\nLine2</p>\n", |o| {
        o.auto_newlines = true
    });
}

#[test]
fn tab_width_governs_code_block_indent() {
    html("\tcode", "<pre><code>code\n</code></pre>\n");
    html_opts("    code", "<p>code</p>\n", |o| o.tab_width = 8);
    html_opts("\tcode", "<pre><code>code\n</code></pre>\n", |o| {
        o.tab_width = 8
    });
}

#[cfg(feature = "bon")]
#[test]
fn options_build_with_the_builder() {
    let options = Options::builder().strict_bold_italic(true).build();
    assert!(options.strict_bold_italic);
    assert_eq!(options.tab_width, 4);
    assert!(options.link_emails);

    let options = Options::builder().build();
    assert_eq!(options.max_nesting_depth, 6);
}
