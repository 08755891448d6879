use super::*;
use ntest::timeout;
use pretty_assertions::assert_eq;

#[test]
#[timeout(10000)]
fn many_unclosed_brackets() {
    let input = "[".repeat(5000);
    let out = markdown_to_html(&input, &Options::default());
    assert!(out.ends_with('\n'));
    assert!(out.contains("[[["));
}

#[test]
#[timeout(10000)]
fn deep_bracket_nesting_renders_literally() {
    let input = format!("{}x{}", "[".repeat(100), "]".repeat(100));
    let out = markdown_to_html(&input, &Options::default());
    assert!(out.contains("[[["));
    assert!(out.contains("]]]"));
}

#[test]
#[timeout(10000)]
fn many_emphasis_openers() {
    let input = "*a ".repeat(3000);
    let out = markdown_to_html(&input, &Options::default());
    assert!(out.ends_with('\n'));
}

#[test]
#[timeout(10000)]
fn many_backtick_runs() {
    let input = "`a` ".repeat(3000);
    let out = markdown_to_html(&input, &Options::default());
    assert_eq!(out.matches("<code>a</code>").count(), 3000);
}

#[test]
#[timeout(10000)]
fn long_single_paragraph() {
    let input = "word ".repeat(20000);
    let out = markdown_to_html(&input, &Options::default());
    assert!(out.starts_with("<p>word word"));
}
