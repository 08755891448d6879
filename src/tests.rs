use crate::{markdown_to_html, Options};
use pretty_assertions::assert_eq;

mod core;
mod emphasis;
mod escaping;
mod headers;
mod links;
mod options;
mod pathological;

#[track_caller]
fn html(input: &str, expected: &str) {
    html_opts(input, expected, |_| ());
}

#[track_caller]
fn html_opts(input: &str, expected: &str, configure: impl FnOnce(&mut Options)) {
    let mut options = Options::default();
    configure(&mut options);
    assert_eq!(markdown_to_html(input, &options), expected);
}
