use super::*;

#[test]
fn reference_link() {
    html(
        "This is [a link][1].\n\n  [1]: http://www.example.com",
        "<p>This is <a href=\"http://www.example.com\">a link</a>.</p>\n",
    );
}

#[test]
fn inline_link() {
    html(
        "Have you visited [example](http://www.example.com) before?",
        "<p>Have you visited <a href=\"http://www.example.com\">example</a> before?</p>\n",
    );
}

#[test]
fn inline_link_with_title() {
    html(
        "[ex](http://x \"The Title\")",
        "<p><a href=\"http://x\" title=\"The Title\">ex</a></p>\n",
    );
}

#[test]
fn reference_definition_titles() {
    html(
        "[a][1]\n\n[1]: http://x \"T\"",
        "<p><a href=\"http://x\" title=\"T\">a</a></p>\n",
    );
    // title on the following line
    html(
        "[a][1]\n\n[1]: http://x\n    \"T\"",
        "<p><a href=\"http://x\" title=\"T\">a</a></p>\n",
    );
}

#[test]
fn angle_bracketed_targets() {
    html("[a](</url>)", "<p><a href=\"/url\">a</a></p>\n");
    html(
        "[a](<http://x>)\n\n[b]: <http://y>\n\n[b][]",
        "<p><a href=\"http://x\">a</a></p>\n\n<p><a href=\"http://y\">b</a></p>\n",
    );
}

#[test]
fn reference_ids_are_case_insensitive() {
    html(
        "[link][A]\n\n[a]: /url",
        "<p><a href=\"/url\">link</a></p>\n",
    );
}

#[test]
fn later_definitions_win() {
    html(
        "[x][1]\n\n[1]: /first\n[1]: /second",
        "<p><a href=\"/second\">x</a></p>\n",
    );
}

#[test]
fn unresolved_ids_render_literally() {
    html("[link][nope]", "<p>[link][nope]</p>\n");
    html("![alt][nope]", "<p>![alt][nope]</p>\n");
}

#[test]
fn shortcut_reference() {
    html(
        "[Google]\n\n[google]: http://google.com",
        "<p><a href=\"http://google.com\">Google</a></p>\n",
    );
}

#[test]
fn empty_reference_id_uses_the_text() {
    html(
        "[this][]\n\n[this]: /u",
        "<p><a href=\"/u\">this</a></p>\n",
    );
}

#[test]
fn brackets_nest_in_link_text() {
    html("[a[b]c](/u)", "<p><a href=\"/u\">a[b]c</a></p>\n");
}

#[test]
fn nesting_past_the_depth_limit_is_literal() {
    html(
        "[a[b[c[d[e[f[g]]]]]]](x)",
        "<p><a href=\"x\">a[b[c[d[e[f[g]]]]]]</a></p>\n",
    );
    html_opts(
        "[a[b[c[d[e[f[g]]]]]]](x)",
        "<p>[a[b[c[d[e[f[g]]]]]]](x)</p>\n",
        |o| o.max_nesting_depth = 2,
    );
}

#[test]
fn reference_image() {
    html(
        "An image goes here: ![alt text][1]\n\n  [1]: http://www.google.com/intl/en_ALL/images/logo.gif",
        "<p>An image goes here: <img src=\"http://www.google.com/intl/en_ALL/images/logo.gif\" alt=\"alt text\" /></p>\n",
    );
}

#[test]
fn inline_image_with_title() {
    html(
        "![alt](http://x/i.png \"T\")",
        "<p><img src=\"http://x/i.png\" alt=\"alt\" title=\"T\" /></p>\n",
    );
}

#[test]
fn image_alt_quotes_are_encoded() {
    html(
        "![a \"b\"](/i.png)",
        "<p><img src=\"/i.png\" alt=\"a &quot;b&quot;\" /></p>\n",
    );
}

#[test]
fn problem_url_characters_encode_on_request() {
    html("[a](/foo(bar))", "<p><a href=\"/foo(bar)\">a</a></p>\n");
    html_opts(
        "[a](/foo(bar))",
        "<p><a href=\"/foo%28bar%29\">a</a></p>\n",
        |o| o.encode_problem_url_characters = true,
    );
}

#[test]
fn link_text_emphasis_still_applies() {
    html(
        "[*em* text](/u)",
        "<p><a href=\"/u\"><em>em</em> text</a></p>\n",
    );
}
