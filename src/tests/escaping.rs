use super::*;

#[test]
fn backslash_escaped_backticks() {
    html("\\`foo\\`", "<p>`foo`</p>\n");
}

#[test]
fn every_protected_character_escapes_to_itself() {
    for c in r"\`*_{}[]()>#+-.!".chars() {
        let input = format!("\\{}", c);
        let expected = format!("<p>{}</p>\n", c);
        html(&input, &expected);
    }
}

#[test]
fn escaped_brackets_do_not_link() {
    html(
        "\\[not\\](/a)",
        "<p>[not](/a)</p>\n",
    );
}

#[test]
fn double_backslash_keeps_one() {
    html("a \\\\ b", "<p>a \\ b</p>\n");
}

#[test]
fn ampersands_and_angles_encode() {
    html("AT&T and 1 < 2", "<p>AT&amp;T and 1 &lt; 2</p>\n");
    html("&copy; stays, &#169; stays", "<p>&copy; stays, &#169; stays</p>\n");
}
