use regex::Regex;
use std::sync::LazyLock;

static WS_ONLY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]+$").expect("whitespace-line pattern"));

pub(crate) fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Expands every tab to spaces, aligning each to the next tab stop.
pub(crate) fn detab(text: &str, tab_width: usize) -> String {
    if !text.contains('\t') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut col = 0;
    for ch in text.chars() {
        match ch {
            '\n' => {
                out.push('\n');
                col = 0;
            }
            '\t' => {
                let pad = tab_width - col % tab_width;
                for _ in 0..pad {
                    out.push(' ');
                }
                col += pad;
            }
            ch => {
                out.push(ch);
                col += 1;
            }
        }
    }
    out
}

/// Empties lines consisting only of spaces and tabs, so later passes can
/// treat any `\n\n` as a block boundary.
pub(crate) fn blank_whitespace_lines(text: &str) -> String {
    WS_ONLY_LINE.replace_all(text, "").into_owned()
}

/// Removes one level of indentation: a leading tab, or up to `tab_width`
/// leading spaces, from every line.
pub(crate) fn outdent(text: &str, tab_width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if let Some(rest) = line.strip_prefix('\t') {
            out.push_str(rest);
        } else {
            let n = line
                .bytes()
                .take_while(|&b| b == b' ')
                .count()
                .min(tab_width);
            out.push_str(&line[n..]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{blank_whitespace_lines, detab, normalize_newlines, outdent};

    #[test]
    fn detab_aligns_to_tab_stops() {
        assert_eq!(detab("\tx", 4), "    x");
        assert_eq!(detab("ab\tx", 4), "ab  x");
        assert_eq!(detab("abcd\tx", 4), "abcd    x");
        assert_eq!(detab("a\tb\tc", 4), "a   b   c");
    }

    #[test]
    fn detab_resets_at_newlines() {
        assert_eq!(detab("ab\t\ncd\tx", 4), "ab  \ncd  x");
    }

    #[test]
    fn outdent_removes_one_level() {
        assert_eq!(outdent("    a\n\tb\n  c\nd", 4), "a\nb\nc\nd");
        assert_eq!(outdent("        a", 4), "    a");
    }

    #[test]
    fn newline_normalization() {
        assert_eq!(normalize_newlines("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn whitespace_lines_become_empty() {
        assert_eq!(blank_whitespace_lines("a\n   \t\nb\n"), "a\n\nb\n");
    }
}
