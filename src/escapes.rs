use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// The characters Markdown assigns meaning to, and which `\` can protect.
pub(crate) const SPECIAL_CHARS: &str = r"\`*_{}[]()>#+-.!";

// Each special character maps to an opaque placeholder that no other pass
// recognizes. The \x1A delimiters keep placeholders from being substrings
// of one another, so restoration order does not matter.
static PLACEHOLDERS: LazyLock<FxHashMap<char, String>> = LazyLock::new(|| {
    SPECIAL_CHARS
        .chars()
        .map(|c| (c, format!("\u{1A}{}\u{1A}", c as u32)))
        .collect()
});

pub(crate) fn placeholder(c: char) -> &'static str {
    PLACEHOLDERS[&c].as_str()
}

/// Hides `*` and `_` so the emphasis pass cannot see them.
pub(crate) fn escape_bold_italic(text: &str) -> String {
    text.replace('*', placeholder('*'))
        .replace('_', placeholder('_'))
}

/// Replaces each `\c` for a special character `c` with that character's
/// placeholder. Escaped backslashes go first so `\\*` keeps its asterisk.
pub(crate) fn encode_backslash_escapes(text: &str) -> String {
    let mut text = text.to_string();
    for c in SPECIAL_CHARS.chars() {
        let escaped = format!("\\{}", c);
        if text.contains(&escaped) {
            text = text.replace(&escaped, placeholder(c));
        }
    }
    text
}

/// Escapes code-span and code-block content: HTML metacharacters become
/// entities, Markdown metacharacters become placeholders.
pub(crate) fn encode_code(code: &str) -> String {
    let mut code = code
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    for c in ['*', '_', '{', '}', '[', ']', '\\'] {
        code = code.replace(c, placeholder(c));
    }
    code
}

/// Swaps every placeholder back to its literal character. Runs once, at
/// the very end of the transform.
pub(crate) fn unescape(text: &str) -> String {
    let mut text = text.to_string();
    for c in SPECIAL_CHARS.chars() {
        let ph = placeholder(c);
        if text.contains(ph) {
            let mut buf = [0u8; 4];
            text = text.replace(ph, c.encode_utf8(&mut buf));
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::{encode_backslash_escapes, encode_code, placeholder, unescape, SPECIAL_CHARS};

    #[test]
    fn placeholders_are_not_substrings_of_each_other() {
        let all: Vec<&str> = SPECIAL_CHARS.chars().map(placeholder).collect();
        for a in &all {
            for b in &all {
                if a != b {
                    assert!(!a.contains(b), "{:?} contains {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn backslash_escapes_round_trip() {
        for c in SPECIAL_CHARS.chars() {
            let input = format!("\\{}", c);
            assert_eq!(unescape(&encode_backslash_escapes(&input)), c.to_string());
        }
    }

    #[test]
    fn code_hides_markdown_metacharacters() {
        let encoded = encode_code("*a* <b>");
        assert!(!encoded.contains('*'));
        assert_eq!(unescape(&encoded), "*a* &lt;b&gt;");
    }
}
