use regex::Regex;

/// A slice of the input, as delimited by the tag pattern.
pub(crate) enum Token<'a> {
    Text(&'a str),
    Tag(&'a str),
}

/// Builds the tag-recognition pattern: comments, processing instructions,
/// and generic tags tolerating `depth` levels of nested angle brackets in
/// attribute values. This is not an HTML parser; it only finds the
/// boundaries the escaping pass needs.
pub(crate) fn tag_pattern(depth: usize) -> Regex {
    let depth = depth.max(1);
    let mut pattern = String::from(r"(?i)(?s:<!(?:--.*?--\s*)+>)|(?s:<\?.*?\?>)|");
    for _ in 0..depth {
        pattern.push_str(r"(?:<[a-z/!$](?:[^<>]|");
    }
    for _ in 0..depth {
        pattern.push_str(r")*>)");
    }
    Regex::new(&pattern).expect("tag pattern")
}

/// Splits `text` into alternating Text and Tag tokens.
pub(crate) fn tokenize<'a>(tags: &Regex, text: &'a str) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    for m in tags.find_iter(text) {
        if pos < m.start() {
            tokens.push(Token::Text(&text[pos..m.start()]));
        }
        tokens.push(Token::Tag(m.as_str()));
        pos = m.end();
    }
    if pos < text.len() {
        tokens.push(Token::Text(&text[pos..]));
    }
    tokens
}
