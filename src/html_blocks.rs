//! Replaces block-level raw HTML with opaque keys so the paragraph pass
//! never wraps it. Runs twice per transform: once over the raw input, and
//! again after the block transforms to protect generated markup.

use phf::phf_set;
use regex::Regex;
use std::sync::LazyLock;

use crate::transform::Context;

// Only these tags form hashable blocks; spans stay inline so paragraphs
// still wrap around them.
static STRICT_BLOCK_TAGS: phf::Set<&'static str> = phf_set! {
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "pre",
    "table", "dl", "ol", "ul", "script", "noscript", "form", "fieldset",
    "iframe", "math", "ins", "del",
};

static LIBERAL_BLOCK_TAGS: phf::Set<&'static str> = phf_set! {
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "pre",
    "table", "dl", "ol", "ul", "script", "noscript", "form", "fieldset",
    "iframe", "math",
};

static HR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<hr\b[^<>]*>").expect("hr tag pattern"));

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!(?:--.*?--\s*)+>").expect("comment pattern"));

pub(crate) fn hash_html_blocks(text: &str, ctx: &mut Context) -> String {
    // Strictly nested blocks first: the liberal pass would otherwise stop
    // at the first closing tag of a nested pair.
    let text = hash_tag_blocks(text, ctx, false);
    let text = hash_tag_blocks(&text, ctx, true);
    let text = hash_standalone(&text, ctx, &HR_TAG);
    hash_standalone(&text, ctx, &COMMENT)
}

/// Hashes `<tag …> … </tag>` regions whose opening tag sits at column 0.
/// The strict form requires the closing tag alone at the start of a line;
/// the liberal form accepts the first line ending with it.
fn hash_tag_blocks(text: &str, ctx: &mut Context, liberal: bool) -> String {
    let tags = if liberal {
        &LIBERAL_BLOCK_TAGS
    } else {
        &STRICT_BLOCK_TAGS
    };
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut line_start = 0;
    while line_start < text.len() {
        let line_end = text[line_start..]
            .find('\n')
            .map(|i| line_start + i)
            .unwrap_or(text.len());
        if bytes[line_start] == b'<' {
            if let Some(name_end) = tag_name_end(bytes, line_start + 1, line_end) {
                let name = &text[line_start + 1..name_end];
                if tags.contains(name) {
                    let close = if liberal {
                        find_liberal_close(text, line_start, name_end, name)
                    } else {
                        find_strict_close(text, line_end, name)
                    };
                    if let Some(block_end) = close {
                        out.push_str(&text[copied..line_start]);
                        let key = ctx.hash_block(&text[line_start..block_end]);
                        out.push_str("\n\n");
                        out.push_str(&key);
                        out.push_str("\n\n");
                        copied = block_end;
                        line_start = text[block_end..]
                            .find('\n')
                            .map(|i| block_end + i + 1)
                            .unwrap_or(text.len());
                        continue;
                    }
                }
            }
        }
        line_start = line_end + 1;
    }
    out.push_str(&text[copied..]);
    out
}

/// Parses a lowercase tag name at `start`, returning the index past it
/// only when a word boundary follows.
fn tag_name_end(bytes: &[u8], start: usize, line_end: usize) -> Option<usize> {
    let mut i = start;
    while i < line_end && (bytes[i].is_ascii_lowercase() || bytes[i].is_ascii_digit()) {
        i += 1;
    }
    if i == start || !bytes[start].is_ascii_lowercase() {
        return None;
    }
    if i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
        return None;
    }
    Some(i)
}

fn find_strict_close(text: &str, from: usize, name: &str) -> Option<usize> {
    let needle = format!("\n</{}>", name);
    let bytes = text.as_bytes();
    let mut search = from;
    while let Some(rel) = text[search..].find(&needle) {
        let close_end = search + rel + needle.len();
        let mut i = close_end;
        while i < bytes.len() && (bytes[i] == b' ' || bytes[i] == b'\t') {
            i += 1;
        }
        if i == bytes.len() || bytes[i] == b'\n' {
            return Some(i);
        }
        search = search + rel + 1;
    }
    None
}

fn find_liberal_close(text: &str, open_start: usize, min_pos: usize, name: &str) -> Option<usize> {
    let needle = format!("</{}>", name);
    let mut ls = open_start;
    loop {
        let le = text[ls..].find('\n').map(|i| ls + i).unwrap_or(text.len());
        let trimmed = text[ls..le].trim_end_matches([' ', '\t']);
        if trimmed.ends_with(&needle) && ls + trimmed.len() - needle.len() >= min_pos {
            return Some(le);
        }
        if le == text.len() {
            return None;
        }
        ls = le + 1;
    }
}

/// Hashes standalone single-tag blocks (`<hr>` variants, comments) that
/// sit on their own line between blank lines, indented at most three
/// spaces.
fn hash_standalone(text: &str, ctx: &mut Context, pattern: &Regex) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    for m in pattern.find_iter(text) {
        if m.start() < copied {
            continue;
        }
        let line_start = text[..m.start()].rfind('\n').map(|i| i + 1).unwrap_or(0);
        let lead = &text[line_start..m.start()];
        if lead.len() > 3 || !lead.bytes().all(|b| b == b' ') {
            continue;
        }
        let at_start = line_start == 0 || (line_start == 1 && bytes[0] == b'\n');
        let after_blank = line_start >= 2 && bytes[line_start - 2] == b'\n';
        if !at_start && !after_blank {
            continue;
        }
        let mut end = m.end();
        while end < bytes.len() && (bytes[end] == b' ' || bytes[end] == b'\t') {
            end += 1;
        }
        let ends_ok = end == bytes.len()
            || (bytes[end] == b'\n' && end + 1 < bytes.len() && bytes[end + 1] == b'\n');
        if !ends_ok {
            continue;
        }
        out.push_str(&text[copied..line_start]);
        let key = ctx.hash_block(&text[line_start..end]);
        out.push_str("\n\n");
        out.push_str(&key);
        out.push_str("\n\n");
        copied = end;
    }
    out.push_str(&text[copied..]);
    out
}
