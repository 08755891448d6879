//! Block-level transforms: headers, horizontal rules, lists, code blocks,
//! blockquotes, and finally paragraph formation. Each pass rewrites the
//! whole text; their order is part of the contract.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::escapes;
use crate::html_blocks::hash_html_blocks;
use crate::spans::run_span_gamut;
use crate::strings::{blank_whitespace_lines, outdent};
use crate::transform::Context;

static SETEXT_H1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(.+?)[ \t]*\n=+[ \t]*\n+").expect("setext h1 pattern"));

static SETEXT_H2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(.+?)[ \t]*\n-+[ \t]*\n+").expect("setext h2 pattern"));

static ATX_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(\#{1,6})[ \t]*(.+?)[ \t]*\#*\n+").expect("atx pattern"));

static HORIZONTAL_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ ]{0,3}(?:\*(?:[ ]{0,2}\*){2,}|-(?:[ ]{0,2}-){2,}|_(?:[ ]{0,2}_){2,})[ ]*$")
        .expect("horizontal rule pattern")
});

static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("blank run pattern"));

// A list opens with up to three spaces, a marker, and trailing whitespace.
static LIST_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ ]{0,3})([*+-]|\d+\.)[ \t]+").expect("list start pattern"));

// Items inside a matched list may sit at any indent.
static ITEM_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ \t]*)(?:[*+-]|\d+\.)[ \t]+").expect("item head pattern"));

static SIBLING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[*+-]|\d+\.)[ \t]+").expect("sibling marker pattern"));

static MARKER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*(?:[*+-]|\d+\.)[ \t]+").expect("marker line pattern"));

static BLOCKQUOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)((?:^[ \t]*>[ \t]?.+\n(?:.+\n)*\n*)+)").expect("blockquote pattern")
});

static BQ_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*>[ \t]?").expect("quote marker pattern"));

static LINE_STARTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^").expect("line start pattern"));

static PRE_REGION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\s*<pre>.+?</pre>").expect("pre region pattern"));

static PRE_INDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^  ").expect("pre indent pattern"));

pub(crate) fn run_block_gamut(text: &str, ctx: &mut Context) -> String {
    let text = do_headers(text, ctx);
    let text = do_horizontal_rules(&text, ctx);
    let text = do_lists(&text, ctx);
    let text = do_code_blocks(&text, ctx);
    let text = do_block_quotes(&text, ctx);
    // The raw input was hashed before any transform ran; this round
    // protects the markup generated above from paragraph wrapping.
    let text = hash_html_blocks(&text, ctx);
    form_paragraphs(&text, ctx)
}

// ---------------------------------------------------------------------
// Headers

fn do_headers(text: &str, ctx: &mut Context) -> String {
    // Setext before ATX, h1 underlines before h2 underlines.
    let text = SETEXT_H1
        .replace_all(text, |caps: &Captures| {
            format!("<h1>{}</h1>\n\n", run_span_gamut(&caps[1], ctx))
        })
        .into_owned();
    let text = SETEXT_H2
        .replace_all(&text, |caps: &Captures| {
            format!("<h2>{}</h2>\n\n", run_span_gamut(&caps[1], ctx))
        })
        .into_owned();
    ATX_HEADER
        .replace_all(&text, |caps: &Captures| {
            let level = caps[1].len();
            format!(
                "<h{}>{}</h{}>\n\n",
                level,
                run_span_gamut(&caps[2], ctx),
                level
            )
        })
        .into_owned()
}

fn do_horizontal_rules(text: &str, ctx: &Context) -> String {
    let hr = format!("<hr{}\n", ctx.options.empty_element_suffix.as_str());
    HORIZONTAL_RULE
        .replace_all(text, hr.as_str())
        .into_owned()
}

// ---------------------------------------------------------------------
// Lists

fn do_lists(text: &str, ctx: &mut Context) -> String {
    // Top-level lists must follow a blank line (or open the document);
    // inside a list item any marker line opens a sub-list.
    let nested = ctx.list_level > 0;
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut line_start = 0;
    while line_start < text.len() {
        let line_end = text[line_start..]
            .find('\n')
            .map(|i| line_start + i)
            .unwrap_or(text.len());
        let anchored = nested
            || line_start == 0
            || (line_start == 1 && bytes[0] == b'\n')
            || (line_start >= 2 && bytes[line_start - 2] == b'\n');
        if anchored {
            if let Some(caps) = LIST_START.captures(&text[line_start..line_end]) {
                let ordered = caps[2].as_bytes()[0].is_ascii_digit();
                let end = find_list_end(text, line_start);
                let rendered = render_list(&text[line_start..end], ordered, ctx);
                out.push_str(&text[copied..line_start]);
                out.push_str(&rendered);
                copied = end;
                line_start = end;
                continue;
            }
        }
        line_start = line_end + 1;
    }
    out.push_str(&text[copied..]);
    out
}

/// A list runs to end of text, or to the first blank-line run followed by
/// unindented content that is not itself a list item.
fn find_list_end(text: &str, start: usize) -> usize {
    let bytes = text.as_bytes();
    let mut i = start;
    while let Some(rel) = text[i..].find('\n') {
        let run_start = i + rel;
        let mut run_end = run_start;
        while run_end < bytes.len() && bytes[run_end] == b'\n' {
            run_end += 1;
        }
        if run_end - run_start >= 2 && run_end < bytes.len() {
            let next = bytes[run_end];
            if next != b' ' && next != b'\t' {
                let line_end = text[run_end..]
                    .find('\n')
                    .map(|k| run_end + k)
                    .unwrap_or(text.len());
                if !MARKER_LINE.is_match(&text[run_end..line_end]) {
                    return run_end;
                }
            }
        }
        i = run_end;
    }
    text.len()
}

fn render_list(list: &str, ordered: bool, ctx: &mut Context) -> String {
    // Double returns become triple returns, so the last item can still
    // see a blank line and go loose.
    let list = BLANK_RUNS.replace_all(list, "\n\n\n");
    let items = process_list_items(&list, ctx);
    let tag = if ordered { "ol" } else { "ul" };
    format!("<{0}>\n{1}</{0}>\n", tag, items)
}

/// Splits a matched list into items and renders each one. Siblings share
/// the first item's exact leading whitespace; anything more indented
/// belongs to the item before it.
fn process_list_items(list: &str, ctx: &mut Context) -> String {
    ctx.list_level += 1;

    // trailing blank lines collapse to a single newline
    let without_newlines = list.trim_end_matches('\n');
    let list = if list.len() - without_newlines.len() >= 2 {
        format!("{}\n", without_newlines)
    } else {
        list.to_string()
    };

    let text = list.as_str();
    let bytes = text.as_bytes();
    let tab_width = ctx.options.tab_width.max(1);
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    while cursor < text.len() {
        let Some((item_start, indent_len, head_len)) = find_item_head(text, cursor) else {
            break;
        };
        let leading_line = item_start > cursor;
        let indent = &text[item_start..item_start + indent_len];
        let body_start = item_start + head_len;

        // The body ends at its own trailing newline(s) once the next line
        // is a sibling marker or the text runs out.
        let mut body_end = None;
        let mut j = body_start;
        while let Some(rel) = text[j..].find('\n') {
            let run_start = j + rel;
            let mut run_end = run_start;
            while run_end < bytes.len() && bytes[run_end] == b'\n' {
                run_end += 1;
            }
            let ends_item = run_end >= bytes.len() || sibling_at(text, run_end, indent);
            if ends_item && run_start > body_start {
                body_end = Some(run_start + (run_end - run_start).min(2));
                break;
            }
            j = run_end;
        }
        let Some(body_end) = body_end else {
            break;
        };

        let body = &text[body_start..body_end];
        let loose = leading_line || body.contains("\n\n");
        let match_start = if leading_line { item_start - 1 } else { item_start };
        out.push_str(&text[cursor..match_start]);

        let rendered = if loose {
            run_block_gamut(&outdent(body, tab_width), ctx)
        } else {
            // tight items still need their sub-lists found
            let sub = do_lists(&outdent(body, tab_width), ctx);
            run_span_gamut(sub.trim_end_matches('\n'), ctx)
        };
        out.push_str("<li>");
        out.push_str(&rendered);
        out.push_str("</li>\n");
        cursor = body_end;
    }

    out.push_str(&text[cursor..]);
    ctx.list_level -= 1;
    out
}

fn find_item_head(text: &str, cursor: usize) -> Option<(usize, usize, usize)> {
    let mut line_start = cursor;
    loop {
        let line_end = text[line_start..]
            .find('\n')
            .map(|i| line_start + i)
            .unwrap_or(text.len());
        if let Some(caps) = ITEM_HEAD.captures(&text[line_start..line_end]) {
            return Some((line_start, caps[1].len(), caps[0].len()));
        }
        if line_end == text.len() {
            return None;
        }
        line_start = line_end + 1;
    }
}

fn sibling_at(text: &str, pos: usize, indent: &str) -> bool {
    text[pos..].starts_with(indent) && SIBLING_MARKER.is_match(&text[pos + indent.len()..])
}

// ---------------------------------------------------------------------
// Code blocks

fn do_code_blocks(text: &str, ctx: &mut Context) -> String {
    let tab_width = ctx.options.tab_width.max(1);
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut line_start = 0;
    while line_start < text.len() {
        let after_blank = line_start == 0 || (line_start >= 2 && bytes[line_start - 2] == b'\n');
        if after_blank && is_indented_line(text, line_start, tab_width) {
            // consume indented lines, each absorbing its trailing blank run
            let mut end = line_start;
            loop {
                match text[end..].find('\n') {
                    None => {
                        end = text.len();
                        break;
                    }
                    Some(rel) => {
                        let mut run_end = end + rel;
                        while run_end < bytes.len() && bytes[run_end] == b'\n' {
                            run_end += 1;
                        }
                        end = run_end;
                    }
                }
                if end >= text.len() || !is_indented_line(text, end, tab_width) {
                    break;
                }
            }
            let span_start = if line_start == 0 { 0 } else { line_start - 2 };
            let code = outdent(&text[line_start..end], tab_width);
            let code = escapes::encode_code(&code);
            out.push_str(&text[copied..span_start]);
            out.push_str("\n\n<pre><code>");
            out.push_str(code.trim_matches('\n'));
            out.push_str("\n</code></pre>\n\n");
            copied = end;
            line_start = end;
            continue;
        }
        line_start = text[line_start..]
            .find('\n')
            .map(|k| line_start + k + 1)
            .unwrap_or(text.len());
    }
    out.push_str(&text[copied..]);
    out
}

fn is_indented_line(text: &str, pos: usize, tab_width: usize) -> bool {
    let bytes = text.as_bytes();
    if bytes[pos] == b'\t' {
        return true;
    }
    pos + tab_width <= text.len() && bytes[pos..pos + tab_width].iter().all(|&b| b == b' ')
}

// ---------------------------------------------------------------------
// Blockquotes

fn do_block_quotes(text: &str, ctx: &mut Context) -> String {
    BLOCKQUOTE
        .replace_all(text, |caps: &Captures| {
            let bq = BQ_MARKER.replace_all(&caps[1], "");
            let bq = blank_whitespace_lines(&bq);
            let bq = run_block_gamut(&bq, ctx);
            let bq = LINE_STARTS.replace_all(&bq, "  ");
            // the added indent would change <pre> content; take it back out
            let bq = PRE_REGION.replace_all(&bq, |pre: &Captures| {
                PRE_INDENT.replace_all(&pre[0], "").into_owned()
            });
            format!("<blockquote>\n{}\n</blockquote>\n\n", bq)
        })
        .into_owned()
}

// ---------------------------------------------------------------------
// Paragraphs

fn form_paragraphs(text: &str, ctx: &mut Context) -> String {
    let text = text.trim_matches('\n');
    let mut grafs = Vec::new();
    for graf in BLANK_RUNS.split(text) {
        if graf.is_empty() {
            continue;
        }
        // A block that is exactly a stored key becomes its literal HTML,
        // unwrapped; everything else is a paragraph.
        match ctx.html_blocks.get(graf).cloned() {
            Some(html) => grafs.push(html),
            None => {
                let span = run_span_gamut(graf, ctx);
                grafs.push(format!("<p>{}</p>", span.trim_start_matches([' ', '\t'])));
            }
        }
    }
    grafs.join("\n\n")
}
