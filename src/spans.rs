//! Span-level transforms, applied in a fixed order to one blank-line-free
//! block of text. Ordering is load-bearing: code spans must hide their
//! content before escaping, links must render before ampersand encoding,
//! emphasis must run last but for hard breaks.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::escapes::{self, encode_backslash_escapes, escape_bold_italic, placeholder};
use crate::options::Options;
use crate::scanners;
use crate::tokenizer::{tokenize, Token};
use crate::transform::{Context, ObfuscationRng};

pub(crate) fn run_span_gamut(text: &str, ctx: &mut Context) -> String {
    let text = do_code_spans(text);
    let text = escape_special_chars_in_tags(&text, ctx);
    let text = encode_backslash_escapes(&text);

    // Images go first: ![x][y] would otherwise parse as an anchor.
    let text = do_images(&text, ctx);
    let text = do_anchors(&text, ctx);

    // <http://example.com/> style links come after anchors, since inline
    // link targets may themselves use angle brackets.
    let text = do_auto_links(&text, ctx);

    let text = encode_amps_and_angles(&text);
    let text = do_italics_and_bold(&text, ctx);
    hard_breaks(&text, ctx)
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

// ---------------------------------------------------------------------
// Code spans

fn do_code_spans(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'`' && (i == 0 || bytes[i - 1] != b'\\') {
            if let Some((cs, ce, end)) = scanners::code_span(text, i) {
                let content = text[cs..ce]
                    .trim_start_matches([' ', '\t'])
                    .trim_end_matches([' ', '\t']);
                out.push_str(&text[copied..i]);
                out.push_str("<code>");
                out.push_str(&escapes::encode_code(content));
                out.push_str("</code>");
                copied = end;
                i = end;
                continue;
            }
            // skip the whole unmatched run
            while i < bytes.len() && bytes[i] == b'`' {
                i += 1;
            }
        } else {
            i += 1;
        }
    }
    out.push_str(&text[copied..]);
    out
}

// ---------------------------------------------------------------------
// Escaping inside tags

static CODE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("</?code>").expect("code tag pattern"));

/// Within tag tokens, hides characters that would otherwise read as
/// Markdown: backslashes, interior code tags, `*` and `_` (think
/// `<a title="my_title">`).
fn escape_special_chars_in_tags(text: &str, ctx: &Context) -> String {
    let mut out = String::with_capacity(text.len());
    for token in tokenize(&ctx.html_token_re, text) {
        match token {
            Token::Text(value) => out.push_str(value),
            Token::Tag(value) => {
                let value = value.replace('\\', placeholder('\\'));
                let value = hide_interior_code_tags(&value);
                let value = value.replace('*', placeholder('*'));
                out.push_str(&value.replace('_', placeholder('_')));
            }
        }
    }
    out
}

fn hide_interior_code_tags(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len());
    let mut copied = 0;
    for m in CODE_TAG.find_iter(tag) {
        let interior = m.start() > 0
            && m.end() < tag.len()
            && !tag[..m.start()].ends_with('\n')
            && !tag[m.end()..].starts_with('\n');
        if interior {
            out.push_str(&tag[copied..m.start()]);
            out.push_str(placeholder('`'));
            copied = m.end();
        }
    }
    out.push_str(&tag[copied..]);
    out
}

// ---------------------------------------------------------------------
// Images

static IMAGE_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?sx)
        !\[ (.*?) \]        # alt text
        [\x20]?
        (?:\n[\x20]*)?
        \[ (.*?) \]         # id",
    )
    .expect("reference image pattern")
});

fn do_images(text: &str, ctx: &mut Context) -> String {
    let text = IMAGE_REF.replace_all(text, |caps: &Captures| {
        let alt = &caps[1];
        let mut id = caps[2].to_lowercase();
        if id.is_empty() {
            id = alt.to_lowercase();
        }
        let alt = alt.replace('"', "&quot;");
        match ctx.refs.get(&id) {
            Some(def) => {
                image_tag(&def.url, &alt, def.title.as_deref(), ctx.options)
            }
            None => caps[0].to_string(),
        }
    });
    do_inline_images(&text, ctx)
}

fn do_inline_images(text: &str, ctx: &Context) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i] == b'!' && bytes[i + 1] == b'[' {
            if let Some((replacement, end)) = parse_inline_image(text, i, ctx) {
                out.push_str(&text[copied..i]);
                out.push_str(&replacement);
                copied = end;
                i = end;
                continue;
            }
        }
        i += 1;
    }
    out.push_str(&text[copied..]);
    out
}

fn parse_inline_image(text: &str, start: usize, ctx: &Context) -> Option<(String, usize)> {
    let bytes = text.as_bytes();
    // Alt text runs to a `]`; later brackets are retried when the rest of
    // the construct fails to parse after an earlier one.
    let mut search = start + 2;
    while let Some(rel) = text[search..].find(']') {
        let alt_end = search + rel;
        let alt = &text[start + 2..alt_end];
        let mut p = alt_end + 1;
        // one optional whitespace character
        if p < bytes.len() && is_space(bytes[p]) {
            if let Some(result) = parse_image_target(text, p + 1, alt, ctx) {
                return Some(result);
            }
        }
        if let Some(result) = parse_image_target(text, p, alt, ctx) {
            return Some(result);
        }
        search = alt_end + 1;
    }
    None
}

fn parse_image_target(
    text: &str,
    paren: usize,
    alt: &str,
    ctx: &Context,
) -> Option<(String, usize)> {
    let (href, title, end) = parse_paren_target(text, paren, ctx.options.max_nesting_depth)?;
    let alt = alt.replace('"', "&quot;");
    let title = title.map(|t| t.replace('"', "&quot;"));
    let href = strip_angle_brackets(&escape_bold_italic(href));
    Some((
        image_tag(&href, &alt, title.as_deref(), ctx.options),
        end,
    ))
}

fn image_tag(url: &str, alt: &str, title: Option<&str>, options: &Options) -> String {
    let url = escape_bold_italic(url);
    let url = encode_problem_url_chars(url, options);
    let mut result = format!("<img src=\"{}\" alt=\"{}\"", url, alt);
    if let Some(title) = title {
        if !title.is_empty() {
            result.push_str(&format!(" title=\"{}\"", escape_bold_italic(title)));
        }
    }
    result.push_str(options.empty_element_suffix.as_str());
    result
}

// ---------------------------------------------------------------------
// Anchors

static ANCHOR_SHORTCUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]+)\]").expect("shortcut anchor pattern"));

static SHORTCUT_ID_WS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ ]*\n[ ]*").expect("shortcut id pattern"));

fn do_anchors(text: &str, ctx: &mut Context) -> String {
    // Reference style first, then inline, then shortcuts; the shortcut
    // form must come last or it would eat `[text][1]` and `[text](/url)`.
    let text = do_reference_anchors(text, ctx);
    let text = do_inline_anchors(&text, ctx);
    ANCHOR_SHORTCUT
        .replace_all(&text, |caps: &Captures| {
            let link_text = &caps[1];
            let id = SHORTCUT_ID_WS
                .replace_all(&link_text.to_lowercase(), " ")
                .into_owned();
            anchor_from_ref(link_text, &id, ctx).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn do_reference_anchors(text: &str, ctx: &Context) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'[' {
            if let Some((replacement, end)) = parse_reference_anchor(text, i, ctx) {
                out.push_str(&text[copied..i]);
                out.push_str(&replacement);
                copied = end;
                i = end;
                continue;
            }
        }
        i += 1;
    }
    out.push_str(&text[copied..]);
    out
}

fn parse_reference_anchor(text: &str, start: usize, ctx: &Context) -> Option<(String, usize)> {
    let bytes = text.as_bytes();
    let depth = ctx.options.max_nesting_depth;
    let text_end = scanners::balanced_brackets(text, start + 1, depth)?;
    let link_text = &text[start + 1..text_end];

    // one optional space, then one optional newline with trailing spaces
    let mut candidates = Vec::with_capacity(2);
    if text_end + 1 < bytes.len() && bytes[text_end + 1] == b' ' {
        candidates.push(text_end + 2);
    }
    candidates.push(text_end + 1);
    for mut p in candidates {
        if p < bytes.len() && bytes[p] == b'\n' {
            p += 1;
            while p < bytes.len() && bytes[p] == b' ' {
                p += 1;
            }
        }
        if p >= bytes.len() || bytes[p] != b'[' {
            continue;
        }
        let id_end = p + 1 + text[p + 1..].find(']')?;
        let mut id = text[p + 1..id_end].to_lowercase();
        if id.is_empty() {
            id = link_text.to_lowercase();
        }
        let whole = &text[start..id_end + 1];
        let replacement = anchor_from_ref(link_text, &id, ctx).unwrap_or_else(|| whole.to_string());
        return Some((replacement, id_end + 1));
    }
    None
}

fn do_inline_anchors(text: &str, ctx: &Context) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'[' {
            if let Some((replacement, end)) = parse_inline_anchor(text, i, ctx) {
                out.push_str(&text[copied..i]);
                out.push_str(&replacement);
                copied = end;
                i = end;
                continue;
            }
        }
        i += 1;
    }
    out.push_str(&text[copied..]);
    out
}

fn parse_inline_anchor(text: &str, start: usize, ctx: &Context) -> Option<(String, usize)> {
    let depth = ctx.options.max_nesting_depth;
    let text_end = scanners::balanced_brackets(text, start + 1, depth)?;
    let link_text = &text[start + 1..text_end];
    let (href, title, end) = parse_paren_target(text, text_end + 1, depth)?;

    let url = strip_angle_brackets(&escape_bold_italic(href));
    let url = encode_problem_url_chars(url, ctx.options);
    let mut result = format!("<a href=\"{}\"", url);
    if let Some(title) = title {
        if !title.is_empty() {
            let title = escape_bold_italic(&title.replace('"', "&quot;"));
            result.push_str(&format!(" title=\"{}\"", title));
        }
    }
    result.push('>');
    result.push_str(link_text);
    result.push_str("</a>");
    Some((result, end))
}

/// Parses `(href "title")` starting at the opening paren. Returns the
/// href, the optional title, and the index past the closing paren.
fn parse_paren_target(text: &str, paren: usize, depth: usize) -> Option<(&str, Option<&str>, usize)> {
    let bytes = text.as_bytes();
    if paren >= bytes.len() || bytes[paren] != b'(' {
        return None;
    }
    let mut p = paren + 1;
    while p < bytes.len() && (bytes[p] == b' ' || bytes[p] == b'\t') {
        p += 1;
    }
    let href_end = scanners::balanced_parens(text, p, depth);
    let href = &text[p..href_end];
    let mut q = href_end;
    while q < bytes.len() && (bytes[q] == b' ' || bytes[q] == b'\t') {
        q += 1;
    }
    if q < bytes.len() && bytes[q] == b')' {
        return Some((href, None, q + 1));
    }
    if q < bytes.len() && (bytes[q] == b'\'' || bytes[q] == b'"') {
        let quote = bytes[q];
        let mut search = q + 1;
        while let Some(rel) = text[search..].find(quote as char) {
            let title_end = search + rel;
            let mut r = title_end + 1;
            while r < bytes.len() && (bytes[r] == b' ' || bytes[r] == b'\t') {
                r += 1;
            }
            if r < bytes.len() && bytes[r] == b')' {
                return Some((href, Some(&text[q + 1..title_end]), r + 1));
            }
            search = title_end + 1;
        }
    }
    None
}

fn strip_angle_brackets(url: &str) -> String {
    if url.len() >= 2 && url.starts_with('<') && url.ends_with('>') {
        url[1..url.len() - 1].to_string()
    } else {
        url.to_string()
    }
}

fn anchor_from_ref(link_text: &str, id: &str, ctx: &Context) -> Option<String> {
    let def = ctx.refs.get(id)?;
    let url = escape_bold_italic(&def.url);
    let url = encode_problem_url_chars(url, ctx.options);
    let mut result = format!("<a href=\"{}\"", url);
    if let Some(title) = &def.title {
        result.push_str(&format!(" title=\"{}\"", escape_bold_italic(title)));
    }
    result.push('>');
    result.push_str(link_text);
    result.push_str("</a>");
    Some(result)
}

/// Percent-encodes characters in a link target that markup rules would
/// otherwise pick apart, when the option asks for it.
fn encode_problem_url_chars(url: String, options: &Options) -> String {
    if !options.encode_problem_url_characters {
        return url;
    }
    let url = url
        .replace('*', "%2A")
        .replace('_', "%5F")
        .replace('\'', "%27")
        .replace('(', "%28")
        .replace(')', "%29")
        .replace('[', "%5B")
        .replace(']', "%5D");
    if url.len() > 7 && url.is_char_boundary(7) && url[7..].contains(':') {
        // colons past the scheme are encoded unless they open a port
        let (head, tail) = url.split_at(7);
        let mut out = String::with_capacity(url.len() + 4);
        out.push_str(head);
        for (i, ch) in tail.char_indices() {
            let digits = tail[i + ch.len_utf8()..].as_bytes();
            if ch == ':' && !(digits.len() >= 2 && digits[0].is_ascii_digit() && digits[1].is_ascii_digit())
            {
                out.push_str("%3A");
            } else {
                out.push(ch);
            }
        }
        return out;
    }
    url
}

// ---------------------------------------------------------------------
// Autolinks

static AUTOLINK_BARE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(^|\s)(https?|ftp)(://[-A-Z0-9+&@#/%?=~_|\[\]\(\)!:,\.;]*[-A-Z0-9+&@#/%=~_|\[\]])($|\W)",
    )
    .expect("bare autolink pattern")
});

static AUTOLINK_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<((?:https?|ftp):[^'">\s]+)>"#).expect("uri autolink pattern")
});

static AUTOLINK_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?xi)
        <
        (?:mailto:)?
        (
            [-.\w]+
            @
            [-a-z0-9]+(?:\.[-a-z0-9]+)*\.[a-z]+
        )
        >",
    )
    .expect("email autolink pattern")
});

fn do_auto_links(text: &str, ctx: &mut Context) -> String {
    let mut text = text.to_string();
    if ctx.options.auto_hyperlink {
        // bracket bare URLs so the pass below picks them up
        text = AUTOLINK_BARE
            .replace_all(&text, "${1}<${2}${3}>${4}")
            .into_owned();
    }
    text = AUTOLINK_URI
        .replace_all(&text, |caps: &Captures| {
            format!("<a href=\"{0}\">{0}</a>", &caps[1])
        })
        .into_owned();
    if ctx.options.link_emails {
        let rng = &mut ctx.rng;
        text = AUTOLINK_EMAIL
            .replace_all(&text, |caps: &Captures| email_anchor(&caps[1], rng))
            .into_owned();
    }
    text
}

/// Builds the obfuscated `mailto:` anchor: every character of the address
/// re-encoded as a raw character (~10%), a hex reference (~45%) or a
/// decimal reference (~45%), except that `@` is never raw and the
/// scheme's `:` is never encoded.
fn email_anchor(address: &str, rng: &mut ObfuscationRng) -> String {
    let address = escapes::unescape(address);
    let encoded = encode_email_address(&format!("mailto:{}", address), rng);
    // strip the scheme from the visible text; its colon is always raw
    let visible = match encoded.find(':') {
        Some(i) => &encoded[i + 1..],
        None => &encoded[..],
    };
    format!("<a href=\"{}\">{}</a>", encoded, visible)
}

fn encode_email_address(addr: &str, rng: &mut ObfuscationRng) -> String {
    let mut out = String::with_capacity(addr.len() * 5);
    for c in addr.chars() {
        let r = rng.next_percent();
        if (r > 90 || c == ':') && c != '@' {
            out.push(c);
        } else if r < 45 {
            out.push_str(&format!("&#x{:x};", c as u32));
        } else {
            out.push_str(&format!("&#{};", c as u32));
        }
    }
    out
}

// ---------------------------------------------------------------------
// Ampersands and angle brackets

static ENTITY_AHEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?[xX]?(?:[0-9a-fA-F]+|\w+);").expect("entity pattern"));

/// Encodes `&` unless it opens an entity reference, and `<` unless it
/// plausibly opens a tag.
pub(crate) fn encode_amps_and_angles(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        match c {
            '&' if !ENTITY_AHEAD.is_match(&text[i + 1..]) => out.push_str("&amp;"),
            '<' => {
                let tag_start = text[i + 1..]
                    .chars()
                    .next()
                    .is_some_and(|n| n.is_ascii_alphabetic() || matches!(n, '/' | '?' | '$' | '!'));
                if tag_start {
                    out.push('<');
                } else {
                    out.push_str("&lt;");
                }
            }
            c => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------
// Emphasis

fn do_italics_and_bold(text: &str, ctx: &Context) -> String {
    if ctx.options.strict_bold_italic {
        let text = strict_emphasis(text, b"**", b"__", "strong");
        strict_emphasis(&text, b"*", b"_", "em")
    } else {
        let text = loose_emphasis(text, b"**", b"__", "strong");
        loose_emphasis(&text, b"*", b"_", "em")
    }
}

fn delim_at<'d>(bytes: &[u8], i: usize, d1: &'d [u8], d2: &'d [u8]) -> Option<&'d [u8]> {
    if bytes[i..].starts_with(d1) {
        Some(d1)
    } else if bytes[i..].starts_with(d2) {
        Some(d2)
    } else {
        None
    }
}

/// Loose emphasis only requires the delimiters to butt against non-space
/// content. Strong delimiters additionally extend over a trailing run of
/// emphasis characters, so `***x***` nests rather than truncates.
fn loose_emphasis(text: &str, d1: &[u8], d2: &[u8], tag: &str) -> String {
    let bytes = text.as_bytes();
    let dlen = d1.len();
    let tailed = dlen == 2;
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;
    while i + dlen < bytes.len() {
        let Some(delim) = delim_at(bytes, i, d1, d2) else {
            i += 1;
            continue;
        };
        let content_start = i + dlen;
        if is_space(bytes[content_start]) {
            i += 1;
            continue;
        }
        let close = if tailed {
            find_tailed_close(bytes, content_start, delim)
        } else {
            find_simple_close(bytes, content_start, delim)
        };
        match close {
            Some(c) => {
                out.push_str(&text[copied..i]);
                out.push_str(&format!("<{}>{}</{}>", tag, &text[content_start..c], tag));
                copied = c + dlen;
                i = copied;
            }
            None => i += 1,
        }
    }
    out.push_str(&text[copied..]);
    out
}

/// The closer for `(.+?[*_]*)` content: the lazy part grows from the
/// front while the trailing emphasis-character run shrinks from its
/// greedy maximum, exactly as the backtracking original resolved it.
fn find_tailed_close(bytes: &[u8], content_start: usize, delim: &[u8]) -> Option<usize> {
    let dlen = delim.len();
    for e in content_start + 1..=bytes.len() {
        let mut tail = 0;
        while e + tail < bytes.len() && matches!(bytes[e + tail], b'*' | b'_') {
            tail += 1;
        }
        loop {
            let c = e + tail;
            if c + dlen <= bytes.len() && bytes[c..].starts_with(delim) && !is_space(bytes[c - 1]) {
                return Some(c);
            }
            if tail == 0 {
                break;
            }
            tail -= 1;
        }
    }
    None
}

fn find_simple_close(bytes: &[u8], content_start: usize, delim: &[u8]) -> Option<usize> {
    for c in content_start + 1..bytes.len() {
        if bytes[c..].starts_with(delim) && !is_space(bytes[c - 1]) {
            return Some(c);
        }
    }
    None
}

fn is_boundary(b: u8) -> bool {
    b.is_ascii() && !b.is_ascii_alphanumeric()
}

/// Strict emphasis requires a non-word character (or a text edge) outside
/// both delimiters; the boundary characters are consumed and re-emitted.
fn strict_emphasis(text: &str, d1: &[u8], d2: &[u8], tag: &str) -> String {
    let bytes = text.as_bytes();
    let dlen = d1.len();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;
    while i < bytes.len() {
        // The delimiter needs a non-word character before it, except at
        // the very start of the text.
        let (lead, dstart) = if is_boundary(bytes[i]) && delim_at(bytes, i + 1, d1, d2).is_some() {
            (Some(bytes[i]), i + 1)
        } else if i == 0 && delim_at(bytes, 0, d1, d2).is_some() {
            (None, 0)
        } else {
            i += 1;
            continue;
        };
        let Some(delim) = delim_at(bytes, dstart, d1, d2) else {
            i += 1;
            continue;
        };
        let content_start = dstart + dlen;
        if content_start >= bytes.len() || is_space(bytes[content_start]) {
            i += 1;
            continue;
        }
        let close = if dlen == 2 {
            find_strict_strong_close(bytes, content_start, delim)
        } else {
            find_strict_em_close(bytes, content_start, delim)
        };
        let Some(c) = close else {
            i += 1;
            continue;
        };
        let after = c + dlen;
        let trail = if after == bytes.len() {
            None
        } else if is_boundary(bytes[after]) {
            Some(bytes[after])
        } else {
            i += 1;
            continue;
        };
        out.push_str(&text[copied..i]);
        if let Some(b) = lead {
            out.push(b as char);
        }
        out.push_str(&format!(
            "<{}>{}</{}>",
            tag,
            &text[content_start..c],
            tag
        ));
        copied = after;
        if let Some(b) = trail {
            out.push(b as char);
            copied += 1;
        }
        i = copied;
    }
    out.push_str(&text[copied..]);
    out
}

fn find_strict_strong_close(bytes: &[u8], content_start: usize, delim: &[u8]) -> Option<usize> {
    let dlen = delim.len();
    for e in content_start + 1..=bytes.len() {
        if bytes[e - 1] == b'\r' {
            return None;
        }
        if is_space(bytes[e - 1]) {
            continue;
        }
        let mut tail = 0;
        while e + tail < bytes.len() && matches!(bytes[e + tail], b'*' | b'_') {
            tail += 1;
        }
        loop {
            let c = e + tail;
            if c + dlen <= bytes.len()
                && bytes[c..].starts_with(delim)
                && strict_close_boundary(bytes, c + dlen)
            {
                return Some(c);
            }
            if tail == 0 {
                break;
            }
            tail -= 1;
        }
    }
    None
}

fn find_strict_em_close(bytes: &[u8], content_start: usize, delim: &[u8]) -> Option<usize> {
    for c in content_start + 1..bytes.len() {
        let b = bytes[c];
        if b == delim[0] {
            if !is_space(bytes[c - 1]) && strict_close_boundary(bytes, c + 1) {
                return Some(c);
            }
            return None;
        }
        if matches!(b, b'\r' | b'*' | b'_') {
            return None;
        }
    }
    None
}

fn strict_close_boundary(bytes: &[u8], after: usize) -> bool {
    after == bytes.len() || is_boundary(bytes[after])
}

// ---------------------------------------------------------------------
// Hard breaks

static TRAILING_SPACES_NL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}\n").expect("hard break pattern"));

fn hard_breaks(text: &str, ctx: &Context) -> String {
    let br = format!("<br{}\n", ctx.options.empty_element_suffix.as_str());
    if ctx.options.auto_newlines {
        text.replace('\n', &br)
    } else {
        TRAILING_SPACES_NL.replace_all(text, br.as_str()).into_owned()
    }
}
