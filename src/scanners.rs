//! Hand-rolled scanners for the constructs regular expressions handle
//! poorly: balanced delimiter runs and code spans. Depth is bounded by an
//! explicit counter, so pathological nesting degrades to literal text
//! instead of to exponential matching.

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Scans balanced-bracket content beginning at `start` (just past an
/// opening `[`). Returns the index of the matching `]`, or `None` when the
/// brackets are unbalanced or nest deeper than `depth`.
pub(crate) fn balanced_brackets(text: &str, start: usize, depth: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b']' => return Some(i),
            b'[' => {
                if depth == 0 {
                    return None;
                }
                let close = balanced_brackets(text, i + 1, depth - 1)?;
                i = close + 1;
            }
            _ => i += 1,
        }
    }
    None
}

/// Scans a balanced-paren link target beginning at `start`. The scan stops
/// (returning the content end) at the first whitespace or unmatched close
/// paren at the top level; nested groups that fail to close, or that would
/// exceed `depth`, also stop the scan rather than failing it.
pub(crate) fn balanced_parens(text: &str, start: usize, depth: usize) -> usize {
    let bytes = text.as_bytes();
    let mut i = start;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b')' || is_space(b) {
            return i;
        }
        if b == b'(' {
            if depth == 0 {
                return i;
            }
            let inner = balanced_parens(text, i + 1, depth - 1);
            if inner >= bytes.len() || bytes[inner] != b')' {
                return i;
            }
            i = inner + 1;
        } else {
            i += 1;
        }
    }
    i
}

/// Finds the code span whose opening backtick run starts at `start`.
/// Longer openers are preferred; the closer is the nearest standalone run
/// of exactly the opener's length. Returns the content range and the end
/// of the whole span.
pub(crate) fn code_span(text: &str, start: usize) -> Option<(usize, usize, usize)> {
    let bytes = text.as_bytes();
    let mut n = 0;
    while start + n < bytes.len() && bytes[start + n] == b'`' {
        n += 1;
    }
    if n == 0 {
        return None;
    }

    // Standalone backtick runs after the opener.
    let mut runs = Vec::new();
    let mut i = start + n;
    while i < bytes.len() {
        if bytes[i] == b'`' {
            let run_start = i;
            while i < bytes.len() && bytes[i] == b'`' {
                i += 1;
            }
            runs.push((run_start, i - run_start));
        } else {
            i += 1;
        }
    }

    for len in (1..=n).rev() {
        let content_start = start + len;
        for &(run_start, run_len) in &runs {
            if run_len == len && run_start > content_start {
                return Some((content_start, run_start, run_start + run_len));
            }
        }
    }
    None
}
