use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::spans::encode_amps_and_angles;
use crate::transform::Context;

/// One `[id]: url "title"` definition, keyed by lowercased id in the
/// per-call table. A later definition for the same id wins.
pub(crate) struct LinkDef {
    pub(crate) url: String,
    pub(crate) title: Option<String>,
}

static LINK_DEF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?xm)
        ^[\x20]{0,3}\[(.+)\]:          # id
        [\x20\t]*
        \n?[\x20\t]*
        <?(\S+?)>?                  # url, optionally in angle brackets
        (?:
            (?:[\x20\t]+|[\x20\t]*\n[\x20\t]*)   # whitespace must separate a title
            ["(]
            (.+?)                   # title
            [")]
            [\x20\t]*
        )?
        (?:\n+|\z)"#,
    )
    .expect("link definition pattern")
});

/// Removes link definitions from the text, recording them in the context.
pub(crate) fn strip_link_definitions(text: &str, ctx: &mut Context) -> String {
    LINK_DEF
        .replace_all(text, |caps: &Captures| {
            let id = caps[1].to_lowercase();
            let def = LinkDef {
                url: encode_amps_and_angles(&caps[2]),
                title: caps.get(3).map(|m| m.as_str().replace('"', "&quot;")),
            };
            ctx.refs.insert(id, def);
            String::new()
        })
        .into_owned()
}
