//! The pipeline orchestrator and its per-call context. All mutable state
//! lives in [`Context`], so one transform never observes another's tables.

use regex::Regex;
use rustc_hash::FxHashMap;

use crate::blocks::run_block_gamut;
use crate::escapes;
use crate::html_blocks::hash_html_blocks;
use crate::options::Options;
use crate::references::{strip_link_definitions, LinkDef};
use crate::strings;
use crate::tokenizer;

pub(crate) struct Context<'o> {
    pub(crate) options: &'o Options,
    /// Link-reference definitions, keyed by lowercased id.
    pub(crate) refs: FxHashMap<String, LinkDef>,
    /// Hashed raw-HTML blocks, keyed by opaque token.
    pub(crate) html_blocks: FxHashMap<String, String>,
    /// List recursion depth; 0 outside any list.
    pub(crate) list_level: usize,
    pub(crate) html_token_re: Regex,
    pub(crate) rng: ObfuscationRng,
    hash_seq: usize,
}

impl<'o> Context<'o> {
    fn new(options: &'o Options) -> Self {
        Context {
            options,
            refs: FxHashMap::default(),
            html_blocks: FxHashMap::default(),
            list_level: 0,
            html_token_re: tokenizer::tag_pattern(options.max_nesting_depth),
            rng: ObfuscationRng::new(OBFUSCATION_SEED),
            hash_seq: 0,
        }
    }

    /// Stores a literal HTML block, returning the key that stands in for
    /// it. Keys use the escape table's \x1A delimiters with an `H` marker,
    /// so neither table can mistake the other's entries.
    pub(crate) fn hash_block(&mut self, html: &str) -> String {
        let key = format!("\u{1A}H{}\u{1A}", self.hash_seq);
        self.hash_seq += 1;
        self.html_blocks.insert(key.clone(), html.to_string());
        key
    }
}

// Fixed seed: the obfuscation only has to look random, and a fixed
// sequence keeps "decoded address equals the original" testable.
const OBFUSCATION_SEED: u64 = 0x2545_F491_4F6C_DD1D;

/// Splitmix64 behind the e-mail obfuscation percentages.
pub(crate) struct ObfuscationRng(u64);

impl ObfuscationRng {
    fn new(seed: u64) -> Self {
        ObfuscationRng(seed)
    }

    /// The next value in 1..=99.
    pub(crate) fn next_percent(&mut self) -> u32 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        (z % 99) as u32 + 1
    }
}

pub(crate) fn transform(text: &str, options: &Options) -> String {
    let mut ctx = Context::new(options);

    let text = strings::normalize_newlines(text);
    // two trailing newlines so every block pass can assume one follows
    let mut text = format!("{}\n\n", text);
    text = strings::detab(&text, options.tab_width.max(1));
    text = strings::blank_whitespace_lines(&text);
    text = hash_html_blocks(&text, &mut ctx);
    text = strip_link_definitions(&text, &mut ctx);
    text = run_block_gamut(&text, &mut ctx);
    text = escapes::unescape(&text);

    debug_assert_eq!(ctx.list_level, 0);

    text.push('\n');
    text
}
