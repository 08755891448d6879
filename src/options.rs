//! Configuration for the transformation engine.
//!
//! [`Options`] carries the eight configuration flags of the classic
//! Markdown dialect. A single `Options` is read-only during a call and may
//! be shared freely across calls and threads.

#[cfg(feature = "bon")]
use bon::Builder;

/// The suffix written on void HTML elements (`<hr>`, `<img>`, `<br>`).
///
/// ```rust
/// use gamut::{markdown_to_html, EmptyElementSuffix, Options};
///
/// let mut options = Options::default();
/// options.empty_element_suffix = EmptyElementSuffix::Html;
/// assert_eq!(markdown_to_html("* * *", &options), "<hr>\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyElementSuffix {
    /// XHTML-style self-closing suffix, `" />"` (the classic default).
    #[default]
    Xhtml,
    /// HTML-style suffix, `">"`.
    Html,
}

impl EmptyElementSuffix {
    /// The literal string appended to a void element's open tag.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            EmptyElementSuffix::Xhtml => " />",
            EmptyElementSuffix::Html => ">",
        }
    }
}

/// Configuration flags governing the transformation.
///
/// The defaults reproduce the classic Markdown dialect.
///
/// ```rust
/// use gamut::Options;
///
/// let options = Options::default();
/// assert_eq!(options.tab_width, 4);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
pub struct Options {
    /// Suffix written on void elements (`<hr>`, `<img>`, `<br>`). Default
    /// [`EmptyElementSuffix::Xhtml`].
    #[cfg_attr(feature = "bon", builder(default))]
    pub empty_element_suffix: EmptyElementSuffix,
    /// Tab-stop width, also the code-block indent unit. Default `4`.
    #[cfg_attr(feature = "bon", builder(default = 4))]
    pub tab_width: usize,
    /// Bracket/paren nesting ceiling, and the tokenizer tag-nesting
    /// ceiling. Default `6`.
    #[cfg_attr(feature = "bon", builder(default = 6))]
    pub max_nesting_depth: usize,
    /// Render `<user@host>` as an obfuscated `mailto:` anchor. Default
    /// `true`.
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub link_emails: bool,
    /// Require non-word boundaries for emphasis. Default `false`.
    #[cfg_attr(feature = "bon", builder(default))]
    pub strict_bold_italic: bool,
    /// Turn every newline into a hard break. Default `false`.
    #[cfg_attr(feature = "bon", builder(default))]
    pub auto_newlines: bool,
    /// Bracket and link bare `http(s)`/`ftp` URLs. Default `false`.
    #[cfg_attr(feature = "bon", builder(default))]
    pub auto_hyperlink: bool,
    /// Percent-encode `' ( ) [ ]` and bare `:` in link targets. Default
    /// `false`.
    #[cfg_attr(feature = "bon", builder(default))]
    pub encode_problem_url_characters: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            empty_element_suffix: EmptyElementSuffix::Xhtml,
            tab_width: 4,
            max_nesting_depth: 6,
            link_emails: true,
            strict_bold_italic: false,
            auto_newlines: false,
            auto_hyperlink: false,
            encode_problem_url_characters: false,
        }
    }
}
