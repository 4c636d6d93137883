//! Configuration options for Markdown conversion

/// Options for [`Converter`](crate::Converter)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Parse bold, italic, code, links and images inside headings.
    /// When off, heading text is kept literally.
    pub inline_headings: bool,

    /// Parse inline markup inside blockquotes
    pub inline_quotes: bool,

    /// Accept `- ` as an unordered list marker in addition to `* `
    pub dash_list_items: bool,

    /// Fail on an unmatched `**`, `*` or `` ` `` instead of keeping
    /// the dangling run
    pub strict_delimiters: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            inline_headings: false,
            inline_quotes: false,
            dash_list_items: true,
            strict_delimiters: false,
        }
    }
}
