//! # sitegen
//!
//! Convert a small subset of Markdown to HTML.
//!
//! Supported blocks are ATX headings, fenced code, blockquotes, `*`/`-`
//! lists, numbered lists and paragraphs. Inline markup covers `**bold**`,
//! `*italic*`, `` `code` ``, `[links](url)` and `![images](url)`. Blocks
//! do not nest and delimiters cannot be escaped.
//!
//! ## Pipeline
//!
//! ```text
//! Markdown ──blocks──▶ BlockType ──convert──▶ Node tree ──render──▶ HTML
//!                                    │
//!                                    └── inline text ──▶ Spans ──▶ leaves
//! ```
//!
//! ## Example
//!
//! ```rust
//! let html = sitegen::convert("# Hello\n\nThis is **bold**.").unwrap();
//! assert_eq!(html, "<div><h1>Hello</h1><p>This is <b>bold</b>.</p></div>");
//! ```
//!
//! ## Example (options)
//!
//! ```rust
//! use sitegen::{Converter, Options};
//!
//! let converter = Converter::with_options(Options {
//!     inline_headings: true,
//!     ..Default::default()
//! });
//! let html = converter.convert("# *Hello*").unwrap();
//! assert_eq!(html, "<div><h1><i>Hello</i></h1></div>");
//! ```

mod block;
mod convert;
mod inline;
mod options;
mod service;
mod span;

pub use block::{block_to_block_type, markdown_to_blocks, BlockType};
pub use convert::convert_block;
pub use inline::{
    extract_markdown_images, extract_markdown_links, split_spans_delimiter, split_spans_images,
    split_spans_links, text_to_spans, try_split_spans_delimiter, try_text_to_spans,
};
pub use options::Options;
pub use service::Converter;
pub use span::{span_to_node, Span, SpanKind};

pub use sitegen_core::{Attributes, Leaf, Node, NodeError, Parent};

/// Error type for conversion
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Node(#[from] NodeError),

    #[error("unsupported span kind: {0}")]
    UnsupportedSpanKind(String),

    #[error("unmatched {delimiter:?} in {text:?}")]
    UnmatchedDelimiter { delimiter: String, text: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Convert Markdown to HTML with default options
pub fn convert(markdown: &str) -> Result<String> {
    Converter::new().convert(markdown)
}

/// Convert Markdown to its `div` root node without rendering
pub fn markdown_to_node(markdown: &str) -> Result<Node> {
    Converter::new().to_node(markdown)
}
