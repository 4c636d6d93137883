//! Inline spans and their mapping to leaf nodes.

use std::fmt;
use std::str::FromStr;

use sitegen_core::{Leaf, Node};

use crate::Error;

/// The formatting a span of inline text carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpanKind::Text => "text",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpanKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(SpanKind::Text),
            "bold" => Ok(SpanKind::Bold),
            "italic" => Ok(SpanKind::Italic),
            "code" => Ok(SpanKind::Code),
            "link" => Ok(SpanKind::Link),
            "image" => Ok(SpanKind::Image),
            other => Err(Error::UnsupportedSpanKind(other.to_string())),
        }
    }
}

/// A run of inline text with a single kind.
///
/// Links and images carry a destination URL; for images `text` is the alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub kind: SpanKind,
    pub url: Option<String>,
}

impl Span {
    pub fn new(text: &str, kind: SpanKind) -> Self {
        Self {
            text: text.to_string(),
            kind,
            url: None,
        }
    }

    /// Plain text span, the entry point for raw strings
    pub fn text(text: &str) -> Self {
        Self::new(text, SpanKind::Text)
    }

    pub fn with_url(text: &str, kind: SpanKind, url: &str) -> Self {
        Self {
            text: text.to_string(),
            kind,
            url: Some(url.to_string()),
        }
    }

    pub fn is_text(&self) -> bool {
        self.kind == SpanKind::Text
    }
}

/// Convert a span into the leaf that renders it
pub fn span_to_node(span: &Span) -> Node {
    let url = span.url.as_deref().unwrap_or_default();

    match span.kind {
        SpanKind::Text => Node::text(&span.text),
        SpanKind::Bold => Node::leaf("b", &span.text),
        SpanKind::Italic => Node::leaf("i", &span.text),
        SpanKind::Code => Node::leaf("code", &span.text),
        SpanKind::Link => Leaf::new(Some("a"), &span.text)
            .with_attr("href", url)
            .into(),
        SpanKind::Image => Leaf::new(Some("img"), "")
            .with_attr("src", url)
            .with_attr("alt", &span.text)
            .into(),
    }
}
