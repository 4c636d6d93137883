//! Inline span splitting.
//!
//! Raw text enters as a single plain span and is split in a fixed order:
//! `**` bold, `*` italic, `` ` `` code, then images, then links. Only plain
//! spans are split; spans that already carry formatting pass through.
//!
//! Images must be extracted before links since `![alt](url)` also matches
//! the link pattern.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::span::{Span, SpanKind};
use crate::{Error, Result};

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("valid image regex"));

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("valid link regex"));

/// Delimiters applied in order, with the kind their enclosed text receives
const DELIMITERS: &[(&str, SpanKind)] = &[
    ("**", SpanKind::Bold),
    ("*", SpanKind::Italic),
    ("`", SpanKind::Code),
];

/// Split `text` into spans, leaving unmatched delimiters in place
pub fn text_to_spans(text: &str) -> Vec<Span> {
    let mut spans = vec![Span::text(text)];
    for &(delimiter, kind) in DELIMITERS {
        spans = split_spans_delimiter(spans, delimiter, kind);
    }
    let spans = split_spans_links(split_spans_images(spans));
    log::trace!("split {:?} into {} spans", text, spans.len());
    spans
}

/// Like [`text_to_spans`], but an odd number of any delimiter is an error
pub fn try_text_to_spans(text: &str) -> Result<Vec<Span>> {
    let mut spans = vec![Span::text(text)];
    for &(delimiter, kind) in DELIMITERS {
        spans = try_split_spans_delimiter(spans, delimiter, kind)?;
    }
    Ok(split_spans_links(split_spans_images(spans)))
}

/// Split every plain span on `delimiter`.
///
/// Parts alternate plain/`kind`, starting with plain. A dangling delimiter
/// leaves its trailing part as `kind` with no closing pair.
pub fn split_spans_delimiter(spans: Vec<Span>, delimiter: &str, kind: SpanKind) -> Vec<Span> {
    let mut result = Vec::with_capacity(spans.len());
    for span in spans {
        push_delimited(span, delimiter, kind, &mut result);
    }
    result
}

/// Split every plain span on `delimiter`, rejecting unmatched delimiters
pub fn try_split_spans_delimiter(
    spans: Vec<Span>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<Span>> {
    let mut result = Vec::with_capacity(spans.len());
    for span in spans {
        if span.is_text() && !delimiter.is_empty() && span.text.matches(delimiter).count() % 2 == 1 {
            return Err(Error::UnmatchedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text,
            });
        }
        push_delimited(span, delimiter, kind, &mut result);
    }
    Ok(result)
}

fn push_delimited(span: Span, delimiter: &str, kind: SpanKind, out: &mut Vec<Span>) {
    if !span.is_text() || delimiter.is_empty() || !span.text.contains(delimiter) {
        out.push(span);
        return;
    }

    for (i, part) in span.text.split(delimiter).enumerate() {
        if i % 2 == 0 {
            out.push(Span::text(part));
        } else {
            out.push(Span::new(part, kind));
        }
    }
}

/// All `![alt](url)` occurrences in `text`, as `(alt, url)` pairs
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    extract_pairs(&IMAGE_RE, text)
}

/// All `[text](url)` occurrences in `text`, as `(text, url)` pairs
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    extract_pairs(&LINK_RE, text)
}

fn extract_pairs(re: &Regex, text: &str) -> Vec<(String, String)> {
    re.captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Pull images out of plain spans
pub fn split_spans_images(spans: Vec<Span>) -> Vec<Span> {
    split_spans_pattern(spans, &IMAGE_RE, SpanKind::Image)
}

/// Pull links out of plain spans
pub fn split_spans_links(spans: Vec<Span>) -> Vec<Span> {
    split_spans_pattern(spans, &LINK_RE, SpanKind::Link)
}

/// Repeatedly take the leftmost match out of each plain span.
/// Empty plain remainders are dropped.
fn split_spans_pattern(spans: Vec<Span>, re: &Regex, kind: SpanKind) -> Vec<Span> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_text() {
            result.push(span);
            continue;
        }

        let mut rest = span.text.as_str();
        while let Some(caps) = re.captures(rest) {
            let Some(whole) = caps.get(0) else { break };

            let before = &rest[..whole.start()];
            if !before.is_empty() {
                result.push(Span::text(before));
            }
            result.push(Span::with_url(&caps[1], kind, &caps[2]));
            rest = &rest[whole.end()..];
        }
        if !rest.is_empty() {
            result.push(Span::text(rest));
        }
    }

    result
}
