//! Block segmentation and classification.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t\r]*\n").expect("valid blank line regex"));

const CODE_FENCE: &str = "```";

/// The kind of a block, decided from its text alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// ATX heading with level 1-6
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockType::Heading(level) => write!(f, "h{}", level),
            BlockType::Code => f.write_str("code"),
            BlockType::Quote => f.write_str("quote"),
            BlockType::UnorderedList => f.write_str("unordered list"),
            BlockType::OrderedList => f.write_str("ordered list"),
            BlockType::Paragraph => f.write_str("paragraph"),
        }
    }
}

/// Split a document into trimmed, non-empty blocks on blank lines
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    BLANK_LINE_RE
        .split(markdown)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block. The first matching rule wins; anything else is a paragraph.
pub fn block_to_block_type(block: &str) -> BlockType {
    if let Some(level) = heading_level(block) {
        return BlockType::Heading(level);
    }

    if block.starts_with(CODE_FENCE) && block.ends_with(CODE_FENCE) {
        return BlockType::Code;
    }

    if block.lines().all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }

    if block.lines().all(is_unordered_item) {
        return BlockType::UnorderedList;
    }

    if block.lines().all(is_ordered_item) {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

/// Level of a `#`..`######` heading followed by a space
pub(crate) fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && block[hashes..].starts_with(' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

pub(crate) fn is_unordered_item(line: &str) -> bool {
    line.starts_with("* ") || line.starts_with("- ")
}

/// Digits, a period, then a space. The numbering itself is not checked.
pub(crate) fn is_ordered_item(line: &str) -> bool {
    match line.split_once('.') {
        Some((number, rest)) => {
            !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit()) && rest.starts_with(' ')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_blocks() {
        let markdown = "# This is a heading\n\nThis is a paragraph of text. It has some **bold** and *italic* words inside of it.\n\n* This is the first list item in a list block\n* This is a list item\n* This is another list item";
        assert_eq!(
            markdown_to_blocks(markdown),
            vec![
                "# This is a heading",
                "This is a paragraph of text. It has some **bold** and *italic* words inside of it.",
                "* This is the first list item in a list block\n* This is a list item\n* This is another list item",
            ]
        );
    }

    #[test]
    fn test_blocks_collapse_extra_blank_lines() {
        let markdown = "\n\n  first  \n\n\n\n\nsecond\n   \nthird\n\n";
        assert_eq!(markdown_to_blocks(markdown), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_blocks_keep_single_newlines() {
        assert_eq!(markdown_to_blocks("one\ntwo"), vec!["one\ntwo"]);
    }

    #[test]
    fn test_blocks_rejoin() {
        let markdown = "para one\nline two\n\npara two";
        let blocks = markdown_to_blocks(markdown);
        assert_eq!(blocks.join("\n\n"), markdown);
    }

    #[test]
    fn test_empty_document_has_no_blocks() {
        assert!(markdown_to_blocks("").is_empty());
        assert!(markdown_to_blocks(" \n\n \n").is_empty());
    }

    #[test]
    fn test_headings() {
        assert_eq!(block_to_block_type("# Heading"), BlockType::Heading(1));
        assert_eq!(block_to_block_type("### Heading"), BlockType::Heading(3));
        assert_eq!(block_to_block_type("###### Heading"), BlockType::Heading(6));
        assert_eq!(block_to_block_type("####### Heading"), BlockType::Paragraph);
        assert_eq!(block_to_block_type("#Heading"), BlockType::Paragraph);
    }

    #[test]
    fn test_code() {
        assert_eq!(block_to_block_type("```\nfn main() {}\n```"), BlockType::Code);
        assert_eq!(block_to_block_type("```\nunterminated"), BlockType::Paragraph);
    }

    #[test]
    fn test_quote() {
        assert_eq!(block_to_block_type("> one\n> two"), BlockType::Quote);
        assert_eq!(block_to_block_type("> one\ntwo"), BlockType::Paragraph);
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(block_to_block_type("* one\n* two"), BlockType::UnorderedList);
        assert_eq!(block_to_block_type("- one\n* two"), BlockType::UnorderedList);
        assert_eq!(block_to_block_type("*one"), BlockType::Paragraph);
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            block_to_block_type("1. First item\n2. Second item\n3. Third item"),
            BlockType::OrderedList
        );
        assert_eq!(block_to_block_type("7. any\n3. order"), BlockType::OrderedList);
        assert_eq!(block_to_block_type("1.no space"), BlockType::Paragraph);
        assert_eq!(block_to_block_type("a. letter"), BlockType::Paragraph);
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(block_to_block_type("Just some text."), BlockType::Paragraph);
    }

    #[test]
    fn test_heading_beats_other_rules() {
        assert_eq!(block_to_block_type("# 1. not a list"), BlockType::Heading(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(BlockType::Heading(2).to_string(), "h2");
        assert_eq!(BlockType::OrderedList.to_string(), "ordered list");
    }
}
