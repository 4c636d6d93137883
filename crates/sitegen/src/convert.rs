//! Convert classified blocks into node tree fragments.

use sitegen_core::Node;

use crate::block::BlockType;
use crate::inline::{text_to_spans, try_text_to_spans};
use crate::options::Options;
use crate::span::span_to_node;
use crate::Result;

/// Build the fragment for a block already classified as `block_type`
pub fn convert_block(block: &str, block_type: BlockType, options: &Options) -> Result<Node> {
    match block_type {
        BlockType::Heading(level) => heading_to_node(block, level, options),
        BlockType::Code => code_to_node(block),
        BlockType::Quote => quote_to_node(block, options),
        BlockType::UnorderedList => unordered_list_to_node(block, options),
        BlockType::OrderedList => ordered_list_to_node(block, options),
        BlockType::Paragraph => inline_node("p", block.trim(), options),
    }
}

fn heading_to_node(block: &str, level: u8, options: &Options) -> Result<Node> {
    let tag = format!("h{}", level);
    let text = block.trim_start_matches('#').trim();

    if options.inline_headings {
        inline_node(&tag, text, options)
    } else {
        Ok(Node::leaf(&tag, text))
    }
}

fn code_to_node(block: &str) -> Result<Node> {
    let code = block.trim_matches('`').trim();
    Ok(Node::parent("pre", vec![Node::leaf("code", code)])?)
}

fn quote_to_node(block: &str, options: &Options) -> Result<Node> {
    let text = block
        .trim()
        .lines()
        .map(|line| line.trim_start_matches(['>', ' ']).trim_end())
        .collect::<Vec<_>>()
        .join("\n");

    if options.inline_quotes {
        inline_node("blockquote", &text, options)
    } else {
        Ok(Node::leaf("blockquote", &text))
    }
}

fn unordered_list_to_node(block: &str, options: &Options) -> Result<Node> {
    let items = block
        .lines()
        .filter(|line| {
            line.starts_with("* ") || (options.dash_list_items && line.starts_with("- "))
        })
        .map(|line| inline_node("li", line.trim()[1..].trim(), options))
        .collect::<Result<Vec<_>>>()?;

    Ok(Node::parent("ul", items)?)
}

fn ordered_list_to_node(block: &str, options: &Options) -> Result<Node> {
    let items = block
        .lines()
        .map(|line| {
            let text = line.split_once(' ').map_or(line.trim(), |(_, rest)| rest.trim());
            inline_node("li", text, options)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Node::parent("ol", items)?)
}

/// Wrap `text` in `tag`, converting its inline markup into child leaves.
///
/// Text without markup stays a single leaf, as does text that yields no
/// spans at all.
fn inline_node(tag: &str, text: &str, options: &Options) -> Result<Node> {
    let spans = if options.strict_delimiters {
        try_text_to_spans(text)?
    } else {
        text_to_spans(text)
    };

    match spans.as_slice() {
        [] => Ok(Node::leaf(tag, "")),
        [only] if only.is_text() => Ok(Node::leaf(tag, &only.text)),
        _ => Ok(Node::parent(tag, spans.iter().map(span_to_node).collect())?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use sitegen_core::NodeError;

    fn convert(block: &str, block_type: BlockType) -> Node {
        convert_block(block, block_type, &Options::default()).unwrap()
    }

    #[test]
    fn test_heading() {
        let node = convert("## Heading 2", BlockType::Heading(2));
        assert_eq!(node, Node::leaf("h2", "Heading 2"));
    }

    #[test]
    fn test_heading_keeps_markup_by_default() {
        let node = convert("# A **bold** title", BlockType::Heading(1));
        assert_eq!(node.render().unwrap(), "<h1>A **bold** title</h1>");
    }

    #[test]
    fn test_heading_inline_option() {
        let options = Options {
            inline_headings: true,
            ..Default::default()
        };
        let node = convert_block("# A **bold** title", BlockType::Heading(1), &options).unwrap();
        assert_eq!(node.render().unwrap(), "<h1>A <b>bold</b> title</h1>");
    }

    #[test]
    fn test_code() {
        let node = convert("```\nlet x = 1;\n```", BlockType::Code);
        assert_eq!(node.render().unwrap(), "<pre><code>let x = 1;</code></pre>");
    }

    #[test]
    fn test_quote() {
        let node = convert("> first line  \n>second line\n> > nested", BlockType::Quote);
        assert_eq!(node, Node::leaf("blockquote", "first line\nsecond line\nnested"));
    }

    #[test]
    fn test_quote_inline_option() {
        let options = Options {
            inline_quotes: true,
            ..Default::default()
        };
        let node = convert_block("> be *brief*", BlockType::Quote, &options).unwrap();
        assert_eq!(node.render().unwrap(), "<blockquote>be <i>brief</i></blockquote>");
    }

    #[test]
    fn test_unordered_list() {
        let node = convert("* one\n* two", BlockType::UnorderedList);
        assert_eq!(
            node,
            Node::parent("ul", vec![Node::leaf("li", "one"), Node::leaf("li", "two")]).unwrap()
        );
    }

    #[test]
    fn test_unordered_list_with_dashes() {
        let node = convert("- one\n* two", BlockType::UnorderedList);
        assert_eq!(node.render().unwrap(), "<ul><li>one</li><li>two</li></ul>");
    }

    #[test]
    fn test_unordered_list_star_only() {
        let options = Options {
            dash_list_items: false,
            ..Default::default()
        };
        let mixed = convert_block("- one\n* two", BlockType::UnorderedList, &options).unwrap();
        assert_eq!(mixed.render().unwrap(), "<ul><li>two</li></ul>");

        let dashes = convert_block("- one\n- two", BlockType::UnorderedList, &options);
        assert!(matches!(dashes, Err(Error::Node(NodeError::MissingChildren))));
    }

    #[test]
    fn test_ordered_list() {
        let node = convert("1. First item\n2. Second item\n3. Third item", BlockType::OrderedList);
        assert_eq!(
            node,
            Node::parent(
                "ol",
                vec![
                    Node::leaf("li", "First item"),
                    Node::leaf("li", "Second item"),
                    Node::leaf("li", "Third item"),
                ]
            )
            .unwrap()
        );
    }

    #[test]
    fn test_ordered_list_empty_item() {
        let node = convert("1. a\n2. \n3. c", BlockType::OrderedList);
        assert_eq!(node.render().unwrap(), "<ol><li>a</li><li></li><li>c</li></ol>");
        assert_eq!(node.children()[1], Node::leaf("li", ""));
    }

    #[test]
    fn test_unordered_list_empty_item() {
        let node = convert("* a\n* \n* b", BlockType::UnorderedList);
        assert_eq!(node.render().unwrap(), "<ul><li>a</li><li></li><li>b</li></ul>");
        assert_eq!(node.children()[1], Node::leaf("li", ""));
    }

    #[test]
    fn test_list_item_markup() {
        let node = convert("* a [link](/x)", BlockType::UnorderedList);
        assert_eq!(node.render().unwrap(), "<ul><li>a <a href=/x >link</a></li></ul>");
    }

    #[test]
    fn test_paragraph() {
        let node = convert("  plain words  ", BlockType::Paragraph);
        assert_eq!(node, Node::leaf("p", "plain words"));
    }

    #[test]
    fn test_paragraph_markup() {
        let node = convert("This is a **bolded** paragraph", BlockType::Paragraph);
        assert_eq!(
            node,
            Node::parent(
                "p",
                vec![
                    Node::text("This is a "),
                    Node::leaf("b", "bolded"),
                    Node::text(" paragraph"),
                ]
            )
            .unwrap()
        );
    }

    #[test]
    fn test_paragraph_image_only() {
        let node = convert("![alt](a.png)", BlockType::Paragraph);
        assert_eq!(node.render().unwrap(), "<p><img src=a.png alt=alt ></img></p>");
    }

    #[test]
    fn test_strict_delimiters() {
        let options = Options {
            strict_delimiters: true,
            ..Default::default()
        };
        let result = convert_block("a **b", BlockType::Paragraph, &options);
        assert!(matches!(result, Err(Error::UnmatchedDelimiter { .. })));
    }
}
