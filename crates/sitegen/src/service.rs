//! Converter - the main entry point for Markdown to HTML conversion.

use sitegen_core::Node;

use crate::block::{block_to_block_type, markdown_to_blocks};
use crate::convert::convert_block;
use crate::options::Options;
use crate::Result;

/// Tag of the container wrapping every converted document
const ROOT_TAG: &str = "div";

/// Converts Markdown documents into HTML
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: Options,
}

impl Converter {
    /// Create a Converter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Converter with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Convert Markdown to an HTML string
    pub fn convert(&self, markdown: &str) -> Result<String> {
        Ok(self.to_node(markdown)?.render()?)
    }

    /// Convert Markdown to a `div` node holding one fragment per block.
    ///
    /// A document with no blocks becomes an empty `div` leaf.
    pub fn to_node(&self, markdown: &str) -> Result<Node> {
        let blocks = markdown_to_blocks(markdown);
        log::debug!("converting document with {} blocks", blocks.len());

        if blocks.is_empty() {
            return Ok(Node::leaf(ROOT_TAG, ""));
        }

        let children = blocks
            .into_iter()
            .map(|block| self.block_to_node(block))
            .collect::<Result<Vec<_>>>()?;

        Ok(Node::parent(ROOT_TAG, children)?)
    }

    /// Classify and convert a single block
    pub fn block_to_node(&self, block: &str) -> Result<Node> {
        let block_type = block_to_block_type(block);
        log::debug!("block classified as {}", block_type);
        convert_block(block, block_type, &self.options)
    }
}
