//! HTML rendering
//!
//! Converts a node tree into an HTML string. Values and attributes are
//! written verbatim, without escaping.

use crate::node::{Attributes, Leaf, Node, Parent};
use crate::NodeError;

impl Node {
    /// Render this node and its descendants to HTML
    pub fn render(&self) -> Result<String, NodeError> {
        let mut output = String::with_capacity(256);
        render_node(self, &mut output)?;
        Ok(output)
    }
}

impl Leaf {
    pub fn render(&self) -> Result<String, NodeError> {
        let mut output = String::new();
        render_leaf(self, &mut output)?;
        Ok(output)
    }
}

impl Parent {
    pub fn render(&self) -> Result<String, NodeError> {
        let mut output = String::with_capacity(256);
        render_parent(self, &mut output)?;
        Ok(output)
    }
}

fn render_node(node: &Node, out: &mut String) -> Result<(), NodeError> {
    match node {
        Node::Leaf(leaf) => render_leaf(leaf, out),
        Node::Parent(parent) => render_parent(parent, out),
    }
}

fn render_leaf(leaf: &Leaf, out: &mut String) -> Result<(), NodeError> {
    let value = leaf.value.as_deref().ok_or(NodeError::MissingValue)?;

    match leaf.tag.as_deref() {
        None => out.push_str(value),
        Some(tag) => {
            open_tag(tag, &leaf.attributes, out);
            out.push_str(value);
            close_tag(tag, out);
        }
    }
    Ok(())
}

fn render_parent(parent: &Parent, out: &mut String) -> Result<(), NodeError> {
    if parent.tag.is_empty() {
        return Err(NodeError::MissingTag);
    }
    if parent.children.is_empty() {
        return Err(NodeError::MissingChildren);
    }

    out.push('<');
    out.push_str(&parent.tag);
    out.push('>');
    for child in &parent.children {
        render_node(child, out)?;
    }
    close_tag(&parent.tag, out);
    Ok(())
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    render_attributes(attributes, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Write ` key=value key=value ` (leading space, trailing space per pair).
/// Nothing is written for an empty map.
fn render_attributes(attributes: &Attributes, out: &mut String) {
    if attributes.is_empty() {
        return;
    }
    out.push(' ');
    for (key, value) in attributes {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push(' ');
    }
}
