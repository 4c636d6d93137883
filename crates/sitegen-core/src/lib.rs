//! sitegen-core - HTML node tree and rendering
//!
//! This crate provides the tree that Markdown conversion produces and the
//! renderer that turns it into an HTML string. It is used by `sitegen`.
//!
//! # Example
//!
//! ```rust
//! use sitegen_core::{Leaf, Node};
//!
//! let doc = Node::parent(
//!     "p",
//!     vec![
//!         Node::text("This is "),
//!         Node::leaf("b", "bold"),
//!         Node::from(Leaf::new(Some("a"), "a link").with_attr("href", "/home")),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     doc.render().unwrap(),
//!     "<p>This is <b>bold</b><a href=/home >a link</a></p>"
//! );
//! ```

mod node;
mod render;

pub use node::{Attributes, Leaf, Node, Parent};

/// Structural errors raised when building or rendering nodes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("leaf node requires a value")]
    MissingValue,

    #[error("parent node requires a tag")]
    MissingTag,

    #[error("parent node requires children")]
    MissingChildren,
}
