//! HTML node tree
//!
//! A document is a tree of [`Node`]s. Text-bearing elements are [`Leaf`]s;
//! elements that own other elements are [`Parent`]s. The two never overlap:
//! a leaf has no children and a parent has no text value.

use indexmap::IndexMap;

use crate::NodeError;

/// Attribute name to value, rendered in insertion order
pub type Attributes = IndexMap<String, String>;

/// An HTML element or bare text
#[derive(Debug, Clone)]
pub enum Node {
    /// Element (or untagged text) carrying a text value
    Leaf(Leaf),
    /// Element carrying an ordered list of child nodes
    Parent(Parent),
}

/// A node with a text value and no children.
///
/// An absent `tag` renders the value as bare text.
#[derive(Debug, Clone)]
pub struct Leaf {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attributes: Attributes,
}

/// A node whose content is an ordered, non-empty list of children.
///
/// Parents carry no attributes and always render a bare opening tag.
#[derive(Debug, Clone)]
pub struct Parent {
    pub tag: String,
    pub children: Vec<Node>,
}

impl Node {
    /// Create an untagged text leaf
    pub fn text(value: &str) -> Self {
        Node::Leaf(Leaf::new(None, value))
    }

    /// Create a tagged leaf
    pub fn leaf(tag: &str, value: &str) -> Self {
        Node::Leaf(Leaf::new(Some(tag), value))
    }

    /// Create a parent node, validating tag and children
    pub fn parent(tag: &str, children: Vec<Node>) -> Result<Self, NodeError> {
        Parent::new(tag, children).map(Node::Parent)
    }

    /// Tag name, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.tag.as_deref(),
            Node::Parent(parent) => Some(parent.tag.as_str()),
        }
    }

    /// Attributes of a leaf, `None` for parents
    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Node::Leaf(leaf) => Some(&leaf.attributes),
            Node::Parent(_) => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Text value for leaves, `None` for parents
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.value.as_deref(),
            Node::Parent(_) => None,
        }
    }

    /// Children for parents, empty for leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf(_) => &[],
            Node::Parent(parent) => &parent.children,
        }
    }
}

impl Leaf {
    pub fn new(tag: Option<&str>, value: &str) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: Some(value.to_string()),
            attributes: Attributes::new(),
        }
    }

    /// Build a leaf from possibly-absent parts.
    ///
    /// An empty value is accepted; an absent one is not.
    pub fn try_new(tag: Option<String>, value: Option<String>) -> Result<Self, NodeError> {
        if value.is_none() {
            return Err(NodeError::MissingValue);
        }
        Ok(Self {
            tag,
            value,
            attributes: Attributes::new(),
        })
    }

    /// Add an attribute, replacing any existing value for `name`
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }
}

impl Parent {
    pub fn new(tag: &str, children: Vec<Node>) -> Result<Self, NodeError> {
        if tag.is_empty() {
            return Err(NodeError::MissingTag);
        }
        if children.is_empty() {
            return Err(NodeError::MissingChildren);
        }
        Ok(Self {
            tag: tag.to_string(),
            children,
        })
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<Parent> for Node {
    fn from(parent: Parent) -> Self {
        Node::Parent(parent)
    }
}

// Equality compares tag and content only. Attributes are ignored.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Leaf(a), Node::Leaf(b)) => a == b,
            (Node::Parent(a), Node::Parent(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq for Leaf {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.value == other.value
    }
}

impl PartialEq for Parent {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.children == other.children
    }
}
