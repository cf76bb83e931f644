//! Tree abstraction consumed by the selector engine
//!
//! The engine never mutates a tree. It needs read access to tags, attributes
//! and node kinds ([`NodeView`], object-safe so pseudo handlers can be stored
//! type-erased in a registry) plus structural navigation ([`SelectorNode`]).
//!
//! [`Document`] is a small arena tree that implements both traits and is what
//! the tests and the public facade use.

pub mod alias;
mod document;

use std::hash::Hash;

pub use alias::{PROTECTED_ELEMENT_SUFFIX, normalize_tag};
pub use document::{Document, ElementBuilder, NodeId, NodeRef};

/// Kind of a node in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A tagged element
    Element,
    /// Text content
    Text,
    /// A comment
    Comment,
    /// The document root
    Document,
}

/// Read-only view of a single node
pub trait NodeView {
    /// Node kind classification
    fn kind(&self) -> NodeKind;

    /// Tag name as seen by selectors (already alias-normalized)
    ///
    /// Non-element nodes return an empty string.
    fn tag(&self) -> &str;

    /// Attribute value, `None` when the attribute is absent
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Checks if an attribute exists or not
    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// CSS classes assigned through the `class` attribute
    fn classes(&self) -> Vec<&str> {
        self.attribute("class")
            .map(|value| value.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Case-insensitive tag comparison
    fn tag_matches(&self, name: &str) -> bool {
        eq_ignore_case(self.tag(), name)
    }

    #[inline]
    fn is_element(&self) -> bool {
        self.kind() == NodeKind::Element
    }
}

/// Node handle with structural navigation
///
/// Equality and hashing must follow node identity, not content: two handles
/// are equal exactly when they point at the same node.
pub trait SelectorNode: NodeView + Clone + Eq + Hash {
    /// Owner of this node
    fn parent(&self) -> Option<Self>;

    /// Direct children in document order
    fn children(&self) -> Vec<Self>;

    /// The full sibling run in document order, including this node
    fn siblings(&self) -> Vec<Self> {
        match self.parent() {
            Some(parent) => parent.children(),
            None => vec![self.clone()],
        }
    }

    /// All nodes beneath this one in pre-order
    fn descendants(&self) -> Vec<Self> {
        let mut collected = Vec::new();
        let mut stack: Vec<Self> = self.children().into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            stack.extend(node.children().into_iter().rev());
            collected.push(node);
        }
        collected
    }

    /// This node followed by [`SelectorNode::descendants`]
    fn descendants_and_self(&self) -> Vec<Self> {
        let mut collected = vec![self.clone()];
        collected.extend(self.descendants());
        collected
    }
}

/// Case-insensitive string equality used for tags and attribute values
#[inline]
pub(crate) fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.eq_ignore_ascii_case(right) || left.to_lowercase() == right.to_lowercase()
}
