//! Arena-backed document tree
//!
//! Nodes live in a single `Vec` and refer to each other by [`NodeId`]. The
//! tree is built once through [`Document::element`] and friends and then
//! queried through borrowed [`NodeRef`] handles.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::{NodeKind, NodeView, SelectorNode, alias::normalize_tag};

/// Index of a node inside its [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    tag: String,
    text: String,
    attributes: Vec<(String, String)>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeData {
    fn new(kind: NodeKind, tag: String, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            tag,
            text: String::new(),
            attributes: Vec::new(),
            parent,
            children: Vec::new(),
        }
    }
}

/// In-memory node tree rooted at a document node
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document containing only its root node
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData::new(NodeKind::Document, String::new(), None)],
        }
    }

    /// Id of the document root
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes including the root
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Starts a new element appended to `parent`
    ///
    /// ```
    /// use cobalt_selector::tree::Document;
    ///
    /// let mut doc = Document::new();
    /// let root = doc.root();
    /// let menu = doc.element(root, "ul").attr("class", "menu").finish();
    /// assert_eq!(doc.node(menu).attribute_value("class"), Some("menu"));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not produced by this document.
    pub fn element(&mut self, parent: NodeId, tag: &str) -> ElementBuilder<'_> {
        let id = self.push(NodeData::new(NodeKind::Element, tag.trim().to_string(), Some(parent)));
        ElementBuilder { document: self, id }
    }

    /// Appends a text node
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not produced by this document.
    pub fn text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let mut data = NodeData::new(NodeKind::Text, String::new(), Some(parent));
        data.text = text.to_string();
        self.push(data)
    }

    /// Appends a comment node
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not produced by this document.
    pub fn comment(&mut self, parent: NodeId, text: &str) -> NodeId {
        let mut data = NodeData::new(NodeKind::Comment, String::new(), Some(parent));
        data.text = text.to_string();
        self.push(data)
    }

    /// Sets an attribute, replacing any existing value with the same name
    ///
    /// Ids from another document are ignored.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let Some(data) = self.nodes.get_mut(id.0) else {
            return;
        };
        let attributes = &mut data.attributes;
        match attributes
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some((_, existing)) => *existing = value.to_string(),
            None => attributes.push((name.to_string(), value.to_string())),
        }
    }

    /// Borrowed handle for a node
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this document.
    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        assert!(id.0 < self.nodes.len(), "node {id:?} does not belong to this document");
        NodeRef { document: self, id }
    }

    /// Handles for several ids, in the order given
    #[must_use]
    pub fn nodes(&self, ids: &[NodeId]) -> Vec<NodeRef<'_>> {
        ids.iter().map(|id| self.node(*id)).collect()
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let Some(parent) = data.parent {
            let Some(node) = self.nodes.get_mut(parent.0) else {
                panic!("parent {parent:?} does not belong to this document");
            };
            node.children.push(id);
        }
        self.nodes.push(data);
        id
    }
}

/// Fluent builder returned by [`Document::element`]
pub struct ElementBuilder<'a> {
    document: &'a mut Document,
    id: NodeId,
}

impl ElementBuilder<'_> {
    /// Adds an attribute to the element
    #[must_use]
    pub fn attr(self, name: &str, value: &str) -> Self {
        self.document.set_attribute(self.id, name, value);
        self
    }

    /// Shorthand for the `id` attribute
    #[must_use]
    pub fn id(self, value: &str) -> Self {
        self.attr("id", value)
    }

    /// Shorthand for the `class` attribute
    #[must_use]
    pub fn class(self, value: &str) -> Self {
        self.attr("class", value)
    }

    /// Appends a text child to the element
    #[must_use]
    pub fn text(self, text: &str) -> Self {
        self.document.text(self.id, text);
        self
    }

    /// Finishes the element and returns its id
    #[must_use]
    pub fn finish(self) -> NodeId {
        self.id
    }
}

/// Borrowed handle to a node of a [`Document`]
///
/// Identity is the pair (document, node index).
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    document: &'a Document,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    #[inline]
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Raw tag name as stored, before alias normalization
    #[must_use]
    pub fn raw_tag(&self) -> &'a str {
        &self.data().tag
    }

    /// Text of a text or comment node
    #[must_use]
    pub fn text_content(&self) -> &'a str {
        &self.data().text
    }

    /// Attribute value with the document's lifetime
    #[must_use]
    pub fn attribute_value(&self, name: &str) -> Option<&'a str> {
        let name = name.trim();
        self.data()
            .attributes
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn data(&self) -> &'a NodeData {
        &self.document.nodes[self.id.0]
    }

    fn wrap(&self, id: NodeId) -> NodeRef<'a> {
        NodeRef {
            document: self.document,
            id,
        }
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.document, other.document) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl Hash for NodeRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.document, state);
        self.id.hash(state);
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data();
        match data.kind {
            NodeKind::Element => write!(f, "<{}#{}>", data.tag, self.id.0),
            NodeKind::Text => write!(f, "#text({:?})", data.text),
            NodeKind::Comment => write!(f, "#comment({:?})", data.text),
            NodeKind::Document => write!(f, "#document"),
        }
    }
}

impl NodeView for NodeRef<'_> {
    fn kind(&self) -> NodeKind {
        self.data().kind
    }

    fn tag(&self) -> &str {
        normalize_tag(&self.data().tag)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attribute_value(name)
    }
}

impl SelectorNode for NodeRef<'_> {
    fn parent(&self) -> Option<Self> {
        self.data().parent.map(|id| self.wrap(id))
    }

    fn children(&self) -> Vec<Self> {
        self.data().children.iter().map(|id| self.wrap(*id)).collect()
    }
}
