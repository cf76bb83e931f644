//! Ordered node selections
//!
//! A [`Selection`] never touches the tree. Every method either reads the
//! selected nodes or returns a new selection.

use hashbrown::HashSet;

use cobalt_selector::matcher::union;
use cobalt_selector::{Scope, SelectorMatcher, SelectorNode, SelectorResult};

use crate::error::CobaltResult;

/// De-duplicated, ordered set of selected nodes
#[derive(Debug, Clone)]
pub struct Selection<N: SelectorNode> {
    nodes: Vec<N>,
    matcher: SelectorMatcher,
}

impl<N: SelectorNode> Selection<N> {
    /// Selection over the given nodes, dropping repeats
    #[must_use]
    pub fn new(nodes: Vec<N>) -> Self {
        Self::with_matcher(nodes, SelectorMatcher::new())
    }

    pub(crate) fn with_matcher(nodes: Vec<N>, matcher: SelectorMatcher) -> Self {
        Self {
            nodes: union(nodes, Vec::new()),
            matcher,
        }
    }

    fn derive(&self, nodes: Vec<N>) -> Self {
        Self::with_matcher(nodes, self.matcher.clone())
    }

    // Searches always cover the subtrees, whatever scope built this selection
    fn search(&self, selector: &str) -> SelectorResult<Vec<N>> {
        self.matcher.select_from(selector, &self.nodes, Scope::Any)
    }

    /// Keeps the nodes that match `selector` themselves; `None` keeps all
    fn narrow(&self, nodes: Vec<N>, selector: Option<&str>) -> CobaltResult<Self> {
        let nodes = union(nodes, Vec::new());
        match selector {
            Some(selector) => Ok(self.derive(self.matcher.select_within(selector, &nodes)?)),
            None => Ok(self.derive(nodes)),
        }
    }

    /// Nodes matching `selector` in and beneath the current selection
    ///
    /// # Errors
    ///
    /// Returns `CobaltError::Selector` if the selector fails.
    pub fn find(&self, selector: &str) -> CobaltResult<Self> {
        let found = self.search(selector)?;
        Ok(self.derive(found))
    }

    /// Drops every node that `selector` would find from this selection
    ///
    /// # Errors
    ///
    /// Returns `CobaltError::Selector` if the selector fails.
    pub fn filter(&self, selector: &str) -> CobaltResult<Self> {
        let found: HashSet<N> = self.search(selector)?.into_iter().collect();
        Ok(self.derive(
            self.nodes
                .iter()
                .filter(|node| !found.contains(*node))
                .cloned()
                .collect(),
        ))
    }

    /// Selected nodes that themselves match `selector`
    ///
    /// # Errors
    ///
    /// Returns `CobaltError::Selector` if the selector fails.
    pub fn matching(&self, selector: &str) -> CobaltResult<Self> {
        let matched = self.matcher.select_within(selector, &self.nodes)?;
        Ok(self.derive(matched))
    }

    /// True when every selected node matches `selector`
    ///
    /// # Errors
    ///
    /// Returns `CobaltError::Selector` if the selector fails.
    pub fn is(&self, selector: &str) -> CobaltResult<bool> {
        Ok(self.matcher.select_within(selector, &self.nodes)?.len() == self.nodes.len())
    }

    /// True when at least one selected node matches `selector`
    ///
    /// # Errors
    ///
    /// Returns `CobaltError::Selector` if the selector fails.
    pub fn has(&self, selector: &str) -> CobaltResult<bool> {
        Ok(!self.matcher.select_within(selector, &self.nodes)?.is_empty())
    }

    /// Number of nodes `selector` finds from this selection
    ///
    /// # Errors
    ///
    /// Returns `CobaltError::Selector` if the selector fails.
    pub fn count(&self, selector: &str) -> CobaltResult<usize> {
        Ok(self.search(selector)?.len())
    }

    /// Full sibling runs of the selected nodes, optionally narrowed by
    /// `selector`
    ///
    /// # Errors
    ///
    /// Returns `CobaltError::Selector` if the selector fails.
    pub fn siblings(&self, selector: Option<&str>) -> CobaltResult<Self> {
        let related = self.nodes.iter().flat_map(|node| node.siblings()).collect();
        self.narrow(related, selector)
    }

    /// Parents of the selected nodes, optionally narrowed by `selector`
    ///
    /// # Errors
    ///
    /// Returns `CobaltError::Selector` if the selector fails.
    pub fn parents(&self, selector: Option<&str>) -> CobaltResult<Self> {
        let related = self.nodes.iter().filter_map(|node| node.parent()).collect();
        self.narrow(related, selector)
    }

    /// Direct children of the selected nodes, optionally narrowed by
    /// `selector`
    ///
    /// # Errors
    ///
    /// Returns `CobaltError::Selector` if the selector fails.
    pub fn children(&self, selector: Option<&str>) -> CobaltResult<Self> {
        let related = self.nodes.iter().flat_map(|node| node.children()).collect();
        self.narrow(related, selector)
    }

    /// First selected node that matches `selector` itself
    ///
    /// # Errors
    ///
    /// Returns `CobaltError::Selector` if the selector fails.
    pub fn first_matching(&self, selector: &str) -> CobaltResult<Option<N>> {
        Ok(self.matcher.select_within(selector, &self.nodes)?.into_iter().next())
    }

    /// Last selected node that matches `selector` itself
    ///
    /// # Errors
    ///
    /// Returns `CobaltError::Selector` if the selector fails.
    pub fn last_matching(&self, selector: &str) -> CobaltResult<Option<N>> {
        Ok(self.matcher.select_within(selector, &self.nodes)?.pop())
    }

    /// Selected element at a 1-based position, counting elements only
    ///
    /// With a selector, the position counts only the selected nodes that
    /// match it. Positions below 1 give the first element.
    ///
    /// # Errors
    ///
    /// Returns `CobaltError::Selector` if the selector fails.
    pub fn at(&self, selector: Option<&str>, index: i64) -> CobaltResult<Option<N>> {
        let candidates = match selector {
            Some(selector) => self.matcher.select_within(selector, &self.nodes)?,
            None => self.nodes.clone(),
        };
        let picked = self
            .matcher
            .select_within(&format!("*:nd({index})"), &candidates)?;
        Ok(picked.into_iter().next())
    }

    /// Adds nodes after the current ones, skipping any already selected
    #[must_use]
    pub fn include(&self, nodes: impl IntoIterator<Item = N>) -> Self {
        Self {
            nodes: union(self.nodes.clone(), nodes.into_iter().collect()),
            matcher: self.matcher.clone(),
        }
    }

    /// Removes the given nodes from the selection
    #[must_use]
    pub fn exclude(&self, nodes: &[N]) -> Self {
        let removed: HashSet<&N> = nodes.iter().collect();
        self.derive(
            self.nodes
                .iter()
                .filter(|node| !removed.contains(node))
                .cloned()
                .collect(),
        )
    }

    /// Empty selection sharing this one's matcher
    #[must_use]
    pub fn deselect(&self) -> Self {
        self.derive(Vec::new())
    }

    #[must_use]
    pub fn first(&self) -> Option<&N> {
        self.nodes.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&N> {
        self.nodes.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.nodes.iter()
    }

    #[must_use]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    #[must_use]
    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}

impl<N: SelectorNode> IntoIterator for Selection<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, N: SelectorNode> IntoIterator for &'a Selection<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
