//! Core `SelectBuilder` structure and terminal method

use std::sync::Arc;

use cobalt_selector::{MatcherConfig, Scope, SelectorMatcher, SelectorNode, SelectorRegistry};

use super::selection::Selection;
use crate::error::CobaltResult;

/// Builder for a single selector query
///
/// ```
/// use cobalt::Cobalt;
/// use cobalt_selector::tree::Document;
///
/// let mut doc = Document::new();
/// let root = doc.root();
/// let form = doc.element(root, "form").finish();
/// let name = doc.element(form, "input").attr("type", "text").finish();
/// doc.element(form, "input").attr("type", "submit").finish();
///
/// let found = Cobalt::select("form input:text").from(&[doc.node(root)]).unwrap();
/// assert_eq!(found.nodes(), &[doc.node(name)]);
/// ```
#[derive(Debug, Clone)]
pub struct SelectBuilder {
    selector: String,
    registry: Option<Arc<SelectorRegistry>>,
    config: MatcherConfig,
}

impl SelectBuilder {
    /// Start a query for the given selector text
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            registry: None,
            config: MatcherConfig::default(),
        }
    }

    /// Use an isolated registry instead of the process-wide one
    #[must_use]
    pub fn registry(mut self, registry: Arc<SelectorRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Replace the matcher settings
    #[must_use]
    pub fn config(mut self, config: MatcherConfig) -> Self {
        self.config = config;
        self
    }

    /// Cap the number of fragments a query may process
    #[must_use]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.config = self.config.max_iterations(max_iterations);
        self
    }

    /// Test the input nodes themselves instead of their subtrees
    #[must_use]
    pub fn within(mut self) -> Self {
        self.config = self.config.starting_scope(Scope::Selected);
        self
    }

    /// The selector text this builder will run
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Build the configured matcher without running it
    ///
    /// # Errors
    ///
    /// Returns `CobaltError::Configuration` if the settings fail validation.
    pub fn matcher(&self) -> CobaltResult<SelectorMatcher> {
        let matcher = match &self.registry {
            Some(registry) => SelectorMatcher::with_registry(Arc::clone(registry)),
            None => SelectorMatcher::new(),
        };
        Ok(matcher.with_config(self.config)?)
    }

    /// Run the query against the given nodes
    ///
    /// # Errors
    ///
    /// Returns `CobaltError::Configuration` for invalid settings and
    /// `CobaltError::Selector` when the selector fails to read or match.
    pub fn from<N: SelectorNode>(self, nodes: &[N]) -> CobaltResult<Selection<N>> {
        let matcher = self.matcher()?;
        let matched = matcher.select(&self.selector, nodes)?;
        log::debug!("'{}' selected {} node(s)", self.selector, matched.len());
        Ok(Selection::with_matcher(matched, matcher))
    }
}
