//! Selector matcher
//!
//! Drives a selector over a set of starting nodes. Each fragment widens the
//! current search set by the active scope, keeps the elements that satisfy
//! the fragment's requirements, runs its pseudo post-filter, and hands the
//! result on as the next search set.
//!
//! Sibling steps (`+`) accumulate: matches carried in from the previous step
//! that also satisfy the current fragment stay in the result ahead of the
//! newly reached siblings.

mod expand;

use std::sync::Arc;

pub use expand::{expand, next_element_sibling, union};

use crate::compiler::CompiledFragment;
use crate::config::{ConfigResult, MatcherConfig, Validator};
use crate::error::{SelectorResult, parse_error};
use crate::reader::{Scope, SelectorReader};
use crate::registry::SelectorRegistry;
use crate::tree::SelectorNode;

/// Selector engine bound to a registry and configuration
#[derive(Debug, Clone)]
pub struct SelectorMatcher {
    registry: Arc<SelectorRegistry>,
    config: MatcherConfig,
}

impl Default for SelectorMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectorMatcher {
    /// Matcher over the process-wide registry with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(SelectorRegistry::global())
    }

    /// Matcher over an explicit registry
    #[must_use]
    pub fn with_registry(registry: Arc<SelectorRegistry>) -> Self {
        Self {
            registry,
            config: MatcherConfig::default(),
        }
    }

    /// Replace the matcher settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if the settings fail validation.
    pub fn with_config(mut self, config: MatcherConfig) -> ConfigResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    #[inline]
    #[must_use]
    pub fn registry(&self) -> &Arc<SelectorRegistry> {
        &self.registry
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Match a selector starting from the configured scope (self and
    /// descendants by default)
    ///
    /// An empty or blank selector yields no nodes.
    ///
    /// # Errors
    ///
    /// Returns `SelectorError` if the selector cannot be read, uses an unknown
    /// attribute operator or pseudo selector, or exceeds the iteration cap.
    pub fn select<N: SelectorNode>(&self, selector: &str, nodes: &[N]) -> SelectorResult<Vec<N>> {
        self.run(selector, nodes, self.config.starting_scope)
    }

    /// Match a selector against the given nodes themselves, without first
    /// expanding to their descendants
    ///
    /// # Errors
    ///
    /// Same conditions as [`SelectorMatcher::select`].
    pub fn select_within<N: SelectorNode>(
        &self,
        selector: &str,
        nodes: &[N],
    ) -> SelectorResult<Vec<N>> {
        self.run(selector, nodes, Scope::Selected)
    }

    /// Match a selector with an explicit starting scope, ignoring the
    /// configured one
    ///
    /// # Errors
    ///
    /// Same conditions as [`SelectorMatcher::select`].
    pub fn select_from<N: SelectorNode>(
        &self,
        selector: &str,
        nodes: &[N],
        scope: Scope,
    ) -> SelectorResult<Vec<N>> {
        self.run(selector, nodes, scope)
    }

    fn run<N: SelectorNode>(
        &self,
        selector: &str,
        nodes: &[N],
        starting_scope: Scope,
    ) -> SelectorResult<Vec<N>> {
        let mut reader = SelectorReader::parse(selector)?;
        if reader.is_finished() {
            log::trace!("empty selector, nothing to match");
            return Ok(Vec::new());
        }

        let mut search: Vec<N> = nodes.to_vec();
        let mut scope = starting_scope;
        let mut matched: Vec<N> = Vec::new();
        let mut iterations = 0usize;

        loop {
            let Some(fragment) = reader.next_fragment().map(str::to_owned) else {
                break;
            };

            iterations += 1;
            if iterations > self.config.max_iterations {
                return Err(parse_error(
                    reader.selector(),
                    format!(
                        "exceeded the limit of {} fragment iterations",
                        self.config.max_iterations
                    ),
                ));
            }

            let compiled = CompiledFragment::compile(&fragment, &self.registry)?;
            let keep = |node: &N| node.is_element() && compiled.matches(node);

            let expanded = expand(&search, scope);
            let filtered: Vec<N> = expanded.into_iter().filter(|node| keep(node)).collect();

            let structural = if scope == Scope::Siblings {
                let carried: Vec<N> = matched
                    .iter()
                    .filter(|&node| keep(node))
                    .cloned()
                    .collect();
                union(carried, filtered)
            } else {
                filtered
            };

            matched = compiled.apply_pseudo(structural, &self.registry)?;
            log::debug!(
                "fragment '{}' under {:?} matched {} node(s)",
                fragment,
                scope,
                matched.len()
            );

            match reader.next_combinator() {
                Some(next) => {
                    search = matched.clone();
                    scope = next;
                }
                None => break,
            }
        }

        Ok(matched)
    }
}
