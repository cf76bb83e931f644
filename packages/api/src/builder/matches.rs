//! Selector predicates on plain node slices

use cobalt_selector::{SelectorNode, select_within};

use crate::error::CobaltResult;

/// Tests nodes against a selector without building a [`super::Selection`]
///
/// Uses the process-wide registry.
pub trait MatchesSelector<N: SelectorNode> {
    /// The nodes that themselves match `selector`, in order
    ///
    /// # Errors
    ///
    /// Returns `CobaltError::Selector` if the selector fails.
    fn matches_selector(&self, selector: &str) -> CobaltResult<Vec<N>>;

    /// True when any node matches `selector`
    ///
    /// # Errors
    ///
    /// Returns `CobaltError::Selector` if the selector fails.
    fn any_matches(&self, selector: &str) -> CobaltResult<bool> {
        Ok(!self.matches_selector(selector)?.is_empty())
    }
}

impl<N: SelectorNode> MatchesSelector<N> for [N] {
    fn matches_selector(&self, selector: &str) -> CobaltResult<Vec<N>> {
        Ok(select_within(selector, self)?)
    }
}

impl<N: SelectorNode> MatchesSelector<N> for Vec<N> {
    fn matches_selector(&self, selector: &str) -> CobaltResult<Vec<N>> {
        self.as_slice().matches_selector(selector)
    }
}
