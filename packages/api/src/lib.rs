//! Cobalt Public API
//!
//! Fluent selection over any tree that implements
//! [`cobalt_selector::SelectorNode`]. Queries never mutate the tree; they
//! return ordered, de-duplicated [`Selection`]s that can be narrowed further.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;
pub mod error;

// Re-export all public API components
pub use builder::{MatchesSelector, SelectBuilder, Selection};
pub use error::{CobaltError, CobaltResult};

// Re-export important types from the selector package
pub use cobalt_selector::tree::{Document, NodeId, NodeRef};
pub use cobalt_selector::{
    MatcherConfig, NodeKind, NodeView, Scope, SelectorError, SelectorNode, SelectorRegistry,
    integer_argument, register_attribute_operator, register_pseudo,
    unregister_attribute_operator, unregister_pseudo,
};

/// Main Cobalt entry point providing static builder methods
pub struct Cobalt;

impl Cobalt {
    /// Start a query for `selector`
    ///
    /// Shorthand for `SelectBuilder::new(selector)`
    #[must_use]
    pub fn select(selector: impl Into<String>) -> SelectBuilder {
        SelectBuilder::new(selector)
    }

    /// Wrap nodes in a selection without running a query
    #[must_use]
    pub fn wrap<N: SelectorNode>(nodes: Vec<N>) -> Selection<N> {
        Selection::new(nodes)
    }
}
