//! # Cobalt Selector Engine
//!
//! CSS-like selector parsing and matching over any tree that implements
//! [`tree::SelectorNode`].
//!
//! ## Features
//!
//! - **Hand-rolled tokenizer** with bracket depth and escape tracking
//! - **Descendant, child and sibling combinators** (` `, `>`, `+`)
//! - **Id, name and class identities** (`#id`, `$name`, `.class`)
//! - **Chained attribute clauses** with pluggable operators (`[@href~='x']`)
//! - **Pseudo post-filters** with positional and form-control built-ins
//! - **Process-wide registry** for custom pseudo selectors and operators
//!
//! ## Usage
//!
//! ```
//! use cobalt_selector::tree::Document;
//!
//! let mut doc = Document::new();
//! let root = doc.root();
//! let menu = doc.element(root, "ul").class("menu").finish();
//! let first = doc.element(menu, "li").text("one").finish();
//! doc.element(menu, "li").text("two").finish();
//!
//! let found = cobalt_selector::select("ul.menu > li:first", &[doc.node(root)]).unwrap();
//! assert_eq!(found, vec![doc.node(first)]);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod compiler;
pub mod config;
pub mod error;
pub mod matcher;
pub mod reader;
pub mod registry;
pub mod tree;

pub use compiler::CompiledFragment;
pub use config::{ConfigurationError, MatcherConfig, Validator};
pub use error::{SelectorError, SelectorResult};
pub use matcher::SelectorMatcher;
pub use reader::{Scope, SelectorReader};
pub use registry::{
    AttributeOperatorHandler, PseudoHandler, SelectorRegistry, integer_argument,
    register_attribute_operator, register_pseudo, unregister_attribute_operator,
    unregister_pseudo,
};
pub use tree::{NodeKind, NodeView, SelectorNode};

/// Match a selector against the given nodes and everything beneath them,
/// using the process-wide registry
///
/// # Errors
///
/// Returns `SelectorError` if the selector cannot be read or references an
/// unknown pseudo selector or attribute operator.
pub fn select<N: SelectorNode>(selector: &str, nodes: &[N]) -> SelectorResult<Vec<N>> {
    SelectorMatcher::new().select(selector, nodes)
}

/// Match a selector against the given nodes themselves
///
/// # Errors
///
/// Same conditions as [`select`].
pub fn select_within<N: SelectorNode>(selector: &str, nodes: &[N]) -> SelectorResult<Vec<N>> {
    SelectorMatcher::new().select_within(selector, nodes)
}
