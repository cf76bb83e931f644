//! Fluent selection builders
//!
//! [`SelectBuilder`] collects the selector, registry and settings for one
//! query; [`Selection`] is the ordered node set it produces and the starting
//! point for further queries.

pub mod core;
pub mod matches;
pub mod selection;

pub use self::core::SelectBuilder;
pub use self::matches::MatchesSelector;
pub use self::selection::Selection;
