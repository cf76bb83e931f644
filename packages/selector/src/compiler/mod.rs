//! Fragment compiler
//!
//! Turns one simple-selector fragment into a requirement predicate and an
//! optional pseudo post-filter.

mod fragment;
mod requirement;
pub mod syntax;

pub use fragment::CompiledFragment;
pub use requirement::Requirement;
pub use syntax::{AttributeClause, AttributeTest, FragmentSyntax, Identity, PseudoClause};
