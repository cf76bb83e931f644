//! Selector text tokenizer
//!
//! Splits raw selector text into simple-selector fragments and the combinator
//! scopes that join them, respecting bracket nesting and escapes.

mod tokenizer;
mod scope;

pub use tokenizer::{ESCAPE_CHARACTER, SelectorReader};
pub use scope::Scope;
