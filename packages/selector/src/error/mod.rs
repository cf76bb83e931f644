//! Selector error handling module
//!
//! Error types, constructors and the result alias shared by the reader,
//! compiler, registry and matcher.

pub mod constructors;
mod types;

pub use constructors::{
    invalid_pseudo_argument, invalid_registration, parse_error, unknown_pseudo_selector,
    unsupported_attribute_operator,
};
pub use types::{SelectorError, SelectorResult};
