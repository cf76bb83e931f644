//! Selector Error Types
//!
//! Core error taxonomy for selector parsing, compilation and matching.

use std::num::ParseIntError;

/// Result type for selector operations
pub type SelectorResult<T> = Result<T, SelectorError>;

/// Errors raised while reading, compiling or applying a selector
///
/// Every variant aborts the current match call. Nothing is logged or
/// suppressed internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// Malformed selector text (unbalanced brackets, dangling combinators)
    #[error("Invalid selector '{selector}': {reason}")]
    Parse {
        /// The rejected selector text
        selector: String,
        /// What made the text unreadable
        reason: String,
    },

    /// A pseudo selector was applied that has no registered handler
    #[error("{name} is not a valid pseudo selector")]
    UnknownPseudoSelector {
        /// Name of the missing pseudo selector
        name: String,
    },

    /// An attribute clause used an operator that has no registered handler
    #[error("{operator}= is not a supported attribute match type")]
    UnsupportedAttributeOperator {
        /// The operator symbol without its trailing `=`
        operator: String,
    },

    /// A pseudo selector expecting an integer received something else
    #[error("The argument for :{pseudo} should be an integer, got '{argument}'")]
    InvalidPseudoArgument {
        /// Pseudo selector that rejected the argument
        pseudo: String,
        /// The raw argument text
        argument: String,
        /// Underlying conversion failure
        #[source]
        source: ParseIntError,
    },

    /// A registration call used a malformed name or operator symbol
    #[error("Invalid registration: {reason}")]
    InvalidRegistration {
        /// Why the registration was refused
        reason: String,
    },
}

impl SelectorError {
    /// Returns true for errors raised before any structural filtering happens
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, SelectorError::Parse { .. })
    }
}
