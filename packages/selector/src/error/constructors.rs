//! Error constructor helpers
//!
//! Factory functions used throughout the engine so call sites stay short and
//! the message format lives in one place.

use std::num::ParseIntError;

use super::types::SelectorError;

/// Creates a parse error for the selector text provided
///
/// # Examples
/// ```
/// use cobalt_selector::error::parse_error;
///
/// let error = parse_error("div[", "unclosed '[' in attribute clause");
/// assert!(error.is_parse_error());
/// ```
pub fn parse_error(selector: &str, reason: impl Into<String>) -> SelectorError {
    SelectorError::Parse {
        selector: selector.to_string(),
        reason: reason.into(),
    }
}

/// Creates an error for a pseudo selector without a handler
pub fn unknown_pseudo_selector(name: &str) -> SelectorError {
    SelectorError::UnknownPseudoSelector {
        name: name.to_string(),
    }
}

/// Creates an error for an attribute operator without a handler
///
/// `operator` is `None` for the plain `=` comparison.
pub fn unsupported_attribute_operator(operator: Option<char>) -> SelectorError {
    SelectorError::UnsupportedAttributeOperator {
        operator: operator.map(String::from).unwrap_or_default(),
    }
}

/// Wraps an integer conversion failure for a pseudo selector argument
pub fn invalid_pseudo_argument(
    pseudo: &str,
    argument: &str,
    source: ParseIntError,
) -> SelectorError {
    SelectorError::InvalidPseudoArgument {
        pseudo: pseudo.to_string(),
        argument: argument.to_string(),
        source,
    }
}

/// Creates a registration error
pub fn invalid_registration(reason: impl Into<String>) -> SelectorError {
    SelectorError::InvalidRegistration {
        reason: reason.into(),
    }
}
