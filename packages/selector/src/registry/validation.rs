//! Registration key validation

use regex::Regex;

use crate::error::{SelectorResult, invalid_registration};

lazy_static::lazy_static! {
    static ref PSEUDO_NAME: Result<Regex, regex::Error> = Regex::new("^[A-Za-z0-9]+$");
}

/// Validates and trims a pseudo selector name
pub(super) fn pseudo_name(name: &str) -> SelectorResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid_registration(
            "you must provide a name for a custom pseudo selector",
        ));
    }

    let pattern = PSEUDO_NAME
        .as_ref()
        .map_err(|error| invalid_registration(error.to_string()))?;
    if !pattern.is_match(name) {
        return Err(invalid_registration(format!(
            "pseudo selector name '{name}' can only contain letters or numbers"
        )));
    }
    Ok(name.to_string())
}

/// Resolves an operator symbol to its registry key
///
/// `"="` is the plain comparison (`None`); `"x"` and `"x="` both map to
/// `Some('x')`.
pub(super) fn operator_symbol(symbol: &str) -> SelectorResult<Option<char>> {
    let symbol = symbol.trim();
    if symbol == "=" {
        return Ok(None);
    }

    let modifier = symbol.strip_suffix('=').unwrap_or(symbol);
    let mut chars = modifier.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(invalid_registration(if modifier.is_empty() {
            "you must provide a special character for an attribute operator".to_string()
        } else {
            format!("attribute operator '{symbol}' must be a single special character")
        }));
    };

    if c.is_alphanumeric() || c.is_whitespace() || c == '=' {
        return Err(invalid_registration(format!(
            "attribute operator '{symbol}' cannot be a letter, digit, space or '='"
        )));
    }
    Ok(Some(c))
}
