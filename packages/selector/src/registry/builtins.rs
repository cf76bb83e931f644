//! Built-in pseudo selectors and attribute operators
//!
//! Positional filters come in two flavours. `first`, `last`, `even`, `odd`,
//! `nd` and `nth` count element-kind nodes only, while `lt`, `lte`, `gt` and
//! `gte` count every node in the sequence they receive. Both behaviours are
//! relied upon by existing selectors.

use super::SelectorRegistry;
use crate::error::{SelectorResult, invalid_pseudo_argument};
use crate::tree::{NodeView, eq_ignore_case};

/// Parses a pseudo argument as an integer
///
/// Available to custom pseudo selectors so they report bad arguments the
/// same way the built-ins do.
///
/// # Errors
///
/// Returns `SelectorError::InvalidPseudoArgument` wrapping the conversion
/// failure.
pub fn integer_argument(pseudo: &str, argument: &str) -> SelectorResult<i64> {
    argument
        .trim()
        .parse::<i64>()
        .map_err(|source| invalid_pseudo_argument(pseudo, argument, source))
}

/// (position in the sequence, 1-based ordinal among elements)
fn element_ordinals<'a>(nodes: &'a [&'a dyn NodeView]) -> impl Iterator<Item = (usize, i64)> + 'a {
    nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| node.is_element())
        .zip(1_i64..)
        .map(|((position, _), ordinal)| (position, ordinal))
}

fn elements_where(nodes: &[&dyn NodeView], keep: impl Fn(i64) -> bool) -> Vec<usize> {
    element_ordinals(nodes)
        .filter(|(_, ordinal)| keep(*ordinal))
        .map(|(position, _)| position)
        .collect()
}

fn raw_where(nodes: &[&dyn NodeView], keep: impl Fn(i64) -> bool) -> Vec<usize> {
    (0..nodes.len())
        .zip(1_i64..)
        .filter(|(_, ordinal)| keep(*ordinal))
        .map(|(position, _)| position)
        .collect()
}

fn nodes_where(nodes: &[&dyn NodeView], keep: impl Fn(&dyn NodeView) -> bool) -> Vec<usize> {
    nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| keep(**node))
        .map(|(position, _)| position)
        .collect()
}

fn is_input_of_type(node: &dyn NodeView, input_type: &str) -> bool {
    node.tag_matches("input")
        && eq_ignore_case(node.attribute("type").unwrap_or_default(), input_type)
}

/// Registers every built-in entry on a registry
pub(super) fn seed(registry: &SelectorRegistry) {
    let pseudo: [(&str, fn(&[&dyn NodeView], &str) -> SelectorResult<Vec<usize>>); 19] = [
        ("first", first),
        ("last", last),
        ("even", |nodes, _| Ok(elements_where(nodes, |n| n % 2 == 0))),
        ("odd", |nodes, _| Ok(elements_where(nodes, |n| n % 2 != 0))),
        ("nd", nd),
        ("nth", nth),
        ("lt", |nodes, arg| {
            let value = integer_argument("lt", arg)?;
            Ok(raw_where(nodes, |n| n < value))
        }),
        ("lte", |nodes, arg| {
            let value = integer_argument("lte", arg)?;
            Ok(raw_where(nodes, |n| n <= value))
        }),
        ("gt", |nodes, arg| {
            let value = integer_argument("gt", arg)?;
            Ok(raw_where(nodes, |n| n > value))
        }),
        ("gte", |nodes, arg| {
            let value = integer_argument("gte", arg)?;
            Ok(raw_where(nodes, |n| n >= value))
        }),
        ("text", |nodes, _| Ok(nodes_where(nodes, |n| is_input_of_type(n, "text")))),
        ("password", |nodes, _| {
            Ok(nodes_where(nodes, |n| is_input_of_type(n, "password")))
        }),
        ("button", |nodes, _| {
            Ok(nodes_where(nodes, |n| {
                is_input_of_type(n, "button") || n.tag_matches("button")
            }))
        }),
        ("checkbox", |nodes, _| {
            Ok(nodes_where(nodes, |n| is_input_of_type(n, "checkbox")))
        }),
        ("radio", |nodes, _| Ok(nodes_where(nodes, |n| is_input_of_type(n, "radio")))),
        ("hidden", |nodes, _| Ok(nodes_where(nodes, |n| is_input_of_type(n, "hidden")))),
        ("file", |nodes, _| Ok(nodes_where(nodes, |n| is_input_of_type(n, "file")))),
        ("submit", |nodes, _| Ok(nodes_where(nodes, |n| is_input_of_type(n, "submit")))),
        ("textarea", |nodes, _| Ok(nodes_where(nodes, |n| n.tag_matches("textarea")))),
    ];

    let operators: [(&str, fn(&str, &str) -> bool); 4] = [
        ("=", |argument, value| eq_ignore_case(value, argument)),
        ("|=", |argument, value| {
            value.to_lowercase().starts_with(&argument.to_lowercase())
        }),
        ("$=", |argument, value| {
            value.to_lowercase().ends_with(&argument.to_lowercase())
        }),
        ("~=", |argument, value| {
            value.to_lowercase().contains(&argument.to_lowercase())
        }),
    ];

    let mut seeded = true;
    for (name, handler) in pseudo {
        seeded &= registry.register_pseudo(name, handler).is_ok();
    }
    for (symbol, handler) in operators {
        seeded &= registry.register_attribute_operator(symbol, handler).is_ok();
    }
    debug_assert!(seeded, "built-in selector keys must pass validation");
}

fn first(nodes: &[&dyn NodeView], _: &str) -> SelectorResult<Vec<usize>> {
    Ok(element_ordinals(nodes).take(1).map(|(position, _)| position).collect())
}

fn last(nodes: &[&dyn NodeView], _: &str) -> SelectorResult<Vec<usize>> {
    Ok(element_ordinals(nodes).last().map(|(position, _)| position).into_iter().collect())
}

/// The single element at a 1-based ordinal; ordinals below 1 clamp to the first
fn nd(nodes: &[&dyn NodeView], argument: &str) -> SelectorResult<Vec<usize>> {
    let target = integer_argument("nd", argument)?.max(1);
    Ok(elements_where(nodes, |n| n == target))
}

/// Every element whose ordinal is an exact multiple of the argument
fn nth(nodes: &[&dyn NodeView], argument: &str) -> SelectorResult<Vec<usize>> {
    let step = integer_argument("nth", argument)?;
    Ok(elements_where(nodes, |n| n.checked_rem(step) == Some(0)))
}
