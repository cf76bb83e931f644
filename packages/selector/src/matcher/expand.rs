//! Scope expansion
//!
//! Widens a search set according to the scope of the combinator that led to
//! it. The result keeps traversal order and holds each node once, at its
//! first occurrence.

use hashbrown::HashSet;

use crate::reader::Scope;
use crate::tree::SelectorNode;

/// Expand `nodes` under `scope`
pub fn expand<N: SelectorNode>(nodes: &[N], scope: Scope) -> Vec<N> {
    let mut seen: HashSet<N> = HashSet::with_capacity(nodes.len());
    let mut expanded = Vec::with_capacity(nodes.len());

    for node in nodes {
        let reached = match scope {
            Scope::Any => node.descendants_and_self(),
            Scope::AnyChild => node.descendants(),
            Scope::DirectChildren => node.children(),
            Scope::Siblings => next_element_sibling(node).into_iter().collect(),
            Scope::Selected => vec![node.clone()],
        };
        for candidate in reached {
            if seen.insert(candidate.clone()) {
                expanded.push(candidate);
            }
        }
    }

    expanded
}

/// First element-kind node after `node` in its sibling run
pub fn next_element_sibling<N: SelectorNode>(node: &N) -> Option<N> {
    let siblings = node.siblings();
    let position = siblings.iter().position(|sibling| sibling == node)?;
    siblings
        .into_iter()
        .skip(position + 1)
        .find(|sibling| sibling.is_element())
}

/// Ordered union keeping the first occurrence of every node
pub fn union<N: SelectorNode>(first: Vec<N>, second: Vec<N>) -> Vec<N> {
    let mut seen: HashSet<N> = HashSet::with_capacity(first.len() + second.len());
    first
        .into_iter()
        .chain(second)
        .filter(|node| seen.insert(node.clone()))
        .collect()
}
