//! Search scopes produced by combinators

use serde::{Deserialize, Serialize};

/// How the search set is expanded before a fragment is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// The search nodes and everything beneath them (default starting scope)
    #[default]
    Any,
    /// Everything beneath the search nodes (` ` combinator)
    AnyChild,
    /// Only the children directly beneath the search nodes (`>` combinator)
    DirectChildren,
    /// The sibling following each search node (`+` combinator)
    Siblings,
    /// The search nodes themselves, no expansion
    Selected,
}

impl Scope {
    /// Maps trimmed combinator text to its scope
    ///
    /// A run of spaces trims to the empty string and maps to [`Scope::AnyChild`].
    #[must_use]
    pub fn from_combinator(text: &str) -> Option<Scope> {
        match text {
            "" => Some(Scope::AnyChild),
            ">" => Some(Scope::DirectChildren),
            "+" => Some(Scope::Siblings),
            _ => None,
        }
    }

    /// Combinator symbol for this scope, if it has one
    #[must_use]
    pub fn symbol(self) -> Option<char> {
        match self {
            Scope::AnyChild => Some(' '),
            Scope::DirectChildren => Some('>'),
            Scope::Siblings => Some('+'),
            Scope::Any | Scope::Selected => None,
        }
    }
}
