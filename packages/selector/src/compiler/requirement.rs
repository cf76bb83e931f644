//! Requirement predicates
//!
//! Each part of a fragment compiles to one [`Requirement`]; a node matches
//! the fragment when it satisfies all of them.

use std::fmt;

use crate::registry::AttributeOperatorHandler;
use crate::tree::NodeView;

/// A single test a node must pass
#[derive(Clone)]
pub enum Requirement {
    /// `*`, matches any node
    AnyElement,
    /// Case-insensitive tag equality
    Tag(String),
    /// `#id`
    Id(String),
    /// `$name`
    Name(String),
    /// `.class`
    Class(String),
    /// `[@attribute]`
    HasAttribute(String),
    /// `[@attribute<op>=value]`, resolved against the registry at compile time
    AttributeMatch {
        name: String,
        operator: Option<char>,
        value: String,
        handler: AttributeOperatorHandler,
    },
    /// Text that could not be read as part of a fragment
    Never,
}

impl Requirement {
    /// Checks the requirement against a node
    #[must_use]
    pub fn is_satisfied_by(&self, node: &dyn NodeView) -> bool {
        match self {
            Requirement::AnyElement => true,
            Requirement::Tag(tag) => node.tag_matches(tag),
            Requirement::Id(id) => node.attribute("id").unwrap_or_default() == id,
            Requirement::Name(name) => node.attribute("name").unwrap_or_default() == name,
            Requirement::Class(class) => node.classes().iter().any(|value| value == class),
            Requirement::HasAttribute(name) => node.has_attribute(name),
            Requirement::AttributeMatch {
                name,
                value,
                handler,
                ..
            } => handler(value.as_str(), node.attribute(name).unwrap_or_default()),
            Requirement::Never => false,
        }
    }
}

impl fmt::Debug for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::AnyElement => write!(f, "AnyElement"),
            Requirement::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
            Requirement::Id(id) => f.debug_tuple("Id").field(id).finish(),
            Requirement::Name(name) => f.debug_tuple("Name").field(name).finish(),
            Requirement::Class(class) => f.debug_tuple("Class").field(class).finish(),
            Requirement::HasAttribute(name) => f.debug_tuple("HasAttribute").field(name).finish(),
            Requirement::AttributeMatch {
                name,
                operator,
                value,
                ..
            } => f
                .debug_struct("AttributeMatch")
                .field("name", name)
                .field("operator", operator)
                .field("value", value)
                .finish_non_exhaustive(),
            Requirement::Never => write!(f, "Never"),
        }
    }
}
