//! Compiled fragments
//!
//! A [`CompiledFragment`] is the per-call compiled form of one fragment: the
//! AND of its requirements plus the name and argument of an optional pseudo
//! post-filter. Attribute operators are resolved while compiling, pseudo
//! selectors only when the filter is applied.

use super::requirement::Requirement;
use super::syntax::{FragmentSyntax, Identity};
use crate::error::{SelectorResult, unknown_pseudo_selector, unsupported_attribute_operator};
use crate::registry::SelectorRegistry;
use crate::tree::{NodeView, normalize_tag};

#[derive(Debug, Clone)]
pub struct CompiledFragment {
    source: String,
    requirements: Vec<Requirement>,
    pseudo: Option<(String, String)>,
}

impl CompiledFragment {
    /// Compile a single fragment against a registry
    ///
    /// # Errors
    ///
    /// Returns `SelectorError::UnsupportedAttributeOperator` when an attribute
    /// clause uses an operator the registry does not know.
    pub fn compile(fragment: &str, registry: &SelectorRegistry) -> SelectorResult<Self> {
        let syntax = FragmentSyntax::parse(fragment);
        let mut requirements = Vec::new();

        if let Some(element) = &syntax.element {
            requirements.push(match element.as_str() {
                "*" => Requirement::AnyElement,
                name => Requirement::Tag(normalize_tag(name).to_string()),
            });
        }

        if let Some(identity) = syntax.identity {
            requirements.push(match identity {
                Identity::Id(value) => Requirement::Id(value),
                Identity::Name(value) => Requirement::Name(value),
                Identity::Class(value) => Requirement::Class(value),
            });
        }

        for clause in syntax.attributes {
            let requirement = match clause.test {
                None => Requirement::HasAttribute(clause.name),
                Some(test) => {
                    let handler = registry
                        .attribute_operator(test.operator)
                        .ok_or_else(|| unsupported_attribute_operator(test.operator))?;
                    Requirement::AttributeMatch {
                        name: clause.name,
                        operator: test.operator,
                        value: test.value,
                        handler,
                    }
                }
            };
            requirements.push(requirement);
        }

        if let Some(text) = &syntax.unrecognized {
            log::debug!("fragment '{fragment}' has unreadable text '{text}', it will match nothing");
            requirements.push(Requirement::Never);
        }

        let pseudo = syntax.pseudo.map(|clause| (clause.name, clause.argument));
        log::trace!(
            "compiled fragment '{}' into {} requirement(s), pseudo {:?}",
            fragment,
            requirements.len(),
            pseudo
        );

        Ok(Self {
            source: fragment.to_string(),
            requirements,
            pseudo,
        })
    }

    /// The fragment text this was compiled from
    #[inline]
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    #[must_use]
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Pseudo selector name, if the fragment carries one
    #[must_use]
    pub fn pseudo_name(&self) -> Option<&str> {
        self.pseudo.as_ref().map(|(name, _)| name.as_str())
    }

    /// Pseudo selector argument, empty when none was given
    #[must_use]
    pub fn pseudo_argument(&self) -> Option<&str> {
        self.pseudo.as_ref().map(|(_, argument)| argument.as_str())
    }

    /// Tests a node against every requirement
    ///
    /// A fragment that compiled to no requirements at all (for example a bare
    /// pseudo clause) matches nothing.
    #[must_use]
    pub fn matches(&self, node: &dyn NodeView) -> bool {
        !self.requirements.is_empty()
            && self
                .requirements
                .iter()
                .all(|requirement| requirement.is_satisfied_by(node))
    }

    /// Runs the pseudo post-filter over the structurally filtered nodes
    ///
    /// # Errors
    ///
    /// Returns `SelectorError::UnknownPseudoSelector` when the pseudo name has
    /// no handler, or whatever the handler itself reports. An empty input is
    /// returned as-is without consulting the registry.
    pub fn apply_pseudo<N>(&self, nodes: Vec<N>, registry: &SelectorRegistry) -> SelectorResult<Vec<N>>
    where
        N: NodeView + Clone,
    {
        let Some((name, argument)) = &self.pseudo else {
            return Ok(nodes);
        };
        if nodes.is_empty() {
            return Ok(nodes);
        }

        let handler = registry
            .pseudo(name)
            .ok_or_else(|| unknown_pseudo_selector(name))?;

        let kept = {
            let views: Vec<&dyn NodeView> = nodes.iter().map(|node| node as &dyn NodeView).collect();
            handler(views.as_slice(), argument.as_str())?
        };

        let filtered: Vec<N> = kept
            .into_iter()
            .filter_map(|position| nodes.get(position).cloned())
            .collect();
        log::trace!(
            "pseudo :{}({}) kept {} of {} node(s)",
            name,
            argument,
            filtered.len(),
            nodes.len()
        );
        Ok(filtered)
    }
}
