//! Selector Compiler Tests
//!
//! Requirement compilation and pseudo application for single fragments

use cobalt_selector::compiler::{CompiledFragment, Requirement};
use cobalt_selector::tree::{Document, NodeRef};
use cobalt_selector::{SelectorError, SelectorRegistry};

use super::support::{Page, init_logging};

fn compile(fragment: &str) -> CompiledFragment {
    CompiledFragment::compile(fragment, &SelectorRegistry::with_builtins()).unwrap()
}

#[cfg(test)]
mod compiler_tests {
    use super::*;

    #[test]
    fn test_overview_fragment_compiles() {
        init_logging();
        let fragment = compile("a[@href~='example']:first");
        assert_eq!(fragment.requirements().len(), 2);
        assert!(matches!(fragment.requirements()[0], Requirement::Tag(ref tag) if tag == "a"));
        assert_eq!(fragment.pseudo_name(), Some("first"));
        assert_eq!(fragment.pseudo_argument(), Some(""));

        let page = Page::new();
        assert!(fragment.matches(&page.doc.node(page.link)));
        assert!(!fragment.matches(&page.doc.node(page.items[1])));
    }

    #[test]
    fn test_tag_comparison_is_case_insensitive() {
        let page = Page::new();
        assert!(compile("UL").matches(&page.doc.node(page.menu)));
        assert!(compile("ul").matches(&page.doc.node(page.menu)));
        assert!(!compile("ol").matches(&page.doc.node(page.menu)));
    }

    #[test]
    fn test_protected_tags_match_their_plain_name() {
        let page = Page::new();
        assert!(compile("form").matches(&page.doc.node(page.form)));
        assert!(compile("P").matches(&page.doc.node(page.para)));
        assert!(compile("form_protectedelement").matches(&page.doc.node(page.form)));
    }

    #[test]
    fn test_identity_requirements() {
        let page = Page::new();
        let menu = page.doc.node(page.menu);
        assert!(compile("#nav").matches(&menu));
        assert!(compile("ul#nav").matches(&menu));
        assert!(!compile("#NAV").matches(&menu));
        assert!(compile(".menu").matches(&menu));
        assert!(!compile(".men").matches(&menu));

        let active = page.doc.node(page.items[1]);
        assert!(compile("li.active").matches(&active));
        assert!(compile("li.item").matches(&active));

        assert!(compile("$login").matches(&page.doc.node(page.form)));
        assert!(compile("input$checkbox").matches(&page.doc.node(page.checkbox)));
    }

    #[test]
    fn test_attribute_clauses_are_combined() {
        let page = Page::new();
        let link = page.doc.node(page.link);
        assert!(compile("a[@href]").matches(&link));
        assert!(compile("a[href][title]").matches(&link));
        assert!(!compile("a[@href][@target]").matches(&link));
        assert!(compile("a[@href|='HTTP://example']").matches(&link));
        assert!(compile("a[@href$='/home']").matches(&link));
        assert!(!compile("a[@href$='/away']").matches(&link));
        assert!(compile("a[@href~=\"EXAMPLE.COM\"]").matches(&link));
    }

    #[test]
    fn test_equality_ignores_case() {
        let page = Page::new();
        assert!(compile("input[@type=TEXT]").matches(&page.doc.node(page.text_input)));
        assert!(compile("input[@type='password']").matches(&page.doc.node(page.password)));
    }

    #[test]
    fn test_escaped_literal_characters() {
        let page = Page::new();
        let link = page.doc.node(page.link);
        assert!(compile(r"a[@title='Go \'home\' \[now\]']").matches(&link));
    }

    #[test]
    fn test_missing_attribute_compares_as_empty() {
        let page = Page::new();
        let menu = page.doc.node(page.menu);
        assert!(compile("ul[@title='']").matches(&menu));
        assert!(!compile("ul[@title]").matches(&menu));
    }

    #[test]
    fn test_wildcard_matches_any_element() {
        let page = Page::new();
        assert!(compile("*").matches(&page.doc.node(page.body)));
        assert!(compile("*.menu").matches(&page.doc.node(page.menu)));
        assert!(!compile("*.menu").matches(&page.doc.node(page.body)));
    }

    #[test]
    fn test_unreadable_fragments_match_nothing() {
        let mut doc = Document::new();
        let root = doc.root();
        let div = doc.element(root, "div").class("a b").finish();
        let node = doc.node(div);

        assert!(compile("div.a").matches(&node));
        assert!(!compile("div.a.b").matches(&node));
        assert!(!compile("div!").matches(&node));
        assert!(!compile(":first").matches(&node));
    }

    #[test]
    fn test_unsupported_operator_is_reported_when_compiling() {
        let registry = SelectorRegistry::with_builtins();
        let error = CompiledFragment::compile("a[@href*='x']", &registry).unwrap_err();
        assert_eq!(
            error.to_string(),
            "*= is not a supported attribute match type"
        );
    }

    #[test]
    fn test_custom_operator_is_used_when_registered() {
        let registry = SelectorRegistry::with_builtins();
        registry
            .register_attribute_operator("^=", |argument, value| value.starts_with(argument))
            .unwrap();

        let page = Page::new();
        let link = page.doc.node(page.link);
        let fragment = CompiledFragment::compile("a[@href^='http://Ex']", &registry).unwrap();
        assert!(fragment.matches(&link));
        let fragment = CompiledFragment::compile("a[@href^='http://ex']", &registry).unwrap();
        assert!(!fragment.matches(&link));
    }

    #[test]
    fn test_apply_pseudo_filters_in_order() {
        let registry = SelectorRegistry::with_builtins();
        let page = Page::new();
        let items = page.nodes(&page.items);

        let fragment = CompiledFragment::compile("li:gt(3)", &registry).unwrap();
        let kept = fragment.apply_pseudo(items.clone(), &registry).unwrap();
        assert_eq!(kept, page.nodes(&page.items[3..]));

        let fragment = CompiledFragment::compile("li", &registry).unwrap();
        let kept = fragment.apply_pseudo(items.clone(), &registry).unwrap();
        assert_eq!(kept, items);
    }

    #[test]
    fn test_unknown_pseudo_is_reported_when_applied() {
        let registry = SelectorRegistry::with_builtins();
        let page = Page::new();
        let fragment = CompiledFragment::compile("li:nope", &registry).unwrap();

        let error = fragment
            .apply_pseudo(page.nodes(&page.items), &registry)
            .unwrap_err();
        assert_eq!(
            error,
            SelectorError::UnknownPseudoSelector {
                name: "nope".into()
            }
        );

        let nothing: Vec<NodeRef<'_>> = Vec::new();
        assert!(fragment.apply_pseudo(nothing, &registry).unwrap().is_empty());
    }
}
