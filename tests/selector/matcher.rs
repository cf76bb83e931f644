//! Selector Matcher Tests
//!
//! Combinators, scopes, pseudo post-filters and failure modes of full
//! selector runs

use std::sync::Arc;

use cobalt_selector::tree::Document;
use cobalt_selector::{
    MatcherConfig, SelectorError, SelectorMatcher, SelectorRegistry, select, select_within,
};

use super::support::{Page, ids, init_logging};

#[cfg(test)]
mod matcher_tests {
    use super::*;

    #[test]
    fn test_descendant_and_child_combinators() {
        init_logging();
        let page = Page::new();
        let root = page.root();

        let found = select("body a", &root).unwrap();
        assert_eq!(ids(&found), [page.link]);

        let found = select("ul > a", &root).unwrap();
        assert!(found.is_empty());

        let found = select("ul > li > a", &root).unwrap();
        assert_eq!(ids(&found), [page.link]);

        let found = select("html li", &root).unwrap();
        assert_eq!(ids(&found), page.items);
    }

    #[test]
    fn test_identity_and_class_selectors() {
        let page = Page::new();
        let root = page.root();

        assert_eq!(ids(&select("#nav", &root).unwrap()), [page.menu]);
        assert_eq!(ids(&select("ul.menu li.active", &root).unwrap()), [page.items[1]]);
        assert_eq!(ids(&select("form $PASSWORD", &root).unwrap()), [page.password]);
        assert_eq!(ids(&select(".item", &root).unwrap()), page.items);
    }

    #[test]
    fn test_positional_pseudo_selectors() {
        let page = Page::new();
        let root = page.root();
        let items = &page.items;

        assert_eq!(ids(&select("li:first", &root).unwrap()), [items[0]]);
        assert_eq!(ids(&select("li:last", &root).unwrap()), [items[4]]);
        assert_eq!(ids(&select("li:even", &root).unwrap()), [items[1], items[3]]);
        assert_eq!(
            ids(&select("li:odd", &root).unwrap()),
            [items[0], items[2], items[4]]
        );
        assert_eq!(ids(&select("li:nth(2)", &root).unwrap()), [items[1], items[3]]);
        assert_eq!(ids(&select("li:gte(4)", &root).unwrap()), [items[3], items[4]]);
        assert_eq!(ids(&select("li:lte(1)", &root).unwrap()), [items[0]]);
    }

    #[test]
    fn test_pseudo_applies_per_step() {
        let page = Page::new();
        let root = page.root();

        let found = select("li:nd(2) a", &root).unwrap();
        assert_eq!(ids(&found), [page.link]);

        let found = select("li:first a", &root).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_form_control_pseudo_selectors() {
        let page = Page::new();
        let root = page.root();

        let cases = [
            ("input:text", vec![page.text_input]),
            ("input:password", vec![page.password]),
            ("input:checkbox", vec![page.checkbox]),
            ("input:radio", vec![page.radio]),
            ("input:hidden", vec![page.hidden]),
            ("input:file", vec![page.file]),
            ("input:submit", vec![page.submit]),
            ("form *:button", vec![page.button_input, page.button]),
            ("form *:textarea", vec![page.textarea]),
        ];
        for (selector, expected) in cases {
            assert_eq!(ids(&select(selector, &root).unwrap()), expected, "{selector}");
        }
    }

    #[test]
    fn test_sibling_steps_accumulate_and_skip_non_elements() {
        let page = Page::new();
        let root = page.root();

        let found = select("li:first + li", &root).unwrap();
        assert_eq!(ids(&found), [page.items[0], page.items[1]]);

        let found = select("li.active + li + li", &root).unwrap();
        assert_eq!(ids(&found), [page.items[1], page.items[2], page.items[3]]);

        let found = select("li.active + li.item", &root).unwrap();
        assert_eq!(ids(&found), [page.items[1], page.items[2]]);

        let found = select("li.active + a", &root).unwrap();
        assert!(found.is_empty());

        let found = select("ul + form", &root).unwrap();
        assert_eq!(ids(&found), [page.form]);

        let found = select("ul + p", &root).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_select_within_tests_the_input_nodes() {
        let page = Page::new();
        let candidates = page.nodes(&[page.menu, page.items[0], page.link]);

        assert_eq!(ids(&select_within("li", &candidates).unwrap()), [page.items[0]]);
        assert_eq!(ids(&select_within("a[@href]", &candidates).unwrap()), [page.link]);
        assert_eq!(ids(&select_within("ul > li", &candidates).unwrap()), page.items);
        assert!(select_within("body", &candidates).unwrap().is_empty());
    }

    #[test]
    fn test_input_nodes_are_de_duplicated() {
        let page = Page::new();
        let menu = page.doc.node(page.menu);
        let found = select("li", &[menu, menu, page.doc.node(page.items[2])]).unwrap();
        assert_eq!(ids(&found), page.items);
    }

    #[test]
    fn test_unknown_pseudo_only_fails_when_applied() {
        let page = Page::new();
        let root = page.root();

        let error = select("li:missing", &root).unwrap_err();
        assert_eq!(
            error,
            SelectorError::UnknownPseudoSelector {
                name: "missing".into()
            }
        );
        assert!(select("article:missing", &root).unwrap().is_empty());
    }

    #[test]
    fn test_errors_abort_the_whole_run() {
        let page = Page::new();
        let root = page.root();

        assert!(matches!(
            select("li:lt(two)", &root),
            Err(SelectorError::InvalidPseudoArgument { .. })
        ));
        assert!(matches!(
            select("ul a[@href%='x']", &root),
            Err(SelectorError::UnsupportedAttributeOperator { .. })
        ));
        assert!(select("ul > > li", &root).unwrap_err().is_parse_error());
    }

    #[test]
    fn test_iteration_cap() {
        let page = Page::new();
        let root = page.root();
        let matcher = SelectorMatcher::new()
            .with_config(MatcherConfig::new().max_iterations(2))
            .unwrap();

        assert_eq!(ids(&matcher.select("ul li", &root).unwrap()), page.items);
        let error = matcher.select("body ul li", &root).unwrap_err();
        assert!(error.is_parse_error());
    }

    #[test]
    fn test_isolated_registry() {
        let page = Page::new();
        let root = page.root();
        let registry = Arc::new(SelectorRegistry::with_builtins());
        registry
            .register_pseudo("second", |nodes, _| {
                Ok(if nodes.len() > 1 { vec![1] } else { vec![] })
            })
            .unwrap();

        let matcher = SelectorMatcher::with_registry(Arc::clone(&registry));
        assert_eq!(ids(&matcher.select("li:second", &root).unwrap()), [page.items[1]]);
        assert!(select("li:second", &root).is_err());
    }

    #[test]
    fn test_starting_scope_from_config() {
        let mut doc = Document::new();
        let root = doc.root();
        let outer = doc.element(root, "div").finish();
        let inner = doc.element(outer, "div").finish();
        let start = [doc.node(outer)];

        assert_eq!(ids(&select("div", &start).unwrap()), [outer, inner]);

        let matcher = SelectorMatcher::new()
            .with_config(MatcherConfig::within())
            .unwrap();
        assert_eq!(ids(&matcher.select("div", &start).unwrap()), [outer]);
    }
}
