//! Behavioural guarantees of the selector engine
//!
//! Each test pins down one observable property that callers rely on.

use cobalt_selector::tree::Document;
use cobalt_selector::{
    SelectorError, SelectorRegistry, register_pseudo, select,
};

use super::support::{Page, ids, init_logging};

#[cfg(test)]
mod property_tests {
    use super::*;

    #[test]
    fn test_wildcard_returns_every_element_once_in_tree_order() {
        init_logging();
        let mut doc = Document::new();
        let root = doc.root();
        let outer = doc.element(root, "div").finish();
        let span = doc.element(outer, "span").text("a").finish();
        doc.comment(outer, "note");
        let para = doc.element(outer, "p").finish();
        let em = doc.element(para, "em").finish();
        let other = doc.element(root, "div").finish();

        let input = doc.nodes(&[outer, para, other, em]);
        let found = select("*", &input).unwrap();
        assert_eq!(ids(&found), [outer, span, para, em, other]);
    }

    #[test]
    fn test_plain_equality_ignores_case() {
        let mut doc = Document::new();
        let root = doc.root();
        let field = doc.element(root, "input").attr("type", "text").finish();

        let found = select("[@type=TEXT]", &[doc.node(root)]).unwrap();
        assert_eq!(ids(&found), [field]);
    }

    #[test]
    fn test_lt_keeps_positions_before_the_argument() {
        let mut doc = Document::new();
        let root = doc.root();
        let items: Vec<_> = (0..5).map(|_| doc.element(root, "li").finish()).collect();

        let found = select("li:lt(3)", &[doc.node(root)]).unwrap();
        assert_eq!(ids(&found), items[..2]);
    }

    #[test]
    fn test_nd_selects_a_single_position() {
        let mut doc = Document::new();
        let root = doc.root();
        let items: Vec<_> = (0..3).map(|_| doc.element(root, "li").finish()).collect();

        let found = select("li:nd(2)", &[doc.node(root)]).unwrap();
        assert_eq!(ids(&found), [items[1]]);
    }

    #[test]
    fn test_repeated_sibling_steps_accumulate() {
        let mut doc = Document::new();
        let root = doc.root();
        let parent = doc.element(root, "section").finish();
        let div = doc.element(parent, "div").finish();
        let span1 = doc.element(parent, "span").finish();
        let span2 = doc.element(parent, "span").finish();
        let span3 = doc.element(parent, "span").finish();

        let input = doc.nodes(&[div, span1, span2, span3]);
        let found = select("div + span + span", &input).unwrap();
        assert_eq!(ids(&found), [span1, span2]);

        let found = select("div + span + span", &[doc.node(parent)]).unwrap();
        assert_eq!(ids(&found), [span1, span2]);
    }

    #[test]
    fn test_custom_pseudo_behaves_like_the_builtin_it_wraps() {
        let odd = SelectorRegistry::global().pseudo("odd").unwrap();
        register_pseudo("odd2", move |nodes, argument| odd(nodes, argument)).unwrap();

        let page = Page::new();
        let root = page.root();
        assert_eq!(
            select("li:odd2", &root).unwrap(),
            select("li:odd", &root).unwrap()
        );
        assert_eq!(
            select("form input:odd2", &root).unwrap(),
            select("form input:odd", &root).unwrap()
        );
    }

    #[test]
    fn test_empty_selector_matches_nothing() {
        let page = Page::new();
        let root = page.root();
        assert!(select("", &root).unwrap().is_empty());
        assert!(select(" \n\t ", &root).unwrap().is_empty());
    }

    #[test]
    fn test_unclosed_bracket_fails_to_parse() {
        let page = Page::new();
        let error = select("div[", &page.root()).unwrap_err();
        assert!(matches!(error, SelectorError::Parse { .. }));
    }

    #[test]
    fn test_rejected_registration_keeps_builtins() {
        let page = Page::new();
        let root = page.root();
        let before = select("li:odd", &root).unwrap();

        let error = register_pseudo("my-pseudo", |_, _| Ok(Vec::new())).unwrap_err();
        assert!(matches!(error, SelectorError::InvalidRegistration { .. }));
        assert!(!SelectorRegistry::global().has_pseudo("my-pseudo"));
        assert_eq!(select("li:odd", &root).unwrap(), before);
    }
}
