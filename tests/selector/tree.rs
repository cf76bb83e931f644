//! Tree Tests
//!
//! Arena document navigation, attribute storage and tag aliases

use cobalt_selector::tree::{Document, NodeKind, NodeView, SelectorNode, normalize_tag};

use super::support::{Page, ids};

#[cfg(test)]
mod tree_tests {
    use super::*;

    #[test]
    fn test_navigation_follows_document_order() {
        let page = Page::new();
        let menu = page.doc.node(page.menu);

        let children = menu.children();
        assert_eq!(children.len(), 7);
        assert_eq!(children[1].kind(), NodeKind::Text);
        assert_eq!(children[4].kind(), NodeKind::Comment);

        let elements: Vec<_> = menu.descendants().into_iter().filter(|n| n.is_element()).collect();
        let mut expected = page.items.clone();
        expected.insert(2, page.link);
        assert_eq!(ids(&elements), expected);

        let self_and_below = menu.descendants_and_self();
        assert_eq!(self_and_below[0], menu);
        assert_eq!(self_and_below.len(), menu.descendants().len() + 1);

        let link = page.doc.node(page.link);
        assert_eq!(link.parent(), Some(page.doc.node(page.items[1])));
        assert_eq!(page.doc.node(page.doc.root()).parent(), None);
    }

    #[test]
    fn test_siblings_include_the_node_itself() {
        let page = Page::new();
        let second = page.doc.node(page.items[1]);
        let siblings = second.siblings();
        assert_eq!(siblings, page.doc.node(page.menu).children());
        assert!(siblings.contains(&second));

        let root = page.doc.node(page.doc.root());
        assert_eq!(root.siblings(), vec![root]);
    }

    #[test]
    fn test_attributes_are_case_insensitive_by_name() {
        let mut doc = Document::new();
        let root = doc.root();
        let field = doc
            .element(root, "input")
            .attr("Type", "text")
            .attr("TYPE", "search")
            .class("wide  dark")
            .finish();

        let node = doc.node(field);
        assert_eq!(node.attribute("type"), Some("search"));
        assert!(node.has_attribute("type"));
        assert!(!node.has_attribute("value"));
        assert_eq!(node.classes(), ["wide", "dark"]);

        doc.set_attribute(field, "value", "x");
        assert_eq!(doc.node(field).attribute_value("VALUE"), Some("x"));
    }

    #[test]
    fn test_protected_tags_report_their_plain_name() {
        let page = Page::new();
        let form = page.doc.node(page.form);
        assert_eq!(form.tag(), "form");
        assert_eq!(form.raw_tag(), "form_protectedelement");
        assert!(form.tag_matches("FORM"));
        assert_eq!(page.doc.node(page.para).tag(), "p");

        assert_eq!(normalize_tag("P_protectedelement"), "P");
        assert_eq!(normalize_tag("span_protectedelement"), "span_protectedelement");
    }

    #[test]
    fn test_node_identity_is_per_document() {
        let build = || {
            let mut doc = Document::new();
            let root = doc.root();
            let div = doc.element(root, "div").finish();
            (doc, div)
        };
        let (left, left_div) = build();
        let (right, right_div) = build();

        assert_eq!(left_div, right_div);
        assert_eq!(left.node(left_div), left.node(left_div));
        assert_ne!(left.node(left_div), right.node(right_div));
    }

    #[test]
    fn test_text_and_comment_nodes() {
        let mut doc = Document::new();
        let root = doc.root();
        let text = doc.text(root, "hello");
        let comment = doc.comment(root, "note");

        assert_eq!(doc.node(text).text_content(), "hello");
        assert_eq!(doc.node(text).tag(), "");
        assert!(!doc.node(comment).is_element());
        assert_eq!(doc.len(), 3);
        assert!(!doc.is_empty());
        assert!(Document::new().is_empty());
    }

    #[test]
    fn test_set_attribute_ignores_foreign_ids() {
        let mut big = Document::new();
        let root = big.root();
        let mut last = root;
        for _ in 0..3 {
            last = big.element(root, "p").finish();
        }

        let mut small = Document::new();
        let before = small.len();
        small.set_attribute(last, "title", "lost");
        assert_eq!(small.len(), before);
        assert_eq!(small.node(small.root()).attribute_value("title"), None);

        big.set_attribute(last, "title", "kept");
        assert_eq!(big.node(last).attribute_value("title"), Some("kept"));
    }

    #[test]
    #[should_panic(expected = "does not belong to this document")]
    fn test_appending_under_a_foreign_parent_panics() {
        let mut big = Document::new();
        let root = big.root();
        let div = big.element(root, "div").finish();

        let mut small = Document::new();
        small.element(div, "span").finish();
    }
}
