//! Tag alias normalization
//!
//! Markup pre-processing renames a few tags (`form`, `p`) by appending a
//! protection suffix so the HTML parser leaves them alone. Selectors always
//! use the plain name, so the tree reports the plain name back.

/// Suffix appended to protected tag names during markup pre-processing
pub const PROTECTED_ELEMENT_SUFFIX: &str = "_protectedelement";

const PROTECTED_TAGS: [&str; 2] = ["form", "p"];

/// Strips the protection suffix from a protected tag name
///
/// Names that are not protected aliases come back unchanged.
///
/// ```
/// use cobalt_selector::tree::normalize_tag;
///
/// assert_eq!(normalize_tag("form_protectedelement"), "form");
/// assert_eq!(normalize_tag("div_protectedelement"), "div_protectedelement");
/// assert_eq!(normalize_tag("span"), "span");
/// ```
#[must_use]
pub fn normalize_tag(raw: &str) -> &str {
    match raw.strip_suffix(PROTECTED_ELEMENT_SUFFIX) {
        Some(base)
            if PROTECTED_TAGS
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case(base)) =>
        {
            base
        }
        _ => raw,
    }
}
