//! Process-wide shared registry
//!
//! Created with the built-ins on first use and kept for the lifetime of the
//! process. The free functions here mutate that shared instance.

use std::sync::Arc;

use super::SelectorRegistry;
use crate::error::SelectorResult;
use crate::tree::NodeView;

lazy_static::lazy_static! {
    static ref GLOBAL_REGISTRY: Arc<SelectorRegistry> = Arc::new(SelectorRegistry::with_builtins());
}

pub(super) fn shared() -> Arc<SelectorRegistry> {
    Arc::clone(&GLOBAL_REGISTRY)
}

/// Registers a custom pseudo selector on the shared registry
///
/// # Errors
///
/// Returns `SelectorError::InvalidRegistration` for names that are not
/// purely alphanumeric.
pub fn register_pseudo<F>(name: &str, handler: F) -> SelectorResult<()>
where
    F: Fn(&[&dyn NodeView], &str) -> SelectorResult<Vec<usize>> + Send + Sync + 'static,
{
    GLOBAL_REGISTRY.register_pseudo(name, handler)
}

/// Removes a pseudo selector from the shared registry
pub fn unregister_pseudo(name: &str) {
    GLOBAL_REGISTRY.unregister_pseudo(name);
}

/// Registers a custom attribute operator on the shared registry
///
/// # Errors
///
/// Returns `SelectorError::InvalidRegistration` unless `symbol` is a single
/// non-alphanumeric character, optionally followed by `=`.
pub fn register_attribute_operator<F>(symbol: &str, handler: F) -> SelectorResult<()>
where
    F: Fn(&str, &str) -> bool + Send + Sync + 'static,
{
    GLOBAL_REGISTRY.register_attribute_operator(symbol, handler)
}

/// Removes an attribute operator from the shared registry
pub fn unregister_attribute_operator(symbol: &str) {
    GLOBAL_REGISTRY.unregister_attribute_operator(symbol);
}
