//! Pseudo selector and attribute operator registry
//!
//! A [`SelectorRegistry`] maps pseudo names to node-sequence filters and
//! single-character attribute operators to value comparisons. Tests and
//! embedders can build isolated registries; everything else shares the
//! process-wide instance returned by [`SelectorRegistry::global`].
//!
//! Lookups take a read lock and registrations a write lock, so the shared
//! registry can be extended while other threads are matching.

mod builtins;
mod global;
mod validation;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use hashbrown::HashMap;

pub use builtins::integer_argument;
pub use global::{
    register_attribute_operator, register_pseudo, unregister_attribute_operator,
    unregister_pseudo,
};

use crate::error::SelectorResult;
use crate::tree::NodeView;

/// Filter applied to a node sequence after structural filtering
///
/// Receives the current matches in order and the trimmed pseudo argument
/// (empty when none was given) and returns the positions to keep, in the
/// order they should appear.
pub type PseudoHandler =
    Arc<dyn Fn(&[&dyn NodeView], &str) -> SelectorResult<Vec<usize>> + Send + Sync>;

/// Attribute comparison, called with (selector literal, node attribute value)
pub type AttributeOperatorHandler = Arc<dyn Fn(&str, &str) -> bool + Send + Sync>;

/// Registry of pseudo selectors and attribute operators
pub struct SelectorRegistry {
    pseudo_selectors: RwLock<HashMap<String, PseudoHandler>>,
    attribute_operators: RwLock<HashMap<Option<char>, AttributeOperatorHandler>>,
}

impl std::fmt::Debug for SelectorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectorRegistry")
            .field("pseudo_selectors", &self.pseudo_names())
            .field("attribute_operators", &self.read_operators().len())
            .finish()
    }
}

impl Default for SelectorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl SelectorRegistry {
    /// Registry with no entries at all
    #[must_use]
    pub fn empty() -> Self {
        Self {
            pseudo_selectors: RwLock::new(HashMap::new()),
            attribute_operators: RwLock::new(HashMap::new()),
        }
    }

    /// Fresh registry seeded with the built-in pseudo selectors and operators
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::empty();
        builtins::seed(&registry);
        registry
    }

    /// The process-wide registry, created with built-ins on first use
    #[must_use]
    pub fn global() -> Arc<SelectorRegistry> {
        global::shared()
    }

    /// Registers a custom pseudo selector, replacing any existing one
    ///
    /// # Errors
    ///
    /// Returns `SelectorError::InvalidRegistration` if the trimmed name is
    /// empty or contains anything other than ASCII letters and digits. The
    /// registry is left untouched in that case.
    pub fn register_pseudo<F>(&self, name: &str, handler: F) -> SelectorResult<()>
    where
        F: Fn(&[&dyn NodeView], &str) -> SelectorResult<Vec<usize>> + Send + Sync + 'static,
    {
        let name = validation::pseudo_name(name)?;
        tracing::debug!(pseudo = %name, "registering pseudo selector");
        self.write_pseudo().insert(name, Arc::new(handler));
        Ok(())
    }

    /// Removes a pseudo selector; unknown names are ignored
    pub fn unregister_pseudo(&self, name: &str) {
        if self.write_pseudo().remove(name.trim()).is_some() {
            tracing::debug!(pseudo = %name.trim(), "unregistered pseudo selector");
        }
    }

    /// Looks up a pseudo selector handler
    #[must_use]
    pub fn pseudo(&self, name: &str) -> Option<PseudoHandler> {
        self.read_pseudo().get(name).cloned()
    }

    #[must_use]
    pub fn has_pseudo(&self, name: &str) -> bool {
        self.read_pseudo().contains_key(name)
    }

    /// Registered pseudo selector names, sorted
    #[must_use]
    pub fn pseudo_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read_pseudo().keys().cloned().collect();
        names.sort();
        names
    }

    /// Registers a custom attribute operator, replacing any existing one
    ///
    /// `symbol` is a single non-alphanumeric character, optionally followed
    /// by `=` (`"^"` and `"^="` register the same operator). A lone `"="`
    /// replaces the plain equality comparison.
    ///
    /// # Errors
    ///
    /// Returns `SelectorError::InvalidRegistration` for anything else. The
    /// registry is left untouched in that case.
    pub fn register_attribute_operator<F>(&self, symbol: &str, handler: F) -> SelectorResult<()>
    where
        F: Fn(&str, &str) -> bool + Send + Sync + 'static,
    {
        let key = validation::operator_symbol(symbol)?;
        tracing::debug!(operator = ?key, "registering attribute operator");
        self.write_operators().insert(key, Arc::new(handler));
        Ok(())
    }

    /// Removes an attribute operator; unknown or malformed symbols are ignored
    pub fn unregister_attribute_operator(&self, symbol: &str) {
        if let Ok(key) = validation::operator_symbol(symbol) {
            if self.write_operators().remove(&key).is_some() {
                tracing::debug!(operator = ?key, "unregistered attribute operator");
            }
        }
    }

    /// Looks up an attribute operator; `None` is the plain `=` comparison
    #[must_use]
    pub fn attribute_operator(&self, operator: Option<char>) -> Option<AttributeOperatorHandler> {
        self.read_operators().get(&operator).cloned()
    }

    #[must_use]
    pub fn has_attribute_operator(&self, operator: Option<char>) -> bool {
        self.read_operators().contains_key(&operator)
    }

    // Handlers are cloned out before they run, so a poisoned lock never
    // guards a half-written map.
    fn read_pseudo(&self) -> RwLockReadGuard<'_, HashMap<String, PseudoHandler>> {
        self.pseudo_selectors
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write_pseudo(&self) -> RwLockWriteGuard<'_, HashMap<String, PseudoHandler>> {
        self.pseudo_selectors
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn read_operators(
        &self,
    ) -> RwLockReadGuard<'_, HashMap<Option<char>, AttributeOperatorHandler>> {
        self.attribute_operators
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write_operators(
        &self,
    ) -> RwLockWriteGuard<'_, HashMap<Option<char>, AttributeOperatorHandler>> {
        self.attribute_operators
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
