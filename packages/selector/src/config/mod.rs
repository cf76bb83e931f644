//! Matcher configuration
//!
//! Settings that shape a single matching run. Everything here has a sensible
//! default, so most callers never build one by hand.

mod validation;

use serde::{Deserialize, Serialize};

pub use validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};

use crate::reader::Scope;

/// Default cap on fragment iterations per match call
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Upper bound accepted for [`MatcherConfig::max_iterations`]
pub const MAX_ITERATIONS_LIMIT: usize = 10_000;

/// Settings for a [`crate::SelectorMatcher`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Fragments processed before a match call gives up with a parse error
    pub max_iterations: usize,
    /// Scope used to expand the input nodes before the first fragment
    pub starting_scope: Scope,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            starting_scope: Scope::Any,
        }
    }
}

impl MatcherConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the iteration cap
    #[must_use]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the scope applied to the input nodes before the first fragment
    #[must_use]
    pub fn starting_scope(mut self, scope: Scope) -> Self {
        self.starting_scope = scope;
        self
    }

    /// Configuration that tests the input nodes themselves, with no expansion
    #[must_use]
    pub fn within() -> Self {
        Self::default().starting_scope(Scope::Selected)
    }
}

impl Validator for MatcherConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_range(
            self.max_iterations,
            1,
            MAX_ITERATIONS_LIMIT,
            "max_iterations",
        )
    }
}
