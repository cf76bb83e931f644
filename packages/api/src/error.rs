//! Facade error type

use cobalt_selector::{ConfigurationError, SelectorError};

/// Result type for facade operations
pub type CobaltResult<T> = Result<T, CobaltError>;

/// Errors surfaced by the fluent API
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CobaltError {
    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
