//! Error types for Arbiter.
//!
//! Selection itself is infallible. Errors only surface while a registry is
//! being assembled:
//!
//! - [`ArbiterError`] - Top-level error type for all Arbiter operations
//! - [`RegistryError`] - Errors during registry assembly

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Arbiter operations.
#[derive(Error, Debug)]
pub enum ArbiterError {
    /// An error occurred while assembling a registry.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur while assembling a registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A handler with the same name is already registered.
    #[error("handler already registered: {0}")]
    DuplicateName(String),
}

impl From<BoxError> for ArbiterError {
    fn from(err: BoxError) -> Self {
        ArbiterError::Custom(err)
    }
}
