use super::value_objects::ProductKey;
use crate::domain::errors::RepositoryError;

/// Input rejected before any storage access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("product name must not be empty")]
    NameEmpty,
    #[error("product price must not be negative")]
    NegativePrice,
}

/// Error taxonomy of the catalog core.
///
/// Messages are plain text and are returned verbatim to API callers.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product with {0} not found")]
    NotFound(ProductKey),
    #[error("product '{0}' already exists")]
    AlreadyExists(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Any storage failure the core does not interpret.
    #[error("unexpected storage failure: {0}")]
    Unknown(#[from] RepositoryError),
}
