/// Outcome signals raised by storage adapters.
/// Use code-style identifiers for the unit variants so adapters and logs agree on them.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    /// A uniqueness constraint held by the store rejected the write.
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error: {0}")]
    DatabaseError(String),
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
    pub fn duplicated() -> Self {
        RepositoryError::Duplicated
    }
    pub fn database_error(detail: impl Into<String>) -> Self {
        RepositoryError::DatabaseError(detail.into())
    }
}
