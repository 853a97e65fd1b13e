use thiserror::Error;

use lens_store::StoreError;

/// Errors produced by query operations.
///
/// The variants form the request-level taxonomy: invalid input is rejected
/// before any scanning starts, a missing account or ledger is a not-found
/// outcome, and a failing collaborator surfaces as its own case rather than
/// masquerading as not-found. None of these are retried here.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("account not found: {0}")]
    AccountNotFound(String),

    #[error("ledger not found")]
    LedgerNotFound,

    #[error("upstream store failure: {0}")]
    Store(#[from] StoreError),
}

impl QueryError {
    /// Shorthand for an [`QueryError::InvalidParams`].
    pub fn invalid(message: impl Into<String>) -> Self {
        QueryError::InvalidParams(message.into())
    }
}

pub type QueryResult<T> = Result<T, QueryError>;
