use thiserror::Error;

/// Errors produced by store operations.
///
/// These are upstream failures, kept distinct from not-found outcomes: a
/// missing object is `Ok(None)` at the trait level, never an error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("corrupt store data: {0}")]
    Corrupt(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
