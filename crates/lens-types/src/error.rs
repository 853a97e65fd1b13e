use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("malformed address: {0}")]
    MalformedAddress(String),

    #[error("address checksum mismatch")]
    BadChecksum,

    #[error("wrong token version: expected {expected:#04x}, got {actual:#04x}")]
    WrongTokenVersion { expected: u8, actual: u8 },

    #[error("invalid currency code: {0}")]
    InvalidCurrency(String),

    #[error("invalid decimal value: {0}")]
    InvalidValue(String),

    #[error("decimal value out of range: {0}")]
    ValueOutOfRange(String),
}
