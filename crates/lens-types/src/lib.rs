//! Foundation types for LedgerLens.
//!
//! This crate provides the identity, amount, and state-object types shared by
//! every other LedgerLens crate.
//!
//! # Key Types
//!
//! - [`AccountId`] — 20-byte account identifier with a base58check address form
//! - [`ObjectKey`] — 256-bit position in an account's owned-object key space
//! - [`LedgerHash`] — 256-bit ledger version hash
//! - [`Amount`] — native drops or issued-currency value
//! - [`OwnedObject`] — tagged union of owned ledger state objects
//! - [`LedgerSelector`] / [`LedgerHeader`] — ledger version selection and identity

pub mod account;
pub mod amount;
pub mod error;
pub mod key;
pub mod ledger;
pub mod object;

pub use account::{AccountId, TokenKind, decode_token, encode_token};
pub use amount::{Amount, Currency, Drops, IouValue, IssuedAmount};
pub use error::TypeError;
pub use key::{LedgerHash, ObjectKey};
pub use ledger::{FeeSettings, LedgerHeader, LedgerSelector};
pub use object::{AccountRoot, OwnedObject, PayChannel, TrustLine, TrustSide, flags};
