//! Ledger snapshot store seam for LedgerLens.
//!
//! Query logic never touches a backend directly; it goes through the
//! [`LedgerStore`] trait, which resolves ledger-version selectors and serves
//! point lookups plus ordered pages of an account's owned-object index.
//! [`InMemoryLedgerStore`] is the reference implementation for tests, demos,
//! and serving static ledger dumps.

pub mod dump;
pub mod error;
pub mod memory;
pub mod traits;

pub use dump::{AccountDump, LedgerDump, OwnedEntry};
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryLedgerStore;
pub use traits::LedgerStore;
