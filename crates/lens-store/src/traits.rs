use async_trait::async_trait;

use lens_types::{
    AccountId, AccountRoot, FeeSettings, LedgerHeader, LedgerSelector, ObjectKey, OwnedObject,
};

use crate::error::StoreResult;

/// Read access to immutable, versioned ledger state.
///
/// All implementations must satisfy these invariants:
/// - A resolved `LedgerHeader` is immutable: the same selector resolved twice
///   against the same backend state yields the same sequence/hash pair.
/// - Lookups taking a `sequence` read exactly that version, never a newer one.
/// - `owned_page` returns entries in ascending key order, starting at `start`
///   inclusive, at most `page_size` of them. Fewer than `page_size` entries
///   means the index is exhausted.
/// - Missing data is `Ok(None)` / an empty page; errors mean the backend
///   itself failed.
///
/// Trait methods are the only suspension points in a query: implementations
/// may block on I/O, and callers await them without holding locks.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Resolve a ledger-version selector to a concrete header.
    ///
    /// Returns `Ok(None)` when no ledger matches the selector.
    async fn resolve(&self, selector: &LedgerSelector) -> StoreResult<Option<LedgerHeader>>;

    /// Fetch an account's root object at one ledger version.
    async fn account_root(
        &self,
        account: &AccountId,
        sequence: u32,
    ) -> StoreResult<Option<AccountRoot>>;

    /// Fetch network fee parameters at one ledger version.
    async fn fees(&self, sequence: u32) -> StoreResult<FeeSettings>;

    /// Fetch one page of an account's owned-object index.
    async fn owned_page(
        &self,
        account: &AccountId,
        sequence: u32,
        start: Option<ObjectKey>,
        page_size: usize,
    ) -> StoreResult<Vec<(ObjectKey, OwnedObject)>>;
}
