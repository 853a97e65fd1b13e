use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;
use std::sync::RwLock;

use async_trait::async_trait;

use lens_types::{
    AccountId, AccountRoot, FeeSettings, LedgerHeader, LedgerSelector, ObjectKey, OwnedObject,
};

use crate::error::StoreResult;
use crate::traits::LedgerStore;

/// In-memory ledger store for tests, demos, and serving static dumps.
///
/// Holds a single state revision tagged with one or more ledger headers. All
/// data sits behind an `RwLock`; reads clone out of the maps. Since the state
/// is one revision, the `sequence` arguments select only which header a
/// request resolved — lookups always read the loaded revision.
pub struct InMemoryLedgerStore {
    inner: RwLock<State>,
}

#[derive(Default)]
struct State {
    ledgers: BTreeMap<u32, LedgerHeader>,
    roots: HashMap<AccountId, AccountRoot>,
    owned: HashMap<AccountId, BTreeMap<ObjectKey, OwnedObject>>,
    fees: Option<FeeSettings>,
}

impl InMemoryLedgerStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(State::default()),
        }
    }

    /// Register a ledger header. The highest sequence becomes "current".
    pub fn insert_ledger(&self, header: LedgerHeader) {
        let mut state = self.inner.write().expect("lock poisoned");
        state.ledgers.insert(header.sequence, header);
    }

    /// Insert or replace an account's root object.
    pub fn insert_account(&self, root: AccountRoot) {
        let mut state = self.inner.write().expect("lock poisoned");
        state.roots.insert(root.account, root);
    }

    /// Insert an owned object under an account's index.
    pub fn insert_owned(&self, account: AccountId, key: ObjectKey, object: OwnedObject) {
        let mut state = self.inner.write().expect("lock poisoned");
        state.owned.entry(account).or_default().insert(key, object);
    }

    /// Set the fee parameters served by [`LedgerStore::fees`].
    pub fn set_fees(&self, fees: FeeSettings) {
        let mut state = self.inner.write().expect("lock poisoned");
        state.fees = Some(fees);
    }

    /// Number of accounts with a root object.
    pub fn account_count(&self) -> usize {
        self.inner.read().expect("lock poisoned").roots.len()
    }

    /// Number of owned objects across all accounts.
    pub fn owned_count(&self) -> usize {
        self.inner
            .read()
            .expect("lock poisoned")
            .owned
            .values()
            .map(BTreeMap::len)
            .sum()
    }
}

impl Default for InMemoryLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryLedgerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryLedgerStore")
            .field("accounts", &self.account_count())
            .field("owned_objects", &self.owned_count())
            .finish()
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedgerStore {
    async fn resolve(&self, selector: &LedgerSelector) -> StoreResult<Option<LedgerHeader>> {
        let state = self.inner.read().expect("lock poisoned");
        let header = match selector {
            LedgerSelector::Current => state.ledgers.values().next_back().copied(),
            LedgerSelector::Index(sequence) => state.ledgers.get(sequence).copied(),
            LedgerSelector::Hash(hash) => {
                state.ledgers.values().find(|h| h.hash == *hash).copied()
            }
        };
        Ok(header)
    }

    async fn account_root(
        &self,
        account: &AccountId,
        _sequence: u32,
    ) -> StoreResult<Option<AccountRoot>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.roots.get(account).copied())
    }

    async fn fees(&self, _sequence: u32) -> StoreResult<FeeSettings> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.fees.unwrap_or_default())
    }

    async fn owned_page(
        &self,
        account: &AccountId,
        _sequence: u32,
        start: Option<ObjectKey>,
        page_size: usize,
    ) -> StoreResult<Vec<(ObjectKey, OwnedObject)>> {
        let state = self.inner.read().expect("lock poisoned");
        let Some(index) = state.owned.get(account) else {
            return Ok(Vec::new());
        };
        let lower = match start {
            Some(key) => Bound::Included(key),
            None => Bound::Unbounded,
        };
        Ok(index
            .range((lower, Bound::Unbounded))
            .take(page_size)
            .map(|(key, object)| (*key, object.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lens_types::{Drops, LedgerHash, PayChannel};

    fn account(n: u8) -> AccountId {
        AccountId::from_raw([n; 20])
    }

    fn key(n: u8) -> ObjectKey {
        let mut bytes = [0u8; 32];
        bytes[31] = n;
        ObjectKey::from_raw(bytes)
    }

    fn header(sequence: u32) -> LedgerHeader {
        LedgerHeader {
            sequence,
            hash: LedgerHash::from_raw([sequence as u8; 32]),
        }
    }

    fn channel(n: u8) -> OwnedObject {
        OwnedObject::PayChannel(PayChannel {
            source: account(1),
            destination: account(2),
            amount: Drops(1000),
            balance: Drops(0),
            public_key: None,
            settle_delay: 3600,
            expiration: None,
            cancel_after: None,
            source_tag: Some(n as u32),
            destination_tag: None,
        })
    }

    #[tokio::test]
    async fn resolve_current_picks_highest_sequence() {
        let store = InMemoryLedgerStore::new();
        store.insert_ledger(header(5));
        store.insert_ledger(header(9));
        store.insert_ledger(header(7));
        let resolved = store.resolve(&LedgerSelector::Current).await.unwrap();
        assert_eq!(resolved, Some(header(9)));
    }

    #[tokio::test]
    async fn resolve_by_index_and_hash() {
        let store = InMemoryLedgerStore::new();
        store.insert_ledger(header(5));
        assert_eq!(
            store.resolve(&LedgerSelector::Index(5)).await.unwrap(),
            Some(header(5))
        );
        assert_eq!(
            store
                .resolve(&LedgerSelector::Hash(LedgerHash::from_raw([5; 32])))
                .await
                .unwrap(),
            Some(header(5))
        );
        assert_eq!(store.resolve(&LedgerSelector::Index(6)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn resolve_on_empty_store_is_none() {
        let store = InMemoryLedgerStore::new();
        assert_eq!(store.resolve(&LedgerSelector::Current).await.unwrap(), None);
    }

    #[tokio::test]
    async fn owned_page_orders_and_limits() {
        let store = InMemoryLedgerStore::new();
        for n in [4u8, 1, 3, 2] {
            store.insert_owned(account(1), key(n), channel(n));
        }
        let page = store.owned_page(&account(1), 1, None, 3).await.unwrap();
        let keys: Vec<_> = page.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![key(1), key(2), key(3)]);
    }

    #[tokio::test]
    async fn owned_page_start_is_inclusive() {
        let store = InMemoryLedgerStore::new();
        for n in 1..=4u8 {
            store.insert_owned(account(1), key(n), channel(n));
        }
        let page = store
            .owned_page(&account(1), 1, Some(key(2)), 10)
            .await
            .unwrap();
        let keys: Vec<_> = page.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![key(2), key(3), key(4)]);
    }

    #[tokio::test]
    async fn owned_page_for_unknown_account_is_empty() {
        let store = InMemoryLedgerStore::new();
        assert!(store
            .owned_page(&account(9), 1, None, 10)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn fees_default_when_unset() {
        let store = InMemoryLedgerStore::new();
        assert_eq!(store.fees(1).await.unwrap(), FeeSettings::default());
    }
}
