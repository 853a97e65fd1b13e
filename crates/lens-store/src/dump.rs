use std::path::Path;

use serde::{Deserialize, Serialize};

use lens_types::{AccountRoot, FeeSettings, LedgerHeader, ObjectKey, OwnedObject};

use crate::error::{StoreError, StoreResult};
use crate::memory::InMemoryLedgerStore;

/// One keyed entry of an account's owned-object index.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OwnedEntry {
    pub key: ObjectKey,
    pub object: OwnedObject,
}

/// One account's state within a dump.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccountDump {
    pub root: AccountRoot,
    #[serde(default)]
    pub owned: Vec<OwnedEntry>,
}

/// A JSON snapshot of one ledger version's account state.
///
/// This is the file format `lens serve` loads into an
/// [`InMemoryLedgerStore`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerDump {
    pub ledger: LedgerHeader,
    #[serde(default)]
    pub fees: Option<FeeSettings>,
    #[serde(default)]
    pub accounts: Vec<AccountDump>,
}

impl LedgerDump {
    /// Parse a dump from JSON text.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        serde_json::from_str(json).map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    /// Read and parse a dump file.
    pub fn from_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Materialize the dump as an in-memory store.
    pub fn into_store(self) -> InMemoryLedgerStore {
        let store = InMemoryLedgerStore::new();
        store.insert_ledger(self.ledger);
        if let Some(fees) = self.fees {
            store.set_fees(fees);
        }
        for account in self.accounts {
            let owner = account.root.account;
            store.insert_account(account.root);
            for entry in account.owned {
                store.insert_owned(owner, entry.key, entry.object);
            }
        }
        tracing::debug!(
            accounts = store.account_count(),
            owned_objects = store.owned_count(),
            "loaded ledger dump"
        );
        store
    }
}
