use std::sync::Arc;

use lens_store::LedgerStore;

/// Shared handler state: the ledger store queries read from.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn LedgerStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// The store, as the trait object queries take.
    pub fn store(&self) -> &dyn LedgerStore {
        self.store.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
