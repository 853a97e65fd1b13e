use lens_store::LedgerStore;
use lens_types::{AccountId, ObjectKey, OwnedObject};

use crate::error::QueryResult;

/// Objects fetched from the store per index page.
const PAGE_SIZE: usize = 256;

/// Per-object decision returned by a scan visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Keep scanning.
    Continue,
    /// Stop now; the current object becomes the resumption point.
    Stop,
}

/// Scan an account's owned-object index in ascending key order.
///
/// Starting at `start` (inclusive; `None` means the first key), every object
/// is offered to `visit` exactly once. The scanner itself does no filtering
/// or interpretation of object kinds — matching, budgets, and accumulation
/// all live in the visitor, which is what lets one primitive serve the
/// channel listing, the no-ripple advisory, and the balance aggregation
/// unchanged.
///
/// Returns `Some(key)` of the object the visitor stopped on: that object was
/// examined but not consumed, so a follow-up scan starting at the returned
/// key (inclusive) sees it first and misses nothing. Returns `None` when the
/// index was exhausted.
///
/// An account with no owned objects is an immediately-exhausted scan. Store
/// calls are the only await points; between pages the scan holds no locks.
pub async fn scan_owned<F>(
    store: &dyn LedgerStore,
    account: &AccountId,
    sequence: u32,
    start: Option<ObjectKey>,
    mut visit: F,
) -> QueryResult<Option<ObjectKey>>
where
    F: FnMut(&ObjectKey, &OwnedObject) -> Verdict,
{
    let mut cursor = start;
    loop {
        let page = store
            .owned_page(account, sequence, cursor, PAGE_SIZE)
            .await?;
        for (key, object) in &page {
            if visit(key, object) == Verdict::Stop {
                tracing::trace!(account = %account, resume = %key, "scan stopped");
                return Ok(Some(*key));
            }
        }
        if page.len() < PAGE_SIZE {
            return Ok(None);
        }
        let Some((last, _)) = page.last() else {
            return Ok(None);
        };
        cursor = match last.successor() {
            Some(next) => Some(next),
            // The last key was the maximum; nothing can follow it.
            None => return Ok(None),
        };
    }
}
