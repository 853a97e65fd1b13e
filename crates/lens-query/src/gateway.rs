use std::collections::BTreeMap;

use serde::Serialize;

use lens_store::LedgerStore;
use lens_types::{AccountId, Currency, IouValue, LedgerHash};

use crate::error::{QueryError, QueryResult};
use crate::params::GatewayBalancesParams;
use crate::scan::{Verdict, scan_owned};

/// One currency/value pair in a per-peer balance list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CurrencyBalance {
    pub currency: Currency,
    pub value: IouValue,
}

/// `gateway_balances` response.
///
/// Maps are keyed by currency code or peer address and rendered in sorted
/// key order; empty sections are omitted entirely.
#[derive(Clone, Debug, Serialize)]
pub struct GatewayBalancesResponse {
    pub ledger_index: u32,
    pub ledger_hash: LedgerHash,
    pub account: AccountId,
    /// Total owed per currency, summed over ordinary customer lines.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub obligations: BTreeMap<Currency, IouValue>,
    /// Balances on lines to the declared hot wallets.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub balances: BTreeMap<AccountId, Vec<CurrencyBalance>>,
    /// Obligations the account has frozen.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub frozen_balances: BTreeMap<AccountId, Vec<CurrencyBalance>>,
    /// Positive balances: assets the account itself holds (unusual for a
    /// gateway).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub assets: BTreeMap<AccountId, Vec<CurrencyBalance>>,
}

/// Aggregate an account's trust-line balances by peer category.
///
/// The full owned-object index is scanned; there is no pagination for this
/// operation. Zero balances are skipped outright.
pub async fn gateway_balances(
    store: &dyn LedgerStore,
    params: &GatewayBalancesParams,
) -> QueryResult<GatewayBalancesResponse> {
    let query = params.validate()?;
    let header = store
        .resolve(&query.selector)
        .await?
        .ok_or(QueryError::LedgerNotFound)?;

    let mut obligations: BTreeMap<Currency, IouValue> = BTreeMap::new();
    let mut balances: BTreeMap<AccountId, Vec<CurrencyBalance>> = BTreeMap::new();
    let mut frozen_balances: BTreeMap<AccountId, Vec<CurrencyBalance>> = BTreeMap::new();
    let mut assets: BTreeMap<AccountId, Vec<CurrencyBalance>> = BTreeMap::new();

    scan_owned(store, &query.account, header.sequence, None, |_, object| {
        let Some(line) = object.as_trust_line() else {
            return Verdict::Continue;
        };
        let Some(side) = line.side(&query.account) else {
            return Verdict::Continue;
        };
        // Negative means the account owes its peer (the normal gateway
        // case); positive means the account holds the peer's asset.
        let balance = line.balance_from(side);
        if balance.is_zero() {
            return Verdict::Continue;
        }
        let peer = *line.peer(side);
        let entry = CurrencyBalance {
            currency: line.currency,
            value: balance,
        };
        if query.hot_wallets.contains(&peer) {
            balances.entry(peer).or_default().push(entry);
        } else if balance.signum() > 0 {
            assets.entry(peer).or_default().push(entry);
        } else if line.frozen(side) {
            frozen_balances.entry(peer).or_default().push(entry);
        } else {
            let total = obligations.entry(line.currency).or_insert(IouValue::ZERO);
            *total = total.sub(&balance);
        }
        Verdict::Continue
    })
    .await?;

    tracing::debug!(
        account = %query.account,
        currencies = obligations.len(),
        "gateway_balances"
    );
    Ok(GatewayBalancesResponse {
        ledger_index: header.sequence,
        ledger_hash: header.hash,
        account: query.account,
        obligations,
        balances,
        frozen_balances,
        assets,
    })
}
