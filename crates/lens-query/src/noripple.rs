use serde::Serialize;

use lens_store::LedgerStore;
use lens_types::{
    AccountId, Amount, Drops, FeeSettings, IssuedAmount, LedgerHash, TrustLine, flags,
};

use crate::error::{QueryError, QueryResult};
use crate::params::{NoRippleParams, Role};
use crate::scan::{Verdict, scan_owned};

/// A draft corrective transaction, surfaced for review — never submitted.
///
/// Field names follow the ledger's transaction format, hence PascalCase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DraftTransaction {
    pub transaction_type: &'static str,
    pub account: AccountId,
    pub sequence: u32,
    pub fee: Drops,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_flag: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_amount: Option<Amount>,
}

/// `noripple_check` response.
#[derive(Clone, Debug, Serialize)]
pub struct NoRippleResponse {
    pub ledger_index: u32,
    pub ledger_hash: LedgerHash,
    pub problems: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<DraftTransaction>>,
}

/// Accumulated advisory state, threaded through the scan.
///
/// Keeping this a plain value (rather than captured ambient state) means the
/// per-line classification is testable without a store or scanner: feed
/// trust lines to [`Advice::inspect`] and read the fields.
#[derive(Debug)]
struct Advice {
    account: AccountId,
    role: Role,
    fees: Option<FeeSettings>,
    problems: Vec<String>,
    transactions: Vec<DraftTransaction>,
    next_sequence: u32,
    budget: u32,
}

impl Advice {
    fn new(
        account: AccountId,
        role: Role,
        fees: Option<FeeSettings>,
        start_sequence: u32,
        budget: u32,
    ) -> Self {
        Self {
            account,
            role,
            fees,
            problems: Vec::new(),
            transactions: Vec::new(),
            next_sequence: start_sequence,
            budget,
        }
    }

    /// Take the next draft sequence number; the counter is shared across the
    /// pre-check draft and every scan draft so emitted sequences are
    /// strictly increasing.
    fn next_sequence(&mut self) -> u32 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        sequence
    }

    /// Check the account's own default-ripple flag against its role.
    fn precheck(&mut self, default_ripple: bool) {
        match (self.role, default_ripple) {
            (Role::Gateway, false) => {
                self.problems
                    .push("You should immediately set your default ripple flag".to_string());
                if let Some(fees) = self.fees {
                    let sequence = self.next_sequence();
                    self.transactions.push(DraftTransaction {
                        transaction_type: "AccountSet",
                        account: self.account,
                        sequence,
                        fee: fees.base_fee,
                        set_flag: Some(flags::ASF_DEFAULT_RIPPLE),
                        flags: None,
                        limit_amount: None,
                    });
                }
            }
            (Role::User, true) => {
                self.problems.push(
                    "You appear to have set your default ripple flag even though you are \
                     not a gateway. This is not recommended unless you are experimenting"
                        .to_string(),
                );
            }
            _ => {}
        }
    }

    /// Classify one trust line; findings consume budget, clean lines do not.
    fn inspect(&mut self, line: &TrustLine) -> Verdict {
        let Some(side) = line.side(&self.account) else {
            return Verdict::Continue;
        };
        // A gateway wants rippling across its lines: a set no-ripple bit is
        // the problem. A user wants the opposite.
        let fix = match (self.role, line.no_ripple(side)) {
            (Role::Gateway, true) => Some((
                "You should clear the no ripple flag on your ",
                flags::TF_CLEAR_NO_RIPPLE,
            )),
            (Role::User, false) => Some((
                "You should probably set the no ripple flag on your ",
                flags::TF_SET_NO_RIPPLE,
            )),
            _ => None,
        };
        let Some((prefix, transaction_flag)) = fix else {
            return Verdict::Continue;
        };
        if self.budget == 0 {
            return Verdict::Stop;
        }
        self.budget -= 1;

        let peer = *line.peer(side);
        self.problems
            .push(format!("{prefix}{} line to {peer}", line.currency));
        if let Some(fees) = self.fees {
            let sequence = self.next_sequence();
            self.transactions.push(DraftTransaction {
                transaction_type: "TrustSet",
                account: self.account,
                sequence,
                fee: fees.base_fee,
                set_flag: None,
                flags: Some(transaction_flag),
                limit_amount: Some(Amount::Issued(IssuedAmount {
                    currency: line.currency,
                    issuer: peer,
                    value: line.limit(side),
                })),
            });
        }
        Verdict::Continue
    }
}

/// Run the no-ripple advisory for an account.
///
/// The pre-check finding (if any) comes first, then scan findings in key
/// order. Draft transactions, when requested, appear in the same relative
/// order with strictly increasing sequence numbers starting at the account's
/// current sequence.
pub async fn noripple_check(
    store: &dyn LedgerStore,
    params: &NoRippleParams,
) -> QueryResult<NoRippleResponse> {
    let query = params.validate()?;
    let header = store
        .resolve(&query.selector)
        .await?
        .ok_or(QueryError::LedgerNotFound)?;
    let root = store
        .account_root(&query.account, header.sequence)
        .await?
        .ok_or_else(|| QueryError::AccountNotFound(query.account.to_address()))?;
    let fees = if query.transactions {
        Some(store.fees(header.sequence).await?)
    } else {
        None
    };

    let mut advice = Advice::new(query.account, query.role, fees, root.sequence, query.limit);
    advice.precheck(root.default_ripple());

    scan_owned(store, &query.account, header.sequence, None, |_, object| {
        match object.as_trust_line() {
            Some(line) => advice.inspect(line),
            None => Verdict::Continue,
        }
    })
    .await?;

    tracing::debug!(
        account = %query.account,
        problems = advice.problems.len(),
        "noripple_check"
    );
    Ok(NoRippleResponse {
        ledger_index: header.sequence,
        ledger_hash: header.hash,
        problems: advice.problems,
        transactions: query.transactions.then_some(advice.transactions),
    })
}
