use std::collections::BTreeSet;

use serde::Deserialize;

use lens_types::{AccountId, LedgerHash, LedgerSelector, ObjectKey};

use crate::error::{QueryError, QueryResult};

/// Default result cap for `account_channels`.
pub const DEFAULT_CHANNELS_LIMIT: u32 = 200;
/// Default finding cap for `noripple_check`.
pub const DEFAULT_NORIPPLE_LIMIT: u32 = 300;

/// Ledger-version selector parameters shared by every query.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LedgerParams {
    pub ledger_index: Option<u32>,
    pub ledger_hash: Option<String>,
}

impl LedgerParams {
    /// Build the selector; absent fields mean the current ledger.
    pub fn selector(&self) -> QueryResult<LedgerSelector> {
        match (self.ledger_index, self.ledger_hash.as_deref()) {
            (Some(_), Some(_)) => Err(QueryError::invalid(
                "ledger_index and ledger_hash are mutually exclusive",
            )),
            (Some(index), None) => Ok(LedgerSelector::Index(index)),
            (None, Some(hash)) => LedgerHash::from_hex(hash)
                .map(LedgerSelector::Hash)
                .map_err(|_| QueryError::invalid("malformed ledger_hash")),
            (None, None) => Ok(LedgerSelector::Current),
        }
    }
}

fn parse_account(field: &str, address: &str) -> QueryResult<AccountId> {
    AccountId::from_address(address)
        .map_err(|_| QueryError::invalid(format!("malformed {field}: {address}")))
}

/// Raw `account_channels` request parameters.
#[derive(Clone, Debug, Deserialize)]
pub struct ChannelsParams {
    pub account: String,
    pub destination_account: Option<String>,
    pub limit: Option<u32>,
    pub marker: Option<String>,
    #[serde(flatten)]
    pub ledger: LedgerParams,
}

/// Validated `account_channels` request.
#[derive(Clone, Debug)]
pub struct ChannelsQuery {
    pub account: AccountId,
    pub destination: Option<AccountId>,
    pub limit: u32,
    pub marker: Option<ObjectKey>,
    pub selector: LedgerSelector,
}

impl ChannelsParams {
    /// Validate all fields before any store access.
    pub fn validate(&self) -> QueryResult<ChannelsQuery> {
        let account = parse_account("account", &self.account)?;
        let destination = self
            .destination_account
            .as_deref()
            .map(|address| parse_account("destination_account", address))
            .transpose()?;
        let limit = match self.limit {
            None => DEFAULT_CHANNELS_LIMIT,
            Some(0) => return Err(QueryError::invalid("limit must be a positive integer")),
            Some(limit) => limit,
        };
        let marker = self
            .marker
            .as_deref()
            .map(|marker| {
                ObjectKey::from_hex(marker).map_err(|_| QueryError::invalid("malformed marker"))
            })
            .transpose()?;
        Ok(ChannelsQuery {
            account,
            destination,
            limit,
            marker,
            selector: self.ledger.selector()?,
        })
    }
}

/// Declared account posture for the no-ripple advisory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Gateway,
    User,
}

/// Raw `noripple_check` request parameters.
#[derive(Clone, Debug, Deserialize)]
pub struct NoRippleParams {
    pub account: String,
    pub role: String,
    pub limit: Option<u32>,
    #[serde(default)]
    pub transactions: bool,
    #[serde(flatten)]
    pub ledger: LedgerParams,
}

/// Validated `noripple_check` request.
#[derive(Clone, Debug)]
pub struct NoRippleQuery {
    pub account: AccountId,
    pub role: Role,
    pub limit: u32,
    pub transactions: bool,
    pub selector: LedgerSelector,
}

impl NoRippleParams {
    /// Validate all fields before any store access.
    pub fn validate(&self) -> QueryResult<NoRippleQuery> {
        let account = parse_account("account", &self.account)?;
        let role = match self.role.as_str() {
            "gateway" => Role::Gateway,
            "user" => Role::User,
            other => {
                return Err(QueryError::invalid(format!("invalid role: {other}")));
            }
        };
        Ok(NoRippleQuery {
            account,
            role,
            limit: self.limit.unwrap_or(DEFAULT_NORIPPLE_LIMIT),
            transactions: self.transactions,
            selector: self.ledger.selector()?,
        })
    }
}

/// Raw `gateway_balances` request parameters.
///
/// `hot_wallet` accepts a single address or an array of addresses; JSON null
/// counts as an empty list.
#[derive(Clone, Debug, Deserialize)]
pub struct GatewayBalancesParams {
    pub account: String,
    #[serde(default)]
    pub hot_wallet: Option<serde_json::Value>,
    #[serde(flatten)]
    pub ledger: LedgerParams,
}

/// Validated `gateway_balances` request.
#[derive(Clone, Debug)]
pub struct GatewayBalancesQuery {
    pub account: AccountId,
    pub hot_wallets: BTreeSet<AccountId>,
    pub selector: LedgerSelector,
}

impl GatewayBalancesParams {
    /// Validate all fields before any store access.
    pub fn validate(&self) -> QueryResult<GatewayBalancesQuery> {
        let account = parse_account("account", &self.account)?;
        let mut hot_wallets = BTreeSet::new();
        match &self.hot_wallet {
            None | Some(serde_json::Value::Null) => {}
            Some(serde_json::Value::String(address)) => {
                hot_wallets.insert(parse_hot_wallet(address)?);
            }
            Some(serde_json::Value::Array(entries)) => {
                for entry in entries {
                    let address = entry
                        .as_str()
                        .ok_or_else(|| QueryError::invalid("invalid hot_wallet"))?;
                    hot_wallets.insert(parse_hot_wallet(address)?);
                }
            }
            Some(_) => return Err(QueryError::invalid("invalid hot_wallet")),
        }
        Ok(GatewayBalancesQuery {
            account,
            hot_wallets,
            selector: self.ledger.selector()?,
        })
    }
}

fn parse_hot_wallet(address: &str) -> QueryResult<AccountId> {
    AccountId::from_address(address).map_err(|_| QueryError::invalid("invalid hot_wallet"))
}
