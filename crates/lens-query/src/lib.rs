//! Core query logic for LedgerLens.
//!
//! Every operation reads one immutable ledger version through the
//! [`lens_store::LedgerStore`] seam and never mutates anything. The module
//! split mirrors the operations:
//!
//! - [`scan`] — the paginated owned-object scan primitive all consumers share
//! - [`channels`] — `account_channels`: filtered payment-channel listing
//! - [`noripple`] — `noripple_check`: trust-line flag advisory with draft
//!   fix-up transactions
//! - [`gateway`] — `gateway_balances`: obligation/balance aggregation
//! - [`random`] — `random`: a CSPRNG digest for callers wanting entropy
//!
//! Parameter validation ([`params`]) happens before any store access; the
//! error taxonomy ([`error`]) keeps bad input, missing accounts, missing
//! ledgers, and upstream failures distinct.

pub mod channels;
pub mod error;
pub mod gateway;
pub mod noripple;
pub mod params;
pub mod random;
pub mod scan;

pub use channels::{ChannelRecord, ChannelsResponse, account_channels};
pub use error::{QueryError, QueryResult};
pub use gateway::{CurrencyBalance, GatewayBalancesResponse, gateway_balances};
pub use noripple::{DraftTransaction, NoRippleResponse, noripple_check};
pub use params::{ChannelsParams, GatewayBalancesParams, LedgerParams, NoRippleParams, Role};
pub use random::{RandomResponse, random_digest};
pub use scan::{Verdict, scan_owned};
