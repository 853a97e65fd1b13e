use serde::{Deserialize, Serialize};

use crate::amount::Drops;
use crate::key::LedgerHash;

/// Identity of one resolved, immutable ledger version.
///
/// The sequence/hash pair is fixed for the lifetime of a request; every
/// lookup made while answering the request reads this version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerHeader {
    pub sequence: u32,
    pub hash: LedgerHash,
}

/// How a request names the ledger version it wants to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedgerSelector {
    /// The most recent validated version.
    Current,
    /// An explicit version number.
    Index(u32),
    /// A version hash.
    Hash(LedgerHash),
}

/// Network fee parameters at one ledger version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSettings {
    /// Cost of a reference transaction, used as the `Fee` of drafts.
    pub base_fee: Drops,
    pub reserve_base: Drops,
    pub reserve_increment: Drops,
}

impl Default for FeeSettings {
    fn default() -> Self {
        Self {
            base_fee: Drops(10),
            reserve_base: Drops(10_000_000),
            reserve_increment: Drops(2_000_000),
        }
    }
}
