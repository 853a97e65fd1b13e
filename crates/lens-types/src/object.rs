use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::amount::{Currency, Drops, IouValue};

/// Ledger and transaction flag bits.
pub mod flags {
    /// AccountRoot: rippling is enabled by default on this account's lines.
    pub const DEFAULT_RIPPLE: u32 = 0x0080_0000;

    /// TrustLine: the low account has set no-ripple.
    pub const LOW_NO_RIPPLE: u32 = 0x0010_0000;
    /// TrustLine: the high account has set no-ripple.
    pub const HIGH_NO_RIPPLE: u32 = 0x0020_0000;
    /// TrustLine: the low account has frozen the line.
    pub const LOW_FREEZE: u32 = 0x0040_0000;
    /// TrustLine: the high account has frozen the line.
    pub const HIGH_FREEZE: u32 = 0x0080_0000;

    /// TrustSet transaction flag: set no-ripple on this line.
    pub const TF_SET_NO_RIPPLE: u32 = 0x0002_0000;
    /// TrustSet transaction flag: clear no-ripple on this line.
    pub const TF_CLEAR_NO_RIPPLE: u32 = 0x0004_0000;

    /// AccountSet `SetFlag` value enabling default rippling.
    pub const ASF_DEFAULT_RIPPLE: u32 = 8;
}

/// An account's root state object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRoot {
    pub account: AccountId,
    /// Next transaction sequence number for the account.
    pub sequence: u32,
    pub flags: u32,
}

impl AccountRoot {
    /// Whether the default-ripple flag is set.
    pub fn default_ripple(&self) -> bool {
        self.flags & flags::DEFAULT_RIPPLE != 0
    }
}

/// A unidirectional payment channel funded with the native asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayChannel {
    /// The channel's source (owner) account.
    pub source: AccountId,
    pub destination: AccountId,
    /// Total amount the channel was funded with.
    pub amount: Drops,
    /// Amount already paid out to the destination.
    pub balance: Drops,
    /// Claim-signing public key, when one was set at channel creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<Vec<u8>>,
    pub settle_delay: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_after: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_tag: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_tag: Option<u32>,
}

/// Which end of a trust line an account occupies.
///
/// Each line is stored once, keyed by the numerically lower of the two
/// account IDs; per-side flags and limits are addressed through this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrustSide {
    Low,
    High,
}

impl TrustSide {
    /// The opposite side.
    pub fn other(self) -> TrustSide {
        match self {
            TrustSide::Low => TrustSide::High,
            TrustSide::High => TrustSide::Low,
        }
    }
}

/// A trust relationship between two accounts for one currency.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustLine {
    pub low_account: AccountId,
    pub high_account: AccountId,
    pub currency: Currency,
    /// Balance from the low account's perspective: negative when the low
    /// account owes the high account.
    pub balance: IouValue,
    /// The limit the low account extends to the high account.
    pub low_limit: IouValue,
    /// The limit the high account extends to the low account.
    pub high_limit: IouValue,
    pub flags: u32,
}

impl TrustLine {
    /// The side `account` occupies, or `None` if it is not a party.
    pub fn side(&self, account: &AccountId) -> Option<TrustSide> {
        if *account == self.low_account {
            Some(TrustSide::Low)
        } else if *account == self.high_account {
            Some(TrustSide::High)
        } else {
            None
        }
    }

    /// The account on the other end from `side`.
    pub fn peer(&self, side: TrustSide) -> &AccountId {
        match side {
            TrustSide::Low => &self.high_account,
            TrustSide::High => &self.low_account,
        }
    }

    /// Whether `side` has set no-ripple on this line.
    pub fn no_ripple(&self, side: TrustSide) -> bool {
        let bit = match side {
            TrustSide::Low => flags::LOW_NO_RIPPLE,
            TrustSide::High => flags::HIGH_NO_RIPPLE,
        };
        self.flags & bit != 0
    }

    /// Whether `side` has frozen this line.
    pub fn frozen(&self, side: TrustSide) -> bool {
        let bit = match side {
            TrustSide::Low => flags::LOW_FREEZE,
            TrustSide::High => flags::HIGH_FREEZE,
        };
        self.flags & bit != 0
    }

    /// The limit `side` extends to its peer.
    pub fn limit(&self, side: TrustSide) -> IouValue {
        match side {
            TrustSide::Low => self.low_limit,
            TrustSide::High => self.high_limit,
        }
    }

    /// Balance as seen from `side`: positive when `side` holds the asset.
    pub fn balance_from(&self, side: TrustSide) -> IouValue {
        match side {
            TrustSide::Low => self.balance,
            TrustSide::High => self.balance.negated(),
        }
    }
}

/// A state object reachable from an account's ownership directory.
///
/// Decoded once at fetch time into named, typed fields; scan consumers match
/// on the variant rather than probing untyped field tags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OwnedObject {
    PayChannel(PayChannel),
    TrustLine(TrustLine),
}

impl OwnedObject {
    /// The payment channel, if this object is one.
    pub fn as_pay_channel(&self) -> Option<&PayChannel> {
        match self {
            OwnedObject::PayChannel(channel) => Some(channel),
            _ => None,
        }
    }

    /// The trust line, if this object is one.
    pub fn as_trust_line(&self) -> Option<&TrustLine> {
        match self {
            OwnedObject::TrustLine(line) => Some(line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(n: u8) -> AccountId {
        AccountId::from_raw([n; 20])
    }

    fn line(flag_bits: u32) -> TrustLine {
        TrustLine {
            low_account: account(1),
            high_account: account(2),
            currency: Currency::from_code("USD").unwrap(),
            balance: "-50".parse().unwrap(),
            low_limit: "100".parse().unwrap(),
            high_limit: "0".parse().unwrap(),
            flags: flag_bits,
        }
    }

    #[test]
    fn side_resolution() {
        let l = line(0);
        assert_eq!(l.side(&account(1)), Some(TrustSide::Low));
        assert_eq!(l.side(&account(2)), Some(TrustSide::High));
        assert_eq!(l.side(&account(3)), None);
    }

    #[test]
    fn peer_is_opposite_account() {
        let l = line(0);
        assert_eq!(l.peer(TrustSide::Low), &account(2));
        assert_eq!(l.peer(TrustSide::High), &account(1));
    }

    #[test]
    fn no_ripple_is_per_side() {
        let l = line(flags::LOW_NO_RIPPLE);
        assert!(l.no_ripple(TrustSide::Low));
        assert!(!l.no_ripple(TrustSide::High));
    }

    #[test]
    fn freeze_is_per_side() {
        let l = line(flags::HIGH_FREEZE);
        assert!(!l.frozen(TrustSide::Low));
        assert!(l.frozen(TrustSide::High));
    }

    #[test]
    fn balance_negates_for_high_side() {
        let l = line(0);
        assert_eq!(l.balance_from(TrustSide::Low), "-50".parse().unwrap());
        assert_eq!(l.balance_from(TrustSide::High), "50".parse().unwrap());
    }

    #[test]
    fn default_ripple_flag() {
        let root = AccountRoot {
            account: account(1),
            sequence: 7,
            flags: flags::DEFAULT_RIPPLE,
        };
        assert!(root.default_ripple());
        let unset = AccountRoot {
            flags: 0,
            ..root
        };
        assert!(!unset.default_ripple());
    }

    #[test]
    fn owned_object_accessors() {
        let obj = OwnedObject::TrustLine(line(0));
        assert!(obj.as_trust_line().is_some());
        assert!(obj.as_pay_channel().is_none());
    }
}
