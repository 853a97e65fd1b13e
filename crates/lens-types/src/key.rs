use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

fn hex32(s: &str) -> Result<[u8; 32], TypeError> {
    let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
    if bytes.len() != 32 {
        return Err(TypeError::InvalidLength {
            expected: 32,
            actual: bytes.len(),
        });
    }
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&bytes);
    Ok(arr)
}

/// Position marker within an account's owned-object key space.
///
/// Keys are totally ordered by byte order; the owned-object index is scanned
/// in ascending key order and pagination markers are keys rendered as
/// uppercase hex. A key only has meaning relative to the account and ledger
/// version it was produced for.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectKey([u8; 32]);

impl ObjectKey {
    /// The minimum key (all zeros).
    pub const MIN: ObjectKey = ObjectKey([0u8; 32]);

    /// Create from raw bytes.
    pub const fn from_raw(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw 32 bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Uppercase hex rendering, as used for markers and `channel_id`.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Parse from hex (either case accepted).
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        hex32(s).map(Self)
    }

    /// The next key in byte order, or `None` past the maximum key.
    ///
    /// Used to continue a page fetch exclusively past the last key seen.
    pub fn successor(&self) -> Option<ObjectKey> {
        let mut bytes = self.0;
        for byte in bytes.iter_mut().rev() {
            let (next, overflow) = byte.overflowing_add(1);
            *byte = next;
            if !overflow {
                return Some(ObjectKey(bytes));
            }
        }
        None
    }
}

impl fmt::Debug for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectKey({})", &self.to_hex()[..8])
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for ObjectKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ObjectKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ObjectKey::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Hash identifying one ledger version.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LedgerHash([u8; 32]);

impl LedgerHash {
    /// Create from raw bytes.
    pub const fn from_raw(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw 32 bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Uppercase hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Parse from hex (either case accepted).
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        hex32(s).map(Self)
    }
}

impl fmt::Debug for LedgerHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LedgerHash({})", &self.to_hex()[..8])
    }
}

impl fmt::Display for LedgerHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for LedgerHash {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for LedgerHash {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        LedgerHash::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> ObjectKey {
        let mut bytes = [0u8; 32];
        bytes[31] = n;
        ObjectKey::from_raw(bytes)
    }

    #[test]
    fn hex_is_uppercase() {
        let k = ObjectKey::from_raw([0xab; 32]);
        assert_eq!(k.to_hex(), "AB".repeat(32));
    }

    #[test]
    fn hex_parse_accepts_either_case() {
        let k = ObjectKey::from_raw([0xab; 32]);
        assert_eq!(ObjectKey::from_hex(&"ab".repeat(32)).unwrap(), k);
        assert_eq!(ObjectKey::from_hex(&"AB".repeat(32)).unwrap(), k);
    }

    #[test]
    fn hex_rejects_bad_input() {
        assert!(ObjectKey::from_hex("zz").is_err());
        assert!(ObjectKey::from_hex(&"ab".repeat(16)).is_err());
    }

    #[test]
    fn ordering_is_byte_order() {
        assert!(key(1) < key(2));
        assert!(ObjectKey::MIN < key(1));
    }

    #[test]
    fn successor_increments() {
        assert_eq!(key(1).successor(), Some(key(2)));
    }

    #[test]
    fn successor_carries() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0xFF;
        let mut expected = [0u8; 32];
        expected[30] = 1;
        assert_eq!(
            ObjectKey::from_raw(bytes).successor(),
            Some(ObjectKey::from_raw(expected))
        );
    }

    #[test]
    fn successor_of_max_is_none() {
        assert_eq!(ObjectKey::from_raw([0xFF; 32]).successor(), None);
    }

    #[test]
    fn ledger_hash_hex_roundtrip() {
        let h = LedgerHash::from_raw([0x5C; 32]);
        assert_eq!(LedgerHash::from_hex(&h.to_hex()).unwrap(), h);
    }
}
