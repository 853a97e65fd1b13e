use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::TypeError;

/// Version byte prefixes for base58check token encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Classic account address (renders with a leading `r`).
    AccountId,
    /// Account public key (renders with a leading `a`).
    AccountPublic,
}

impl TokenKind {
    fn version(self) -> u8 {
        match self {
            TokenKind::AccountId => 0x00,
            TokenKind::AccountPublic => 0x23,
        }
    }
}

fn checksum(body: &[u8]) -> [u8; 4] {
    let first = Sha256::digest(body);
    let second = Sha256::digest(first);
    let mut out = [0u8; 4];
    out.copy_from_slice(&second[..4]);
    out
}

/// Encode a payload as a base58check token using the RIPPLE alphabet.
///
/// The token is `version byte || payload || first 4 bytes of
/// SHA-256(SHA-256(version || payload))`, base58-encoded.
pub fn encode_token(kind: TokenKind, payload: &[u8]) -> String {
    let mut body = Vec::with_capacity(payload.len() + 5);
    body.push(kind.version());
    body.extend_from_slice(payload);
    let check = checksum(&body);
    body.extend_from_slice(&check);
    bs58::encode(body)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .into_string()
}

/// Decode a base58check token, verifying the checksum and version byte.
pub fn decode_token(kind: TokenKind, token: &str) -> Result<Vec<u8>, TypeError> {
    let data = bs58::decode(token)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .into_vec()
        .map_err(|_| TypeError::MalformedAddress(token.to_string()))?;
    if data.len() < 5 {
        return Err(TypeError::MalformedAddress(token.to_string()));
    }
    let (body, check) = data.split_at(data.len() - 4);
    if check != checksum(body).as_slice() {
        return Err(TypeError::BadChecksum);
    }
    if body[0] != kind.version() {
        return Err(TypeError::WrongTokenVersion {
            expected: kind.version(),
            actual: body[0],
        });
    }
    Ok(body[1..].to_vec())
}

/// Fixed-width account identifier.
///
/// An `AccountId` is 20 opaque bytes. Its string form is the base58check
/// classic address. The byte ordering doubles as the account's position in
/// scan key prefixes, so `Ord` follows raw byte order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId([u8; 20]);

impl AccountId {
    /// Parse a classic address, strictly: checksum and version must match.
    pub fn from_address(address: &str) -> Result<Self, TypeError> {
        let body = decode_token(TokenKind::AccountId, address)?;
        if body.len() != 20 {
            return Err(TypeError::InvalidLength {
                expected: 20,
                actual: body.len(),
            });
        }
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&body);
        Ok(Self(bytes))
    }

    /// Render the classic address.
    pub fn to_address(&self) -> String {
        encode_token(TokenKind::AccountId, &self.0)
    }

    /// Create from raw bytes.
    pub const fn from_raw(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// The raw 20 bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self.to_address())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_address())
    }
}

impl Serialize for AccountId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_address())
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        AccountId::from_address(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_account_address() {
        // The all-zero account, a well-known base58check vector.
        let zero = AccountId::from_raw([0u8; 20]);
        assert_eq!(zero.to_address(), "rrrrrrrrrrrrrrrrrrrrrhoLvTp");
        let parsed = AccountId::from_address("rrrrrrrrrrrrrrrrrrrrrhoLvTp").unwrap();
        assert_eq!(parsed, zero);
    }

    #[test]
    fn one_account_address() {
        let mut bytes = [0u8; 20];
        bytes[19] = 1;
        let one = AccountId::from_raw(bytes);
        assert_eq!(one.to_address(), "rrrrrrrrrrrrrrrrrrrrBZbvji");
    }

    #[test]
    fn address_roundtrip() {
        let id = AccountId::from_raw([0xAB; 20]);
        let addr = id.to_address();
        assert!(addr.starts_with('r'));
        assert_eq!(AccountId::from_address(&addr).unwrap(), id);
    }

    #[test]
    fn corrupted_checksum_rejected() {
        let addr = AccountId::from_raw([7u8; 20]).to_address();
        let mut corrupted = addr.clone();
        // Swap the last character for a different alphabet member.
        let last = corrupted.pop().unwrap();
        corrupted.push(if last == 'r' { 'p' } else { 'r' });
        assert!(AccountId::from_address(&corrupted).is_err());
    }

    #[test]
    fn wrong_version_rejected() {
        let token = encode_token(TokenKind::AccountPublic, &[1u8; 33]);
        let err = decode_token(TokenKind::AccountId, &token).unwrap_err();
        assert!(matches!(err, TypeError::WrongTokenVersion { .. }));
    }

    #[test]
    fn non_alphabet_input_rejected() {
        // '0', 'O', 'I', and 'l' are outside the RIPPLE alphabet.
        assert!(AccountId::from_address("r0OIl").is_err());
        assert!(AccountId::from_address("").is_err());
    }

    #[test]
    fn public_key_token_roundtrip() {
        let pk = [0x02u8; 33];
        let token = encode_token(TokenKind::AccountPublic, &pk);
        assert!(token.starts_with('a'));
        let decoded = decode_token(TokenKind::AccountPublic, &token).unwrap();
        assert_eq!(decoded, pk);
    }

    #[test]
    fn serde_uses_address_form() {
        let id = AccountId::from_raw([3u8; 20]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.to_address()));
        let parsed: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
