use rand::RngCore;
use serde::Serialize;

/// `random` response: 256 bits of entropy as uppercase hex.
#[derive(Clone, Debug, Serialize)]
pub struct RandomResponse {
    pub random: String,
}

/// Produce a random 256-bit digest for callers wanting server entropy.
pub fn random_digest() -> RandomResponse {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    RandomResponse {
        random: hex::encode_upper(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_64_uppercase_hex_chars() {
        let response = random_digest();
        assert_eq!(response.random.len(), 64);
        assert!(response
            .random
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn digests_differ() {
        assert_ne!(random_digest().random, random_digest().random);
    }
}
