//! Hashing primitives for SimpleChain

use sha2::{Digest, Sha256};

/// Length in bytes of every block hash.
pub const HASH_LEN: usize = 32;

pub type Sha256Hash = [u8; HASH_LEN];

/// SHA-256 over the raw concatenation of `parts`, with nothing between them.
pub fn sha256_concat(parts: &[&[u8]]) -> Sha256Hash {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Convert hash bytes to a lowercase hex string for display.
pub fn hash_to_hex(hash: &[u8]) -> String {
    hex::encode(hash)
}

/// Shortened `abcdef12...89abcdef` form used in tables.
pub fn short_hex(hash: &[u8]) -> String {
    let full = hex::encode(hash);
    if full.len() > 16 {
        format!("{}...{}", &full[..8], &full[full.len() - 8..])
    } else {
        full
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_has_no_delimiters() {
        assert_eq!(sha256_concat(&[b"ab", b"c"]), sha256_concat(&[b"abc"]));
        assert_eq!(sha256_concat(&[b"", b"abc", b""]), sha256_concat(&[b"abc"]));
    }

    #[test]
    fn test_empty_input_digest() {
        assert_eq!(
            hash_to_hex(&sha256_concat(&[])),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_short_hex() {
        assert_eq!(short_hex(&[0xab; 4]), "abababab");
        let s = short_hex(&[0x01; 32]);
        assert_eq!(s, "01010101...01010101");
    }
}
