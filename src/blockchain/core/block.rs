use crate::crypto::{hash_to_hex, sha256_concat, Sha256Hash};
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// One immutable, hash-identified unit of data linked to its predecessor.
///
/// Fields are private: the hash is fixed during construction and nothing
/// hands out mutable access afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    timestamp: i64,
    #[serde(serialize_with = "serialize_lossy")]
    payload: Vec<u8>,
    #[serde(serialize_with = "serialize_hex")]
    prev_hash: Vec<u8>,
    #[serde(serialize_with = "serialize_hex")]
    hash: Vec<u8>,
}

impl Block {
    /// Build a block stamped with the current wall-clock time in seconds.
    pub fn new(payload: impl Into<Vec<u8>>, prev_hash: impl Into<Vec<u8>>) -> Self {
        let timestamp = chrono::Utc::now().timestamp();
        Self::with_timestamp(payload, prev_hash, timestamp)
    }

    /// Build a block with an explicit timestamp.
    pub fn with_timestamp(
        payload: impl Into<Vec<u8>>,
        prev_hash: impl Into<Vec<u8>>,
        timestamp: i64,
    ) -> Self {
        let payload = payload.into();
        let prev_hash = prev_hash.into();
        let hash = Self::derive_hash(&prev_hash, &payload, timestamp).to_vec();

        Block {
            timestamp,
            payload,
            prev_hash,
            hash,
        }
    }

    /// SHA-256 of `prev_hash || payload || timestamp`, the timestamp written
    /// as its canonical base-10 string. No separators or length prefixes.
    pub fn derive_hash(prev_hash: &[u8], payload: &[u8], timestamp: i64) -> Sha256Hash {
        let timestamp = timestamp.to_string();
        sha256_concat(&[prev_hash, payload, timestamp.as_bytes()])
    }

    /// Re-derive the hash from the block's current fields.
    pub fn compute_hash(&self) -> Sha256Hash {
        Self::derive_hash(&self.prev_hash, &self.payload, self.timestamp)
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn prev_hash(&self) -> &[u8] {
        &self.prev_hash
    }

    pub fn hash(&self) -> &[u8] {
        &self.hash
    }

    pub fn is_genesis(&self) -> bool {
        self.prev_hash.is_empty()
    }

    pub fn hash_hex(&self) -> String {
        hash_to_hex(&self.hash)
    }

    pub fn prev_hash_hex(&self) -> String {
        hash_to_hex(&self.prev_hash)
    }

    /// Payload decoded as UTF-8, with invalid sequences replaced.
    pub fn payload_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }

    /// Only for exercising the validator against corrupted blocks.
    #[cfg(test)]
    pub(crate) fn tampered(mut self, payload: &[u8]) -> Self {
        self.payload = payload.to_vec();
        self
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Prev. hash: {}", self.prev_hash_hex())?;
        writeln!(f, "Data: {}", self.payload_lossy())?;
        write!(f, "Hash: {}", self.hash_hex())
    }
}

fn serialize_hex<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hash_to_hex(bytes))
}

fn serialize_lossy<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}
