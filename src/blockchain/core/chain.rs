use crate::blockchain::core::block::Block;
use crate::blockchain::core::validation::validate_blocks;
use crate::error::ChainError;
use serde::Serialize;
use tracing::debug;

/// Payload of the block every chain starts from.
pub const GENESIS_PAYLOAD: &str = "Genesis Block";

/// An append-only, hash-linked sequence of blocks rooted at a genesis block.
///
/// A `Chain` always holds at least one block. It is an ordinary owned value;
/// callers that share one across threads must wrap it in their own lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// Bootstrap a chain holding only the standard genesis block.
    pub fn new() -> Self {
        Self::with_genesis(GENESIS_PAYLOAD)
    }

    /// Bootstrap a chain whose genesis block carries `genesis_payload`.
    pub fn with_genesis(genesis_payload: impl Into<Vec<u8>>) -> Self {
        let genesis = Block::new(genesis_payload, Vec::new());
        debug!("Created genesis block {}", genesis.hash_hex());
        Chain {
            blocks: vec![genesis],
        }
    }

    /// Adopt an existing block list after checking every chain invariant.
    pub fn from_blocks(blocks: Vec<Block>) -> Result<Self, ChainError> {
        validate_blocks(&blocks)?;
        Ok(Chain { blocks })
    }

    /// Link a new block carrying `payload` onto the tail.
    pub fn append(&mut self, payload: impl Into<Vec<u8>>) {
        let prev_hash = self.tip().hash().to_vec();
        let block = Block::new(payload, prev_hash);
        debug!(
            "Appended block {} at height {}",
            block.hash_hex(),
            self.blocks.len()
        );
        self.blocks.push(block);
    }

    /// Re-check genesis, stored hashes and linkage for every block.
    pub fn validate(&self) -> Result<(), ChainError> {
        validate_blocks(&self.blocks)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false; a chain is never without its genesis block.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn genesis(&self) -> &Block {
        &self.blocks[0]
    }

    /// The most recently appended block.
    pub fn tip(&self) -> &Block {
        // Non-empty from construction onwards.
        &self.blocks[self.blocks.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_has_single_genesis() {
        let chain = Chain::new();
        assert_eq!(chain.len(), 1);
        assert!(!chain.is_empty());
        assert!(chain.genesis().prev_hash().is_empty());
        assert_eq!(chain.genesis().payload(), GENESIS_PAYLOAD.as_bytes());
        assert_eq!(chain.tip(), chain.genesis());
    }

    #[test]
    fn test_custom_genesis_payload() {
        let chain = Chain::with_genesis("hello genesis");
        assert_eq!(chain.genesis().payload(), b"hello genesis");
        assert!(chain.genesis().is_genesis());
    }

    #[test]
    fn test_append_links_to_previous_tip() {
        let mut chain = Chain::new();
        let old_tip = chain.tip().clone();

        chain.append("Send 1 BTC to Ivan");

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.tip().prev_hash(), old_tip.hash());
        assert_eq!(chain.tip().payload(), b"Send 1 BTC to Ivan");
        assert_eq!(chain.genesis(), &old_tip);
    }

    #[test]
    fn test_append_keeps_existing_blocks_untouched() {
        let mut chain = Chain::new();
        chain.append("A");
        let snapshot: Vec<Block> = chain.blocks().to_vec();

        chain.append("B");
        chain.append(Vec::<u8>::new());

        assert_eq!(chain.len(), 4);
        assert_eq!(&chain.blocks()[..2], &snapshot[..]);
        assert_eq!(chain.validate(), Ok(()));
    }

    #[test]
    fn test_from_blocks_round_trip() {
        let mut chain = Chain::new();
        chain.append("x");
        let rebuilt = Chain::from_blocks(chain.blocks().to_vec()).unwrap();
        assert_eq!(rebuilt, chain);

        assert_eq!(Chain::from_blocks(Vec::new()), Err(ChainError::EmptyChain));
    }

    #[test]
    fn test_get_and_iter() {
        let mut chain = Chain::new();
        chain.append("one");
        chain.append("two");

        assert_eq!(chain.get(2).map(|b| b.payload()), Some(&b"two"[..]));
        assert!(chain.get(3).is_none());

        let payloads: Vec<_> = (&chain).into_iter().map(|b| b.payload_lossy().into_owned()).collect();
        assert_eq!(payloads, vec![GENESIS_PAYLOAD, "one", "two"]);
        assert_eq!(chain.iter().count(), 3);
    }

    #[test]
    fn test_chain_serializes_as_block_list() {
        let mut chain = Chain::new();
        chain.append("json");
        let json = serde_json::to_value(&chain).unwrap();
        let list = json.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["prev_hash"], "");
        assert_eq!(list[1]["prev_hash"], chain.genesis().hash_hex());
    }
}
