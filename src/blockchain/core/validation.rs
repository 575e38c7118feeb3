use crate::blockchain::core::block::Block;
use crate::error::ChainError;

/// Audit a block list against the chain invariants: a genesis block with an
/// empty previous hash, every stored hash matching its contents, and every
/// block linked to the hash of the one before it.
pub fn validate_blocks(blocks: &[Block]) -> Result<(), ChainError> {
    let genesis = blocks.first().ok_or(ChainError::EmptyChain)?;
    if !genesis.is_genesis() {
        return Err(ChainError::InvalidGenesis);
    }

    for (index, block) in blocks.iter().enumerate() {
        if block.hash() != block.compute_hash() {
            return Err(ChainError::HashMismatch { index });
        }
    }

    for (index, pair) in blocks.windows(2).enumerate() {
        if pair[1].prev_hash() != pair[0].hash() {
            return Err(ChainError::BrokenLinkage { index: index + 1 });
        }
    }

    Ok(())
}
