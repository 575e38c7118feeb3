//! Error types for SimpleChain

use std::fmt;

/// Errors surfaced by chain auditing, configuration and the CLI.
///
/// The core operations (`Block::new`, `Chain::new`, `Chain::append`) are
/// total and never produce one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    EmptyChain,
    InvalidGenesis,
    HashMismatch { index: usize },
    BrokenLinkage { index: usize },
    ConfigError(String),
    IoError(String),
    SerializationError(String),
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChainError::EmptyChain => write!(f, "Chain must contain at least the genesis block"),
            ChainError::InvalidGenesis => write!(f, "Genesis block must have an empty previous hash"),
            ChainError::HashMismatch { index } => {
                write!(f, "Stored hash of block {} does not match its contents", index)
            }
            ChainError::BrokenLinkage { index } => {
                write!(f, "Block {} does not link to the hash of block {}", index, index.saturating_sub(1))
            }
            ChainError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ChainError::IoError(msg) => write!(f, "IO error: {}", msg),
            ChainError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ChainError {}

impl From<std::io::Error> for ChainError {
    fn from(err: std::io::Error) -> Self {
        ChainError::IoError(err.to_string())
    }
}

impl From<toml::de::Error> for ChainError {
    fn from(err: toml::de::Error) -> Self {
        ChainError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ChainError {
    fn from(err: serde_json::Error) -> Self {
        ChainError::SerializationError(err.to_string())
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, ChainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linkage_message_names_both_blocks() {
        let msg = ChainError::BrokenLinkage { index: 3 }.to_string();
        assert_eq!(msg, "Block 3 does not link to the hash of block 2");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ChainError = io.into();
        assert!(matches!(err, ChainError::IoError(ref m) if m.contains("missing")));
    }
}
