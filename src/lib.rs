//! SimpleChain - a minimal hash-linked, append-only blockchain
//!
//! # Architecture
//!
//! ## Core Blockchain
//! - [`blockchain`] - Block construction, hash derivation and the append-only chain
//!
//! ## Cryptography
//! - [`crypto`] - SHA-256 helpers and hex presentation
//!
//! ## Configuration & Utilities
//! - [`config`] - Configuration management
//! - [`error`] - Error types
//! - [`cli`] - CLI utilities

#![forbid(unsafe_code)]

// ============================================================================
// Core Blockchain
// ============================================================================
pub mod blockchain;

// ============================================================================
// Cryptography
// ============================================================================
pub mod crypto;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod cli;
pub mod config;
pub mod error;

pub use blockchain::{Block, Chain, GENESIS_PAYLOAD};
pub use error::{ChainError, Result};
