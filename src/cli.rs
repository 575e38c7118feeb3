//! Helpers shared by the command-line driver: building a chain from config
//! and rendering it for humans.

use crate::blockchain::Chain;
use crate::config::Config;
use crate::crypto::short_hex;
use chrono::{TimeZone, Utc};
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use tracing::info;

/// Bootstrap a chain with the configured genesis payload and append each of
/// `payloads` in order.
pub fn build_chain<S: AsRef<str>>(config: &Config, payloads: &[S]) -> Chain {
    let mut chain = Chain::with_genesis(config.chain.genesis_payload.as_str());
    for payload in payloads {
        let payload: &str = payload.as_ref();
        chain.append(payload);
    }
    info!("Built chain with {} blocks", chain.len());
    chain
}

/// One plain-text section per block: previous hash, data and hash.
pub fn render_blocks(chain: &Chain) -> String {
    let mut out = String::new();
    for block in chain {
        out.push_str(&block.to_string());
        out.push_str("\n\n");
    }
    out
}

/// Colored variant of [`render_blocks`] for terminals.
pub fn print_blocks(chain: &Chain) {
    for block in chain {
        println!("{} {}", "Prev. hash:".bright_black(), block.prev_hash_hex().yellow());
        println!("{} {}", "Data:".bright_black(), block.payload_lossy().bright_white());
        println!("{} {}", "Hash:".bright_black(), block.hash_hex().bright_green());
        println!();
    }
}

/// Summary table with one row per block.
pub fn summary_table(chain: &Chain) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Height").add_attribute(Attribute::Bold),
            Cell::new("Time (UTC)").add_attribute(Attribute::Bold),
            Cell::new("Data").add_attribute(Attribute::Bold),
            Cell::new("Prev. hash").add_attribute(Attribute::Bold),
            Cell::new("Hash").add_attribute(Attribute::Bold),
        ]);

    for (height, block) in chain.iter().enumerate() {
        let time = Utc
            .timestamp_opt(block.timestamp(), 0)
            .single()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| block.timestamp().to_string());
        let prev = if block.is_genesis() {
            "-".to_string()
        } else {
            short_hex(block.prev_hash())
        };

        table.add_row(vec![
            Cell::new(height),
            Cell::new(time),
            Cell::new(block.payload_lossy()),
            Cell::new(prev),
            Cell::new(short_hex(block.hash())),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_chain_uses_config_genesis() {
        let mut config = Config::default();
        config.chain.genesis_payload = "origin".to_string();

        let chain = build_chain(&config, &["A", "B"]);
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.genesis().payload(), b"origin");
        assert_eq!(chain.tip().payload(), b"B");
    }

    #[test]
    fn test_render_blocks_lists_every_block() {
        let chain = build_chain(&Config::default(), &["Send 1 BTC to Ivan"]);
        let text = render_blocks(&chain);

        assert_eq!(text.matches("Prev. hash: ").count(), 2);
        assert!(text.contains("Data: Genesis Block\n"));
        assert!(text.contains("Data: Send 1 BTC to Ivan\n"));
        assert!(text.contains(&format!("Prev. hash: {}\n", chain.genesis().hash_hex())));
    }

    #[test]
    fn test_summary_table_has_row_per_block() {
        let chain = build_chain(&Config::default(), &["x", "y"]);
        let rendered = summary_table(&chain).to_string();
        assert!(rendered.contains("Height"));
        assert!(rendered.contains("Genesis Block"));
        assert!(rendered.contains(&short_hex(chain.tip().hash())));
    }
}
