#![forbid(unsafe_code)]
//! Demo driver: bootstrap a chain, append payloads, print every block.

use clap::Parser;
use colored::*;
use simplechain::cli::{build_chain, print_blocks, summary_table};
use simplechain::config::{load_config_from, OutputFormat, DEFAULT_CONFIG_PATH};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Print the chain as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Skip the summary table after the block listing
    #[arg(long)]
    no_table: bool,
    /// Payloads to append; overrides `demo.payloads` from the config
    payloads: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config_from(&cli.config)?;
    info!("Loaded configuration from {}", cli.config.display());

    let payloads = if cli.payloads.is_empty() {
        config.demo.payloads.clone()
    } else {
        cli.payloads.clone()
    };

    let chain = build_chain(&config, payloads.as_slice());

    match chain.validate() {
        Ok(()) => info!("Chain verified: {} blocks, tip {}", chain.len(), chain.tip().hash_hex()),
        Err(e) => warn!("Chain failed verification: {}", e),
    }

    let format = if cli.json { OutputFormat::Json } else { config.demo.output };
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&chain)?);
        }
        OutputFormat::Text => {
            println!("{}", "SimpleChain".bright_cyan().bold());
            println!("{}", "-----------".bright_cyan());
            println!();
            print_blocks(&chain);
            if !cli.no_table {
                println!("{}", summary_table(&chain));
            }
        }
    }

    Ok(())
}
