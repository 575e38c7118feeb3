//! Configuration management for SimpleChain

use crate::blockchain::GENESIS_PAYLOAD;
use crate::error::ChainError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "simplechain.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub chain: ChainConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ChainConfig {
    #[serde(default = "default_genesis_payload")]
    pub genesis_payload: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DemoConfig {
    #[serde(default = "default_payloads")]
    pub payloads: Vec<String>,
    #[serde(default)]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            genesis_payload: default_genesis_payload(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            payloads: default_payloads(),
            output: OutputFormat::default(),
        }
    }
}

fn default_genesis_payload() -> String {
    GENESIS_PAYLOAD.to_string()
}

fn default_payloads() -> Vec<String> {
    vec![
        "Send 1 BTC to Ivan".to_string(),
        "Send 2 more BTC to Ivan".to_string(),
    ]
}

/// Load `simplechain.toml` from the working directory.
pub fn load_config() -> Result<Config, ChainError> {
    load_config_from(DEFAULT_CONFIG_PATH)
}

/// Load configuration from `path`, falling back to defaults when the file
/// does not exist.
pub fn load_config_from(path: impl AsRef<Path>) -> Result<Config, ChainError> {
    let config = match fs::read_to_string(path.as_ref()) {
        Ok(contents) => toml::from_str(&contents)?,
        Err(e) if e.kind() == ErrorKind::NotFound => Config::default(),
        Err(e) => return Err(e.into()),
    };

    if config.chain.genesis_payload.is_empty() {
        return Err(ChainError::ConfigError(
            "chain.genesis_payload must not be empty".to_string(),
        ));
    }

    Ok(config)
}
