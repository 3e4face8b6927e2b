//! Configuration Module
//!
//! This module defines all configuration structures for the burn demo.
//! Configuration is loaded from TOML files and parsed using serde.

use serde::Deserialize;
use solana_sdk::{
    commitment_config::{CommitmentConfig, CommitmentLevel},
    packet::PACKET_DATA_SIZE,
};
use std::fs;

/// Main configuration structure
///
/// Loaded from a TOML file (e.g., config/default.toml).
///
/// # Example TOML
/// ```toml
/// [rpc]
/// url = "http://127.0.0.1:8899"
/// commitment = "confirmed"
/// keypair_path = "./keypair.json"
///
/// [tree]
/// max_depth = 14
/// max_buffer_size = 64
/// canopy_depth = 14
///
/// [mint]
/// num_items = 17
/// name = "Burnable"
/// symbol = "BURN"
/// uri = "https://example.com/burnable.json"
///
/// [batch]
/// max_transaction_size = 1232
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub rpc: RpcConfig,
    pub tree: TreeConfig,
    pub mint: MintConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Cluster connection and signing identity
///
/// # Fields
/// - `url`: JSON-RPC endpoint (e.g., "http://127.0.0.1:8899")
/// - `commitment`: "processed", "confirmed" or "finalized"
/// - `keypair_path`: JSON keypair file of the payer
#[derive(Debug, Clone, Deserialize)]
pub struct RpcConfig {
    pub url: String,
    #[serde(default = "default_commitment")]
    pub commitment: CommitmentLevel,
    pub keypair_path: String,
}

impl RpcConfig {
    pub fn commitment_config(&self) -> CommitmentConfig {
        CommitmentConfig {
            commitment: self.commitment,
        }
    }
}

fn default_commitment() -> CommitmentLevel {
    CommitmentLevel::Confirmed
}

/// Shape of the tree to create
///
/// A canopy as deep as the tree lets burns omit proofs entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeConfig {
    pub max_depth: u32,
    pub max_buffer_size: u32,
    pub canopy_depth: u32,
    #[serde(default)]
    pub public: Option<bool>,
}

/// Leaves to mint and the metadata they share
#[derive(Debug, Clone, Deserialize)]
pub struct MintConfig {
    pub num_items: u32,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    #[serde(default)]
    pub seller_fee_basis_points: u16,
}

/// Transaction size limits used when splitting burns
///
/// # Fields
/// - `max_transaction_size`: serialized bytes per transaction (packet size)
/// - `max_instructions`: optional cap on instructions per transaction
#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    #[serde(default = "default_max_transaction_size")]
    pub max_transaction_size: usize,
    #[serde(default)]
    pub max_instructions: Option<usize>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_transaction_size: default_max_transaction_size(),
            max_instructions: None,
        }
    }
}

fn default_max_transaction_size() -> usize {
    PACKET_DATA_SIZE
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Returns
    /// * `Ok(Config)` if the file was successfully loaded and parsed
    /// * `Err` if the file couldn't be read or the TOML is invalid
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
