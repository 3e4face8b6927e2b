//! Compressed NFT Program Module
//!
//! Instruction builders and account helpers for the Bubblegum program and
//! the SPL account-compression tree it writes to:
//! - instructions: `create_tree`, `mint_v1`, `burn`
//! - metadata: leaf metadata and the data/creator hashes burns must match
//! - tree: account sizing and current-root extraction

mod instructions;
mod metadata;
mod tree;

#[cfg(test)]
mod tests;

pub use instructions::{BurnArgs, anchor_discriminator, burn, create_tree, mint_v1};
pub use metadata::{
    Collection, Creator, MetadataArgs, TokenProgramVersion, TokenStandard, UseMethod, Uses,
    creator_hash, data_hash,
};
pub use tree::{MAX_TREE_DEPTH, TreeAccountError, TreeParams, TreeParamsError, current_root};

use solana_sdk::{pubkey, pubkey::Pubkey};

pub const BUBBLEGUM_PROGRAM_ID: Pubkey = pubkey!("BGUMAp9Gq7iTEuizy4pqaxsTyUCBK68MDfK752saRPUY");
pub const SPL_ACCOUNT_COMPRESSION_PROGRAM_ID: Pubkey =
    pubkey!("cmtDvXumGCrqC1Age74AVPhSRVXJMd8PJS91L8KbNCK");
pub const SPL_NOOP_PROGRAM_ID: Pubkey = pubkey!("noopb9bkMVfRPU8AsbpTUg8AQkHtKwMYZiFUjNRtMmV");

/// Tree config PDA owned by Bubblegum, seeded by the tree address.
pub fn tree_authority(merkle_tree: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[merkle_tree.as_ref()], &BUBBLEGUM_PROGRAM_ID).0
}
