//! Burn Pipeline Module
//!
//! The end-to-end demo flow, run step by step against a `Context`:
//! 1. Create a tree whose canopy covers its full depth
//! 2. Create a lookup table for the accounts every burn shares
//! 3. Mint the configured number of leaves
//! 4. Build proof-less burns, split them by transaction size
//! 5. Submit every group concurrently and report per group

pub mod orchestrator;

pub use orchestrator::{BurnPipeline, burn_instructions};
