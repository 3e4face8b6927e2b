//! Compressed NFT burn demo: provisions a Bubblegum tree and lookup table,
//! mints a batch of leaves and burns them, packing the burns into as few
//! transactions as the packet size allows.

pub mod types; // Operations, limits, transaction groups and submission reports.
pub mod batch; // Size-aware, order-preserving splitting of operations into transactions.
pub mod bubblegum; // Instruction builders and tree account helpers for compressed NFTs.
pub mod chain; // RPC access behind an async trait.
pub mod context; // Payer and chain client passed to every call.
pub mod lookup_table; // Address lookup table creation.
pub mod submit; // Concurrent submission with per-group results.
pub mod pipeline; // The end-to-end create, mint and burn flow.
pub mod config; // Defines and loads configuration.

// Re-export commonly used types and configurations for easier access.
pub use types::*;
pub use config::Config;
pub use context::Context;
pub use pipeline::BurnPipeline;
