//! Chain Access Module
//!
//! The RPC calls the burn flow needs, behind an async trait so that
//! submission can run against a live cluster or an in-memory stand-in.

mod client;
mod error;

pub use client::{ChainClient, RpcChainClient};
pub use error::ChainError;
