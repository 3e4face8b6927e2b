//! Transaction Batching Module
//!
//! Splits an ordered run of operations into as few transactions as the
//! network's size limit allows, without reordering:
//! - `split`: greedy left-to-right grouping
//! - `SizeModel`: how a candidate group is measured (linear estimate or
//!   an exact compiled v0 message)

mod error;
mod size;
mod splitter;


pub use error::BatchError;
pub(crate) use size::compact_len;
pub use size::{LinearSizeModel, MessageSizeModel, SizeModel};
pub use splitter::{fits_in_one_transaction, split};
