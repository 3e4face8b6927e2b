use crate::{batch::compact_len, bubblegum::MetadataArgs, chain::ChainError, config::BatchConfig};
use chrono::{DateTime, Utc};
use solana_sdk::{
    address_lookup_table::AddressLookupTableAccount, instruction::Instruction,
    packet::PACKET_DATA_SIZE, signature::Signature,
};

/// A single unit of work destined for a transaction.
pub trait Operation {
    /// Bytes this operation contributes to a serialized transaction.
    fn serialized_size(&self) -> usize;
}

/// Size of the compiled form of an instruction inside a message:
/// program index, account indexes and data, each list length-prefixed.
/// Account keys themselves are charged to the message, not the instruction.
impl Operation for Instruction {
    fn serialized_size(&self) -> usize {
        1 + compact_len(self.accounts.len())
            + self.accounts.len()
            + compact_len(self.data.len())
            + self.data.len()
    }
}

/// Per-transaction capacity limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxLimit {
    /// Maximum serialized transaction size in bytes
    pub max_bytes: usize,
    /// Optional cap on instructions per transaction
    pub max_instructions: Option<usize>,
}

impl TxLimit {
    pub fn new(max_bytes: usize) -> Self {
        Self {
            max_bytes,
            max_instructions: None,
        }
    }

    pub fn with_max_instructions(mut self, max_instructions: usize) -> Self {
        self.max_instructions = Some(max_instructions);
        self
    }

    /// Whether a transaction of `size` bytes holding `count` operations fits.
    pub fn admits(&self, size: usize, count: usize) -> bool {
        size <= self.max_bytes && self.max_instructions.is_none_or(|max| count <= max)
    }
}

impl Default for TxLimit {
    fn default() -> Self {
        Self::new(PACKET_DATA_SIZE)
    }
}

impl From<&BatchConfig> for TxLimit {
    fn from(config: &BatchConfig) -> Self {
        Self {
            max_bytes: config.max_transaction_size,
            max_instructions: config.max_instructions,
        }
    }
}

/// An ordered, non-empty run of operations that is sent as one transaction
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionGroup<O> {
    pub operations: Vec<O>,
    pub lookup_tables: Vec<AddressLookupTableAccount>,
    /// Serialized size as measured when the group was sealed
    pub size: usize,
}

impl<O> TransactionGroup<O> {
    pub fn new(
        operations: Vec<O>,
        lookup_tables: Vec<AddressLookupTableAccount>,
        size: usize,
    ) -> Self {
        Self {
            operations,
            lookup_tables,
            size,
        }
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// A leaf minted into the tree, kept so it can be burned later
#[derive(Debug, Clone, PartialEq)]
pub struct MintedAsset {
    pub metadata: MetadataArgs,
    /// Leaf index; equals the leaf nonce for a tree that only ever minted
    pub leaf_index: u32,
}

/// Confirmation result for one submitted group
#[derive(Debug)]
pub struct GroupOutcome {
    pub index: usize,
    pub operation_count: usize,
    pub completed_at: DateTime<Utc>,
    pub result: Result<Signature, ChainError>,
}

impl GroupOutcome {
    pub fn is_confirmed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-group results of a concurrent submission, in group order
#[derive(Debug, Default)]
pub struct SubmissionReport {
    pub outcomes: Vec<GroupOutcome>,
}

impl SubmissionReport {
    pub fn confirmed(&self) -> impl Iterator<Item = (usize, &Signature)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|sig| (o.index, sig)))
    }

    pub fn failed(&self) -> impl Iterator<Item = (usize, &ChainError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|err| (o.index, err)))
    }

    /// True when every group confirmed
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(GroupOutcome::is_confirmed)
    }
}
