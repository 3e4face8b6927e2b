//! Size Models
//!
//! A size model answers one question for the splitter: how many bytes would
//! a transaction holding exactly these operations occupy on the wire?

use super::BatchError;
use crate::Operation;
use solana_sdk::{
    address_lookup_table::AddressLookupTableAccount,
    hash::Hash,
    instruction::Instruction,
    message::{VersionedMessage, v0},
    pubkey::Pubkey,
    signature::SIGNATURE_BYTES,
};

/// Measures the serialized size of a candidate transaction
pub trait SizeModel<O> {
    /// Serialized size of a transaction containing `operations` in order,
    /// with `lookup_tables` attached.
    fn transaction_size(
        &self,
        operations: &[O],
        lookup_tables: &[AddressLookupTableAccount],
    ) -> Result<usize, BatchError>;
}

/// Length of a compact-u16 prefix encoding `len`
pub(crate) fn compact_len(len: usize) -> usize {
    match len {
        0..=0x7f => 1,
        0x80..=0x3fff => 2,
        _ => 3,
    }
}

/// Fixed header plus the sum of operation sizes.
///
/// Lookup-table overhead is charged once per attached table in every group,
/// whether or not the group's operations reference it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearSizeModel {
    /// Signatures, message header, static keys and blockhash
    pub header_overhead: usize,
    /// Bytes added by each attached lookup table
    pub lookup_table_overhead: usize,
}

impl LinearSizeModel {
    pub fn new(header_overhead: usize) -> Self {
        Self {
            header_overhead,
            lookup_table_overhead: 0,
        }
    }

    pub fn with_lookup_table_overhead(mut self, overhead: usize) -> Self {
        self.lookup_table_overhead = overhead;
        self
    }
}

impl<O: Operation> SizeModel<O> for LinearSizeModel {
    fn transaction_size(
        &self,
        operations: &[O],
        lookup_tables: &[AddressLookupTableAccount],
    ) -> Result<usize, BatchError> {
        let body: usize = operations.iter().map(Operation::serialized_size).sum();
        Ok(self.header_overhead + lookup_tables.len() * self.lookup_table_overhead + body)
    }
}

/// Exact wire size of a signed v0 transaction.
///
/// Compiles the operations into a v0 message for `payer` (lookup tables
/// resolve every non-signer, non-program key they contain) and adds the
/// signature array. The blockhash is a placeholder: it has fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageSizeModel {
    payer: Pubkey,
}

impl MessageSizeModel {
    pub fn new(payer: Pubkey) -> Self {
        Self { payer }
    }
}

impl SizeModel<Instruction> for MessageSizeModel {
    fn transaction_size(
        &self,
        operations: &[Instruction],
        lookup_tables: &[AddressLookupTableAccount],
    ) -> Result<usize, BatchError> {
        let message =
            v0::Message::try_compile(&self.payer, operations, lookup_tables, Hash::default())
                .map_err(|e| BatchError::Compile(e.to_string()))?;
        let signatures = usize::from(message.header.num_required_signatures);
        let message_len = VersionedMessage::V0(message).serialize().len();

        Ok(compact_len(signatures) + signatures * SIGNATURE_BYTES + message_len)
    }
}
