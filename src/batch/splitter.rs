//! Greedy Transaction Splitter
//!
//! Packs operations into transactions strictly in input order. Operations
//! may depend on each other (e.g. burns against prior tree state), so the
//! packing never reorders: it is bin packing restricted to a sequence.

use super::{BatchError, SizeModel};
use crate::{TransactionGroup, TxLimit};
use solana_sdk::address_lookup_table::AddressLookupTableAccount;
use tracing::debug;

/// Split `operations` into the fewest ordered groups the greedy policy
/// allows.
///
/// Each operation is appended to the current group if the group, measured
/// by `model` with `lookup_tables` attached, still fits `limit`. Otherwise
/// the current group is sealed and a new one is started with that
/// operation.
///
/// # Errors
/// * `EmptyInput` if `operations` is empty
/// * `ZeroInstructionCap` if `limit` allows no instructions at all
/// * `SizeExceeded` with the index of the first operation that does not
///   fit even in a transaction of its own
/// * `Compile` if the model cannot measure a group
pub fn split<O, M>(
    operations: &[O],
    limit: &TxLimit,
    lookup_tables: &[AddressLookupTableAccount],
    model: &M,
) -> Result<Vec<TransactionGroup<O>>, BatchError>
where
    O: Clone,
    M: SizeModel<O> + ?Sized,
{
    check_input(operations, limit)?;

    let mut groups = Vec::new();
    let mut current: Vec<O> = Vec::new();
    let mut current_size = 0;

    for (index, operation) in operations.iter().enumerate() {
        current.push(operation.clone());
        let size = model.transaction_size(&current, lookup_tables)?;
        if limit.admits(size, current.len()) {
            current_size = size;
            continue;
        }
        current.pop();

        let alone = model.transaction_size(std::slice::from_ref(operation), lookup_tables)?;
        if !limit.admits(alone, 1) {
            return Err(BatchError::SizeExceeded {
                index,
                size: alone,
                limit: limit.max_bytes,
            });
        }

        if !current.is_empty() {
            debug!(
                "Sealing group {} with {} operations ({} / {} bytes)",
                groups.len(),
                current.len(),
                current_size,
                limit.max_bytes
            );
            groups.push(TransactionGroup::new(
                std::mem::take(&mut current),
                lookup_tables.to_vec(),
                current_size,
            ));
        }
        current.push(operation.clone());
        current_size = alone;
    }

    debug!(
        "Sealing group {} with {} operations ({} / {} bytes)",
        groups.len(),
        current.len(),
        current_size,
        limit.max_bytes
    );
    groups.push(TransactionGroup::new(
        current,
        lookup_tables.to_vec(),
        current_size,
    ));

    Ok(groups)
}

/// Whether all of `operations` fit in a single transaction.
pub fn fits_in_one_transaction<O, M>(
    operations: &[O],
    limit: &TxLimit,
    lookup_tables: &[AddressLookupTableAccount],
    model: &M,
) -> Result<bool, BatchError>
where
    M: SizeModel<O> + ?Sized,
{
    check_input(operations, limit)?;
    let size = model.transaction_size(operations, lookup_tables)?;
    Ok(limit.admits(size, operations.len()))
}

fn check_input<O>(operations: &[O], limit: &TxLimit) -> Result<(), BatchError> {
    if operations.is_empty() {
        return Err(BatchError::EmptyInput);
    }
    if limit.max_instructions == Some(0) {
        return Err(BatchError::ZeroInstructionCap);
    }
    Ok(())
}
