//! Address Lookup Table Module
//!
//! Builds the create-and-extend instruction pair for a new lookup table and
//! the `AddressLookupTableAccount` reference transactions compile against.

use solana_sdk::{
    address_lookup_table::{
        AddressLookupTableAccount,
        instruction::{create_lookup_table, extend_lookup_table},
    },
    clock::Slot,
    instruction::Instruction,
    pubkey::Pubkey,
};

/// Instructions that create a lookup table and fill it with `addresses`,
/// plus the table reference to attach once the transaction confirms.
///
/// The table address derives from `authority` and `recent_slot`, which must
/// be a recent slot the cluster still remembers.
pub fn create_lookup_table_instructions(
    authority: Pubkey,
    payer: Pubkey,
    recent_slot: Slot,
    addresses: Vec<Pubkey>,
) -> (Vec<Instruction>, AddressLookupTableAccount) {
    let (create, key) = create_lookup_table(authority, payer, recent_slot);
    let extend = extend_lookup_table(key, authority, Some(payer), addresses.clone());

    (vec![create, extend], AddressLookupTableAccount { key, addresses })
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::address_lookup_table::program::ID as LOOKUP_TABLE_PROGRAM_ID;

    #[test]
    fn test_table_reference_matches_created_table() {
        let authority = Pubkey::new_unique();
        let addresses = vec![Pubkey::new_unique(), Pubkey::new_unique()];
        let (ixs, table) = create_lookup_table_instructions(authority, authority, 42, addresses.clone());

        assert_eq!(ixs.len(), 2);
        assert!(ixs.iter().all(|ix| ix.program_id == LOOKUP_TABLE_PROGRAM_ID));
        assert_eq!(ixs[0].accounts[0].pubkey, table.key);
        assert_eq!(ixs[1].accounts[0].pubkey, table.key);
        assert_eq!(table.addresses, addresses);
    }
}
