use super::{
    BUBBLEGUM_PROGRAM_ID, MetadataArgs, SPL_ACCOUNT_COMPRESSION_PROGRAM_ID, SPL_NOOP_PROGRAM_ID,
    tree_authority,
};
use borsh::BorshSerialize;
use solana_sdk::{
    hash::hashv,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

/// First 8 bytes of sha256("global:<name>"), prefixed to every instruction.
pub fn anchor_discriminator(name: &str) -> [u8; 8] {
    let hash = hashv(&[b"global:".as_slice(), name.as_bytes()]);
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash.to_bytes()[..8]);
    discriminator
}

/// Initialize the tree config for an already allocated tree account.
///
/// The tree account must be created in the same transaction (owned by the
/// compression program and sized by `TreeParams::account_size`) and sign it.
pub fn create_tree(
    merkle_tree: Pubkey,
    payer: Pubkey,
    tree_creator: Pubkey,
    max_depth: u32,
    max_buffer_size: u32,
    public: Option<bool>,
) -> Instruction {
    let mut data = anchor_discriminator("create_tree").to_vec();
    data.extend_from_slice(&max_depth.to_le_bytes());
    data.extend_from_slice(&max_buffer_size.to_le_bytes());
    match public {
        Some(public) => data.extend_from_slice(&[1, u8::from(public)]),
        None => data.push(0),
    }

    Instruction {
        program_id: BUBBLEGUM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(tree_authority(&merkle_tree), false),
            AccountMeta::new(merkle_tree, true),
            AccountMeta::new(payer, true),
            AccountMeta::new_readonly(tree_creator, true),
            AccountMeta::new_readonly(SPL_NOOP_PROGRAM_ID, false),
            AccountMeta::new_readonly(SPL_ACCOUNT_COMPRESSION_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    }
}

/// Append a new leaf owned by `leaf_owner`; `tree_delegate` must sign.
pub fn mint_v1(
    merkle_tree: Pubkey,
    payer: Pubkey,
    tree_delegate: Pubkey,
    leaf_owner: Pubkey,
    leaf_delegate: Pubkey,
    metadata: &MetadataArgs,
) -> std::io::Result<Instruction> {
    let mut data = anchor_discriminator("mint_v1").to_vec();
    metadata.serialize(&mut data)?;

    Ok(Instruction {
        program_id: BUBBLEGUM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(tree_authority(&merkle_tree), false),
            AccountMeta::new_readonly(leaf_owner, false),
            AccountMeta::new_readonly(leaf_delegate, false),
            AccountMeta::new(merkle_tree, false),
            AccountMeta::new(payer, true),
            AccountMeta::new_readonly(tree_delegate, true),
            AccountMeta::new_readonly(SPL_NOOP_PROGRAM_ID, false),
            AccountMeta::new_readonly(SPL_ACCOUNT_COMPRESSION_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    })
}

/// Leaf identification a burn has to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurnArgs {
    pub root: [u8; 32],
    pub data_hash: [u8; 32],
    pub creator_hash: [u8; 32],
    pub nonce: u64,
    pub index: u32,
}

/// Burn a leaf as its owner.
///
/// `proof` holds the sibling nodes the canopy does not cache; with a canopy
/// as deep as the tree it is empty.
pub fn burn(
    merkle_tree: Pubkey,
    leaf_owner: Pubkey,
    leaf_delegate: Pubkey,
    args: &BurnArgs,
    proof: &[Pubkey],
) -> Instruction {
    let mut data = anchor_discriminator("burn").to_vec();
    data.extend_from_slice(&args.root);
    data.extend_from_slice(&args.data_hash);
    data.extend_from_slice(&args.creator_hash);
    data.extend_from_slice(&args.nonce.to_le_bytes());
    data.extend_from_slice(&args.index.to_le_bytes());

    let mut accounts = vec![
        AccountMeta::new_readonly(tree_authority(&merkle_tree), false),
        AccountMeta::new_readonly(leaf_owner, true),
        AccountMeta::new_readonly(leaf_delegate, false),
        AccountMeta::new(merkle_tree, false),
        AccountMeta::new_readonly(SPL_NOOP_PROGRAM_ID, false),
        AccountMeta::new_readonly(SPL_ACCOUNT_COMPRESSION_PROGRAM_ID, false),
        AccountMeta::new_readonly(system_program::ID, false),
    ];
    accounts.extend(proof.iter().map(|node| AccountMeta::new_readonly(*node, false)));

    Instruction {
        program_id: BUBBLEGUM_PROGRAM_ID,
        accounts,
        data,
    }
}
