//! Tests for instruction builders, hashing and tree account layout

#[cfg(test)]
mod tests {
    use crate::bubblegum::{
        BUBBLEGUM_PROGRAM_ID, BurnArgs, Creator, MAX_TREE_DEPTH, MetadataArgs,
        SPL_ACCOUNT_COMPRESSION_PROGRAM_ID, TreeAccountError, TreeParams, TreeParamsError,
        anchor_discriminator, burn, create_tree, creator_hash,
        current_root, data_hash, mint_v1, tree_authority,
    };
    use solana_sdk::{keccak, pubkey::Pubkey};

    fn demo_tree() -> TreeParams {
        TreeParams {
            max_depth: 14,
            max_buffer_size: 64,
            canopy_depth: 14,
        }
    }

    /// Synthetic tree account with `root` in change log `active_index`
    fn tree_account(params: &TreeParams, active_index: u64, root: [u8; 32]) -> Vec<u8> {
        let mut data = vec![0u8; params.account_size()];
        data[0] = 1;
        data[2..6].copy_from_slice(&params.max_buffer_size.to_le_bytes());
        data[6..10].copy_from_slice(&params.max_depth.to_le_bytes());
        data[64..72].copy_from_slice(&active_index.to_le_bytes());
        data[72..80].copy_from_slice(&(params.max_buffer_size as u64).to_le_bytes());
        let change_log = 32 + params.max_depth as usize * 32 + 8;
        let offset = 80 + active_index as usize * change_log;
        data[offset..offset + 32].copy_from_slice(&root);
        data
    }

    #[test]
    fn test_account_size_with_full_canopy() {
        // header 56 + meta 24 + 64 change logs of 488 + path 488 + canopy (2^15 - 2) * 32
        assert_eq!(demo_tree().account_size(), 1_080_312);
    }

    #[test]
    fn test_account_size_without_canopy() {
        let params = TreeParams {
            canopy_depth: 0,
            ..demo_tree()
        };
        assert_eq!(params.account_size(), 31_800);
        assert_eq!(params.capacity(), 16_384);
    }

    #[test]
    fn test_current_root_reads_active_change_log() {
        let params = demo_tree();
        let root = [7u8; 32];
        let data = tree_account(&params, 2, root);

        assert_eq!(current_root(&data), Ok(root));
    }

    #[test]
    fn test_current_root_rejects_other_accounts() {
        let params = demo_tree();
        let mut data = tree_account(&params, 0, [1u8; 32]);
        data[0] = 0;
        assert_eq!(
            current_root(&data),
            Err(TreeAccountError::WrongAccountType(0))
        );

        assert!(matches!(
            current_root(&[1u8; 10]),
            Err(TreeAccountError::TooShort { len: 10, .. })
        ));
    }

    #[test]
    fn test_current_root_rejects_active_index_past_buffer() {
        let params = demo_tree();
        let mut data = tree_account(&params, 0, [1u8; 32]);
        data[64..72].copy_from_slice(&64u64.to_le_bytes());

        assert_eq!(
            current_root(&data),
            Err(TreeAccountError::ActiveIndexOutOfRange {
                active_index: 64,
                buffer_size: 64,
            })
        );
    }

    #[test]
    fn test_current_root_survives_huge_active_index() {
        let params = demo_tree();
        let mut data = tree_account(&params, 0, [1u8; 32]);
        data[64..72].copy_from_slice(&(u64::MAX - 1).to_le_bytes());
        data[72..80].copy_from_slice(&u64::MAX.to_le_bytes());

        assert!(matches!(
            current_root(&data),
            Err(TreeAccountError::TooShort { .. })
        ));
    }

    #[test]
    fn test_validate_accepts_demo_tree() {
        assert_eq!(demo_tree().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_unsupported_shapes() {
        let too_deep = TreeParams {
            max_depth: 64,
            max_buffer_size: 64,
            canopy_depth: 64,
        };
        assert_eq!(
            too_deep.validate(),
            Err(TreeParamsError::DepthTooLarge {
                depth: 64,
                max: MAX_TREE_DEPTH,
            })
        );

        let canopy_too_deep = TreeParams {
            canopy_depth: 15,
            ..demo_tree()
        };
        assert_eq!(
            canopy_too_deep.validate(),
            Err(TreeParamsError::CanopyTooDeep {
                canopy_depth: 15,
                max_depth: 14,
            })
        );
    }

    #[test]
    fn test_account_size_saturates_for_oversized_canopy() {
        let params = TreeParams {
            max_depth: 64,
            max_buffer_size: 64,
            canopy_depth: 64,
        };
        assert_eq!(params.account_size(), usize::MAX);
    }

    #[test]
    fn test_create_tree_encodes_args() {
        let tree = Pubkey::new_unique();
        let payer = Pubkey::new_unique();
        let ix = create_tree(tree, payer, payer, 14, 64, None);

        assert_eq!(ix.program_id, BUBBLEGUM_PROGRAM_ID);
        assert_eq!(&ix.data[..8], &anchor_discriminator("create_tree"));
        assert_eq!(&ix.data[8..12], &14u32.to_le_bytes());
        assert_eq!(&ix.data[12..16], &64u32.to_le_bytes());
        assert_eq!(ix.data[16], 0);
        assert_eq!(ix.data.len(), 17);
        assert_eq!(ix.accounts[0].pubkey, tree_authority(&tree));
        assert!(ix.accounts[1].is_signer);

        let public = create_tree(tree, payer, payer, 14, 64, Some(true));
        assert_eq!(&public.data[16..], &[1u8, 1]);
    }

    #[test]
    fn test_burn_layout() {
        let tree = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let args = BurnArgs {
            root: [1u8; 32],
            data_hash: [2u8; 32],
            creator_hash: [3u8; 32],
            nonce: 5,
            index: 5,
        };
        let ix = burn(tree, owner, owner, &args, &[]);

        assert_eq!(ix.data.len(), 8 + 32 * 3 + 8 + 4);
        assert_eq!(&ix.data[8..40], &[1u8; 32]);
        assert_eq!(&ix.data[104..112], &5u64.to_le_bytes());
        assert_eq!(&ix.data[112..116], &5u32.to_le_bytes());
        assert_eq!(ix.accounts.len(), 7);
        assert!(ix.accounts[1].is_signer);
        assert!(ix.accounts[3].is_writable);
        assert_eq!(ix.accounts[5].pubkey, SPL_ACCOUNT_COMPRESSION_PROGRAM_ID);

        let proof = [Pubkey::new_unique(), Pubkey::new_unique()];
        let with_proof = burn(tree, owner, owner, &args, &proof);
        assert_eq!(with_proof.accounts.len(), 9);
        assert_eq!(with_proof.accounts[8].pubkey, proof[1]);
    }

    #[test]
    fn test_mint_starts_with_discriminator() {
        let payer = Pubkey::new_unique();
        let metadata = MetadataArgs::non_fungible("cNFT #0", "CNFT", "https://example.com/0.json", 500, payer);
        let ix = mint_v1(Pubkey::new_unique(), payer, payer, payer, payer, &metadata).unwrap();

        assert_eq!(&ix.data[..8], &anchor_discriminator("mint_v1"));
        assert!(ix.data.len() > 8);
        assert_ne!(anchor_discriminator("mint_v1"), anchor_discriminator("burn"));
    }

    #[test]
    fn test_creator_hash_layout() {
        let address = Pubkey::new_unique();
        let creators = vec![Creator::new(address, 100)];

        let mut expected = address.to_bytes().to_vec();
        expected.extend_from_slice(&[0, 100]);

        assert_eq!(
            creator_hash(&creators),
            keccak::hashv(&[expected.as_slice()]).to_bytes()
        );
    }

    #[test]
    fn test_data_hash_covers_seller_fee() {
        let creator = Pubkey::new_unique();
        let a = MetadataArgs::non_fungible("cNFT #0", "CNFT", "uri", 500, creator);
        let mut b = a.clone();
        b.seller_fee_basis_points = 0;

        assert_eq!(data_hash(&a).unwrap(), data_hash(&a.clone()).unwrap());
        assert_ne!(data_hash(&a).unwrap(), data_hash(&b).unwrap());
    }
}
