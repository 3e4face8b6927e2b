//! Leaf metadata as Bubblegum serializes it, plus the two hashes a burn must
//! present to prove it knows the leaf contents.

use borsh::BorshSerialize;
use solana_sdk::{keccak, pubkey::Pubkey};

#[derive(BorshSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStandard {
    NonFungible,
    FungibleAsset,
    Fungible,
    NonFungibleEdition,
}

#[derive(BorshSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenProgramVersion {
    Original,
    Token2022,
}

#[derive(BorshSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseMethod {
    Burn,
    Multiple,
    Single,
}

#[derive(BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct Uses {
    pub use_method: UseMethod,
    pub remaining: u64,
    pub total: u64,
}

#[derive(BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub verified: bool,
    pub key: [u8; 32],
}

#[derive(BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct Creator {
    pub address: [u8; 32],
    pub verified: bool,
    /// Percentage of royalties, all creators must sum to 100
    pub share: u8,
}

impl Creator {
    pub fn new(address: Pubkey, share: u8) -> Self {
        Self {
            address: address.to_bytes(),
            verified: false,
            share,
        }
    }
}

/// Arguments of `mint_v1`, field order matches the on-chain layout.
#[derive(BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct MetadataArgs {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub primary_sale_happened: bool,
    pub is_mutable: bool,
    pub edition_nonce: Option<u8>,
    pub token_standard: Option<TokenStandard>,
    pub collection: Option<Collection>,
    pub uses: Option<Uses>,
    pub token_program_version: TokenProgramVersion,
    pub creators: Vec<Creator>,
}

impl MetadataArgs {
    /// Mutable, unverified-creator NFT metadata with a single creator.
    pub fn non_fungible(
        name: impl Into<String>,
        symbol: impl Into<String>,
        uri: impl Into<String>,
        seller_fee_basis_points: u16,
        creator: Pubkey,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            uri: uri.into(),
            seller_fee_basis_points,
            primary_sale_happened: false,
            is_mutable: true,
            edition_nonce: None,
            token_standard: Some(TokenStandard::NonFungible),
            collection: None,
            uses: None,
            token_program_version: TokenProgramVersion::Original,
            creators: vec![Creator::new(creator, 100)],
        }
    }
}

/// keccak(keccak(borsh(metadata)) || seller_fee_basis_points as u16 LE)
pub fn data_hash(metadata: &MetadataArgs) -> std::io::Result<[u8; 32]> {
    let args = metadata.try_to_vec()?;
    let args_hash = keccak::hashv(&[args.as_slice()]).to_bytes();
    let fee = metadata.seller_fee_basis_points.to_le_bytes();
    Ok(keccak::hashv(&[args_hash.as_slice(), fee.as_slice()]).to_bytes())
}

/// keccak over every creator as `address || verified || share`.
pub fn creator_hash(creators: &[Creator]) -> [u8; 32] {
    let bytes: Vec<u8> = creators
        .iter()
        .flat_map(|c| {
            c.address
                .iter()
                .copied()
                .chain([u8::from(c.verified), c.share])
        })
        .collect();
    keccak::hashv(&[bytes.as_slice()]).to_bytes()
}
