//! Burn Pipeline Orchestrator
//!
//! Drives the demo against a live cluster (or any `ChainClient`). Every step
//! but the last is sequential; the final burn submission fans out one task
//! per transaction group.

use crate::{
    Config, Context, MintedAsset, SubmissionReport, TxLimit,
    batch::{MessageSizeModel, fits_in_one_transaction, split},
    bubblegum::{
        self, BurnArgs, MetadataArgs, SPL_ACCOUNT_COMPRESSION_PROGRAM_ID, SPL_NOOP_PROGRAM_ID,
        TreeParams, creator_hash, current_root, data_hash,
    },
    lookup_table::create_lookup_table_instructions,
    submit::submit_groups,
};
use anyhow::{Context as _, bail};
use solana_sdk::{
    address_lookup_table::AddressLookupTableAccount,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    system_instruction, system_program,
};
use tracing::{debug, info};

/// End-to-end create, mint and burn flow
pub struct BurnPipeline {
    ctx: Context,
    config: Config,
}

impl BurnPipeline {
    pub fn new(ctx: Context, config: Config) -> Self {
        Self { ctx, config }
    }

    pub fn tree_params(&self) -> TreeParams {
        TreeParams {
            max_depth: self.config.tree.max_depth,
            max_buffer_size: self.config.tree.max_buffer_size,
            canopy_depth: self.config.tree.canopy_depth,
        }
    }

    /// Run the whole flow.
    ///
    /// # Returns
    /// * `Ok(report)` once every burn group has confirmed or failed; the
    ///   report may contain failed groups
    /// * `Err` if any step before burn submission fails
    pub async fn run(&self) -> anyhow::Result<SubmissionReport> {
        let params = self.tree_params();
        params.validate()?;
        if u64::from(self.config.mint.num_items) > params.capacity() {
            bail!(
                "{} items do not fit a tree of depth {}",
                self.config.mint.num_items,
                params.max_depth
            );
        }

        let merkle_tree = Keypair::new();
        let recent_slot = self.ctx.client().get_slot().await?;

        info!("Creating tree {}...", merkle_tree.pubkey());
        let signature = self.create_tree(&merkle_tree).await?;
        info!("Tree created: {}", signature);

        info!("Creating lookup table...");
        let (signature, lookup_table) = self
            .create_lookup_table(merkle_tree.pubkey(), recent_slot)
            .await?;
        info!("Lookup table {} created: {}", lookup_table.key, signature);

        let assets = self.mint_all(merkle_tree.pubkey()).await?;

        let tree_account = self
            .ctx
            .client()
            .get_account(&merkle_tree.pubkey())
            .await?;
        if tree_account.owner != SPL_ACCOUNT_COMPRESSION_PROGRAM_ID {
            bail!(
                "tree account {} is owned by {}, not the compression program",
                merkle_tree.pubkey(),
                tree_account.owner
            );
        }
        let root = current_root(&tree_account.data).context("reading tree root")?;
        debug!("Current tree root: {:?}", root);

        let burns = burn_instructions(
            merkle_tree.pubkey(),
            self.ctx.payer_pubkey(),
            root,
            &assets,
        )?;

        let limit = TxLimit::from(&self.config.batch);
        let model = MessageSizeModel::new(self.ctx.payer_pubkey());
        let tables = std::slice::from_ref(&lookup_table);

        info!("{} burn instructions", burns.len());
        info!(
            "Fits in one transaction: {}",
            fits_in_one_transaction(&burns, &limit, tables, &model)?
        );
        let groups = split(&burns, &limit, tables, &model)?;
        info!("Burns split into {} transactions", groups.len());

        info!("Burning...");
        let report = submit_groups(&self.ctx, groups).await?;
        info!(
            "Burn finished: {} confirmed, {} failed",
            report.confirmed().count(),
            report.failed().count()
        );

        Ok(report)
    }

    /// Allocate the tree account and initialize its config in one transaction.
    async fn create_tree(&self, merkle_tree: &Keypair) -> anyhow::Result<Signature> {
        let params = self.tree_params();
        let payer = self.ctx.payer_pubkey();
        let space = params.account_size();
        let lamports = self
            .ctx
            .client()
            .get_minimum_balance_for_rent_exemption(space)
            .await?;
        debug!("Tree account: {} bytes, {} lamports", space, lamports);

        let instructions = [
            system_instruction::create_account(
                &payer,
                &merkle_tree.pubkey(),
                lamports,
                space as u64,
                &SPL_ACCOUNT_COMPRESSION_PROGRAM_ID,
            ),
            bubblegum::create_tree(
                merkle_tree.pubkey(),
                payer,
                payer,
                params.max_depth,
                params.max_buffer_size,
                self.config.tree.public,
            ),
        ];

        Ok(self
            .ctx
            .send_instructions(&instructions, &[merkle_tree])
            .await?)
    }

    /// Create a lookup table holding the accounts every burn references.
    async fn create_lookup_table(
        &self,
        merkle_tree: Pubkey,
        recent_slot: u64,
    ) -> anyhow::Result<(Signature, AddressLookupTableAccount)> {
        let payer = self.ctx.payer_pubkey();
        let addresses = vec![
            payer,
            merkle_tree,
            system_program::ID,
            SPL_ACCOUNT_COMPRESSION_PROGRAM_ID,
            SPL_NOOP_PROGRAM_ID,
        ];
        let (instructions, table) =
            create_lookup_table_instructions(payer, payer, recent_slot, addresses);

        let signature = self.ctx.send_instructions(&instructions, &[]).await?;
        Ok((signature, table))
    }

    /// Mint the configured leaves one transaction at a time, in index order.
    async fn mint_all(&self, merkle_tree: Pubkey) -> anyhow::Result<Vec<MintedAsset>> {
        let payer = self.ctx.payer_pubkey();
        let mint = &self.config.mint;
        let mut assets = Vec::with_capacity(mint.num_items as usize);

        for leaf_index in 0..mint.num_items {
            info!("Minting {}/{}...", leaf_index + 1, mint.num_items);
            let metadata = MetadataArgs::non_fungible(
                format!("{} #{}", mint.name, leaf_index),
                mint.symbol.clone(),
                mint.uri.clone(),
                mint.seller_fee_basis_points,
                payer,
            );
            let instruction =
                bubblegum::mint_v1(merkle_tree, payer, payer, payer, payer, &metadata)?;
            let signature = self.ctx.send_instructions(&[instruction], &[]).await?;
            debug!("Leaf {} minted: {}", leaf_index, signature);

            assets.push(MintedAsset {
                metadata,
                leaf_index,
            });
        }

        Ok(assets)
    }
}

/// One proof-less burn per asset, in asset order, all against `root`.
///
/// Nonce and index are both the leaf index, which holds for a tree that has
/// only ever had leaves appended.
pub fn burn_instructions(
    merkle_tree: Pubkey,
    owner: Pubkey,
    root: [u8; 32],
    assets: &[MintedAsset],
) -> std::io::Result<Vec<Instruction>> {
    assets
        .iter()
        .map(|asset| -> std::io::Result<Instruction> {
            let args = BurnArgs {
                root,
                data_hash: data_hash(&asset.metadata)?,
                creator_hash: creator_hash(&asset.metadata.creators),
                nonce: u64::from(asset.leaf_index),
                index: asset.leaf_index,
            };
            Ok(bubblegum::burn(merkle_tree, owner, owner, &args, &[]))
        })
        .collect()
}
