//! Execution Context
//!
//! The payer identity and chain client every instruction-building and
//! submitting call works with, passed explicitly rather than held globally.

use crate::chain::{ChainClient, ChainError};
use solana_sdk::{
    address_lookup_table::AddressLookupTableAccount,
    hash::Hash,
    instruction::Instruction,
    message::{VersionedMessage, v0},
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::VersionedTransaction,
};
use std::sync::Arc;

/// Shared, read-only handles; cloning is cheap and clones can move into
/// spawned tasks.
#[derive(Clone)]
pub struct Context {
    client: Arc<dyn ChainClient>,
    payer: Arc<Keypair>,
}

impl Context {
    pub fn new(client: Arc<dyn ChainClient>, payer: Keypair) -> Self {
        Self {
            client,
            payer: Arc::new(payer),
        }
    }

    pub fn client(&self) -> &dyn ChainClient {
        self.client.as_ref()
    }

    pub fn payer_pubkey(&self) -> Pubkey {
        self.payer.pubkey()
    }

    /// Compile `instructions` into a v0 transaction paid and signed by the
    /// payer, plus any `extra_signers`.
    pub fn sign_transaction(
        &self,
        instructions: &[Instruction],
        lookup_tables: &[AddressLookupTableAccount],
        extra_signers: &[&Keypair],
        recent_blockhash: Hash,
    ) -> Result<VersionedTransaction, ChainError> {
        let message = v0::Message::try_compile(
            &self.payer.pubkey(),
            instructions,
            lookup_tables,
            recent_blockhash,
        )?;
        let mut signers: Vec<&Keypair> = Vec::with_capacity(1 + extra_signers.len());
        signers.push(&self.payer);
        signers.extend_from_slice(extra_signers);

        Ok(VersionedTransaction::try_new(
            VersionedMessage::V0(message),
            signers.as_slice(),
        )?)
    }

    /// Build, sign and confirm a single transaction.
    pub async fn send_instructions(
        &self,
        instructions: &[Instruction],
        extra_signers: &[&Keypair],
    ) -> Result<Signature, ChainError> {
        let blockhash = self.client.get_latest_blockhash().await?;
        let transaction = self.sign_transaction(instructions, &[], extra_signers, blockhash)?;
        self.client.send_and_confirm(&transaction).await
    }
}
