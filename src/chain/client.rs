use super::ChainError;
use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    account::Account, clock::Slot, commitment_config::CommitmentConfig, hash::Hash,
    pubkey::Pubkey, signature::Signature, transaction::VersionedTransaction,
};
use std::fmt::{Debug, Formatter};

/// Network collaborator used by the burn flow.
///
/// Errors are returned as the client produced them; callers report them
/// without interpretation.
#[async_trait]
pub trait ChainClient: Send + Sync + 'static {
    async fn get_slot(&self) -> Result<Slot, ChainError>;
    async fn get_latest_blockhash(&self) -> Result<Hash, ChainError>;
    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, ChainError>;
    async fn get_account(&self, address: &Pubkey) -> Result<Account, ChainError>;

    /// Submit a signed transaction and wait for it to reach the client's
    /// commitment level.
    async fn send_and_confirm(
        &self,
        transaction: &VersionedTransaction,
    ) -> Result<Signature, ChainError>;
}

/// `ChainClient` over Solana JSON-RPC
pub struct RpcChainClient {
    client: RpcClient,
}

impl Debug for RpcChainClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RpcChainClient {{ url: {:?} }}", self.client.url())
    }
}

impl RpcChainClient {
    pub fn new<U: ToString>(url: U, commitment: CommitmentConfig) -> Self {
        Self {
            client: RpcClient::new_with_commitment(url.to_string(), commitment),
        }
    }

    pub fn url(&self) -> String {
        self.client.url()
    }
}

#[async_trait]
impl ChainClient for RpcChainClient {
    async fn get_slot(&self) -> Result<Slot, ChainError> {
        Ok(self.client.get_slot().await?)
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, ChainError> {
        Ok(self.client.get_latest_blockhash().await?)
    }

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, ChainError> {
        Ok(self
            .client
            .get_minimum_balance_for_rent_exemption(data_len)
            .await?)
    }

    async fn get_account(&self, address: &Pubkey) -> Result<Account, ChainError> {
        self.client
            .get_account_with_commitment(address, self.client.commitment())
            .await?
            .value
            .ok_or(ChainError::AccountNotFound(*address))
    }

    async fn send_and_confirm(
        &self,
        transaction: &VersionedTransaction,
    ) -> Result<Signature, ChainError> {
        Ok(self.client.send_and_confirm_transaction(transaction).await?)
    }
}
