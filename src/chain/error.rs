use solana_client::client_error::ClientError;
use solana_sdk::{message::CompileError, pubkey::Pubkey, signer::SignerError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("ClientError: {0}")]
    Client(#[from] Box<ClientError>),

    #[error("SignerError: {0}")]
    Signer(#[from] SignerError),

    #[error("CompileError: {0}")]
    Compile(#[from] CompileError),

    #[error("Account not found: {0}")]
    AccountNotFound(Pubkey),

    #[error("Submission task failed: {0}")]
    Task(String),
}

impl From<ClientError> for ChainError {
    fn from(err: ClientError) -> Self {
        ChainError::Client(Box::new(err))
    }
}
