//! Error types for the transfer wallet core

use solana_client::client_error::ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid secret key: {0}")]
    InvalidCredentialFormat(String),

    #[error("no identity resolved")]
    IdentityNotResolved,

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid recipient address: {0}")]
    InvalidRecipientAddress(String),

    #[error("rpc request failed: {0}")]
    Network(#[from] ClientError),

    #[error("transfer failed: {0}")]
    TransferFailed(#[source] ClientError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
