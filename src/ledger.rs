//! Ledger RPC boundary
//!
//! The transfer flow needs exactly three things from the cluster: an
//! account balance, a recent blockhash, and transaction submission. The
//! `LedgerRpc` trait pins those call shapes so the flow can be driven
//! against a stub; `RpcLedger` is the production implementation over the
//! nonblocking JSON-RPC client.

use async_trait::async_trait;
use solana_client::{
    client_error::ClientError,
    nonblocking::rpc_client::RpcClient,
    rpc_config::RpcSendTransactionConfig,
    rpc_request::{RpcError, RpcRequest},
    rpc_response::{Response, RpcBlockhash},
};
use solana_sdk::{
    commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey, signature::Signature,
    transaction::VersionedTransaction,
};
use std::str::FromStr;

use crate::config::RpcConfig;

/// A recent blockhash with its validity window.
///
/// Fetched fresh for every transfer attempt - the cluster rejects
/// transactions built on an expired blockhash, so one of these is never
/// reused across attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatestBlockhash {
    pub blockhash: Hash,
    pub last_valid_block_height: u64,
    /// Slot of the RPC response context. Forwarded to submission as a
    /// minimum-context constraint so the submitting node does not serve
    /// the transaction from a state older than the blockhash it carries.
    pub min_context_slot: Option<u64>,
}

/// Submission options.
#[derive(Debug, Clone, Copy, Default)]
pub struct SendOptions {
    pub min_context_slot: Option<u64>,
}

/// The three RPC call shapes the transfer flow consumes.
#[async_trait]
pub trait LedgerRpc: Send + Sync {
    /// Account balance in lamports.
    async fn balance(&self, pubkey: &Pubkey) -> Result<u64, ClientError>;

    /// Most recent blockhash at the configured commitment.
    async fn latest_blockhash(&self) -> Result<LatestBlockhash, ClientError>;

    /// Submit a signed transaction, returning its signature.
    async fn submit(
        &self,
        transaction: &VersionedTransaction,
        options: SendOptions,
    ) -> Result<Signature, ClientError>;
}

/// `LedgerRpc` over a JSON-RPC cluster endpoint.
pub struct RpcLedger {
    client: RpcClient,
    commitment: CommitmentConfig,
}

impl RpcLedger {
    pub fn new(config: &RpcConfig) -> Self {
        Self {
            client: RpcClient::new_with_commitment(
                config.url().to_string(),
                config.commitment_config(),
            ),
            commitment: config.commitment_config(),
        }
    }
}

#[async_trait]
impl LedgerRpc for RpcLedger {
    async fn balance(&self, pubkey: &Pubkey) -> Result<u64, ClientError> {
        self.client.get_balance(pubkey).await
    }

    async fn latest_blockhash(&self) -> Result<LatestBlockhash, ClientError> {
        // The convenience helper discards the response context; issue the
        // raw request so the context slot survives to submission time.
        let Response { context, value } = self
            .client
            .send::<Response<RpcBlockhash>>(
                RpcRequest::GetLatestBlockhash,
                serde_json::json!([self.commitment]),
            )
            .await?;

        let blockhash = Hash::from_str(&value.blockhash).map_err(|e| {
            ClientError::new_with_request(
                RpcError::ParseError(e.to_string()).into(),
                RpcRequest::GetLatestBlockhash,
            )
        })?;

        Ok(LatestBlockhash {
            blockhash,
            last_valid_block_height: value.last_valid_block_height,
            min_context_slot: Some(context.slot),
        })
    }

    async fn submit(
        &self,
        transaction: &VersionedTransaction,
        options: SendOptions,
    ) -> Result<Signature, ClientError> {
        self.client
            .send_transaction_with_config(
                transaction,
                RpcSendTransactionConfig {
                    preflight_commitment: Some(self.commitment.commitment),
                    min_context_slot: options.min_context_slot,
                    ..RpcSendTransactionConfig::default()
                },
            )
            .await
    }
}
