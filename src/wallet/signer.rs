//! Identity resolution and transaction signing
//!
//! SECURITY: this is the ONLY place where imported key material exists.
//! - Secret bytes are decoded here and immediately wrapped in the SDK
//!   keypair; the intermediate buffer is zeroized on every path
//! - Keys are never serialized and never logged
//! - In connected-wallet mode signing is delegated and no secret bytes
//!   ever enter this process

use crate::ledger::{LedgerRpc, SendOptions};
use crate::{Error, Result};
use async_trait::async_trait;
use solana_client::client_error::ClientError;
use solana_sdk::{
    message::VersionedMessage,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::VersionedTransaction,
};
use std::fmt;
use std::sync::Arc;
use zeroize::Zeroize;

/// External signer provided by a connected wallet service.
///
/// The wallet keeps the keys; this process hands it a compiled message
/// and gets back the signature of the submitted transaction. Signing and
/// submission are a single delegated call.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// Active public key of the connected wallet.
    fn pubkey(&self) -> Pubkey;

    /// Sign the message and submit the resulting transaction in one call.
    async fn sign_and_send(
        &self,
        message: VersionedMessage,
        rpc: &dyn LedgerRpc,
        options: SendOptions,
    ) -> Result<Signature, ClientError>;
}

/// How a session can authorize transactions.
pub enum SigningCapability {
    /// Keypair imported into this process for the session.
    Local(Keypair),
    /// Connected wallet service holding the keys elsewhere.
    External(Arc<dyn WalletSigner>),
}

/// A resolved key-holding identity: public address plus the capability
/// to sign for it. Cannot exist without a signing capability.
pub struct Identity {
    pubkey: Pubkey,
    capability: SigningCapability,
}

impl Identity {
    /// Resolve an identity from a JSON-encoded array of secret key bytes
    /// (the key-file encoding: 64 bytes, secret half then public half).
    ///
    /// Anything that is not valid JSON, not a byte array, or not a valid
    /// ed25519 keypair encoding is rejected as a credential-format error.
    pub fn from_json_bytes(input: &str) -> Result<Self> {
        let mut bytes: Vec<u8> = serde_json::from_str(input)
            .map_err(|e| Error::InvalidCredentialFormat(format!("not a JSON byte array: {e}")))?;

        let keypair = Keypair::from_bytes(&bytes);
        bytes.zeroize();
        let keypair = keypair
            .map_err(|e| Error::InvalidCredentialFormat(format!("not an ed25519 keypair: {e}")))?;

        Ok(Self {
            pubkey: keypair.pubkey(),
            capability: SigningCapability::Local(keypair),
        })
    }

    /// Resolve an identity from an already-connected wallet service.
    pub fn from_wallet(wallet: Arc<dyn WalletSigner>) -> Self {
        Self {
            pubkey: wallet.pubkey(),
            capability: SigningCapability::External(wallet),
        }
    }

    /// Public address (safe to share and display).
    pub fn pubkey(&self) -> Pubkey {
        self.pubkey
    }

    /// Produce a signed, submitted transaction from a compiled message.
    ///
    /// Local identities sign here and hand the transaction to the ledger;
    /// connected wallets sign and submit in one delegated call. Either
    /// way the minimum-context constraint travels with the submission.
    /// Callers never branch on which variant is active.
    pub async fn sign_and_submit(
        &self,
        message: VersionedMessage,
        rpc: &dyn LedgerRpc,
        options: SendOptions,
    ) -> Result<Signature, ClientError> {
        match &self.capability {
            SigningCapability::Local(keypair) => {
                let transaction = VersionedTransaction::try_new(message, &[keypair])?;
                rpc.submit(&transaction, options).await
            }
            SigningCapability::External(wallet) => {
                wallet.sign_and_send(message, rpc, options).await
            }
        }
    }
}

// Implement Debug manually to avoid exposing the keypair
impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let capability = match &self.capability {
            SigningCapability::Local(_) => "local [REDACTED]",
            SigningCapability::External(_) => "connected wallet",
        };
        f.debug_struct("Identity")
            .field("pubkey", &self.pubkey)
            .field("capability", &capability)
            .finish()
    }
}
