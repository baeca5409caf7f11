//! Transfer orchestration
//!
//! The core flow: validate input, fetch a fresh blockhash, build and
//! sign the transfer, submit it, and report the outcome through the
//! notification sink. Every attempt runs as one awaited sequence on its
//! own data; nothing is retried, and a failed attempt is restarted from
//! the top by the user.

use crate::amount::{self, format_sol};
use crate::ledger::{LedgerRpc, SendOptions};
use crate::notify::{NotificationSink, Severity};
use crate::session::Session;
use crate::wallet::{Identity, WalletSigner};
use crate::{Error, Result};
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_sdk::{
    message::{v0, VersionedMessage},
    pubkey::Pubkey,
    signature::Signature,
    system_instruction,
};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

/// Drives identity resolution, balance queries, and transfer attempts
/// for one session.
pub struct TransferRunner {
    rpc: Arc<dyn LedgerRpc>,
    sink: Arc<dyn NotificationSink>,
}

impl TransferRunner {
    pub fn new(rpc: Arc<dyn LedgerRpc>, sink: Arc<dyn NotificationSink>) -> Self {
        Self { rpc, sink }
    }

    /// Resolve the session identity from imported secret-key text.
    ///
    /// On failure the previous identity (if any) stays resolved.
    pub fn import_identity(&self, session: &mut Session, input: &str) -> Result<Pubkey> {
        match Identity::from_json_bytes(input) {
            Ok(identity) => {
                let pubkey = identity.pubkey();
                session.replace_identity(identity);
                info!(%pubkey, "imported account");
                self.sink
                    .notify(&format!("imported account {pubkey}"), Severity::Success);
                Ok(pubkey)
            }
            Err(e) => {
                warn!(error = %e, "secret key import rejected");
                self.sink.notify("invalid secret key", Severity::Error);
                Err(e)
            }
        }
    }

    /// Resolve the session identity from a connected wallet service.
    /// The wallet's own chrome announces the connection; this only
    /// swaps the session state over.
    pub fn connect_wallet(&self, session: &mut Session, wallet: Arc<dyn WalletSigner>) -> Pubkey {
        let identity = Identity::from_wallet(wallet);
        let pubkey = identity.pubkey();
        session.replace_identity(identity);
        info!(%pubkey, "connected wallet");
        pubkey
    }

    /// One balance read for the resolved identity.
    ///
    /// Short-circuits without any network call when nothing is resolved.
    /// The fetched value is display state only; a transfer never checks
    /// it.
    pub async fn query_balance(&self, session: &mut Session) -> Result<u64> {
        let Some(pubkey) = session.pubkey() else {
            self.sink.notify("no account resolved", Severity::Error);
            return Err(Error::IdentityNotResolved);
        };

        let lamports = match self.rpc.balance(&pubkey).await {
            Ok(lamports) => lamports,
            Err(e) => {
                warn!(error = %e, "balance query failed");
                self.sink.notify("balance query failed", Severity::Error);
                return Err(Error::Network(e));
            }
        };

        session.set_balance(lamports);
        info!(%pubkey, lamports, "balance fetched");
        self.sink.notify(
            &format!("{pubkey} has a balance of {} SOL", format_sol(lamports)),
            Severity::Success,
        );
        Ok(lamports)
    }

    /// Submit one native transfer of `amount` SOL to `recipient`.
    ///
    /// A fresh blockhash is fetched for every attempt. The recipient
    /// string is decoded only after that fetch, where the transaction is
    /// built. Submission failures are surfaced through the sink as a
    /// generic failure and re-raised with the underlying cause attached.
    pub async fn transfer(
        &self,
        session: &Session,
        recipient: &str,
        amount: &str,
    ) -> Result<Signature> {
        let Some(identity) = session.identity() else {
            self.sink.notify("no account resolved", Severity::Error);
            return Err(Error::IdentityNotResolved);
        };

        let lamports = match amount::parse_lamports(amount) {
            Ok(0) => {
                self.sink
                    .notify("enter an amount greater than zero", Severity::Error);
                return Err(Error::InvalidAmount("amount must be greater than zero".into()));
            }
            Ok(lamports) => lamports,
            Err(e) => {
                self.sink.notify("enter a valid amount", Severity::Error);
                return Err(e);
            }
        };

        let from = identity.pubkey();
        info!(%from, recipient, amount, "transfer requested");
        self.sink
            .notify(&format!("transfer to {recipient} {amount} SOL"), Severity::Info);
        self.sink.notify("pending...", Severity::Info);

        let latest = match self.rpc.latest_blockhash().await {
            Ok(latest) => latest,
            Err(e) => {
                warn!(error = %e, "blockhash fetch failed");
                self.sink
                    .notify("failed to fetch a recent blockhash", Severity::Error);
                return Err(Error::Network(e));
            }
        };
        self.sink.notify(
            &format!(
                "fetched latest blockhash, last valid block height {}",
                latest.last_valid_block_height
            ),
            Severity::Info,
        );

        let to = match Pubkey::from_str(recipient) {
            Ok(to) => to,
            Err(e) => {
                self.sink.notify("invalid recipient address", Severity::Error);
                return Err(Error::InvalidRecipientAddress(format!("{recipient:?}: {e}")));
            }
        };

        let instruction = system_instruction::transfer(&from, &to, lamports);
        let submitted = match v0::Message::try_compile(&from, &[instruction], &[], latest.blockhash)
        {
            Ok(message) => {
                identity
                    .sign_and_submit(
                        VersionedMessage::V0(message),
                        self.rpc.as_ref(),
                        SendOptions {
                            min_context_slot: latest.min_context_slot,
                        },
                    )
                    .await
            }
            Err(e) => Err(ClientError::from(ClientErrorKind::Custom(e.to_string()))),
        };

        match submitted {
            Ok(signature) => {
                info!(%signature, "transfer submitted");
                self.sink.notify(
                    &format!("transfer succeeded, signature {signature}"),
                    Severity::Success,
                );
                Ok(signature)
            }
            Err(e) => {
                warn!(error = %e, "transfer failed");
                self.sink.notify("transfer failed", Severity::Error);
                Err(Error::TransferFailed(e))
            }
        }
    }
}
