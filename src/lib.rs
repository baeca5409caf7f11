//! Native SOL transfer wallet core
//!
//! Session wallet for a single-asset transfer flow:
//! - Resolve a key-holding identity from an imported secret key or a
//!   connected wallet service
//! - Query the account balance
//! - Build, sign, and submit one native transfer, reporting progress
//!   through a notification sink
//!
//! # Security Model
//!
//! - Imported key material never leaves the wallet module and lives only
//!   for the session
//! - In connected-wallet mode no secret material enters this process
//! - Every failure is surfaced to the user and returned to the caller;
//!   submission errors keep their underlying cause attached

pub mod amount;
pub mod config;
pub mod ledger;
pub mod notify;
pub mod session;
pub mod transfer;
pub mod wallet;

mod error;

// Re-export commonly used types
pub use config::{Cluster, RpcConfig};
pub use error::{Error, Result};
pub use ledger::{LatestBlockhash, LedgerRpc, RpcLedger, SendOptions};
pub use notify::{ChannelSink, NoOpSink, Notification, NotificationSink, Severity};
pub use session::Session;
pub use transfer::TransferRunner;
pub use wallet::{Identity, SigningCapability, WalletSigner};
