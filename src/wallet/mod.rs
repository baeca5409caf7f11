//! Session identity and signing
//!
//! Key material is confined to this module. Imported secrets are decoded
//! here, held only inside the resulting keypair, and exposed solely
//! through the signing capability; connected wallets never place secret
//! material in this process at all.

mod signer;

pub use signer::{Identity, SigningCapability, WalletSigner};
