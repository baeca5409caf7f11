//! Session-scoped wallet state
//!
//! One `Session` holds the mutable state a shell displays: the resolved
//! identity and the last fetched balance. State is created on resolve,
//! overwritten wholesale on re-resolve, and cleared on disconnect; no
//! merging ever happens.

use crate::wallet::Identity;
use solana_sdk::pubkey::Pubkey;

#[derive(Debug, Default)]
pub struct Session {
    identity: Option<Identity>,
    balance: Option<u64>,
}

impl Session {
    /// A session with nothing resolved.
    pub fn new() -> Self {
        Self::default()
    }

    /// The resolved identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Public address of the resolved identity. `None` means no identity
    /// is resolved.
    pub fn pubkey(&self) -> Option<Pubkey> {
        self.identity.as_ref().map(Identity::pubkey)
    }

    /// Last fetched balance in lamports. Display-only and possibly stale;
    /// never consulted before a transfer.
    pub fn balance(&self) -> Option<u64> {
        self.balance
    }

    /// Drop identity and balance (wallet disconnect / session end). The
    /// dropped identity takes its key material with it.
    pub fn clear(&mut self) {
        self.identity = None;
        self.balance = None;
    }

    /// Replace the resolved identity. The previous identity, if any, is
    /// dropped along with its key material.
    pub(crate) fn replace_identity(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }

    pub(crate) fn set_balance(&mut self, lamports: u64) {
        self.balance = Some(lamports);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::Keypair;
    use solana_sdk::signer::Signer;

    fn identity() -> (Identity, Pubkey) {
        let keypair = Keypair::new();
        let input = serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap();
        (Identity::from_json_bytes(&input).unwrap(), keypair.pubkey())
    }

    #[test]
    fn starts_unresolved() {
        let session = Session::new();
        assert!(session.identity().is_none());
        assert!(session.pubkey().is_none());
        assert!(session.balance().is_none());
    }

    #[test]
    fn replace_overwrites_wholesale() {
        let mut session = Session::new();
        let (first, first_pubkey) = identity();
        let (second, second_pubkey) = identity();

        session.replace_identity(first);
        assert_eq!(session.pubkey(), Some(first_pubkey));

        session.replace_identity(second);
        assert_eq!(session.pubkey(), Some(second_pubkey));
    }

    #[test]
    fn clear_drops_everything() {
        let mut session = Session::new();
        let (identity, _) = identity();
        session.replace_identity(identity);
        session.set_balance(42);

        session.clear();
        assert!(session.identity().is_none());
        assert!(session.balance().is_none());
    }
}
