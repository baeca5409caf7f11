//! Cluster and RPC endpoint configuration
//!
//! Endpoint resolution order:
//! 1. An explicit URL passed by the embedding shell
//! 2. The `SOLANA_RPC_URL` environment variable
//! 3. The target cluster's public endpoint (rate limited, fine for
//!    devnet/testnet, a poor choice for mainnet traffic)

use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;

/// Environment variable overriding the cluster's default endpoint.
pub const RPC_URL_ENV: &str = "SOLANA_RPC_URL";

/// Solana clusters this wallet can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cluster {
    MainnetBeta,
    Devnet,
    Testnet,
    Localnet,
}

impl Cluster {
    /// The cluster's public JSON-RPC endpoint.
    pub fn rpc_url(&self) -> &'static str {
        match self {
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::Localnet => "http://127.0.0.1:8899",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
            Cluster::Localnet => "localnet",
        }
    }
}

/// Resolved RPC endpoint and commitment level.
///
/// Transactions are built against `finalized` blockhashes by default,
/// matching the commitment the balance and blockhash reads use.
#[derive(Debug, Clone)]
pub struct RpcConfig {
    url: String,
    commitment: CommitmentConfig,
}

impl RpcConfig {
    /// Resolve the endpoint for `cluster`, honoring `SOLANA_RPC_URL`.
    pub fn from_env(cluster: Cluster) -> Self {
        let url = match std::env::var(RPC_URL_ENV) {
            Ok(url) => {
                tracing::debug!(%url, "Using SOLANA_RPC_URL endpoint");
                url
            }
            Err(_) => {
                if cluster == Cluster::MainnetBeta {
                    tracing::warn!("No SOLANA_RPC_URL set, using public mainnet RPC (rate limited)");
                }
                cluster.rpc_url().to_string()
            }
        };

        Self {
            url,
            commitment: CommitmentConfig::finalized(),
        }
    }

    /// Use an explicit endpoint URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            commitment: CommitmentConfig::finalized(),
        }
    }

    /// Override the commitment level.
    pub fn commitment(mut self, commitment: CommitmentConfig) -> Self {
        self.commitment = commitment;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn commitment_config(&self) -> CommitmentConfig {
        self.commitment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_endpoints() {
        assert_eq!(
            Cluster::MainnetBeta.rpc_url(),
            "https://api.mainnet-beta.solana.com"
        );
        assert_eq!(Cluster::Devnet.rpc_url(), "https://api.devnet.solana.com");
        assert_eq!(Cluster::Localnet.rpc_url(), "http://127.0.0.1:8899");
    }

    #[test]
    fn cluster_serde_names() {
        let parsed: Cluster = serde_json::from_str("\"mainnet-beta\"").expect("parse cluster");
        assert_eq!(parsed, Cluster::MainnetBeta);
        assert_eq!(serde_json::to_string(&Cluster::Devnet).unwrap(), "\"devnet\"");
    }

    #[test]
    fn explicit_url_wins() {
        let config = RpcConfig::with_url("http://127.0.0.1:1024");
        assert_eq!(config.url(), "http://127.0.0.1:1024");
        assert_eq!(config.commitment_config(), CommitmentConfig::finalized());
    }

    #[test]
    fn commitment_override() {
        let config =
            RpcConfig::with_url("http://127.0.0.1:8899").commitment(CommitmentConfig::confirmed());
        assert_eq!(config.commitment_config(), CommitmentConfig::confirmed());
    }
}
