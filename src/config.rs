//! Configuration module for the memo sender
//!
//! This module handles configuration loading from TOML files and
//! environment variables, and provides structured configuration types.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use solana_sdk::{commitment_config::CommitmentConfig, signature::Signature};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// RPC endpoint configuration
    #[serde(default)]
    pub rpc: RpcConfig,

    /// Wallet configuration
    #[serde(default)]
    pub wallet: WalletConfig,

    /// Memo content
    #[serde(default)]
    pub memo: MemoConfig,

    /// Network selector (explorer links only)
    #[serde(default)]
    pub network: NetworkConfig,

    /// Monitoring and metrics
    #[serde(default)]
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcConfig {
    /// JSON-RPC endpoint
    #[serde(default = "default_rpc_endpoint")]
    pub endpoint: String,

    /// Commitment for checkpoint fetch and confirmation
    /// ("processed", "confirmed" or "finalized")
    #[serde(default = "default_commitment")]
    pub commitment: String,

    /// Request timeout in seconds
    #[serde(default = "default_rpc_timeout")]
    pub timeout_secs: u64,

    /// Delay between signature status polls
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletConfig {
    /// Path to keypair file
    #[serde(default = "default_keypair_path")]
    pub keypair_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemoConfig {
    /// Message recorded by the memo program
    #[serde(default = "default_message")]
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NetworkConfig {
    #[serde(default)]
    pub cluster: Cluster,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonitoringConfig {
    /// Enable Prometheus metrics
    #[serde(default = "default_true")]
    pub enable_metrics: bool,
}

/// Named network environments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cluster {
    #[default]
    Devnet,
    Testnet,
    MainnetBeta,
}

impl Cluster {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
            Cluster::MainnetBeta => "mainnet-beta",
        }
    }

    /// Public RPC endpoint for this cluster
    pub fn default_rpc_url(&self) -> &'static str {
        match self {
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
        }
    }

    /// Solana Explorer link for a transaction
    pub fn explorer_tx_url(&self, signature: &Signature) -> String {
        format!(
            "https://explorer.solana.com/tx/{}?cluster={}",
            signature,
            self.as_str()
        )
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cluster {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "devnet" => Ok(Cluster::Devnet),
            "testnet" => Ok(Cluster::Testnet),
            "mainnet-beta" | "mainnet" => Ok(Cluster::MainnetBeta),
            other => bail!("Unknown cluster '{}'", other),
        }
    }
}

// Default value functions
fn default_rpc_endpoint() -> String { Cluster::Devnet.default_rpc_url().to_string() }
fn default_commitment() -> String { "confirmed".to_string() }
fn default_rpc_timeout() -> u64 { 30 }
fn default_poll_interval() -> u64 { 500 }
fn default_keypair_path() -> String { "~/.config/solana/id.json".to_string() }
fn default_message() -> String { "Hello Solana!".to_string() }
fn default_true() -> bool { true }

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            endpoint: default_rpc_endpoint(),
            commitment: default_commitment(),
            timeout_secs: default_rpc_timeout(),
            poll_interval_ms: default_poll_interval(),
        }
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            keypair_path: default_keypair_path(),
        }
    }
}

impl Default for MemoConfig {
    fn default() -> Self {
        Self {
            message: default_message(),
        }
    }
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            enable_metrics: default_true(),
        }
    }
}

impl RpcConfig {
    pub fn commitment_config(&self) -> anyhow::Result<CommitmentConfig> {
        match self.commitment.as_str() {
            "processed" => Ok(CommitmentConfig::processed()),
            "confirmed" => Ok(CommitmentConfig::confirmed()),
            "finalized" => Ok(CommitmentConfig::finalized()),
            other => bail!("Unknown commitment '{}'", other),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl WalletConfig {
    /// Keypair path with a leading `~/` expanded to `$HOME`
    pub fn resolved_keypair_path(&self) -> PathBuf {
        match (self.keypair_path.strip_prefix("~/"), std::env::var_os("HOME")) {
            (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
            _ => PathBuf::from(&self.keypair_path),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Apply `MEMO_*` environment variable overrides
    pub fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        if let Ok(endpoint) = std::env::var("MEMO_RPC_ENDPOINT") {
            self.rpc.endpoint = endpoint;
        }
        if let Ok(cluster) = std::env::var("MEMO_CLUSTER") {
            self.network.cluster = cluster
                .parse()
                .with_context(|| format!("Invalid MEMO_CLUSTER value '{}'", cluster))?;
        }
        if let Ok(path) = std::env::var("MEMO_KEYPAIR_PATH") {
            self.wallet.keypair_path = path;
        }
        if let Ok(message) = std::env::var("MEMO_MESSAGE") {
            self.memo.message = message;
        }
        Ok(())
    }

    /// Reject configurations that cannot work
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.rpc.endpoint.trim().is_empty() {
            bail!("rpc.endpoint must not be empty");
        }
        self.rpc.commitment_config()?;
        if self.rpc.poll_interval_ms == 0 {
            bail!("rpc.poll_interval_ms must be greater than zero");
        }
        if self.rpc.timeout_secs == 0 {
            bail!("rpc.timeout_secs must be greater than zero");
        }
        Ok(())
    }
}
