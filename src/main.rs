//! Memo Sender CLI
//!
//! Records one memo on chain with a local keypair standing in for the
//! external wallet, then prints an explorer link for the confirmed
//! transaction.

// Compiler warning configuration
#![deny(unused_imports)]
#![deny(unused_mut)]
#![deny(unused_variables)]
#![warn(unused_must_use)]

use anyhow::{bail, Context, Result};
use clap::Parser;
use memo_sender::config::Config;
use memo_sender::metrics;
use memo_sender::rpc_manager::RpcLedger;
use memo_sender::session::LocalWalletAdapter;
use memo_sender::{MemoEngine, MemoOutcome};
use solana_client::nonblocking::rpc_client::RpcClient;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Message to record (overrides memo.message)
    #[arg(short, long)]
    message: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Print Prometheus metrics after the attempt
    #[arg(long)]
    print_metrics: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.json_logs)?;

    info!("Starting memo sender v{}", env!("CARGO_PKG_VERSION"));

    info!("Loading configuration from: {}", args.config);
    let mut config = load_config(&args.config)?;
    if let Some(message) = args.message {
        config.memo.message = message;
    }
    config.validate().context("Invalid configuration")?;

    let commitment = config.rpc.commitment_config()?;
    let client = Arc::new(RpcClient::new_with_timeout_and_commitment(
        config.rpc.endpoint.clone(),
        config.rpc.timeout(),
        commitment,
    ));
    info!(
        endpoint = %config.rpc.endpoint,
        commitment = %config.rpc.commitment,
        cluster = %config.network.cluster,
        "RPC client ready"
    );

    let keypair_path = config.wallet.resolved_keypair_path();
    let wallet = LocalWalletAdapter::from_file(&keypair_path, Arc::clone(&client))
        .context("Failed to load wallet")?;
    info!("Wallet address: {}", wallet.pubkey());

    let ledger = RpcLedger::new(
        client,
        commitment,
        config.rpc.poll_interval(),
        config.rpc.timeout(),
    );
    let engine = MemoEngine::new(Arc::new(wallet), Arc::new(ledger));

    let outcome = engine.send_memo(&config.memo.message).await;

    if args.print_metrics && config.monitoring.enable_metrics {
        println!("{}", metrics::metrics().gather_text()?);
    }

    match outcome {
        Some(MemoOutcome::Confirmed { signature }) => {
            println!("Your message was successfully recorded.");
            println!(
                "View it on Solana Explorer: {}",
                config.network.cluster.explorer_tx_url(&signature)
            );
            Ok(())
        }
        Some(MemoOutcome::ConfirmedWithError { signature, error }) => {
            warn!(signature = %signature, error = %error, "Failed to record message");
            println!("Transaction {} landed but failed: {}", signature, error);
            Ok(())
        }
        Some(MemoOutcome::Failed(e)) => {
            error!(category = e.category(), "Memo attempt failed: {}", e);
            bail!(e)
        }
        None => bail!("memo engine busy"),
    }
}

/// Initialize logging subsystem
fn init_logging(verbose: bool, json: bool) -> Result<()> {
    let env_filter = if verbose {
        "memo_sender=debug,info"
    } else {
        "memo_sender=info,warn,error"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| env_filter.into());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()?;
    }

    Ok(())
}

/// Load configuration from file with fallback to defaults, then apply
/// `.env` and `MEMO_*` overrides
fn load_config(path: &str) -> Result<Config> {
    dotenvy::dotenv().ok();
    let mut config = read_config_file(path)?;
    config
        .apply_env_overrides()
        .context("Invalid environment override")?;
    Ok(config)
}

/// Parse the config file, or return defaults when it does not exist
fn read_config_file(path: &str) -> Result<Config> {
    if std::path::Path::new(path).exists() {
        Config::from_file(path).with_context(|| format!("Failed to load config from {}", path))
    } else {
        warn!("Config file '{}' not found, using defaults", path);
        Ok(Config::default())
    }
}
