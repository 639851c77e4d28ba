//! Crypto Devs mint client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Wallet backend - EVM over JSON-RPC, or an in-memory mock
//! 2. Frontend (UI) - terminal UI
//!
//! Both are built independently and injected into the Client container.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//! - `blockchain-evm`: alloy-backed wallet (default)
//! - `blockchain-mock`: in-memory chain, used when `blockchain-evm` is off
//!
//! # Examples
//!
//! ```bash
//! # Against Rinkeby with a funded key
//! WALLET_PRIVATE_KEY=0x... CONTRACT_ADDRESS=0x... cargo run -p crypto-devs-client
//!
//! # Offline, against the in-memory chain
//! cargo run -p crypto-devs-client --no-default-features --features "frontend-cli,blockchain-mock"
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli)");
    }

    Ok(())
}

/// Run the terminal frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use std::path::PathBuf;

    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use crypto_devs_client::Client;

    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let log_dir = std::env::var_os("LOG_DIR").map(PathBuf::from);
    let log_path = logging::setup_logging(log_dir.as_deref())?;

    tracing::info!("Starting Crypto Devs client");
    tracing::info!("Log file: {}", log_path.display());
    tracing::info!(
        "Polling every {:?}, max supply {}",
        frontend_config.polling.interval,
        frontend_config.polling.max_supply
    );

    // 3. Build wallet backend (independent layer)
    tracing::debug!("Building wallet connector...");
    let (connector, mint_price) = build_wallet()?;

    // 4. Build Frontend (independent layer)
    tracing::debug!("Building CLI frontend...");
    let frontend = CliFrontend::new(frontend_config.clone(), cli_config);

    // 5. Build Client (composition layer)
    let client = Client::builder()
        .wallet(connector)
        .frontend(frontend)
        .config(frontend_config)
        .mint_price(mint_price)
        .build()?;

    // 6. Run
    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}

#[cfg(feature = "blockchain-evm")]
fn build_wallet() -> Result<(client_blockchain_core::WalletConnector, client_blockchain_core::Wei)> {
    use std::sync::Arc;

    use anyhow::Context;
    use client_blockchain_core::WalletConnector;
    use client_blockchain_evm::{EvmConfig, EvmWalletProvider};

    let config = EvmConfig::from_env().context("Failed to load EVM configuration")?;
    let network = config.required_network();
    let mint_price = config.mint_price;

    tracing::info!(
        "EVM configuration loaded: network={}, rpc={}, contract={}",
        network.name,
        config.get_rpc_url(),
        config.deployment.contract_address
    );

    let provider = EvmWalletProvider::new(config).context("Failed to initialize EVM wallet")?;

    Ok((WalletConnector::new(Arc::new(provider), network), mint_price))
}

#[cfg(all(not(feature = "blockchain-evm"), feature = "blockchain-mock"))]
fn build_wallet() -> Result<(client_blockchain_core::WalletConnector, client_blockchain_core::Wei)> {
    use std::sync::Arc;

    use client_blockchain_core::{MockMintBackend, RequiredNetwork, WalletConnector, Wei};

    tracing::warn!("Using the in-memory mock chain; nothing is sent to a real network");

    let connector = WalletConnector::new(
        Arc::new(MockMintBackend::new()),
        RequiredNetwork::new(4, "Rinkeby"),
    );
    Ok((connector, Wei::from_ether_str("0.01")?))
}

#[cfg(not(any(feature = "blockchain-evm", feature = "blockchain-mock")))]
fn build_wallet() -> Result<(client_blockchain_core::WalletConnector, client_blockchain_core::Wei)> {
    compile_error!("Enable one wallet backend feature (blockchain-evm or blockchain-mock)");
}
