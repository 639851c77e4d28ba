//! EVM network configuration.

use std::env;
use std::str::FromStr;

use alloy::primitives::Address;
use client_blockchain_core::{BlockchainConfig, RequiredNetwork, Wei};

use crate::deployment::DeploymentInfo;
use crate::error::{EvmError, Result};

/// Default price of one token, in ether.
pub const DEFAULT_MINT_PRICE_ETH: &str = "0.01";

/// EVM network types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvmNetwork {
    /// Rinkeby testnet, where the collection is deployed
    Rinkeby,
    /// Sepolia testnet
    Sepolia,
    /// Ethereum mainnet
    Mainnet,
    /// Local development node (anvil / hardhat)
    Local,
}

impl EvmNetwork {
    pub fn chain_id(&self) -> u64 {
        match self {
            EvmNetwork::Rinkeby => 4,
            EvmNetwork::Sepolia => 11_155_111,
            EvmNetwork::Mainnet => 1,
            EvmNetwork::Local => 31_337,
        }
    }

    /// Name shown to the user when asked to switch networks.
    pub fn display_name(&self) -> &'static str {
        match self {
            EvmNetwork::Rinkeby => "Rinkeby",
            EvmNetwork::Sepolia => "Sepolia",
            EvmNetwork::Mainnet => "Mainnet",
            EvmNetwork::Local => "Localhost",
        }
    }

    pub fn default_rpc_url(&self) -> &'static str {
        match self {
            EvmNetwork::Rinkeby => "https://rinkeby.infura.io/v3/",
            EvmNetwork::Sepolia => "https://rpc.sepolia.org",
            EvmNetwork::Mainnet => "https://eth.llamarpc.com",
            EvmNetwork::Local => "http://127.0.0.1:8545",
        }
    }
}

impl FromStr for EvmNetwork {
    type Err = EvmError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "rinkeby" => Ok(EvmNetwork::Rinkeby),
            "sepolia" => Ok(EvmNetwork::Sepolia),
            "mainnet" => Ok(EvmNetwork::Mainnet),
            "local" | "localhost" => Ok(EvmNetwork::Local),
            other => Err(EvmError::InvalidConfig(format!(
                "Invalid EVM_NETWORK: {}. Must be rinkeby, sepolia, mainnet, or local",
                other
            ))),
        }
    }
}

/// EVM-specific configuration.
#[derive(Clone)]
pub struct EvmConfig {
    /// Network to connect to
    pub network: EvmNetwork,

    /// Custom RPC endpoint URL (overrides network default)
    pub rpc_url: Option<String>,

    /// Chain id every call must run against (overrides network default)
    pub required_chain_id: Option<u64>,

    /// Hex-encoded private key of the signing account
    pub private_key: Option<String>,

    /// Where the collection contract lives
    pub deployment: DeploymentInfo,

    /// Payment attached to `presaleMint()` and `mint()`
    pub mint_price: Wei,
}

impl std::fmt::Debug for EvmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvmConfig")
            .field("network", &self.network)
            .field("rpc_url", &self.rpc_url)
            .field("required_chain_id", &self.required_chain_id)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("deployment", &self.deployment)
            .field("mint_price", &self.mint_price)
            .finish()
    }
}

impl EvmConfig {
    /// Create a new configuration for the given network and contract.
    pub fn new(network: EvmNetwork, deployment: DeploymentInfo) -> Self {
        Self {
            network,
            rpc_url: None,
            required_chain_id: None,
            private_key: None,
            deployment,
            mint_price: Wei(10_000_000_000_000_000),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EVM_NETWORK` - Network name (rinkeby, sepolia, mainnet, local) (default: rinkeby)
    /// - `RPC_URL` - Custom RPC endpoint URL
    /// - `REQUIRED_CHAIN_ID` - Chain id to enforce (default: the network's id)
    /// - `WALLET_PRIVATE_KEY` - Hex private key of the signing account
    /// - `CONTRACT_ADDRESS` - Deployed collection address (see [`DeploymentInfo`])
    /// - `MINT_PRICE_ETH` - Payment per mint in ether (default: 0.01)
    pub fn from_env() -> Result<Self> {
        let network = env::var("EVM_NETWORK")
            .unwrap_or_else(|_| "rinkeby".to_string())
            .parse::<EvmNetwork>()?;

        let deployment = DeploymentInfo::from_env(network)?;

        let rpc_url = env::var("RPC_URL").ok().filter(|s| !s.is_empty());
        let private_key = env::var("WALLET_PRIVATE_KEY")
            .ok()
            .filter(|s| !s.is_empty());

        let required_chain_id = env::var("REQUIRED_CHAIN_ID")
            .ok()
            .and_then(|s| s.parse::<u64>().ok());

        let mint_price = Wei::from_ether_str(
            &env::var("MINT_PRICE_ETH").unwrap_or_else(|_| DEFAULT_MINT_PRICE_ETH.to_string()),
        )?;

        Ok(Self {
            network,
            rpc_url,
            required_chain_id,
            private_key,
            deployment,
            mint_price,
        })
    }

    /// Set custom RPC URL.
    pub fn with_rpc_url(mut self, url: impl Into<String>) -> Self {
        self.rpc_url = Some(url.into());
        self
    }

    /// Set the signing key.
    pub fn with_private_key(mut self, key: impl Into<String>) -> Self {
        self.private_key = Some(key.into());
        self
    }

    /// Set the mint price.
    pub fn with_mint_price(mut self, price: Wei) -> Self {
        self.mint_price = price;
        self
    }

    /// Get the RPC URL (custom or default for network).
    pub fn get_rpc_url(&self) -> &str {
        self.rpc_url
            .as_deref()
            .unwrap_or_else(|| self.network.default_rpc_url())
    }

    /// The network handles must be checked against.
    pub fn required_network(&self) -> RequiredNetwork {
        let chain_id = self
            .required_chain_id
            .unwrap_or_else(|| self.network.chain_id());
        RequiredNetwork::new(chain_id, self.network.display_name())
    }

    pub fn contract_address(&self) -> Result<Address> {
        Address::from_str(&self.deployment.contract_address)
            .map_err(|e| EvmError::InvalidAddress(format!("{}: {}", self.deployment.contract_address, e)))
    }
}

impl BlockchainConfig for EvmConfig {
    fn network_name(&self) -> &str {
        match self.network {
            EvmNetwork::Rinkeby => "evm-rinkeby",
            EvmNetwork::Sepolia => "evm-sepolia",
            EvmNetwork::Mainnet => "evm-mainnet",
            EvmNetwork::Local => "evm-local",
        }
    }

    fn rpc_url(&self) -> &str {
        self.get_rpc_url()
    }

    fn validate(&self) -> std::result::Result<(), String> {
        // Validate RPC URL format
        let url = self.get_rpc_url();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(format!("Invalid RPC URL format: {}", url));
        }

        self.contract_address().map_err(|e| e.to_string())?;

        if self.mint_price == Wei(0) {
            return Err("Mint price must be greater than 0".to_string());
        }

        // The key is optional here; connecting without one fails later with NoWallet
        if let Some(ref key) = self.private_key
            && key.trim_start_matches("0x").len() != 64
        {
            return Err("WALLET_PRIVATE_KEY must be 32 bytes of hex".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTRACT: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

    fn config() -> EvmConfig {
        EvmConfig::new(EvmNetwork::Rinkeby, DeploymentInfo::new("rinkeby", CONTRACT))
    }

    #[test]
    fn rinkeby_is_required_by_default() {
        let network = config().required_network();
        assert_eq!(network.chain_id.0, 4);
        assert_eq!(network.name, "Rinkeby");
    }

    #[test]
    fn chain_id_override_keeps_display_name() {
        let mut config = config();
        config.required_chain_id = Some(1337);
        assert_eq!(config.required_network().chain_id.0, 1337);
    }

    #[test]
    fn parses_network_names() {
        assert_eq!("Sepolia".parse::<EvmNetwork>().unwrap(), EvmNetwork::Sepolia);
        assert_eq!("localhost".parse::<EvmNetwork>().unwrap(), EvmNetwork::Local);
        assert!("goerli".parse::<EvmNetwork>().is_err());
    }

    #[test]
    fn validate_rejects_bad_inputs() {
        assert!(config().validate().is_ok());
        assert!(config().with_rpc_url("ws://node").validate().is_err());
        assert!(config().with_private_key("0x1234").validate().is_err());
        assert!(config().with_mint_price(Wei(0)).validate().is_err());

        let bad_address =
            EvmConfig::new(EvmNetwork::Local, DeploymentInfo::new("local", "0xnot-an-address"));
        assert!(bad_address.validate().is_err());
    }
}
