//! EVM wallet provider backed by a local signing key and an HTTP RPC node.

use std::str::FromStr;
use std::sync::Arc;

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use alloy::transports::http::reqwest::Url;
use async_trait::async_trait;
use client_blockchain_core::{
    AccountAddress, BlockchainConfig, Capability, ChainId, MintContract, WalletError,
    WalletProvider,
};

use crate::config::EvmConfig;
use crate::contract::CryptoDevsContract;
use crate::conversion::address_to_account;
use crate::error::{EvmError, Result};

/// Wallet provider for EVM networks.
///
/// The signing key plays the role of the browser wallet: without one,
/// `connect` fails with `NoWallet`.
pub struct EvmWalletProvider {
    config: EvmConfig,
    url: Url,
    contract_address: Address,
    signer: Option<PrivateKeySigner>,
}

impl EvmWalletProvider {
    /// Create a new provider from a validated configuration.
    pub fn new(config: EvmConfig) -> Result<Self> {
        config.validate().map_err(EvmError::InvalidConfig)?;

        let url = Url::parse(config.get_rpc_url())
            .map_err(|e| EvmError::InvalidConfig(format!("RPC_URL: {}", e)))?;
        let contract_address = config.contract_address()?;

        let signer = config
            .private_key
            .as_deref()
            .map(|key| {
                PrivateKeySigner::from_str(key).map_err(|e| EvmError::InvalidSigner(e.to_string()))
            })
            .transpose()?;

        tracing::info!(
            "EVM provider ready: network={} rpc={} contract={}",
            config.network_name(),
            url,
            contract_address
        );

        Ok(Self {
            config,
            url,
            contract_address,
            signer,
        })
    }

    pub fn config(&self) -> &EvmConfig {
        &self.config
    }

    fn signer(&self) -> std::result::Result<&PrivateKeySigner, WalletError> {
        self.signer
            .as_ref()
            .ok_or_else(|| WalletError::NoWallet("WALLET_PRIVATE_KEY is not set".to_string()))
    }
}

#[async_trait]
impl WalletProvider for EvmWalletProvider {
    async fn connect(&self) -> std::result::Result<(), WalletError> {
        let signer = self.signer()?;
        tracing::debug!("Wallet connected as {}", signer.address());
        Ok(())
    }

    async fn chain_id(&self) -> std::result::Result<ChainId, WalletError> {
        let provider = ProviderBuilder::new().on_http(self.url.clone());
        let chain_id = provider
            .get_chain_id()
            .await
            .map_err(|e| EvmError::Network(e.to_string()))?;
        Ok(ChainId(chain_id))
    }

    async fn signer_address(&self) -> std::result::Result<AccountAddress, WalletError> {
        Ok(address_to_account(self.signer()?.address()))
    }

    fn contract(
        &self,
        capability: Capability,
    ) -> std::result::Result<Arc<dyn MintContract>, WalletError> {
        match capability {
            Capability::ReadOnly => {
                let provider = ProviderBuilder::new().on_http(self.url.clone());
                Ok(Arc::new(CryptoDevsContract::new(
                    self.contract_address,
                    provider,
                    capability,
                )))
            }
            Capability::Signer => {
                let wallet = EthereumWallet::from(self.signer()?.clone());
                let provider = ProviderBuilder::new()
                    .with_recommended_fillers()
                    .wallet(wallet)
                    .on_http(self.url.clone());
                Ok(Arc::new(CryptoDevsContract::new(
                    self.contract_address,
                    provider,
                    capability,
                )))
            }
        }
    }

    fn name(&self) -> &str {
        "EVM"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvmNetwork;
    use crate::deployment::DeploymentInfo;

    const CONTRACT: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
    // Well-known local development key (anvil / hardhat account #0)
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn local_config() -> EvmConfig {
        EvmConfig::new(EvmNetwork::Local, DeploymentInfo::new("local", CONTRACT))
    }

    #[tokio::test]
    async fn connect_without_key_reports_no_wallet() {
        let provider = EvmWalletProvider::new(local_config()).unwrap();
        let err = provider.connect().await.unwrap_err();
        assert!(matches!(err, WalletError::NoWallet(_)));
    }

    #[tokio::test]
    async fn signer_address_comes_from_key() {
        let provider = EvmWalletProvider::new(local_config().with_private_key(DEV_KEY)).unwrap();
        provider.connect().await.unwrap();

        let address = provider.signer_address().await.unwrap();
        assert_eq!(
            address,
            AccountAddress::new("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
    }

    #[test]
    fn rejects_malformed_key() {
        let bad_key = "zz".repeat(32);
        let err = EvmWalletProvider::new(local_config().with_private_key(bad_key));
        assert!(matches!(err, Err(EvmError::InvalidSigner(_))));
    }

    #[test]
    fn binds_both_capabilities() {
        let provider = EvmWalletProvider::new(local_config().with_private_key(DEV_KEY)).unwrap();
        assert!(provider.contract(Capability::ReadOnly).is_ok());
        assert!(provider.contract(Capability::Signer).is_ok());
    }
}
