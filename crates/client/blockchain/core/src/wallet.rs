//! Network-checked access to the wallet provider.

use std::sync::Arc;

use crate::traits::{Capability, MintContract, WalletError, WalletProvider};
use crate::types::{AccountAddress, ChainId, RequiredNetwork};

/// Contract handle resolved by [`WalletConnector::get_handle`].
#[derive(Clone)]
pub struct WalletHandle {
    pub capability: Capability,
    pub chain_id: ChainId,

    /// Signer address, present only for signing handles
    pub signer: Option<AccountAddress>,

    contract: Arc<dyn MintContract>,
}

impl WalletHandle {
    pub fn contract(&self) -> &dyn MintContract {
        self.contract.as_ref()
    }
}

/// Single shared entry point to the wallet.
///
/// Every handle it hands out has been checked against the required network;
/// on mismatch the caller gets `WalletError::WrongNetwork` and no handle, so
/// no contract call can follow.
#[derive(Clone)]
pub struct WalletConnector {
    provider: Arc<dyn WalletProvider>,
    network: RequiredNetwork,
}

impl WalletConnector {
    pub fn new(provider: Arc<dyn WalletProvider>, network: RequiredNetwork) -> Self {
        Self { provider, network }
    }

    pub fn required_network(&self) -> &RequiredNetwork {
        &self.network
    }

    pub fn backend_name(&self) -> &str {
        self.provider.name()
    }

    /// Connect, verify the network, and bind the contract.
    pub async fn get_handle(&self, wants_signer: bool) -> Result<WalletHandle, WalletError> {
        self.provider.connect().await?;

        let chain_id = self.provider.chain_id().await?;
        if chain_id != self.network.chain_id {
            tracing::warn!(
                "Connected to chain {} but {} ({}) is required",
                chain_id,
                self.network.name,
                self.network.chain_id
            );
            return Err(WalletError::WrongNetwork {
                expected: self.network.chain_id,
                expected_name: self.network.name.clone(),
                actual: chain_id,
            });
        }

        let (capability, signer) = if wants_signer {
            let address = self.provider.signer_address().await?;
            (Capability::Signer, Some(address))
        } else {
            (Capability::ReadOnly, None)
        };

        let contract = self.provider.contract(capability)?;

        Ok(WalletHandle {
            capability,
            chain_id,
            signer,
            contract,
        })
    }
}
