//! Typed bindings for the Crypto Devs collection contract.

use alloy::network::Ethereum;
use alloy::primitives::Address;
use alloy::providers::{PendingTransactionBuilder, Provider};
use alloy::sol;
use alloy::transports::http::{Client, Http};
use async_trait::async_trait;
use client_blockchain_core::{AccountAddress, Capability, ContractError, MintContract, TxReceipt, Wei};

use crate::conversion::{address_to_account, receipt_to_domain, u256_to_u64, wei_to_u256};
use crate::error::{call_failed, confirmation_failed, submission_failed};

sol! {
    #[sol(rpc)]
    interface ICryptoDevs {
        function presaleStarted() external view returns (bool);
        function presaleEnded() external view returns (uint256);
        function tokenIds() external view returns (uint256);
        function owner() external view returns (address);
        function startPresale() external;
        function presaleMint() external payable;
        function mint() external payable;
    }
}

/// Collection contract bound to a provider.
///
/// `P` is either a plain HTTP provider (read-only handles) or one carrying a
/// wallet filler (signing handles).
pub struct CryptoDevsContract<P> {
    instance: ICryptoDevs::ICryptoDevsInstance<Http<Client>, P, Ethereum>,
    capability: Capability,
}

impl<P> CryptoDevsContract<P>
where
    P: Provider<Http<Client>, Ethereum> + 'static,
{
    pub fn new(address: Address, provider: P, capability: Capability) -> Self {
        Self {
            instance: ICryptoDevs::new(address, provider),
            capability,
        }
    }

    pub fn address(&self) -> &Address {
        self.instance.address()
    }

    fn require_signer(&self, method: &'static str) -> Result<(), ContractError> {
        match self.capability {
            Capability::Signer => Ok(()),
            Capability::ReadOnly => Err(ContractError::ReadOnlyHandle(method)),
        }
    }

    async fn await_receipt(
        method: &'static str,
        pending: PendingTransactionBuilder<Http<Client>, Ethereum>,
    ) -> Result<TxReceipt, ContractError> {
        tracing::info!("{} submitted: {}", method, pending.tx_hash());

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| confirmation_failed(method, e))?;
        let receipt = receipt_to_domain(&receipt);

        if receipt.is_success() {
            tracing::info!(
                "{} confirmed: {} (gas used: {})",
                method,
                receipt.transaction_id,
                receipt.gas_used
            );
        } else {
            tracing::warn!("{} reverted: {}", method, receipt.transaction_id);
        }

        Ok(receipt)
    }
}

#[async_trait]
impl<P> MintContract for CryptoDevsContract<P>
where
    P: Provider<Http<Client>, Ethereum> + 'static,
{
    async fn presale_started(&self) -> Result<bool, ContractError> {
        let started = self
            .instance
            .presaleStarted()
            .call()
            .await
            .map_err(|e| call_failed("presaleStarted", e))?;
        Ok(started._0)
    }

    async fn presale_ended(&self) -> Result<u64, ContractError> {
        let ends_at = self
            .instance
            .presaleEnded()
            .call()
            .await
            .map_err(|e| call_failed("presaleEnded", e))?;
        u256_to_u64("presaleEnded", ends_at._0)
    }

    async fn token_ids(&self) -> Result<u64, ContractError> {
        let minted = self
            .instance
            .tokenIds()
            .call()
            .await
            .map_err(|e| call_failed("tokenIds", e))?;
        u256_to_u64("tokenIds", minted._0)
    }

    async fn owner(&self) -> Result<AccountAddress, ContractError> {
        let owner = self
            .instance
            .owner()
            .call()
            .await
            .map_err(|e| call_failed("owner", e))?;
        Ok(address_to_account(owner._0))
    }

    async fn start_presale(&self) -> Result<TxReceipt, ContractError> {
        self.require_signer("startPresale")?;
        let pending = self
            .instance
            .startPresale()
            .send()
            .await
            .map_err(|e| submission_failed("startPresale", e))?;
        Self::await_receipt("startPresale", pending).await
    }

    async fn presale_mint(&self, value: Wei) -> Result<TxReceipt, ContractError> {
        self.require_signer("presaleMint")?;
        let pending = self
            .instance
            .presaleMint()
            .value(wei_to_u256(value))
            .send()
            .await
            .map_err(|e| submission_failed("presaleMint", e))?;
        Self::await_receipt("presaleMint", pending).await
    }

    async fn mint(&self, value: Wei) -> Result<TxReceipt, ContractError> {
        self.require_signer("mint")?;
        let pending = self
            .instance
            .mint()
            .value(wei_to_u256(value))
            .send()
            .await
            .map_err(|e| submission_failed("mint", e))?;
        Self::await_receipt("mint", pending).await
    }
}
