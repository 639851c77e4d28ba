//! Wallet and contract abstraction traits.
//!
//! This module defines a layered abstraction:
//! - Layer 0: WalletProvider (connection, network, signer)
//! - Layer 1: MintContract (the NFT collection's remote calls)

use std::sync::Arc;

use async_trait::async_trait;

use crate::types::{AccountAddress, ChainId, TxReceipt, Wei};

// ============================================================================
// Error Types
// ============================================================================

/// Wallet connection errors.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("No wallet available: {0}")]
    NoWallet(String),

    #[error("Connection rejected by the wallet")]
    Rejected,

    #[error("Change the network to {expected_name}")]
    WrongNetwork {
        expected: ChainId,
        expected_name: String,
        actual: ChainId,
    },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Remote contract call errors.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    #[error("Call to {method} failed: {reason}")]
    CallFailed { method: &'static str, reason: String },

    #[error("Could not decode {method} result: {reason}")]
    DecodeFailed { method: &'static str, reason: String },

    #[error("Submitting {method} failed: {reason}")]
    SubmissionFailed { method: &'static str, reason: String },

    #[error("Waiting for {method} confirmation failed: {reason}")]
    ConfirmationFailed { method: &'static str, reason: String },

    #[error("{0} requires a signing handle")]
    ReadOnlyHandle(&'static str),
}

impl ContractError {
    /// Name of the contract method the error originated from.
    pub fn method(&self) -> &'static str {
        match self {
            ContractError::CallFailed { method, .. }
            | ContractError::DecodeFailed { method, .. }
            | ContractError::SubmissionFailed { method, .. }
            | ContractError::ConfirmationFailed { method, .. } => method,
            ContractError::ReadOnlyHandle(method) => method,
        }
    }
}

// ============================================================================
// Layer 0: Wallet Provider
// ============================================================================

/// What a handle is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Read calls only
    ReadOnly,
    /// Read calls plus signed transactions
    Signer,
}

/// Connection to a wallet and the network behind it.
///
/// Implementations hold no contract knowledge beyond binding the configured
/// contract to a handle of the requested capability.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Establish the wallet connection.
    ///
    /// Fails with `NoWallet` when nothing is configured, or `Rejected` when
    /// the wallet declines the request.
    async fn connect(&self) -> Result<(), WalletError>;

    /// Network identifier reported by the connected provider.
    async fn chain_id(&self) -> Result<ChainId, WalletError>;

    /// Address of the account that signs transactions.
    async fn signer_address(&self) -> Result<AccountAddress, WalletError>;

    /// Bind the collection contract to a handle with the given capability.
    fn contract(&self, capability: Capability) -> Result<Arc<dyn MintContract>, WalletError>;

    /// Backend name (e.g., "EVM", "Mock").
    fn name(&self) -> &str;
}

// ============================================================================
// Layer 1: Collection Contract
// ============================================================================

/// Remote calls exposed by the Crypto Devs collection contract.
///
/// Write calls submit the transaction and wait for its confirmation; the
/// returned receipt carries the on-chain outcome, which callers must check.
#[async_trait]
pub trait MintContract: Send + Sync {
    /// `presaleStarted() -> bool`
    async fn presale_started(&self) -> Result<bool, ContractError>;

    /// `presaleEnded() -> uint256`, the unix timestamp the presale ends at.
    async fn presale_ended(&self) -> Result<u64, ContractError>;

    /// `tokenIds() -> uint256`, the number of tokens minted so far.
    async fn token_ids(&self) -> Result<u64, ContractError>;

    /// `owner() -> address`
    async fn owner(&self) -> Result<AccountAddress, ContractError>;

    /// `startPresale()`
    async fn start_presale(&self) -> Result<TxReceipt, ContractError>;

    /// `presaleMint() payable`
    async fn presale_mint(&self, value: Wei) -> Result<TxReceipt, ContractError>;

    /// `mint() payable`
    async fn mint(&self, value: Wei) -> Result<TxReceipt, ContractError>;
}
