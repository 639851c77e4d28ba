//! Wallet and contract abstraction layer for the Crypto Devs client.
//!
//! # Architecture
//!
//! ```text
//! WalletConnector (network-checked entry point)
//!   └── WalletProvider (Layer 0: connection, chain id, signer)
//!         └── MintContract (Layer 1: collection contract calls)
//! ```
//!
//! Backends (EVM, mock) implement the two traits; the frontend only ever
//! talks to [`WalletConnector`] and the [`WalletHandle`]s it returns.
//!
//! # Usage
//!
//! ```ignore
//! use client_blockchain_core::{RequiredNetwork, WalletConnector};
//!
//! let connector = WalletConnector::new(provider, RequiredNetwork::new(4, "Rinkeby"));
//! let handle = connector.get_handle(false).await?;
//! let minted = handle.contract().token_ids().await?;
//! ```

pub mod traits;
pub mod types;
pub mod wallet;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export all traits
pub use traits::{Capability, ContractError, MintContract, WalletError, WalletProvider};

// Re-export all types
pub use types::{
    AccountAddress, AmountError, BlockchainConfig, ChainId, RequiredNetwork, TransactionId,
    TransactionStatus, TxReceipt, Wei,
};

pub use wallet::{WalletConnector, WalletHandle};

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockCall, MockMintBackend};
