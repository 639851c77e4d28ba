//! EVM integration for the Crypto Devs mint client.
//!
//! This crate implements the chain-agnostic wallet and contract traits for
//! Ethereum networks:
//! - Network selection and deployment lookup
//! - A signing wallet built from a local private key
//! - Typed bindings for the collection contract
//!
//! # Architecture
//!
//! ```text
//! WalletConnector (core) → EvmWalletProvider → alloy HTTP provider → node
//!                                ↓
//!                       CryptoDevsContract<P>
//!                    (read-only or signing provider)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use client_blockchain_evm::{EvmConfig, EvmWalletProvider};
//! use client_blockchain_core::WalletConnector;
//!
//! let config = EvmConfig::from_env()?;
//! let network = config.required_network();
//! let provider = EvmWalletProvider::new(config)?;
//!
//! let connector = WalletConnector::new(Arc::new(provider), network);
//! let handle = connector.get_handle(false).await?;
//! let minted = handle.contract().token_ids().await?;
//! ```

pub mod client;
pub mod config;
pub mod contract;
pub mod conversion;
pub mod deployment;
pub mod error;

pub use client::EvmWalletProvider;
pub use config::{DEFAULT_MINT_PRICE_ETH, EvmConfig, EvmNetwork};
pub use contract::CryptoDevsContract;
pub use deployment::DeploymentInfo;
pub use error::{EvmError, Result};
