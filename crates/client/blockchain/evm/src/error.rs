//! Error types for EVM blockchain operations.

use client_blockchain_core::{AmountError, ContractError, WalletError};
use thiserror::Error;

/// Errors that can occur while configuring or talking to an EVM node.
#[derive(Debug, Error)]
pub enum EvmError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid signer key: {0}")]
    InvalidSigner(String),

    #[error("Invalid contract address: {0}")]
    InvalidAddress(String),

    #[error("Invalid mint price: {0}")]
    InvalidPrice(#[from] AmountError),
}

pub type Result<T> = std::result::Result<T, EvmError>;

impl From<EvmError> for WalletError {
    fn from(err: EvmError) -> Self {
        match err {
            EvmError::Network(reason) => WalletError::NetworkError(reason),
            other => WalletError::ConfigError(other.to_string()),
        }
    }
}

/// Map an alloy contract error onto the read-call variant.
pub(crate) fn call_failed(method: &'static str, err: impl std::fmt::Display) -> ContractError {
    ContractError::CallFailed {
        method,
        reason: err.to_string(),
    }
}

pub(crate) fn submission_failed(
    method: &'static str,
    err: impl std::fmt::Display,
) -> ContractError {
    ContractError::SubmissionFailed {
        method,
        reason: err.to_string(),
    }
}

pub(crate) fn confirmation_failed(
    method: &'static str,
    err: impl std::fmt::Display,
) -> ContractError {
    ContractError::ConfirmationFailed {
        method,
        reason: err.to_string(),
    }
}
