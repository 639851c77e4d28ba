//! Deployment information for the collection contract.
//!
//! The contract address is compiled in through the
//! `CRYPTO_DEVS_CONTRACT_ADDRESS` build-time variable and can be overridden at
//! runtime with `CONTRACT_ADDRESS`.

use std::env;

use crate::config::EvmNetwork;
use crate::error::{EvmError, Result};

/// Address baked in at build time, if any.
pub const COMPILED_CONTRACT_ADDRESS: Option<&str> = option_env!("CRYPTO_DEVS_CONTRACT_ADDRESS");

/// Collection deployment metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentInfo {
    /// Network name (e.g., "rinkeby", "local")
    pub network: String,

    /// Deployed collection contract address
    pub contract_address: String,
}

impl DeploymentInfo {
    pub fn new(network: impl Into<String>, contract_address: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            contract_address: contract_address.into(),
        }
    }

    /// Resolve deployment info for `network`.
    ///
    /// `CONTRACT_ADDRESS` wins over the compiled-in address; one of the two
    /// must be present.
    pub fn from_env(network: EvmNetwork) -> Result<Self> {
        let runtime = env::var("CONTRACT_ADDRESS").ok().filter(|s| !s.is_empty());
        Self::resolve(network, runtime.as_deref(), COMPILED_CONTRACT_ADDRESS)
    }

    fn resolve(
        network: EvmNetwork,
        runtime: Option<&str>,
        compiled: Option<&str>,
    ) -> Result<Self> {
        let address = runtime.or(compiled).ok_or_else(|| {
            EvmError::InvalidConfig(
                "CONTRACT_ADDRESS not set and no address was compiled in".to_string(),
            )
        })?;

        Ok(Self::new(
            network.display_name().to_lowercase(),
            address.trim(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_address_overrides_compiled() {
        let info = DeploymentInfo::resolve(EvmNetwork::Rinkeby, Some("0xAA"), Some("0xBB")).unwrap();
        assert_eq!(info.contract_address, "0xAA");
        assert_eq!(info.network, "rinkeby");
    }

    #[test]
    fn falls_back_to_compiled_address() {
        let info = DeploymentInfo::resolve(EvmNetwork::Local, None, Some(" 0xBB ")).unwrap();
        assert_eq!(info.contract_address, "0xBB");
    }

    #[test]
    fn missing_address_is_a_config_error() {
        let err = DeploymentInfo::resolve(EvmNetwork::Local, None, None).unwrap_err();
        assert!(matches!(err, EvmError::InvalidConfig(_)));
    }
}
