//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use client_blockchain_core::{WalletConnector, Wei};
use client_frontend_core::FrontendConfig;

/// Builder for constructing a Client with proper validation.
///
/// Wallet connector, frontend, and mint price are required; the frontend
/// configuration falls back to its defaults.
#[derive(Default)]
pub struct ClientBuilder {
    connector: Option<WalletConnector>,
    frontend: Option<Box<dyn Frontend>>,
    frontend_config: Option<FrontendConfig>,
    mint_price: Option<Wei>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wallet connector (required).
    ///
    /// Every contract call the client makes goes through this connector,
    /// which enforces the required network.
    pub fn wallet(mut self, connector: WalletConnector) -> Self {
        self.connector = Some(connector);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Set polling, channel, and message settings (optional).
    pub fn config(mut self, config: FrontendConfig) -> Self {
        self.frontend_config = Some(config);
        self
    }

    /// Set the payment attached to each mint (required).
    pub fn mint_price(mut self, price: Wei) -> Self {
        self.mint_price = Some(price);
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet, frontend, or mint price is missing.
    pub fn build(self) -> Result<Client> {
        let connector = self
            .connector
            .context("Wallet connector is required. Use .wallet() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        let mint_price = self
            .mint_price
            .context("Mint price is required. Use .mint_price() to set it.")?;

        Ok(Client {
            connector,
            frontend,
            frontend_config: self.frontend_config.unwrap_or_default(),
            mint_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use client_blockchain_core::RequiredNetwork;
    use client_blockchain_core::mock::MockMintBackend;
    use client_frontend_core::MintController;

    use super::*;

    struct Idle;

    #[async_trait]
    impl Frontend for Idle {
        async fn run(&mut self, _controller: MintController) -> Result<()> {
            Ok(())
        }
    }

    fn connector() -> WalletConnector {
        WalletConnector::new(
            Arc::new(MockMintBackend::new()),
            RequiredNetwork::new(4, "Rinkeby"),
        )
    }

    #[test]
    fn missing_parts_fail_fast() {
        let err = ClientBuilder::new().frontend(Idle).mint_price(Wei(1)).build();
        assert!(err.is_err_and(|e| e.to_string().contains("Wallet connector is required")));

        let err = ClientBuilder::new().wallet(connector()).mint_price(Wei(1)).build();
        assert!(err.is_err_and(|e| e.to_string().contains("Frontend is required")));

        let err = ClientBuilder::new().wallet(connector()).frontend(Idle).build();
        assert!(err.is_err_and(|e| e.to_string().contains("Mint price is required")));
    }

    #[test]
    fn builds_with_default_config() {
        let client = ClientBuilder::new()
            .wallet(connector())
            .frontend(Idle)
            .mint_price(Wei(1))
            .build()
            .unwrap();
        assert_eq!(client.frontend_config.polling.max_supply, 20);
    }
}
