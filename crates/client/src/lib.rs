//! Top-level client wiring the wallet connector to a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ WalletConnector (network-checked wallet + contract access)
//!   ├─→ MintController (handlers + poller, built by Client::run)
//!   └─→ Frontend (UI layer - CLI, etc.)
//! ```
//!
//! The frontend never sees the wallet directly; it drives the chain through
//! the controller it receives.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use client_blockchain_core::{WalletConnector, Wei};
use client_frontend_core::{FrontendConfig, MintController};

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() collects the connector, frontend, and settings
/// 2. Client::run() builds the mint controller
/// 3. Client::run() transfers control to the frontend (blocking)
/// 4. On frontend exit, background polling is stopped
pub struct Client {
    connector: WalletConnector,
    frontend: Box<dyn Frontend>,
    frontend_config: FrontendConfig,
    mint_price: Wei,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the frontend returns.
    ///
    /// # Errors
    ///
    /// Returns the frontend's error, if any.
    pub async fn run(self) -> Result<()> {
        tracing::info!(
            "Wallet backend: {} (required network: {} / {})",
            self.connector.backend_name(),
            self.connector.required_network().name,
            self.connector.required_network().chain_id
        );

        let controller = MintController::new(self.connector, &self.frontend_config, self.mint_price);

        // Run frontend (blocks until user quits)
        let mut frontend = self.frontend;
        let frontend_result = frontend.run(controller.clone()).await;

        // Cleanup background polling even if the frontend bailed out early
        controller.shutdown().await;

        frontend_result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use client_blockchain_core::RequiredNetwork;
    use client_blockchain_core::mock::{MockCall, MockMintBackend};
    use client_frontend_core::UserAction;

    use super::*;

    /// Frontend that connects once and quits.
    struct ConnectOnce;

    #[async_trait]
    impl Frontend for ConnectOnce {
        async fn run(&mut self, controller: MintController) -> Result<()> {
            let task = controller
                .dispatch(UserAction::ConnectWallet)
                .expect("connect is never gated");
            task.await?;
            assert!(controller.is_polling().await);
            Ok(())
        }
    }

    #[tokio::test]
    async fn run_stops_polling_after_frontend_exits() {
        let backend = MockMintBackend::new().with_token_ids(2);
        let connector = WalletConnector::new(
            Arc::new(backend.clone()),
            RequiredNetwork::new(4, "Rinkeby"),
        );

        let client = Client::builder()
            .wallet(connector)
            .frontend(ConnectOnce)
            .mint_price(Wei(10_000_000_000_000_000))
            .build()
            .unwrap();

        client.run().await.unwrap();
        assert_eq!(backend.count_calls(&MockCall::TokenIds), 1);
    }
}
