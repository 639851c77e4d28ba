//! Event loop orchestrating controller events, user input, and rendering.
//!
//! This module coordinates three main concerns:
//! - Controller event consumption and ViewModel updates (via the consumer)
//! - Keyboard input processing (activating the current control)
//! - Rendering the mint screen

use anyhow::Result;
use tokio::{
    sync::{broadcast, broadcast::error::RecvError},
    task::JoinHandle,
    time::{self, Duration},
};

use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui};
use client_frontend_core::{
    EventConsumer, MintController, MintEvent, UserAction, message::MessageEntry,
};

use super::CliEventConsumer;

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop owning the view model (through its consumer) and dispatching
/// user actions to the controller.
pub struct EventLoop {
    pub(crate) events: broadcast::Receiver<MintEvent>,
    pub(crate) controller: MintController,
    pub(crate) input: InputHandler,
    pub(crate) consumer: CliEventConsumer,
    pub(crate) cli_config: CliConfig,
    pub(crate) network_name: String,
}

impl EventLoop {
    pub fn new(
        events: broadcast::Receiver<MintEvent>,
        controller: MintController,
        consumer: CliEventConsumer,
        cli_config: CliConfig,
    ) -> Self {
        let network_name = controller.connector().required_network().name.clone();
        Self {
            events,
            controller,
            input: InputHandler::new(),
            consumer,
            cli_config,
            network_name,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<CliEventConsumer> {
        self.render(terminal)?;

        if self.cli_config.auto_connect {
            self.controller.dispatch(UserAction::ConnectWallet);
        }

        loop {
            tokio::select! {
                result = self.events.recv() => {
                    if self.handle_mint_event(result, terminal)? {
                        break;
                    }
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                }
            }
        }

        Ok(self.consumer)
    }

    /// Apply a controller event; redraw only when something changed.
    fn handle_mint_event(
        &mut self,
        result: Result<MintEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(event) => {
                let impact = self.consumer.on_event(&event);
                if impact.requires_redraw {
                    self.render(terminal)?;
                }
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("Event stream closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                self.on_lagged(skipped);
                self.render(terminal)?;
                Ok(false)
            }
        }
    }

    /// Skipped events may include a Loading reset, so ask the controller to
    /// republish the current state.
    fn on_lagged(&mut self, skipped: u64) -> JoinHandle<()> {
        tracing::warn!("Dropped {} stale events, resyncing", skipped);
        self.consumer.message_log_mut().push(MessageEntry::warning(format!(
            "Missed {} updates, refreshing",
            skipped
        )));

        let controller = self.controller.clone();
        tokio::spawn(async move { controller.resync().await })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use client_blockchain_core::mock::MockMintBackend;
    use client_blockchain_core::{RequiredNetwork, WalletConnector, Wei};
    use client_frontend_core::message::MessageLevel;
    use client_frontend_core::{FrontendConfig, ViewModel};

    use super::*;

    #[tokio::test]
    async fn lag_clears_stale_loading() {
        let connector = WalletConnector::new(
            Arc::new(MockMintBackend::new()),
            RequiredNetwork::new(4, "Rinkeby"),
        );
        let controller = MintController::new(connector, &FrontendConfig::default(), Wei(1));

        let mut view_model = ViewModel::default();
        view_model.loading = true;
        let mut event_loop = EventLoop::new(
            controller.subscribe(),
            controller,
            CliEventConsumer::new(view_model),
            CliConfig::default(),
        );

        event_loop.on_lagged(12).await.unwrap();

        let newest = event_loop.consumer.message_log().recent(1).next().cloned();
        assert_eq!(newest.map(|m| m.level), Some(MessageLevel::Warning));

        while let Ok(event) = event_loop.events.try_recv() {
            event_loop.consumer.on_event(&event);
        }
        assert!(!event_loop.consumer.view_model().loading);
    }
}
