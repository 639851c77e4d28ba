//! Glue code tying the mint controller and the terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use crate::config::CliConfig;
use crate::event::{CliEventConsumer, EventLoop};
use crate::presentation::terminal;
use client_frontend_core::{Frontend, FrontendConfig, MintController, ViewModel};

/// Terminal frontend.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, controller: MintController) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        // Subscribe before anything can publish
        let events = controller.subscribe();

        let mut view_model = ViewModel::new(&self.frontend_config);
        view_model.messages.push_text(format!(
            "Welcome! Mint price is {}",
            controller.mint_price()
        ));

        let event_loop = EventLoop::new(
            events,
            controller.clone(),
            CliEventConsumer::new(view_model),
            self.cli_config.clone(),
        );

        let mut terminal = terminal::init()?;
        let guard = terminal::TerminalGuard::arm();

        let result = event_loop.run(&mut terminal).await;

        controller.shutdown().await;
        guard.finish()?;
        tracing::info!("CLI frontend exiting");

        result.map(|_| ())
    }
}
