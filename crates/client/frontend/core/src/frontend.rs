//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;

use crate::services::MintController;

/// Frontend abstraction for UI layers.
///
/// Frontends talk to the chain only through the [`MintController`]:
/// - Subscribe to `MintEvent`s and fold them into a `ViewModel`
/// - Dispatch `UserAction`s for the current control
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, controller: MintController) -> Result<()>;
}
