//! View-model layer for presentation.
//!
//! A single [`ViewModel`] holds everything the mint screen shows. It is owned
//! by the frontend event loop and only mutated through
//! [`ViewModelUpdater`](crate::services::ViewModelUpdater).

pub mod control;
pub mod notice;
pub mod presentation;

use client_blockchain_core::AccountAddress;

use crate::config::FrontendConfig;
use crate::message::MessageLog;

pub use control::{Control, UserAction};
pub use notice::{Notice, NoticeKind};
pub use presentation::PresentationMapper;

/// Wallet connection as seen by the UI.
#[derive(Clone, Debug, Default)]
pub struct ConnectionView {
    pub connected: bool,
    pub address: Option<AccountAddress>,
}

/// Presale flags derived from contract reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PresaleView {
    pub started: bool,
    pub ended: bool,
}

#[derive(Clone, Debug)]
pub struct ViewModel {
    pub connection: ConnectionView,
    pub presale: PresaleView,
    pub minted: u64,
    pub max_supply: u64,
    pub is_owner: bool,

    /// Set while a transaction is in flight
    pub loading: bool,

    /// Pending blocking alert
    pub notice: Option<Notice>,

    pub messages: MessageLog,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new(&FrontendConfig::default())
    }
}

impl ViewModel {
    pub fn new(config: &FrontendConfig) -> Self {
        Self {
            connection: ConnectionView::default(),
            presale: PresaleView::default(),
            minted: 0,
            max_supply: config.polling.max_supply,
            is_owner: false,
            loading: false,
            notice: None,
            messages: MessageLog::new(config.messages.capacity),
        }
    }

    /// Control to render, recomputed from the current flags.
    pub fn control(&self) -> Control {
        Control::resolve(
            self.connection.connected,
            self.loading,
            self.is_owner,
            self.presale.started,
            self.presale.ended,
        )
    }

    pub fn minted_text(&self) -> String {
        format!("{}/{} have been minted", self.minted, self.max_supply)
    }

    pub fn has_notice(&self) -> bool {
        self.notice.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_view_asks_for_connection() {
        let vm = ViewModel::default();
        assert_eq!(vm.control(), Control::ConnectWallet);
        assert_eq!(vm.minted_text(), "0/20 have been minted");
    }

    #[test]
    fn minted_text_uses_configured_supply() {
        let mut config = FrontendConfig::default();
        config.polling.max_supply = 100;
        let mut vm = ViewModel::new(&config);
        vm.minted = 7;
        assert_eq!(vm.minted_text(), "7/100 have been minted");
    }
}
