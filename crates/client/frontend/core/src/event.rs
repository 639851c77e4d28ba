//! Events published by the mint controller and poller, and utilities for
//! reacting to them inside UI layers.
use client_blockchain_core::AccountAddress;

use crate::message::{MessageEntry, MessageLog};
use crate::view_model::Notice;

/// State changes reported by background handlers.
///
/// Handlers never touch the view model directly; the frontend applies these
/// through [`ViewModelUpdater`](crate::services::ViewModelUpdater).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MintEvent {
    /// Wallet handshake succeeded on the required network
    Connected { address: Option<AccountAddress> },
    PresaleStarted(bool),
    PresaleEnded(bool),
    MintedCount(u64),
    OwnerDetected(bool),
    LoadingChanged(bool),
    Notice(Notice),
    Message(MessageEntry),
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, event: &MintEvent) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
}
