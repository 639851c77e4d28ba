//! ViewModelUpdater: the single reducer over the mint screen state.
//!
//! # Architecture
//!
//! - `UpdateScope`: Bitflags tracking which parts of ViewModel changed (for selective rendering)
//! - `ViewModelUpdater`: Stateless service applying `MintEvent`s to the ViewModel

use bitflags::bitflags;

use crate::event::MintEvent;
use crate::view_model::ViewModel;

// ============================================================================
// UpdateScope - Fine-grained change tracking
// ============================================================================

bitflags! {
    /// Tracks which parts of ViewModel have been updated.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct UpdateScope: u32 {
        /// Connection flag or signer address changed.
        const CONNECTION = 0b0000_0001;

        /// Presale started/ended flags changed.
        const PRESALE    = 0b0000_0010;

        /// Minted count changed.
        const SUPPLY     = 0b0000_0100;

        /// Owner flag changed.
        const OWNER      = 0b0000_1000;

        /// Loading gate toggled.
        const LOADING    = 0b0001_0000;

        /// Notice raised or dismissed.
        const NOTICE     = 0b0010_0000;

        /// Message log appended.
        const MESSAGES   = 0b0100_0000;

        /// Anything that can change which control is shown.
        const CONTROL = Self::CONNECTION.bits()
                      | Self::PRESALE.bits()
                      | Self::OWNER.bits()
                      | Self::LOADING.bits();

        const ALL = Self::CONTROL.bits()
                  | Self::SUPPLY.bits()
                  | Self::NOTICE.bits()
                  | Self::MESSAGES.bits();
    }
}

impl UpdateScope {
    /// Returns true if the rendered control may have changed.
    pub fn affects_control(&self) -> bool {
        self.intersects(Self::CONTROL)
    }
}

impl Default for UpdateScope {
    fn default() -> Self {
        Self::empty()
    }
}

// ============================================================================
// ViewModelUpdater - Event-driven ViewModel updates
// ============================================================================

/// Stateless reducer from `MintEvent` to ViewModel changes.
///
/// Returns the scope that actually changed; re-applying an event that
/// carries the current value yields an empty scope.
pub struct ViewModelUpdater;

impl ViewModelUpdater {
    pub fn update(view_model: &mut ViewModel, event: &MintEvent) -> UpdateScope {
        match event {
            MintEvent::Connected { address } => {
                view_model.connection.connected = true;
                view_model.connection.address = address.clone();
                UpdateScope::CONNECTION
            }

            MintEvent::PresaleStarted(started) => {
                Self::set(&mut view_model.presale.started, *started, UpdateScope::PRESALE)
            }

            MintEvent::PresaleEnded(ended) => {
                Self::set(&mut view_model.presale.ended, *ended, UpdateScope::PRESALE)
            }

            MintEvent::MintedCount(count) => {
                Self::set(&mut view_model.minted, *count, UpdateScope::SUPPLY)
            }

            MintEvent::OwnerDetected(is_owner) => {
                Self::set(&mut view_model.is_owner, *is_owner, UpdateScope::OWNER)
            }

            MintEvent::LoadingChanged(loading) => {
                Self::set(&mut view_model.loading, *loading, UpdateScope::LOADING)
            }

            MintEvent::Notice(notice) => {
                view_model.notice = Some(notice.clone());
                UpdateScope::NOTICE
            }

            MintEvent::Message(entry) => {
                view_model.messages.push(entry.clone());
                UpdateScope::MESSAGES
            }
        }
    }

    /// Clear the pending notice after the user acknowledged it.
    pub fn dismiss_notice(view_model: &mut ViewModel) -> UpdateScope {
        match view_model.notice.take() {
            Some(_) => UpdateScope::NOTICE,
            None => UpdateScope::empty(),
        }
    }

    fn set<T: PartialEq>(field: &mut T, value: T, scope: UpdateScope) -> UpdateScope {
        if *field == value {
            return UpdateScope::empty();
        }
        *field = value;
        scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageEntry;
    use crate::view_model::{Control, Notice};
    use client_blockchain_core::AccountAddress;

    #[test]
    fn connect_then_presale_flow() {
        let mut vm = ViewModel::default();

        let scope = ViewModelUpdater::update(
            &mut vm,
            &MintEvent::Connected {
                address: Some(AccountAddress::new("0xabc")),
            },
        );
        assert!(scope.affects_control());
        assert_eq!(vm.control(), Control::PresaleNotStarted);

        ViewModelUpdater::update(&mut vm, &MintEvent::OwnerDetected(true));
        assert_eq!(vm.control(), Control::StartPresale);

        ViewModelUpdater::update(&mut vm, &MintEvent::LoadingChanged(true));
        assert_eq!(vm.control(), Control::Loading);

        ViewModelUpdater::update(&mut vm, &MintEvent::LoadingChanged(false));
        ViewModelUpdater::update(&mut vm, &MintEvent::PresaleStarted(true));
        assert_eq!(vm.control(), Control::PresaleMint);

        ViewModelUpdater::update(&mut vm, &MintEvent::PresaleEnded(true));
        assert_eq!(vm.control(), Control::PublicMint);
    }

    #[test]
    fn unchanged_values_report_empty_scope() {
        let mut vm = ViewModel::default();
        assert_eq!(
            ViewModelUpdater::update(&mut vm, &MintEvent::MintedCount(3)),
            UpdateScope::SUPPLY
        );
        assert_eq!(
            ViewModelUpdater::update(&mut vm, &MintEvent::MintedCount(3)),
            UpdateScope::empty()
        );
        assert_eq!(vm.minted_text(), "3/20 have been minted");
    }

    #[test]
    fn notice_is_held_until_dismissed() {
        let mut vm = ViewModel::default();
        ViewModelUpdater::update(&mut vm, &MintEvent::Notice(Notice::minted()));
        assert!(vm.has_notice());

        assert_eq!(ViewModelUpdater::dismiss_notice(&mut vm), UpdateScope::NOTICE);
        assert!(!vm.has_notice());
        assert!(ViewModelUpdater::dismiss_notice(&mut vm).is_empty());
    }

    #[test]
    fn messages_are_appended() {
        let mut vm = ViewModel::default();
        let scope = ViewModelUpdater::update(
            &mut vm,
            &MintEvent::Message(MessageEntry::error("tokenIds failed")),
        );
        assert_eq!(scope, UpdateScope::MESSAGES);
        assert_eq!(vm.messages.len(), 1);
    }
}
