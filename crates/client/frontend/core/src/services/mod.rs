//! Services that drive the mint screen: handlers, polling, and the reducer.

pub mod controller;
pub mod poller;
pub mod updater;

pub use controller::{ControllerError, MintController};
pub use poller::{Poller, PollerHandle};
pub use updater::{UpdateScope, ViewModelUpdater};
