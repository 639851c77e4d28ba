//! Cross-frontend primitives for the mint screen.
//!
//! Houses the view model and its reducer, the mint controller with its
//! background poller, message logging, and configuration that both the CLI
//! and future graphical clients can reuse.
pub mod config;
pub mod event;
pub mod frontend;
pub mod message;
pub mod services;
pub mod view_model;

pub use config::{ChannelConfig, FrontendConfig, MessageConfig, PollingConfig};
pub use event::{EventConsumer, EventImpact, MintEvent};
pub use frontend::Frontend;
pub use services::{
    ControllerError, MintController, Poller, PollerHandle, UpdateScope, ViewModelUpdater,
};
pub use view_model::{Control, Notice, NoticeKind, UserAction, ViewModel};
