//! Widgets composing the mint screen.
pub mod footer;
pub mod header;
pub mod messages;
pub mod mint_panel;
pub mod notice;
