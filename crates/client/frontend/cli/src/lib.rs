//! Terminal UI frontend for the Crypto Devs mint client.
//!
//! This crate implements the `client_frontend_core::Frontend` trait with
//! ratatui and crossterm.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives a `MintController` for all chain interaction
//! - Folds `MintEvent`s into its view model
//! - Maps key presses to the action of the current control

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
