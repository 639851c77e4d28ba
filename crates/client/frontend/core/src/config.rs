//! Frontend configuration structures and loaders.
//!
//! This module contains settings shared across frontend implementations
//! (CLI today): polling cadence, supply cap, and channel/log sizes.

use std::env;
use std::time::Duration;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub channels: ChannelConfig,
    pub messages: MessageConfig,
    pub polling: PollingConfig,
}

impl FrontendConfig {
    pub const fn new(
        channels: ChannelConfig,
        messages: MessageConfig,
        polling: PollingConfig,
    ) -> Self {
        Self {
            channels,
            messages,
            polling,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `POLL_INTERVAL_SECS` - Seconds between chain polls (default: 5)
    /// - `MAX_SUPPLY` - Collection size shown next to the minted count (default: 20)
    /// - `EVENT_BUFFER` - Event channel capacity (default: 64)
    /// - `MESSAGE_CAPACITY` - Message log capacity (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(secs) = read_env::<u64>("POLL_INTERVAL_SECS") {
            config.polling.interval = Duration::from_secs(secs.max(1));
        }
        if let Some(supply) = read_env::<u64>("MAX_SUPPLY") {
            config.polling.max_supply = supply;
        }
        if let Some(capacity) = read_env::<usize>("EVENT_BUFFER") {
            config.channels.event_buffer = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct ChannelConfig {
    pub event_buffer: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self { event_buffer: 64 }
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

#[derive(Clone, Debug)]
pub struct PollingConfig {
    /// Period of both the presale-status and the supply timer
    pub interval: Duration,

    /// Total collection size
    pub max_supply: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            max_supply: 20,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
