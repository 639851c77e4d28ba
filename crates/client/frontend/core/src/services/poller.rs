//! Background polling of presale status and minted supply.
//!
//! Two fixed-rate timers share one period. The status timer stops itself
//! once the presale is observed ended; the supply timer runs until the
//! [`PollerHandle`] is stopped or dropped.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::services::controller::MintController;

pub struct Poller;

impl Poller {
    /// Spawn both timers. The first tick fires one period from now; the
    /// immediate reads are the caller's job.
    pub fn start(controller: MintController, period: Duration) -> PollerHandle {
        let status = tokio::spawn(Self::poll_status(controller.clone(), period));
        let supply = tokio::spawn(Self::poll_supply(controller, period));
        PollerHandle { status, supply }
    }

    async fn poll_status(controller: MintController, period: Duration) {
        let mut ticker = Self::ticker(period);
        loop {
            ticker.tick().await;

            let Ok(true) = controller.check_if_presale_started().await else {
                continue;
            };
            if let Ok(true) = controller.check_if_presale_ended().await {
                tracing::info!("Presale ended; status polling stopped");
                break;
            }
        }
    }

    async fn poll_supply(controller: MintController, period: Duration) {
        let mut ticker = Self::ticker(period);
        loop {
            ticker.tick().await;
            let _ = controller.get_token_ids_minted().await;
        }
    }

    fn ticker(period: Duration) -> time::Interval {
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        ticker
    }
}

/// Owns both polling tasks; stopping or dropping it aborts them.
#[derive(Debug)]
pub struct PollerHandle {
    status: JoinHandle<()>,
    supply: JoinHandle<()>,
}

impl PollerHandle {
    pub fn stop(&self) {
        self.status.abort();
        self.supply.abort();
    }

    /// True once the status timer has stopped (presale ended or aborted).
    pub fn status_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn supply_finished(&self) -> bool {
        self.supply.is_finished()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
