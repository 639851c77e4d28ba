//! Poller timing with paused tokio time.

use std::sync::Arc;
use std::time::Duration;

use client_blockchain_core::mock::{MockCall, MockMintBackend};
use client_blockchain_core::{RequiredNetwork, WalletConnector, Wei};
use client_frontend_core::{FrontendConfig, MintController, Poller};
use tokio::time::sleep;

fn controller(backend: &MockMintBackend) -> MintController {
    let connector = WalletConnector::new(
        Arc::new(backend.clone()),
        RequiredNetwork::new(4, "Rinkeby"),
    );
    MintController::new(
        connector,
        &FrontendConfig::default(),
        Wei(10_000_000_000_000_000),
    )
}

#[tokio::test(start_paused = true)]
async fn status_poll_stops_once_presale_ended() {
    let backend = MockMintBackend::new().with_presale(true, 0);
    let controller = controller(&backend);

    controller.connect_wallet().await.unwrap();
    assert_eq!(backend.count_calls(&MockCall::PresaleStarted), 1);

    sleep(Duration::from_secs(31)).await;

    // One tick observed the end and stopped the status timer
    assert_eq!(backend.count_calls(&MockCall::PresaleStarted), 2);
    assert_eq!(backend.count_calls(&MockCall::PresaleEnded), 2);

    // Supply polling keeps going
    assert!(backend.count_calls(&MockCall::TokenIds) >= 6);

    controller.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn status_poll_runs_until_end_is_observed() {
    let backend = MockMintBackend::new().with_presale(true, u64::MAX);
    let controller = controller(&backend);

    controller.connect_wallet().await.unwrap();
    sleep(Duration::from_secs(16)).await;
    assert!(backend.count_calls(&MockCall::PresaleStarted) >= 4);

    backend.set_presale(true, 0);
    sleep(Duration::from_secs(6)).await;
    let observed = backend.count_calls(&MockCall::PresaleStarted);

    sleep(Duration::from_secs(30)).await;
    assert_eq!(backend.count_calls(&MockCall::PresaleStarted), observed);

    controller.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn presale_not_started_keeps_checking_owner() {
    let backend = MockMintBackend::new();
    let controller = controller(&backend);

    controller.connect_wallet().await.unwrap();
    sleep(Duration::from_secs(11)).await;

    assert_eq!(backend.count_calls(&MockCall::PresaleStarted), 3);
    assert_eq!(backend.count_calls(&MockCall::Owner), 3);
    assert_eq!(backend.count_calls(&MockCall::PresaleEnded), 0);

    controller.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn shutdown_stops_supply_polling() {
    let backend = MockMintBackend::new();
    let controller = controller(&backend);

    controller.connect_wallet().await.unwrap();
    sleep(Duration::from_secs(6)).await;
    controller.shutdown().await;

    let polled = backend.count_calls(&MockCall::TokenIds);
    sleep(Duration::from_secs(30)).await;
    assert_eq!(backend.count_calls(&MockCall::TokenIds), polled);
    assert!(!controller.is_polling().await);
}

#[tokio::test(start_paused = true)]
async fn poller_handle_reports_status_timer_exit() {
    let backend = MockMintBackend::new().with_presale(true, 0);
    let controller = controller(&backend);

    let handle = Poller::start(controller, Duration::from_secs(5));
    sleep(Duration::from_secs(6)).await;

    assert!(handle.status_finished());
    assert!(!handle.supply_finished());
    handle.stop();
}
