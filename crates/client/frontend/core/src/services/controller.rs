//! Mint controller: the handlers behind every control on the mint screen.
//!
//! Handlers resolve a network-checked handle from the shared
//! [`WalletConnector`], call the contract, and report the outcome as
//! [`MintEvent`]s. They never mutate the view model themselves.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use client_blockchain_core::{
    ContractError, TransactionId, TransactionStatus, TxReceipt, WalletConnector, WalletError,
    WalletHandle, Wei,
};
use tokio::sync::{Mutex, broadcast};
use tokio::task::JoinHandle;

use crate::config::FrontendConfig;
use crate::event::MintEvent;
use crate::message::MessageEntry;
use crate::services::poller::{Poller, PollerHandle};
use crate::view_model::{Notice, UserAction};

/// Failure of a controller handler.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error("{method} reverted in transaction {transaction_id}")]
    Reverted {
        method: &'static str,
        transaction_id: TransactionId,
    },

    #[error("Another transaction is still in flight")]
    Busy,
}

#[derive(Clone, Copy, Debug)]
enum WriteCall {
    StartPresale,
    PresaleMint(Wei),
    Mint(Wei),
}

impl WriteCall {
    fn method(&self) -> &'static str {
        match self {
            WriteCall::StartPresale => "startPresale",
            WriteCall::PresaleMint(_) => "presaleMint",
            WriteCall::Mint(_) => "mint",
        }
    }
}

/// Shared handler set. Clones share the connector, event channel, poller
/// slot, in-flight flag, and Loading state.
#[derive(Clone)]
pub struct MintController {
    connector: WalletConnector,
    events: broadcast::Sender<MintEvent>,
    mint_price: Wei,
    poll_interval: Duration,
    poller: Arc<Mutex<Option<PollerHandle>>>,
    in_flight: Arc<AtomicBool>,
    loading: Arc<Mutex<bool>>,
}

impl MintController {
    pub fn new(connector: WalletConnector, config: &FrontendConfig, mint_price: Wei) -> Self {
        let (events, _) = broadcast::channel(config.channels.event_buffer);
        Self {
            connector,
            events,
            mint_price,
            poll_interval: config.polling.interval,
            poller: Arc::new(Mutex::new(None)),
            in_flight: Arc::new(AtomicBool::new(false)),
            loading: Arc::new(Mutex::new(false)),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<MintEvent> {
        self.events.subscribe()
    }

    pub fn mint_price(&self) -> Wei {
        self.mint_price
    }

    pub fn connector(&self) -> &WalletConnector {
        &self.connector
    }

    /// Whether the background poller is currently installed.
    pub async fn is_polling(&self) -> bool {
        self.poller.lock().await.is_some()
    }

    /// Run the handler for `action` in the background.
    ///
    /// Returns `None` when a transaction is already in flight; only one
    /// state-changing handler runs at a time.
    pub fn dispatch(&self, action: UserAction) -> Option<JoinHandle<()>> {
        let is_write = !matches!(action, UserAction::ConnectWallet);
        if is_write && self.in_flight.load(Ordering::Acquire) {
            tracing::debug!("Ignoring {:?}: transaction in flight", action);
            return None;
        }

        let controller = self.clone();
        Some(tokio::spawn(async move {
            let result = match action {
                UserAction::ConnectWallet => controller.connect_wallet().await,
                UserAction::StartPresale => controller.start_presale().await.map(|_| ()),
                UserAction::PresaleMint => controller.presale_mint().await.map(|_| ()),
                UserAction::PublicMint => controller.public_mint().await.map(|_| ()),
            };
            if let Err(e) = result {
                tracing::debug!("{:?} finished with error: {}", action, e);
            }
        }))
    }

    /// Stop background polling.
    pub async fn shutdown(&self) {
        if let Some(poller) = self.poller.lock().await.take() {
            poller.stop();
            tracing::info!("Poller stopped");
        }
    }

    // ------------------------------------------------------------------
    // Connection
    // ------------------------------------------------------------------

    /// Connect the wallet; on success run the initial reads and start polling.
    pub async fn connect_wallet(&self) -> Result<(), ControllerError> {
        let handle = self
            .interactive_handle(true)
            .await
            .map_err(|e| self.report("connectWallet", e))?;

        let address = handle.signer.clone();
        match &address {
            Some(address) => {
                tracing::info!("Wallet connected: {}", address);
                self.message(MessageEntry::info(format!(
                    "Connected as {}",
                    address.short()
                )));
            }
            None => tracing::info!("Wallet connected"),
        }
        self.publish(MintEvent::Connected { address });

        self.on_connected().await;
        Ok(())
    }

    /// Initial reads after the disconnected → connected transition, then the
    /// poller is started exactly once.
    async fn on_connected(&self) {
        if let Ok(true) = self.check_if_presale_started().await {
            let _ = self.check_if_presale_ended().await;
        }
        let _ = self.get_token_ids_minted().await;

        let mut slot = self.poller.lock().await;
        if slot.is_none() {
            *slot = Some(Poller::start(self.clone(), self.poll_interval));
            tracing::info!("Poller started (interval: {:?})", self.poll_interval);
        }
    }

    /// Republish the current Loading state and, once connected, re-run the
    /// status and supply reads. For consumers that missed events.
    pub async fn resync(&self) {
        {
            let loading = self.loading.lock().await;
            self.publish(MintEvent::LoadingChanged(*loading));
        }

        if !self.is_polling().await {
            return;
        }
        if let Ok(true) = self.check_if_presale_started().await {
            let _ = self.check_if_presale_ended().await;
        }
        let _ = self.get_token_ids_minted().await;
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Read `presaleStarted()`. While the presale has not started, the owner
    /// check runs too so the owner can be offered the start control.
    pub async fn check_if_presale_started(&self) -> Result<bool, ControllerError> {
        let handle = self.read_handle("presaleStarted").await?;
        let started = handle
            .contract()
            .presale_started()
            .await
            .map_err(|e| self.report("presaleStarted", e))?;
        tracing::debug!("presaleStarted: {}", started);

        if !started {
            let _ = self.get_owner().await;
        }
        self.publish(MintEvent::PresaleStarted(started));
        Ok(started)
    }

    /// Read `presaleEnded()`; the presale has ended once its timestamp is in
    /// the past.
    pub async fn check_if_presale_ended(&self) -> Result<bool, ControllerError> {
        let handle = self.read_handle("presaleEnded").await?;
        let ends_at = handle
            .contract()
            .presale_ended()
            .await
            .map_err(|e| self.report("presaleEnded", e))?;

        let ended = ends_at < unix_now();
        tracing::debug!("presaleEnded: {} (ended: {})", ends_at, ended);
        self.publish(MintEvent::PresaleEnded(ended));
        Ok(ended)
    }

    pub async fn get_token_ids_minted(&self) -> Result<u64, ControllerError> {
        let handle = self.read_handle("tokenIds").await?;
        let minted = handle
            .contract()
            .token_ids()
            .await
            .map_err(|e| self.report("tokenIds", e))?;
        self.publish(MintEvent::MintedCount(minted));
        Ok(minted)
    }

    /// Compare the contract owner with the signer, ignoring case.
    pub async fn get_owner(&self) -> Result<bool, ControllerError> {
        let handle = self.read_handle("owner").await?;
        let owner = handle
            .contract()
            .owner()
            .await
            .map_err(|e| self.report("owner", e))?;

        let signer = self
            .resolve_handle(true)
            .await
            .map_err(|e| self.report("owner", e))?;

        let is_owner = signer.signer.as_ref() == Some(&owner);
        tracing::debug!("owner: {} (signer is owner: {})", owner, is_owner);
        self.publish(MintEvent::OwnerDetected(is_owner));
        Ok(is_owner)
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    /// Owner-only: open the presale, then refresh the presale flags.
    pub async fn start_presale(&self) -> Result<TxReceipt, ControllerError> {
        let receipt = self.execute(WriteCall::StartPresale).await?;
        self.message(MessageEntry::info("Presale started"));
        let _ = self.check_if_presale_started().await;
        Ok(receipt)
    }

    pub async fn presale_mint(&self) -> Result<TxReceipt, ControllerError> {
        let receipt = self.execute(WriteCall::PresaleMint(self.mint_price)).await?;
        self.publish(MintEvent::Notice(Notice::minted()));
        Ok(receipt)
    }

    pub async fn public_mint(&self) -> Result<TxReceipt, ControllerError> {
        let handle = self
            .interactive_handle(false)
            .await
            .map_err(|e| self.report("presaleEnded", e))?;
        let ends_at = handle
            .contract()
            .presale_ended()
            .await
            .map_err(|e| self.report("presaleEnded", e))?;
        tracing::debug!("Public mint requested; presale ended at {}", ends_at);

        let receipt = self.execute(WriteCall::Mint(self.mint_price)).await?;
        self.publish(MintEvent::Notice(Notice::minted()));
        Ok(receipt)
    }

    /// Submit a write and wait for its receipt, holding the Loading gate for
    /// the duration. Loading is cleared on every path once it was set.
    async fn execute(&self, call: WriteCall) -> Result<TxReceipt, ControllerError> {
        let method = call.method();

        if self.in_flight.swap(true, Ordering::AcqRel) {
            return Err(ControllerError::Busy);
        }

        let handle = match self.interactive_handle(true).await {
            Ok(handle) => handle,
            Err(e) => {
                self.in_flight.store(false, Ordering::Release);
                return Err(self.report(method, e));
            }
        };

        self.set_loading(true).await;
        let result = match call {
            WriteCall::StartPresale => handle.contract().start_presale().await,
            WriteCall::PresaleMint(value) => handle.contract().presale_mint(value).await,
            WriteCall::Mint(value) => handle.contract().mint(value).await,
        };
        self.set_loading(false).await;
        self.in_flight.store(false, Ordering::Release);

        let receipt = match result {
            Ok(receipt) => receipt,
            Err(e) => {
                self.publish(MintEvent::Notice(Notice::failure(format!(
                    "{} failed: {}",
                    method, e
                ))));
                return Err(self.report(method, e));
            }
        };

        if let TransactionStatus::Failed { error } = &receipt.status {
            tracing::error!("{} failed in {}: {}", method, receipt.transaction_id, error);
            self.publish(MintEvent::Notice(Notice::failure(format!(
                "Transaction {} failed: {}",
                receipt.transaction_id, error
            ))));
            return Err(ControllerError::Reverted {
                method,
                transaction_id: receipt.transaction_id,
            });
        }

        tracing::info!("{} confirmed: {}", method, receipt.transaction_id);
        Ok(receipt)
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    async fn read_handle(&self, method: &'static str) -> Result<WalletHandle, ControllerError> {
        self.resolve_handle(false)
            .await
            .map_err(|e| self.report(method, e))
    }

    async fn resolve_handle(&self, wants_signer: bool) -> Result<WalletHandle, WalletError> {
        self.connector.get_handle(wants_signer).await
    }

    /// Resolve a handle for a user-initiated handler; a wrong network raises
    /// the blocking notice. Background reads only log it.
    async fn interactive_handle(&self, wants_signer: bool) -> Result<WalletHandle, WalletError> {
        self.resolve_handle(wants_signer).await.inspect_err(|e| {
            if let WalletError::WrongNetwork { expected_name, .. } = e {
                self.publish(MintEvent::Notice(Notice::wrong_network(expected_name)));
            }
        })
    }

    /// Record and publish Loading under one lock, so a resync never
    /// republishes a stale value.
    async fn set_loading(&self, loading: bool) {
        let mut current = self.loading.lock().await;
        *current = loading;
        self.publish(MintEvent::LoadingChanged(loading));
    }

    /// Log a handler failure and mirror it into the message log.
    fn report(&self, context: &str, err: impl Into<ControllerError>) -> ControllerError {
        let err = err.into();
        tracing::error!("{}: {}", context, err);
        self.message(MessageEntry::error(format!("{}: {}", context, err)));
        err
    }

    fn message(&self, entry: MessageEntry) {
        self.publish(MintEvent::Message(entry));
    }

    fn publish(&self, event: MintEvent) {
        if self.events.send(event).is_err() {
            tracing::trace!("No event subscribers");
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
