//! Mock wallet and contract backend for testing.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::traits::{Capability, ContractError, MintContract, WalletError, WalletProvider};
use crate::types::{AccountAddress, ChainId, TransactionId, TransactionStatus, TxReceipt, Wei};

pub const MOCK_SIGNER: &str = "0x00000000000000000000000000000000000000A1";
pub const MOCK_OWNER: &str = "0x00000000000000000000000000000000000000B2";

/// Contract call recorded by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    PresaleStarted,
    PresaleEnded,
    TokenIds,
    Owner,
    StartPresale,
    PresaleMint(Wei),
    Mint(Wei),
}

/// Simulated chain and wallet state.
#[derive(Debug, Clone)]
pub struct MockState {
    pub wallet_available: bool,
    pub reject_connection: bool,
    pub chain_id: ChainId,
    pub signer: AccountAddress,
    pub owner: AccountAddress,
    pub presale_started: bool,
    /// Unix timestamp returned by `presaleEnded()`
    pub presale_ends_at: u64,
    /// Timestamp stored by a successful `startPresale()`
    pub presale_ends_at_on_start: u64,
    pub token_ids: u64,
    pub fail_reads: bool,
    pub revert_writes: bool,
    /// Writes wait on this until notified, once per write
    pub write_gate: Option<Arc<Notify>>,
    pub calls: Vec<MockCall>,
    tx_counter: u64,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            wallet_available: true,
            reject_connection: false,
            chain_id: ChainId(4),
            signer: AccountAddress::new(MOCK_SIGNER),
            owner: AccountAddress::new(MOCK_OWNER),
            presale_started: false,
            presale_ends_at: 0,
            presale_ends_at_on_start: u64::MAX,
            token_ids: 0,
            fail_reads: false,
            revert_writes: false,
            write_gate: None,
            calls: Vec::new(),
            tx_counter: 0,
        }
    }
}

/// In-memory wallet provider and collection contract.
///
/// Clones share state, so a test can keep one clone to inspect calls while
/// the code under test owns another.
#[derive(Clone, Default)]
pub struct MockMintBackend {
    state: Arc<Mutex<MockState>>,
}

impl MockMintBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    pub fn with_chain_id(self, chain_id: u64) -> Self {
        self.state().chain_id = ChainId(chain_id);
        self
    }

    pub fn with_signer(self, address: &str) -> Self {
        self.state().signer = AccountAddress::new(address);
        self
    }

    pub fn with_owner(self, address: &str) -> Self {
        self.state().owner = AccountAddress::new(address);
        self
    }

    pub fn without_wallet(self) -> Self {
        self.state().wallet_available = false;
        self
    }

    pub fn rejecting(self) -> Self {
        self.state().reject_connection = true;
        self
    }

    pub fn with_presale(self, started: bool, ends_at: u64) -> Self {
        {
            let mut state = self.state();
            state.presale_started = started;
            state.presale_ends_at = ends_at;
        }
        self
    }

    pub fn with_token_ids(self, token_ids: u64) -> Self {
        self.state().token_ids = token_ids;
        self
    }

    pub fn set_presale(&self, started: bool, ends_at: u64) {
        let mut state = self.state();
        state.presale_started = started;
        state.presale_ends_at = ends_at;
    }

    pub fn set_token_ids(&self, token_ids: u64) {
        self.state().token_ids = token_ids;
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.state().fail_reads = fail;
    }

    pub fn set_revert_writes(&self, revert: bool) {
        self.state().revert_writes = revert;
    }

    /// Hold every later write until the returned gate is notified.
    pub fn hold_writes(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.state().write_gate = Some(gate.clone());
        gate
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.state().calls.clone()
    }

    pub fn count_calls(&self, call: &MockCall) -> usize {
        self.state().calls.iter().filter(|c| *c == call).count()
    }

    fn read<T>(
        &self,
        call: MockCall,
        method: &'static str,
        value: impl FnOnce(&MockState) -> T,
    ) -> Result<T, ContractError> {
        let mut state = self.state();
        state.calls.push(call);
        if state.fail_reads {
            return Err(ContractError::CallFailed {
                method,
                reason: "mock read failure".to_string(),
            });
        }
        Ok(value(&*state))
    }

    async fn wait_for_write_gate(&self) {
        let gate = self.state().write_gate.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }

    fn write(
        &self,
        call: MockCall,
        apply: impl FnOnce(&mut MockState),
    ) -> Result<TxReceipt, ContractError> {
        let mut state = self.state();
        state.calls.push(call);
        state.tx_counter += 1;

        let transaction_id = TransactionId::new(format!("0x{:064x}", state.tx_counter));
        let status = if state.revert_writes {
            TransactionStatus::Failed {
                error: "execution reverted".to_string(),
            }
        } else {
            apply(&mut *state);
            TransactionStatus::Confirmed {
                block_height: state.tx_counter,
            }
        };

        Ok(TxReceipt {
            transaction_id,
            status,
            gas_used: 21_000,
        })
    }
}

#[async_trait]
impl WalletProvider for MockMintBackend {
    async fn connect(&self) -> Result<(), WalletError> {
        let state = self.state();
        if !state.wallet_available {
            return Err(WalletError::NoWallet("mock wallet disabled".to_string()));
        }
        if state.reject_connection {
            return Err(WalletError::Rejected);
        }
        Ok(())
    }

    async fn chain_id(&self) -> Result<ChainId, WalletError> {
        Ok(self.state().chain_id)
    }

    async fn signer_address(&self) -> Result<AccountAddress, WalletError> {
        Ok(self.state().signer.clone())
    }

    fn contract(&self, capability: Capability) -> Result<Arc<dyn MintContract>, WalletError> {
        Ok(Arc::new(MockContractHandle {
            backend: self.clone(),
            capability,
        }))
    }

    fn name(&self) -> &str {
        "Mock"
    }
}

/// Contract bound to a mock handle of a given capability.
struct MockContractHandle {
    backend: MockMintBackend,
    capability: Capability,
}

impl MockContractHandle {
    fn require_signer(&self, method: &'static str) -> Result<(), ContractError> {
        match self.capability {
            Capability::Signer => Ok(()),
            Capability::ReadOnly => Err(ContractError::ReadOnlyHandle(method)),
        }
    }
}

#[async_trait]
impl MintContract for MockContractHandle {
    async fn presale_started(&self) -> Result<bool, ContractError> {
        self.backend
            .read(MockCall::PresaleStarted, "presaleStarted", |s| s.presale_started)
    }

    async fn presale_ended(&self) -> Result<u64, ContractError> {
        self.backend
            .read(MockCall::PresaleEnded, "presaleEnded", |s| s.presale_ends_at)
    }

    async fn token_ids(&self) -> Result<u64, ContractError> {
        self.backend
            .read(MockCall::TokenIds, "tokenIds", |s| s.token_ids)
    }

    async fn owner(&self) -> Result<AccountAddress, ContractError> {
        self.backend
            .read(MockCall::Owner, "owner", |s| s.owner.clone())
    }

    async fn start_presale(&self) -> Result<TxReceipt, ContractError> {
        self.require_signer("startPresale")?;
        self.backend.wait_for_write_gate().await;
        self.backend.write(MockCall::StartPresale, |s| {
            s.presale_started = true;
            s.presale_ends_at = s.presale_ends_at_on_start;
        })
    }

    async fn presale_mint(&self, value: Wei) -> Result<TxReceipt, ContractError> {
        self.require_signer("presaleMint")?;
        self.backend.wait_for_write_gate().await;
        self.backend
            .write(MockCall::PresaleMint(value), |s| s.token_ids += 1)
    }

    async fn mint(&self, value: Wei) -> Result<TxReceipt, ContractError> {
        self.require_signer("mint")?;
        self.backend.wait_for_write_gate().await;
        self.backend.write(MockCall::Mint(value), |s| s.token_ids += 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_contract_roundtrip() {
        let backend = MockMintBackend::new().with_token_ids(3);
        let contract = backend.contract(Capability::Signer).unwrap();

        assert!(!contract.presale_started().await.unwrap());
        assert_eq!(contract.token_ids().await.unwrap(), 3);

        let receipt = contract.start_presale().await.unwrap();
        assert!(receipt.is_success());
        assert!(contract.presale_started().await.unwrap());

        let price = Wei::from_ether_str("0.01").unwrap();
        contract.presale_mint(price).await.unwrap();
        assert_eq!(contract.token_ids().await.unwrap(), 4);
        assert_eq!(backend.count_calls(&MockCall::PresaleMint(price)), 1);
    }

    #[tokio::test]
    async fn test_read_only_handle_cannot_write() {
        let backend = MockMintBackend::new();
        let contract = backend.contract(Capability::ReadOnly).unwrap();

        let err = contract.mint(Wei(1)).await.unwrap_err();
        assert!(matches!(err, ContractError::ReadOnlyHandle("mint")));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_gated_write_waits_for_release() {
        let backend = MockMintBackend::new();
        let gate = backend.hold_writes();
        let contract = backend.contract(Capability::Signer).unwrap();

        let write = tokio::spawn(async move { contract.mint(Wei(1)).await });
        tokio::task::yield_now().await;
        assert!(backend.calls().is_empty());

        gate.notify_one();
        assert!(write.await.unwrap().unwrap().is_success());
        assert_eq!(backend.count_calls(&MockCall::Mint(Wei(1))), 1);
    }

    #[tokio::test]
    async fn test_reverted_write_leaves_state() {
        let backend = MockMintBackend::new();
        backend.set_revert_writes(true);
        let contract = backend.contract(Capability::Signer).unwrap();

        let receipt = contract.mint(Wei(1)).await.unwrap();
        assert!(!receipt.is_success());
        assert_eq!(backend.state().token_ids, 0);
    }
}
