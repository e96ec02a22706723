use std::sync::atomic::{AtomicBool, Ordering};
use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use crate::domains::wallet::models::Wallet;
use crate::domains::asset::models::Asset;
use crate::domains::transaction::models::{NewTransaction, Transaction};
use super::traits::{AssetRepository, TransactionRepository, WalletRepository};

/// 메모리 저장소 (테스트용)
/// In-memory store implementing every repository trait.
///
/// 하나의 Mutex로 지갑/자산/거래를 함께 보호하므로
/// create_settled는 PostgreSQL 트랜잭션과 같은 원자성을 가집니다.
/// A single mutex guards wallet, assets and transactions, so
/// `create_settled` is atomic just like the PostgreSQL version.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<MemoryState>,
    fail_writes: AtomicBool,
}

#[derive(Default)]
struct MemoryState {
    wallet: Option<Wallet>,
    wallets_created: usize,
    assets: Vec<Asset>,
    transactions: Vec<Transaction>,
    next_asset_id: u64,
    next_transaction_id: u64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 지갑이 생성된 횟수
    /// Number of wallet rows ever created
    #[cfg(any(test, feature = "test-util"))]
    pub fn wallets_created(&self) -> usize {
        self.state.lock().wallets_created
    }

    #[cfg(any(test, feature = "test-util"))]
    pub fn transaction_count(&self) -> usize {
        self.state.lock().transactions.len()
    }

    /// 이후 모든 쓰기 작업을 실패시킴 (저장소 장애 시뮬레이션)
    /// Make every following write fail, to exercise storage-failure paths
    #[cfg(any(test, feature = "test-util"))]
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// 잔액을 직접 설정 (서비스를 거치지 않음)
    /// Overwrite the stored balance without going through the services
    #[cfg(any(test, feature = "test-util"))]
    pub fn force_balance(&self, balance: Decimal) {
        if let Some(wallet) = self.state.lock().wallet.as_mut() {
            wallet.balance = balance;
        }
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            bail!("in-memory store is rejecting writes");
        }
        Ok(())
    }
}

impl MemoryState {
    fn apply_delta(&mut self, delta: Decimal) -> Option<Wallet> {
        let wallet = self.wallet.as_mut()?;
        let balance = wallet.balance.checked_add(delta)?;
        if balance < Decimal::ZERO {
            return None;
        }
        wallet.balance = balance;
        wallet.updated_at = Utc::now();
        Some(wallet.clone())
    }

    fn insert_transaction(&mut self, new: &NewTransaction) -> Result<Transaction> {
        let total_amount = new.total_amount()?;
        if !self.assets.iter().any(|asset| asset.id == new.asset_id) {
            bail!("asset {} does not exist", new.asset_id);
        }

        self.next_transaction_id += 1;
        let transaction = Transaction {
            id: self.next_transaction_id,
            asset_id: new.asset_id,
            symbol: new.symbol.clone(),
            name: new.name.clone(),
            transaction_type: new.transaction_type,
            quantity: new.quantity,
            price: new.price,
            total_amount,
            created_at: Utc::now(),
        };
        self.transactions.push(transaction.clone());
        Ok(transaction)
    }
}

#[async_trait]
impl WalletRepository for InMemoryStore {
    async fn get_or_create(&self) -> Result<Wallet> {
        let mut state = self.state.lock();
        if let Some(wallet) = &state.wallet {
            return Ok(wallet.clone());
        }

        self.check_writable()?;
        state.wallets_created += 1;
        let wallet = Wallet::new(state.wallets_created as u64);
        state.wallet = Some(wallet.clone());
        Ok(wallet)
    }

    async fn adjust_balance(&self, wallet_id: u64, delta: Decimal) -> Result<Option<Wallet>> {
        self.check_writable()?;
        let mut state = self.state.lock();
        if state.wallet.as_ref().map(|wallet| wallet.id) != Some(wallet_id) {
            return Ok(None);
        }
        Ok(state.apply_delta(delta))
    }
}

#[async_trait]
impl AssetRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Asset>> {
        let mut assets = self.state.lock().assets.clone();
        assets.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        Ok(assets)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Asset>> {
        let state = self.state.lock();
        Ok(state.assets.iter().find(|asset| asset.id == id).cloned())
    }

    async fn create_or_get(&self, symbol: &str, name: &str) -> Result<Asset> {
        let mut state = self.state.lock();
        if let Some(asset) = state.assets.iter().find(|asset| asset.symbol == symbol) {
            return Ok(asset.clone());
        }

        self.check_writable()?;
        state.next_asset_id += 1;
        let asset = Asset {
            id: state.next_asset_id,
            symbol: symbol.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        state.assets.push(asset.clone());
        Ok(asset)
    }
}

#[async_trait]
impl TransactionRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Transaction>> {
        Ok(self.state.lock().transactions.clone())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Transaction>> {
        let state = self.state.lock();
        Ok(state.transactions.iter().find(|tx| tx.id == id).cloned())
    }

    async fn find_by_asset_id(&self, asset_id: u64) -> Result<Vec<Transaction>> {
        let state = self.state.lock();
        Ok(state
            .transactions
            .iter()
            .filter(|tx| tx.asset_id == asset_id)
            .cloned()
            .collect())
    }

    async fn find_by_symbol(&self, symbol: &str) -> Result<Vec<Transaction>> {
        let state = self.state.lock();
        Ok(state
            .transactions
            .iter()
            .filter(|tx| tx.symbol == symbol)
            .cloned()
            .collect())
    }

    async fn create(&self, new: &NewTransaction) -> Result<Transaction> {
        self.check_writable()?;
        self.state.lock().insert_transaction(new)
    }

    async fn create_settled(
        &self,
        new: &NewTransaction,
        wallet_delta: Decimal,
    ) -> Result<Option<Transaction>> {
        self.check_writable()?;
        let mut state = self.state.lock();

        // 지갑 갱신이 불가능하면 아무것도 기록하지 않음
        let Some(wallet) = state.wallet.as_ref() else {
            return Ok(None);
        };
        match wallet.balance.checked_add(wallet_delta) {
            Some(balance) if balance >= Decimal::ZERO => {}
            _ => return Ok(None),
        }

        let transaction = state.insert_transaction(new)?;
        state.apply_delta(wallet_delta);
        Ok(Some(transaction))
    }

    async fn delete(&self, id: u64) -> Result<bool> {
        self.check_writable()?;
        let mut state = self.state.lock();
        let before = state.transactions.len();
        state.transactions.retain(|tx| tx.id != id);
        Ok(state.transactions.len() != before)
    }
}
