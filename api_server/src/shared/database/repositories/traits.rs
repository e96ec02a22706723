use async_trait::async_trait;
use anyhow::Result;
use rust_decimal::Decimal;
use crate::domains::wallet::models::Wallet;
use crate::domains::asset::models::Asset;
use crate::domains::transaction::models::{NewTransaction, Transaction};

// =====================================================
// Repository traits
// =====================================================
// 서비스는 구체 구현이 아닌 trait에 의존합니다.
// - Pg*Repository: PostgreSQL 구현 (운영)
// - InMemoryStore: 메모리 구현 (테스트)
// =====================================================

/// 지갑 저장소
/// Wallet persistence
#[async_trait]
pub trait WalletRepository: Send + Sync {
    /// 단일 지갑 조회, 없으면 잔액 0으로 생성
    /// Fetch the single wallet row, creating it with a zero balance if absent
    async fn get_or_create(&self) -> Result<Wallet>;

    /// 잔액을 delta만큼 원자적으로 변경
    /// Atomically apply `balance += delta`.
    /// Returns `None` when the result would be negative (row left untouched)
    /// or when no wallet has the given id.
    async fn adjust_balance(&self, wallet_id: u64, delta: Decimal) -> Result<Option<Wallet>>;
}

/// 자산 저장소
/// Asset persistence
#[async_trait]
pub trait AssetRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Asset>>;

    async fn find_by_id(&self, id: u64) -> Result<Option<Asset>>;

    /// 종목 등록 (이미 있으면 기존 자산 반환, 이름은 변경하지 않음)
    /// Register a symbol, or return the existing asset unchanged
    async fn create_or_get(&self, symbol: &str, name: &str) -> Result<Asset>;
}

/// 거래 저장소
/// Transaction persistence
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Transaction>>;

    async fn find_by_id(&self, id: u64) -> Result<Option<Transaction>>;

    async fn find_by_asset_id(&self, asset_id: u64) -> Result<Vec<Transaction>>;

    async fn find_by_symbol(&self, symbol: &str) -> Result<Vec<Transaction>>;

    /// 거래 기록만 저장 (지갑 변화 없음)
    /// Store a record without touching the wallet
    async fn create(&self, new: &NewTransaction) -> Result<Transaction>;

    /// 거래 저장 + 지갑 잔액 변경을 하나의 트랜잭션으로 처리
    /// Store a record and apply `wallet_delta` to the wallet as one unit.
    /// Returns `None`, with nothing written, when the wallet cannot absorb the delta.
    async fn create_settled(
        &self,
        new: &NewTransaction,
        wallet_delta: Decimal,
    ) -> Result<Option<Transaction>>;

    /// 삭제된 행이 있으면 true
    /// True when a row was deleted
    async fn delete(&self, id: u64) -> Result<bool>;
}
