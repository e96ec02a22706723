use std::sync::Arc;
use rust_decimal::Decimal;
use crate::domains::wallet::models::Wallet;
use crate::shared::database::WalletRepository;
use crate::shared::errors::WalletError;

/// 지갑 서비스
/// WalletService: wallet balance rules
///
/// 역할:
/// - 단일 지갑 조회/생성 (없으면 잔액 0으로 생성)
/// - 입금/출금 (엔티티 검증 후 저장)
/// - 매수 대금 차감 / 매도 대금 입금
///
/// 모든 잔액 변경은 Wallet 엔티티 검증을 먼저 거친 뒤
/// 저장소의 원자적 갱신(balance + delta >= 0 조건)으로 반영됩니다.
/// Every change passes the entity guard first, then lands through the
/// repository's conditional atomic update, so concurrent writers cannot
/// drive the balance below zero.
#[derive(Clone)]
pub struct WalletService {
    repository: Arc<dyn WalletRepository>,
}

impl WalletService {
    pub fn new(repository: Arc<dyn WalletRepository>) -> Self {
        Self { repository }
    }

    /// 지갑 조회, 없으면 생성
    /// Get the wallet, creating it with a zero balance on first access
    pub async fn get_or_create_wallet(&self) -> Result<Wallet, WalletError> {
        self.repository
            .get_or_create()
            .await
            .map_err(|e| WalletError::DatabaseError(format!("Failed to load wallet: {:#}", e)))
    }

    pub async fn get_wallet(&self) -> Result<Wallet, WalletError> {
        self.get_or_create_wallet().await
    }

    /// 입금
    /// Deposit: amount must be > 0
    pub async fn deposit(&self, amount: Decimal) -> Result<Wallet, WalletError> {
        let mut wallet = self.get_or_create_wallet().await?;
        wallet.deposit(amount)?;
        self.persist_delta(&wallet, amount).await
    }

    /// 출금
    /// Withdraw: amount must be > 0 and covered by the balance
    pub async fn withdraw(&self, amount: Decimal) -> Result<Wallet, WalletError> {
        let mut wallet = self.get_or_create_wallet().await?;
        wallet.withdraw(amount)?;
        self.persist_delta(&wallet, -amount).await
    }

    pub async fn has_balance(&self, amount: Decimal) -> Result<bool, WalletError> {
        let wallet = self.get_or_create_wallet().await?;
        Ok(wallet.has_balance(amount))
    }

    /// 매수 대금 차감 (잔액 확인 후 출금)
    /// Debit for a purchase: funds check first, then withdraw
    pub async fn deduct_balance(&self, amount: Decimal) -> Result<Wallet, WalletError> {
        let mut wallet = self.get_or_create_wallet().await?;
        if !wallet.has_balance(amount) {
            return Err(WalletError::InsufficientBalance {
                required: amount,
                available: wallet.balance,
            });
        }
        wallet.withdraw(amount)?;
        self.persist_delta(&wallet, -amount).await
    }

    /// 매도 대금 입금
    /// Credit sale proceeds
    pub async fn credit_balance(&self, amount: Decimal) -> Result<Wallet, WalletError> {
        self.deposit(amount).await
    }

    /// 검증을 통과한 변경을 저장
    /// `wallet` already carries the guarded balance; the store re-checks
    /// atomically against its current value.
    async fn persist_delta(&self, wallet: &Wallet, delta: Decimal) -> Result<Wallet, WalletError> {
        let updated = self
            .repository
            .adjust_balance(wallet.id, delta)
            .await
            .map_err(|e| WalletError::DatabaseError(format!("Failed to save wallet: {:#}", e)))?;

        match updated {
            Some(updated) => Ok(updated),
            // 다른 요청이 먼저 잔액을 바꾼 경우
            None if delta < Decimal::ZERO => {
                let current = self.get_or_create_wallet().await?;
                Err(WalletError::InsufficientBalance {
                    required: -delta,
                    available: current.balance,
                })
            }
            None => Err(WalletError::Internal(format!(
                "Wallet {} disappeared during update",
                wallet.id
            ))),
        }
    }
}
