use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use crate::shared::errors::WalletError;

// =====================================================
// Wallet 모델
// =====================================================
// 역할: 주식 매수 대금을 지불하고 매도 대금을 받는 단일 현금 계좌
// 설명: 잔액은 어떤 경로로도 음수가 될 수 없음 (balance >= 0)
//
// 잔액 변경:
// - deposit / credit: 잔액 증가
// - withdraw / debit: 잔액 감소 (잔액 부족 시 거절)
// =====================================================

/// 지갑 (단일 현금 계좌)
/// Wallet: the single cash account backing all trades
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    /// Wallet ID (assigned by storage)
    /// 지갑 ID (DB에서 자동 생성)
    #[schema(example = 1)]
    pub id: u64,

    /// Cash balance, never negative
    /// 현금 잔액 (음수 불가)
    #[schema(value_type = String, example = "1000.00")]
    pub balance: Decimal,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Wallet {
    /// 잔액 0으로 새 지갑 생성 (저장 전)
    /// New wallet with zero balance, not yet persisted
    pub fn new(id: u64) -> Self {
        let now = Utc::now();
        Self {
            id,
            balance: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    /// 입금
    /// Deposit: rejects amounts <= 0 and balances past the Decimal range
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), WalletError> {
        if amount <= Decimal::ZERO {
            return Err(WalletError::InvalidAmount(
                "Deposit amount must be positive".to_string(),
            ));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| WalletError::InvalidAmount("Amount too large".to_string()))?;
        Ok(())
    }

    /// 출금
    /// Withdraw: rejects amounts <= 0 and amounts above the balance
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), WalletError> {
        if amount <= Decimal::ZERO {
            return Err(WalletError::InvalidAmount(
                "Withdrawal amount must be positive".to_string(),
            ));
        }
        if amount > self.balance {
            return Err(WalletError::InsufficientBalance {
                required: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    pub fn has_balance(&self, amount: Decimal) -> bool {
        self.balance >= amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet_with(balance: i64) -> Wallet {
        let mut wallet = Wallet::new(1);
        wallet.balance = Decimal::new(balance, 0);
        wallet
    }

    #[test]
    fn deposit_rejects_zero_and_negative_amounts() {
        let mut wallet = wallet_with(50);

        for amount in [Decimal::ZERO, Decimal::new(-1, 0), Decimal::new(-1, 2)] {
            let err = wallet.deposit(amount).unwrap_err();
            assert!(matches!(err, WalletError::InvalidAmount(_)));
        }
        assert_eq!(wallet.balance, Decimal::new(50, 0));
    }

    #[test]
    fn deposit_past_decimal_range_is_rejected() {
        let mut wallet = wallet_with(1);

        let err = wallet.deposit(Decimal::MAX).unwrap_err();
        assert_eq!(err, WalletError::InvalidAmount("Amount too large".to_string()));
        assert_eq!(wallet.balance, Decimal::new(1, 0));
    }

    #[test]
    fn withdraw_rejects_zero_and_negative_amounts() {
        let mut wallet = wallet_with(50);

        for amount in [Decimal::ZERO, Decimal::new(-5, 0)] {
            let err = wallet.withdraw(amount).unwrap_err();
            assert!(matches!(err, WalletError::InvalidAmount(_)));
        }
        assert_eq!(wallet.balance, Decimal::new(50, 0));
    }

    #[test]
    fn withdraw_more_than_balance_leaves_balance_unchanged() {
        let mut wallet = wallet_with(50);

        let err = wallet.withdraw(Decimal::new(5001, 2)).unwrap_err();
        assert_eq!(
            err,
            WalletError::InsufficientBalance {
                required: Decimal::new(5001, 2),
                available: Decimal::new(50, 0),
            }
        );
        assert_eq!(wallet.balance, Decimal::new(50, 0));
    }

    #[test]
    fn withdraw_entire_balance_is_allowed() {
        let mut wallet = wallet_with(50);
        wallet.withdraw(Decimal::new(50, 0)).unwrap();
        assert_eq!(wallet.balance, Decimal::ZERO);
    }

    #[test]
    fn deposit_then_withdraw_restores_balance() {
        let mut wallet = wallet_with(10);
        let amount = Decimal::new(12345, 3);

        wallet.deposit(amount).unwrap();
        wallet.withdraw(amount).unwrap();

        assert_eq!(wallet.balance, Decimal::new(10, 0));
    }

    #[test]
    fn has_balance_is_inclusive() {
        let wallet = wallet_with(100);
        assert!(wallet.has_balance(Decimal::new(100, 0)));
        assert!(wallet.has_balance(Decimal::new(9999, 2)));
        assert!(!wallet.has_balance(Decimal::new(10001, 2)));
    }
}
