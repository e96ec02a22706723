use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use crate::shared::errors::TransactionError;

// =====================================================
// Transaction 모델
// =====================================================
// 역할: 매수/매도 1건의 기록
//
// 지갑 연동:
// - buy: 지갑 잔액에서 quantity × price 차감
// - sell: 지갑 잔액에 quantity × price 입금
// =====================================================

/// 거래 유형
/// Transaction type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Buy,
    Sell,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => "buy",
            TransactionType::Sell => "sell",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 대소문자 구분 없이 파싱 ("BUY", "Sell" 등 허용)
/// Case-insensitive parsing
impl FromStr for TransactionType {
    type Err = TransactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(TransactionType::Buy),
            "sell" => Ok(TransactionType::Sell),
            _ => Err(TransactionError::InvalidType(s.to_string())),
        }
    }
}

/// 거래 기록 (DB에서 조회한 거래)
/// Transaction record
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction ID (BIGSERIAL, auto-generated)
    /// 거래 ID (DB에서 자동 생성)
    #[schema(example = 1)]
    pub id: u64,

    /// 자산 ID
    /// Asset the transaction refers to
    #[schema(example = 1)]
    pub asset_id: u64,

    #[schema(example = "AAPL")]
    pub symbol: String,

    #[schema(example = "Apple Inc.")]
    pub name: String,

    /// 'buy' 또는 'sell'
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    /// 수량 (0보다 큼)
    /// Quantity, always > 0
    #[schema(value_type = String, example = "10")]
    pub quantity: Decimal,

    /// 단가
    /// Price per unit, always > 0
    #[schema(value_type = String, example = "187.50")]
    pub price: Decimal,

    /// quantity × price
    #[schema(value_type = String, example = "1875.00")]
    pub total_amount: Decimal,

    pub created_at: DateTime<Utc>,
}

/// 저장 전 거래 (ID, 생성 시간 없음)
/// Transaction about to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub asset_id: u64,
    pub symbol: String,
    pub name: String,
    pub transaction_type: TransactionType,
    pub quantity: Decimal,
    pub price: Decimal,
}

/// quantity × price, 범위를 넘으면 AmountTooLarge
/// Checked total: overflow is a validation error, never a panic
pub fn total_amount(quantity: Decimal, price: Decimal) -> Result<Decimal, TransactionError> {
    quantity
        .checked_mul(price)
        .ok_or(TransactionError::AmountTooLarge)
}

impl NewTransaction {
    pub fn total_amount(&self) -> Result<Decimal, TransactionError> {
        total_amount(self.quantity, self.price)
    }

    /// 지갑 잔액 변화량 (매수는 음수, 매도는 양수)
    /// Signed wallet change: negative for buys, positive for sells
    pub fn wallet_delta(&self) -> Result<Decimal, TransactionError> {
        let total = self.total_amount()?;
        Ok(match self.transaction_type {
            TransactionType::Buy => -total,
            TransactionType::Sell => total,
        })
    }
}
