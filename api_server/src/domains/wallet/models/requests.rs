use serde::Deserialize;
use utoipa::ToSchema;
use rust_decimal::Decimal;

/// 입금/출금 요청
/// Deposit / withdraw request
#[derive(Debug, Deserialize, ToSchema)]
pub struct AmountRequest {
    /// 금액 (0보다 커야 함)
    /// Amount, must be greater than zero
    #[schema(value_type = Option<String>, example = "250.00")]
    pub amount: Option<Decimal>,
}

impl AmountRequest {
    /// Present and strictly positive amount, if any
    pub fn positive_amount(&self) -> Option<Decimal> {
        self.amount.filter(|amount| *amount > Decimal::ZERO)
    }
}
