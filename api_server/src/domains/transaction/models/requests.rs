use serde::{de, Deserialize, Deserializer};
use utoipa::ToSchema;
use rust_decimal::Decimal;
use crate::shared::errors::TransactionError;

// =====================================================
// 거래 요청 모델
// =====================================================
// 모든 필드는 Option으로 받고, validate()에서 필수 여부를 검사합니다.
// 누락된 필드는 "Missing required field: <name>" 으로 거절됩니다.
// 숫자는 JSON 숫자와 문자열("12.5") 모두 허용합니다.
// =====================================================

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, TransactionError> {
    value.ok_or(TransactionError::MissingField(field))
}

/// ID는 JSON 숫자 또는 숫자 문자열("12") 모두 허용
#[derive(Deserialize)]
#[serde(untagged)]
enum IdInput {
    Number(u64),
    Text(String),
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IdInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IdInput::Number(id)) => Ok(Some(id)),
        Some(IdInput::Text(raw)) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid id: {raw:?}"))),
    }
}

/// 일반 거래 생성 요청
/// Generic transaction creation request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    #[schema(example = 1)]
    pub asset_id: Option<u64>,

    /// 'buy' or 'sell'
    #[serde(rename = "type")]
    #[schema(example = "buy")]
    pub transaction_type: Option<String>,

    #[schema(value_type = Option<String>, example = "10")]
    pub quantity: Option<Decimal>,

    #[schema(value_type = Option<String>, example = "187.50")]
    pub price: Option<Decimal>,
}

/// 검증된 일반 거래 생성 명령
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTransactionCommand {
    pub asset_id: u64,
    pub transaction_type: String,
    pub quantity: Decimal,
    pub price: Decimal,
}

impl CreateTransactionRequest {
    pub fn validate(self) -> Result<CreateTransactionCommand, TransactionError> {
        Ok(CreateTransactionCommand {
            asset_id: required(self.asset_id, "assetId")?,
            transaction_type: required(self.transaction_type, "type")?,
            quantity: required(self.quantity, "quantity")?,
            price: required(self.price, "price")?,
        })
    }
}

/// 주식 매수 요청
/// Buy stock request
#[derive(Debug, Deserialize, ToSchema)]
pub struct BuyStockRequest {
    #[schema(example = "AAPL")]
    pub symbol: Option<String>,

    #[schema(example = "Apple Inc.")]
    pub name: Option<String>,

    #[schema(value_type = Option<String>, example = "10")]
    pub quantity: Option<Decimal>,

    #[schema(value_type = Option<String>, example = "187.50")]
    pub price: Option<Decimal>,
}

/// 검증된 매수 명령
#[derive(Debug, Clone, PartialEq)]
pub struct BuyStockCommand {
    pub symbol: String,
    pub name: String,
    pub quantity: Decimal,
    pub price: Decimal,
}

impl BuyStockRequest {
    /// 필드 순서대로 검사: symbol → name → quantity → price
    /// Checks fields in order: symbol, name, quantity, price
    pub fn validate(self) -> Result<BuyStockCommand, TransactionError> {
        Ok(BuyStockCommand {
            symbol: required(self.symbol, "symbol")?,
            name: required(self.name, "name")?,
            quantity: required(self.quantity, "quantity")?,
            price: required(self.price, "price")?,
        })
    }
}

/// 주식 매도 요청
/// Sell stock request
#[derive(Debug, Deserialize, ToSchema)]
pub struct SellStockRequest {
    #[schema(example = "AAPL")]
    pub symbol: Option<String>,

    /// 처음 보는 종목일 때만 사용 (기본값: symbol)
    /// Used only when the symbol is not registered yet
    #[schema(example = "Apple Inc.")]
    pub name: Option<String>,

    #[schema(value_type = Option<String>, example = "5")]
    pub quantity: Option<Decimal>,

    #[schema(value_type = Option<String>, example = "190.00")]
    pub price: Option<Decimal>,
}

/// 검증된 매도 명령
#[derive(Debug, Clone, PartialEq)]
pub struct SellStockCommand {
    pub symbol: String,
    pub name: Option<String>,
    pub quantity: Decimal,
    pub price: Decimal,
}

impl SellStockRequest {
    pub fn validate(self) -> Result<SellStockCommand, TransactionError> {
        Ok(SellStockCommand {
            symbol: required(self.symbol, "symbol")?,
            name: self.name,
            quantity: required(self.quantity, "quantity")?,
            price: required(self.price, "price")?,
        })
    }
}
