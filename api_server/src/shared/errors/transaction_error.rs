use thiserror::Error;
use axum::{http::StatusCode, Json};
use rust_decimal::Decimal;
use serde_json::json;
use crate::shared::errors::WalletError;

/// 거래 관련 에러
/// Transaction-related errors
///
/// 각 에러 종류는 하나의 HTTP 상태 코드로 고정 매핑됩니다.
/// Every variant maps to exactly one HTTP status code.
#[derive(Error, Debug)]
pub enum TransactionError {
    /// 필수 필드 누락
    /// Required field missing from the request body
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Quantity must be greater than zero")]
    InvalidQuantity,

    #[error("Price must be greater than zero")]
    InvalidPrice,

    /// 금액 계산이 Decimal 범위를 넘음
    /// quantity × price (or the resulting balance) does not fit in a Decimal
    #[error("Amount too large")]
    AmountTooLarge,

    /// 'buy' / 'sell' 이외의 거래 유형
    /// Transaction type other than 'buy' / 'sell'
    #[error("Invalid transaction type: {0} (expected 'buy' or 'sell')")]
    InvalidType(String),

    #[error("Symbol must not be empty")]
    InvalidSymbol,

    /// 참조한 자산이 존재하지 않음
    /// Referenced asset does not exist
    #[error("Asset not found: id={id}")]
    AssetNotFound { id: u64 },

    /// 거래를 찾을 수 없음
    /// Transaction not found
    #[error("Transaction not found: id={id}")]
    NotFound { id: u64 },

    /// 매수 금액 대비 지갑 잔액 부족
    /// Wallet cannot cover the purchase
    #[error("Insufficient wallet balance: required={required}, available={available}")]
    InsufficientBalance { required: Decimal, available: Decimal },

    /// 지갑 서비스 에러
    /// Error raised by the wallet service
    #[error(transparent)]
    Wallet(#[from] WalletError),

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러
    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl TransactionError {
    /// Status code for this error kind
    pub fn status_code(&self) -> StatusCode {
        match self {
            TransactionError::MissingField(_)
            | TransactionError::InvalidQuantity
            | TransactionError::InvalidPrice
            | TransactionError::AmountTooLarge
            | TransactionError::InvalidType(_)
            | TransactionError::InvalidSymbol
            | TransactionError::AssetNotFound { .. }
            | TransactionError::InsufficientBalance { .. } => StatusCode::BAD_REQUEST,
            TransactionError::NotFound { .. } => StatusCode::NOT_FOUND,
            TransactionError::Wallet(err) => err.status_code(),
            TransactionError::DatabaseError(_) | TransactionError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// TransactionError를 HTTP 응답으로 변환
impl From<TransactionError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: TransactionError) -> Self {
        (err.status_code(), Json(json!({ "error": err.to_string() })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_and_rule_violations_map_to_400() {
        let cases = [
            TransactionError::MissingField("symbol"),
            TransactionError::InvalidSymbol,
            TransactionError::InvalidQuantity,
            TransactionError::InvalidPrice,
            TransactionError::AmountTooLarge,
            TransactionError::InvalidType("hold".into()),
            TransactionError::AssetNotFound { id: 7 },
            TransactionError::InsufficientBalance {
                required: Decimal::new(500, 0),
                available: Decimal::new(100, 0),
            },
        ];

        for err in cases {
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST, "{err}");
        }
    }

    #[test]
    fn unknown_transaction_is_404_and_storage_failure_is_500() {
        assert_eq!(
            TransactionError::NotFound { id: 1 }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            TransactionError::DatabaseError("timeout".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn wallet_errors_keep_their_status_and_message() {
        let err: TransactionError =
            WalletError::InvalidAmount("Withdrawal amount must be positive".into()).into();
        let (status, Json(body)) = <(StatusCode, Json<serde_json::Value>)>::from(err);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Withdrawal amount must be positive");
    }

    #[test]
    fn missing_field_message_names_the_field() {
        assert_eq!(
            TransactionError::MissingField("price").to_string(),
            "Missing required field: price"
        );
    }
}
