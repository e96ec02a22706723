use thiserror::Error;
use axum::{http::StatusCode, Json};
use rust_decimal::Decimal;
use serde_json::json;

/// 지갑 관련 에러
/// Wallet-related errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WalletError {
    /// 0 이하의 금액
    /// Amount is zero or negative
    #[error("{0}")]
    InvalidAmount(String),

    /// 잔액 부족
    /// Insufficient balance
    #[error("Insufficient wallet balance: required={required}, available={available}")]
    InsufficientBalance { required: Decimal, available: Decimal },

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러
    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl WalletError {
    /// Status code for this error kind
    pub fn status_code(&self) -> StatusCode {
        match self {
            WalletError::InvalidAmount(_) => StatusCode::BAD_REQUEST,
            WalletError::InsufficientBalance { .. } => StatusCode::BAD_REQUEST,
            WalletError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            WalletError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// WalletError를 HTTP 응답으로 변환
impl From<WalletError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: WalletError) -> Self {
        (err.status_code(), Json(json!({ "error": err.to_string() })))
    }
}
