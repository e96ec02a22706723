use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;

/// 자산 관련 에러
/// Asset-related errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// 자산을 찾을 수 없음
    /// Asset not found
    #[error("Asset not found: id={id}")]
    NotFound { id: u64 },

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// AssetError를 HTTP 응답으로 변환
impl From<AssetError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: AssetError) -> Self {
        let status = match &err {
            AssetError::NotFound { .. } => StatusCode::NOT_FOUND,
            AssetError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": err.to_string() })))
    }
}
