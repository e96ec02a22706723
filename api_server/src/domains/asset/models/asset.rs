use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use chrono::{DateTime, Utc};

/// 거래 대상 자산 (주식 종목)
/// Tradable asset, identified by its ticker symbol
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[schema(example = 1)]
    pub id: u64,

    /// 대문자로 정규화된 종목 코드 (고유)
    /// Upper-cased ticker symbol, unique
    #[schema(example = "AAPL")]
    pub symbol: String,

    #[schema(example = "Apple Inc.")]
    pub name: String,

    pub created_at: DateTime<Utc>,
}

/// 종목 코드 정규화 (앞뒤 공백 제거 + 대문자)
/// Normalize a ticker symbol: trimmed and upper-cased
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_ascii_uppercase()
}
