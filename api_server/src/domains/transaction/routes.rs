use axum::{
    routing::{get, post},
    Router,
};
use crate::shared::services::AppState;

use super::handlers;

/// 거래 라우터 생성
/// Create transaction router
///
/// # Routes
/// - `GET    /api/transactions` - 전체 거래
/// - `POST   /api/transactions` - 일반 거래 생성
/// - `GET    /api/transactions/:id` - 거래 조회
/// - `DELETE /api/transactions/:id` - 거래 삭제
/// - `GET    /api/transactions/asset/:asset_id` - 자산별 거래
/// - `GET    /api/transactions/symbol/:symbol` - 종목 코드별 거래
/// - `POST   /api/transactions/buy` - 매수
/// - `POST   /api/transactions/sell` - 매도
pub fn create_transaction_router() -> Router<AppState> {
    Router::new()
        .route("/",
            get(handlers::get_all_transactions)
                .post(handlers::create_transaction)
        )
        .route("/buy", post(handlers::buy_stock))
        .route("/sell", post(handlers::sell_stock))
        .route("/asset/:asset_id", get(handlers::get_transactions_by_asset_id))
        .route("/symbol/:symbol", get(handlers::get_transactions_by_symbol))
        .route("/:id",
            get(handlers::get_transaction_by_id)
                .delete(handlers::delete_transaction)
        )
}
