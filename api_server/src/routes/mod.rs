// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합
// Routes module: combines all domain routers

use axum::{http::Method, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use crate::shared::services::AppState;

// 각 도메인의 routes import
use crate::domains::wallet::routes::create_wallet_router;
use crate::domains::asset::routes::create_asset_router;
use crate::domains::transaction::routes::create_transaction_router;

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api/wallet", create_wallet_router())
        .nest("/api/assets", create_asset_router())
        .nest("/api/transactions", create_transaction_router())
}

/// 라우터에 CORS / 요청 로깅 레이어를 붙이고 상태를 주입
/// Attach CORS and request tracing, then bind the state
pub fn create_app(router: Router<AppState>, app_state: AppState) -> Router {
    // CORS 설정: 모든 출처 허용
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

// 헬스 체크
async fn health() -> &'static str {
    "OK"
}
