use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use portfolio_api::routes::{create_app, create_router};
use portfolio_api::shared::config::Config;
use portfolio_api::shared::database::Database;
use portfolio_api::shared::services::AppState;

// Import models for OpenAPI schema
use portfolio_api::domains::asset::models::*;
use portfolio_api::domains::transaction::models::*;
use portfolio_api::domains::wallet::models::*;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        portfolio_api::domains::wallet::handlers::wallet_handler::get_wallet,
        portfolio_api::domains::wallet::handlers::wallet_handler::deposit,
        portfolio_api::domains::wallet::handlers::wallet_handler::withdraw,
        portfolio_api::domains::asset::handlers::asset_handler::get_all_assets,
        portfolio_api::domains::asset::handlers::asset_handler::get_asset,
        portfolio_api::domains::transaction::handlers::transaction_handler::get_all_transactions,
        portfolio_api::domains::transaction::handlers::transaction_handler::get_transaction_by_id,
        portfolio_api::domains::transaction::handlers::transaction_handler::get_transactions_by_asset_id,
        portfolio_api::domains::transaction::handlers::transaction_handler::get_transactions_by_symbol,
        portfolio_api::domains::transaction::handlers::transaction_handler::create_transaction,
        portfolio_api::domains::transaction::handlers::transaction_handler::buy_stock,
        portfolio_api::domains::transaction::handlers::transaction_handler::sell_stock,
        portfolio_api::domains::transaction::handlers::transaction_handler::delete_transaction
    ),
    components(schemas(
        Wallet,
        AmountRequest,
        Asset,
        Transaction,
        TransactionType,
        CreateTransactionRequest,
        BuyStockRequest,
        SellStockRequest
    )),
    tags(
        (name = "Wallet", description = "Wallet API endpoints (single cash balance)"),
        (name = "Assets", description = "Traded asset registry"),
        (name = "Transactions", description = "Buy/sell transaction ledger")
    ),
    info(
        title = "Portfolio API Server",
        description = "Wallet and stock transaction tracking API",
        version = "1.0.0"
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<()> {
    // .env 로드 (없어도 무시)
    dotenv::dotenv().ok();
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    // DB 연결
    let db = Database::new(&config.database_url, config.database_max_connections).await?;
    db.initialize().await?;

    // AppState 생성 (모든 Service 초기화)
    let app_state = AppState::new(db);

    // Router 생성
    let router = create_router().merge(
        SwaggerUi::new("/api").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
    let app = create_app(router, app_state);

    // 서버 시작
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    tracing::info!("Server running on http://{}", address);
    tracing::info!("Swagger UI available at http://{}/api", address);

    // 서버 실행 (Ctrl+C 시 정상 종료)
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
