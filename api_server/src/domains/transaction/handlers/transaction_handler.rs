use crate::domains::transaction::models::{
    total_amount, BuyStockRequest, CreateTransactionRequest, SellStockRequest, Transaction,
};
use crate::shared::errors::TransactionError;
use crate::shared::middleware::ApiJson;
use crate::shared::services::AppState;
use axum::{extract::{Path, State}, http::StatusCode, Json};

// =====================================================
// Transaction Handler
// =====================================================
// 역할: 거래 관련 HTTP API 엔드포인트
//
// 처리 흐름:
// HTTP Request → Handler → TransactionService → Repository → Response
// =====================================================

type ErrorResponse = (StatusCode, Json<serde_json::Value>);

/// 전체 거래 조회 핸들러
/// List all transactions
#[utoipa::path(
    get,
    path = "/api/transactions",
    responses(
        (status = 200, description = "Transactions retrieved successfully", body = Vec<Transaction>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Transactions"
)]
pub async fn get_all_transactions(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Transaction>>, ErrorResponse> {
    let transactions = app_state
        .transaction_state
        .transaction_service
        .get_all_transactions()
        .await
        .map_err(|e: TransactionError| -> ErrorResponse { e.into() })?;

    Ok(Json(transactions))
}

/// 거래 조회 핸들러 (ID로)
/// Get transaction by ID
#[utoipa::path(
    get,
    path = "/api/transactions/{id}",
    params(
        ("id" = u64, Path, description = "Transaction ID")
    ),
    responses(
        (status = 200, description = "Transaction retrieved successfully", body = Transaction),
        (status = 404, description = "Transaction not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Transactions"
)]
pub async fn get_transaction_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Transaction>, ErrorResponse> {
    let transaction = app_state
        .transaction_state
        .transaction_service
        .get_transaction_by_id(id)
        .await
        .map_err(|e: TransactionError| -> ErrorResponse { e.into() })?;

    // 거래가 없으면 404 반환
    let transaction = transaction
        .ok_or_else(|| -> ErrorResponse { TransactionError::NotFound { id }.into() })?;

    Ok(Json(transaction))
}

/// 자산별 거래 조회 핸들러
/// List transactions for an asset
#[utoipa::path(
    get,
    path = "/api/transactions/asset/{asset_id}",
    params(
        ("asset_id" = u64, Path, description = "Asset ID")
    ),
    responses(
        (status = 200, description = "Transactions retrieved successfully", body = Vec<Transaction>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Transactions"
)]
pub async fn get_transactions_by_asset_id(
    State(app_state): State<AppState>,
    Path(asset_id): Path<u64>,
) -> Result<Json<Vec<Transaction>>, ErrorResponse> {
    let transactions = app_state
        .transaction_state
        .transaction_service
        .get_transactions_by_asset_id(asset_id)
        .await
        .map_err(|e: TransactionError| -> ErrorResponse { e.into() })?;

    Ok(Json(transactions))
}

/// 종목 코드별 거래 조회 핸들러
/// List transactions for a symbol
#[utoipa::path(
    get,
    path = "/api/transactions/symbol/{symbol}",
    params(
        ("symbol" = String, Path, description = "Ticker symbol (case-insensitive)")
    ),
    responses(
        (status = 200, description = "Transactions retrieved successfully", body = Vec<Transaction>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Transactions"
)]
pub async fn get_transactions_by_symbol(
    State(app_state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Vec<Transaction>>, ErrorResponse> {
    let transactions = app_state
        .transaction_state
        .transaction_service
        .get_transactions_by_symbol(&symbol)
        .await
        .map_err(|e: TransactionError| -> ErrorResponse { e.into() })?;

    Ok(Json(transactions))
}

/// 일반 거래 생성 핸들러
/// Create transaction handler
///
/// 기존 자산(assetId)에 대한 거래 기록만 생성합니다. 지갑 잔액은 변하지 않습니다.
/// Records a ledger entry for an existing asset; the wallet is not touched.
#[utoipa::path(
    post,
    path = "/api/transactions",
    request_body = CreateTransactionRequest,
    responses(
        (status = 200, description = "Transaction created", body = Transaction),
        (status = 400, description = "Missing field, bad number, bad type or unknown asset"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Transactions"
)]
pub async fn create_transaction(
    State(app_state): State<AppState>,
    ApiJson(request): ApiJson<CreateTransactionRequest>,
) -> Result<Json<Transaction>, ErrorResponse> {
    let command = request
        .validate()
        .map_err(|e: TransactionError| -> ErrorResponse { e.into() })?;

    let transaction = app_state
        .transaction_state
        .transaction_service
        .create_transaction(
            command.asset_id,
            &command.transaction_type,
            command.quantity,
            command.price,
        )
        .await
        .map_err(|e: TransactionError| -> ErrorResponse { e.into() })?;

    Ok(Json(transaction))
}

/// 주식 매수 핸들러
/// Buy stock handler
///
/// # Request Body
/// - symbol: 종목 코드 (필수)
/// - name: 종목명 (필수)
/// - quantity: 수량 (필수, > 0)
/// - price: 단가 (필수, > 0)
///
/// # Response
/// - 200: 매수 성공 (지갑에서 quantity × price 차감)
/// - 400: 필드 누락 / 숫자 형식 오류 / 잔액 부족
/// - 500: 서버 오류
#[utoipa::path(
    post,
    path = "/api/transactions/buy",
    request_body = BuyStockRequest,
    responses(
        (status = 200, description = "Stock bought, wallet debited", body = Transaction),
        (status = 400, description = "Missing field, bad number or insufficient balance"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Transactions"
)]
pub async fn buy_stock(
    State(app_state): State<AppState>,
    ApiJson(request): ApiJson<BuyStockRequest>,
) -> Result<Json<Transaction>, ErrorResponse> {
    let command = request.validate().map_err(|e: TransactionError| -> ErrorResponse {
        tracing::warn!(error = %e, "Buy request rejected");
        e.into()
    })?;

    let total_cost = total_amount(command.quantity, command.price)
        .map_err(|e: TransactionError| -> ErrorResponse {
            tracing::warn!(symbol = %command.symbol, error = %e, "Buy request rejected");
            e.into()
        })?;
    tracing::info!(
        symbol = %command.symbol,
        name = %command.name,
        quantity = %command.quantity,
        price = %command.price,
        total_cost = %total_cost,
        "Buy request received"
    );

    let transaction = app_state
        .transaction_state
        .transaction_service
        .buy_stock(&command.symbol, &command.name, command.quantity, command.price)
        .await
        .map_err(|e: TransactionError| -> ErrorResponse {
            tracing::warn!(symbol = %command.symbol, error = %e, "Buy failed");
            e.into()
        })?;

    tracing::info!(transaction_id = transaction.id, "Buy transaction completed");
    Ok(Json(transaction))
}

/// 주식 매도 핸들러
/// Sell stock handler: proceeds are credited to the wallet
#[utoipa::path(
    post,
    path = "/api/transactions/sell",
    request_body = SellStockRequest,
    responses(
        (status = 200, description = "Stock sold, wallet credited", body = Transaction),
        (status = 400, description = "Missing field or bad number"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Transactions"
)]
pub async fn sell_stock(
    State(app_state): State<AppState>,
    ApiJson(request): ApiJson<SellStockRequest>,
) -> Result<Json<Transaction>, ErrorResponse> {
    let command = request
        .validate()
        .map_err(|e: TransactionError| -> ErrorResponse { e.into() })?;

    let transaction = app_state
        .transaction_state
        .transaction_service
        .sell_stock(
            &command.symbol,
            command.name.as_deref(),
            command.quantity,
            command.price,
        )
        .await
        .map_err(|e: TransactionError| -> ErrorResponse {
            tracing::warn!(symbol = %command.symbol, error = %e, "Sell failed");
            e.into()
        })?;

    tracing::info!(
        transaction_id = transaction.id,
        proceeds = %transaction.total_amount,
        "Sell transaction completed"
    );
    Ok(Json(transaction))
}

/// 거래 삭제 핸들러
/// Delete transaction handler
///
/// 존재하지 않는 ID도 204를 반환합니다. 지갑 잔액은 되돌리지 않습니다.
/// Always 204, even for unknown ids. The wallet is not adjusted.
#[utoipa::path(
    delete,
    path = "/api/transactions/{id}",
    params(
        ("id" = u64, Path, description = "Transaction ID")
    ),
    responses(
        (status = 204, description = "Transaction deleted (or did not exist)"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Transactions"
)]
pub async fn delete_transaction(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ErrorResponse> {
    let deleted = app_state
        .transaction_state
        .transaction_service
        .delete_transaction(id)
        .await
        .map_err(|e: TransactionError| -> ErrorResponse { e.into() })?;

    if !deleted {
        tracing::debug!(transaction_id = id, "Delete requested for unknown transaction");
    }

    Ok(StatusCode::NO_CONTENT)
}
