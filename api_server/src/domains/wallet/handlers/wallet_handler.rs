use crate::domains::wallet::models::{AmountRequest, Wallet};
use crate::shared::errors::WalletError;
use crate::shared::middleware::ApiJson;
use crate::shared::services::AppState;
use axum::{extract::State, http::StatusCode, Json};

type ErrorResponse = (StatusCode, Json<serde_json::Value>);

fn invalid_amount() -> ErrorResponse {
    WalletError::InvalidAmount("amount is required and must be greater than zero".to_string()).into()
}

/// 지갑 조회 핸들러 (없으면 생성)
/// Get wallet handler: returns the wallet, creating it on first access
#[utoipa::path(
    get,
    path = "/api/wallet",
    responses(
        (status = 200, description = "Wallet retrieved successfully", body = Wallet),
        (status = 500, description = "Internal server error")
    ),
    tag = "Wallet"
)]
pub async fn get_wallet(
    State(app_state): State<AppState>,
) -> Result<Json<Wallet>, ErrorResponse> {
    let wallet = app_state
        .wallet_state
        .wallet_service
        .get_wallet()
        .await
        .map_err(|e: WalletError| -> ErrorResponse { e.into() })?;

    Ok(Json(wallet))
}

/// 입금 핸들러
/// Deposit handler
#[utoipa::path(
    post,
    path = "/api/wallet/deposit",
    request_body = AmountRequest,
    responses(
        (status = 200, description = "Deposit applied", body = Wallet),
        (status = 400, description = "Amount missing or not positive"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Wallet"
)]
pub async fn deposit(
    State(app_state): State<AppState>,
    ApiJson(request): ApiJson<AmountRequest>,
) -> Result<Json<Wallet>, ErrorResponse> {
    let amount = request.positive_amount().ok_or_else(invalid_amount)?;

    let wallet = app_state
        .wallet_state
        .wallet_service
        .deposit(amount)
        .await
        .map_err(|e: WalletError| -> ErrorResponse { e.into() })?;

    tracing::info!(%amount, balance = %wallet.balance, "Deposit applied");
    Ok(Json(wallet))
}

/// 출금 핸들러
/// Withdraw handler: insufficient funds is a 400
#[utoipa::path(
    post,
    path = "/api/wallet/withdraw",
    request_body = AmountRequest,
    responses(
        (status = 200, description = "Withdrawal applied", body = Wallet),
        (status = 400, description = "Amount missing, not positive, or above the balance"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Wallet"
)]
pub async fn withdraw(
    State(app_state): State<AppState>,
    ApiJson(request): ApiJson<AmountRequest>,
) -> Result<Json<Wallet>, ErrorResponse> {
    let amount = request.positive_amount().ok_or_else(invalid_amount)?;

    let wallet = app_state
        .wallet_state
        .wallet_service
        .withdraw(amount)
        .await
        .map_err(|e: WalletError| -> ErrorResponse {
            tracing::warn!(%amount, error = %e, "Withdrawal rejected");
            e.into()
        })?;

    tracing::info!(%amount, balance = %wallet.balance, "Withdrawal applied");
    Ok(Json(wallet))
}
