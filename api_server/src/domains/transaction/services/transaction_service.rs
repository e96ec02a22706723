use std::sync::Arc;
use rust_decimal::Decimal;
use crate::domains::asset::models::{normalize_symbol, Asset};
use crate::domains::transaction::models::{total_amount, NewTransaction, Transaction, TransactionType};
use crate::domains::wallet::services::WalletService;
use crate::shared::database::{AssetRepository, TransactionRepository};
use crate::shared::errors::TransactionError;

/// 거래 서비스
/// Transaction Service
///
/// 역할:
/// - 거래 기록 조회/생성/삭제
/// - 매수: 잔액 확인 → 거래 기록 + 지갑 차감 (하나의 DB 트랜잭션)
/// - 매도: 거래 기록 + 지갑 입금 (하나의 DB 트랜잭션, 보유 수량 확인 없음)
///
/// 처리 흐름:
/// 1. API Handler → TransactionService
/// 2. TransactionService → 검증 (수량, 가격, 잔액)
/// 3. TransactionService → Repository (거래 저장 + 지갑 갱신)
#[derive(Clone)]
pub struct TransactionService {
    transactions: Arc<dyn TransactionRepository>,
    assets: Arc<dyn AssetRepository>,
    wallet_service: WalletService,
}

fn database_error(action: &'static str) -> impl FnOnce(anyhow::Error) -> TransactionError {
    move |e| TransactionError::DatabaseError(format!("{}: {:#}", action, e))
}

impl TransactionService {
    pub fn new(
        transactions: Arc<dyn TransactionRepository>,
        assets: Arc<dyn AssetRepository>,
        wallet_service: WalletService,
    ) -> Self {
        Self {
            transactions,
            assets,
            wallet_service,
        }
    }

    pub async fn get_all_transactions(&self) -> Result<Vec<Transaction>, TransactionError> {
        self.transactions
            .find_all()
            .await
            .map_err(database_error("Failed to fetch transactions"))
    }

    pub async fn get_transaction_by_id(&self, id: u64) -> Result<Option<Transaction>, TransactionError> {
        self.transactions
            .find_by_id(id)
            .await
            .map_err(database_error("Failed to fetch transaction"))
    }

    pub async fn get_transactions_by_asset_id(
        &self,
        asset_id: u64,
    ) -> Result<Vec<Transaction>, TransactionError> {
        self.transactions
            .find_by_asset_id(asset_id)
            .await
            .map_err(database_error("Failed to fetch transactions by asset"))
    }

    pub async fn get_transactions_by_symbol(
        &self,
        symbol: &str,
    ) -> Result<Vec<Transaction>, TransactionError> {
        self.transactions
            .find_by_symbol(&normalize_symbol(symbol))
            .await
            .map_err(database_error("Failed to fetch transactions by symbol"))
    }

    /// 일반 거래 생성 (기존 자산 참조, 지갑 변화 없음)
    /// Record a transaction against an existing asset without moving wallet funds
    ///
    /// # Errors
    /// - 알 수 없는 거래 유형 → InvalidType
    /// - 수량/가격 <= 0 → InvalidQuantity / InvalidPrice
    /// - 존재하지 않는 자산 → AssetNotFound
    pub async fn create_transaction(
        &self,
        asset_id: u64,
        transaction_type: &str,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<Transaction, TransactionError> {
        let transaction_type: TransactionType = transaction_type.parse()?;
        validate_quantity_and_price(quantity, price)?;

        let asset = self
            .assets
            .find_by_id(asset_id)
            .await
            .map_err(database_error("Failed to fetch asset"))?
            .ok_or(TransactionError::AssetNotFound { id: asset_id })?;

        let new = new_transaction(&asset, transaction_type, quantity, price);
        self.transactions
            .create(&new)
            .await
            .map_err(database_error("Failed to create transaction"))
    }

    /// 주식 매수
    /// Buy stock: funds check, then record and debit atomically
    ///
    /// # 처리 과정
    /// 1. 수량/가격/종목 코드 검증
    /// 2. 잔액 확인 (quantity × price)
    /// 3. 자산 등록 (없으면 생성)
    /// 4. 거래 기록 + 지갑 차감 (실패 시 둘 다 롤백)
    pub async fn buy_stock(
        &self,
        symbol: &str,
        name: &str,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<Transaction, TransactionError> {
        let symbol = validate_symbol(symbol)?;
        let total_cost = validate_quantity_and_price(quantity, price)?;

        if !self.wallet_service.has_balance(total_cost).await? {
            let wallet = self.wallet_service.get_wallet().await?;
            return Err(TransactionError::InsufficientBalance {
                required: total_cost,
                available: wallet.balance,
            });
        }

        let name = match name.trim() {
            "" => symbol.as_str(),
            trimmed => trimmed,
        };
        let asset = self
            .assets
            .create_or_get(&symbol, name)
            .await
            .map_err(database_error("Failed to register asset"))?;

        let new = new_transaction(&asset, TransactionType::Buy, quantity, price);
        self.settle(new).await
    }

    /// 주식 매도
    /// Sell stock: record and credit atomically. No holdings check.
    ///
    /// `name` is only used when the symbol has never been traded before.
    pub async fn sell_stock(
        &self,
        symbol: &str,
        name: Option<&str>,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<Transaction, TransactionError> {
        let symbol = validate_symbol(symbol)?;
        let proceeds = validate_quantity_and_price(quantity, price)?;

        // 지갑이 없으면 먼저 생성 (입금 대상)
        // 입금 후 잔액이 Decimal 범위를 넘으면 거절
        let wallet = self.wallet_service.get_or_create_wallet().await?;
        if wallet.balance.checked_add(proceeds).is_none() {
            return Err(TransactionError::AmountTooLarge);
        }

        let name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(symbol.as_str());
        let asset = self
            .assets
            .create_or_get(&symbol, name)
            .await
            .map_err(database_error("Failed to register asset"))?;

        let new = new_transaction(&asset, TransactionType::Sell, quantity, price);
        self.settle(new).await
    }

    /// 거래 삭제 (지갑 잔액은 되돌리지 않음)
    /// Delete a record. Returns false when nothing had that id.
    pub async fn delete_transaction(&self, id: u64) -> Result<bool, TransactionError> {
        self.transactions
            .delete(id)
            .await
            .map_err(database_error("Failed to delete transaction"))
    }

    async fn settle(&self, new: NewTransaction) -> Result<Transaction, TransactionError> {
        let delta = new.wallet_delta()?;
        let settled = self
            .transactions
            .create_settled(&new, delta)
            .await
            .map_err(database_error("Failed to record transaction"))?;

        match settled {
            Some(transaction) => Ok(transaction),
            // 잔액 확인 이후 다른 요청이 잔액을 줄인 경우
            None if delta < Decimal::ZERO => {
                let wallet = self.wallet_service.get_wallet().await?;
                Err(TransactionError::InsufficientBalance {
                    required: -delta,
                    available: wallet.balance,
                })
            }
            None => Err(TransactionError::Internal(
                "Wallet could not be credited".to_string(),
            )),
        }
    }
}

fn validate_symbol(symbol: &str) -> Result<String, TransactionError> {
    let symbol = normalize_symbol(symbol);
    if symbol.is_empty() {
        return Err(TransactionError::InvalidSymbol);
    }
    Ok(symbol)
}

/// 수량/가격 검증 후 quantity × price 반환
fn validate_quantity_and_price(quantity: Decimal, price: Decimal) -> Result<Decimal, TransactionError> {
    if quantity <= Decimal::ZERO {
        return Err(TransactionError::InvalidQuantity);
    }
    if price <= Decimal::ZERO {
        return Err(TransactionError::InvalidPrice);
    }
    total_amount(quantity, price)
}

fn new_transaction(
    asset: &Asset,
    transaction_type: TransactionType,
    quantity: Decimal,
    price: Decimal,
) -> NewTransaction {
    NewTransaction {
        asset_id: asset.id,
        symbol: asset.symbol.clone(),
        name: asset.name.clone(),
        transaction_type,
        quantity,
        price,
    }
}
