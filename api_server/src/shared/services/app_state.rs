use std::sync::Arc;
use crate::shared::database::{
    AssetRepository, Database, PgAssetRepository, PgTransactionRepository, PgWalletRepository,
    TransactionRepository, WalletRepository,
};
use crate::domains::wallet::services::{WalletService, WalletState};
use crate::domains::asset::services::{AssetService, AssetState};
use crate::domains::transaction::services::{TransactionService, TransactionState};

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 각 도메인의 State를 조합하여 전체 애플리케이션 상태를 관리
#[derive(Clone)]
pub struct AppState {
    pub wallet_state: WalletState,
    pub asset_state: AssetState,
    pub transaction_state: TransactionState,
}

impl AppState {
    /// Create AppState with database
    /// PostgreSQL 저장소로 모든 도메인 State를 초기화
    pub fn new(db: Database) -> Self {
        let pool = db.pool().clone();
        Self::with_repositories(
            Arc::new(PgWalletRepository::new(pool.clone())),
            Arc::new(PgAssetRepository::new(pool.clone())),
            Arc::new(PgTransactionRepository::new(pool)),
        )
    }

    /// 저장소를 직접 주입 (테스트에서 InMemoryStore 사용)
    /// Build the state from any repository implementations
    pub fn with_repositories(
        wallets: Arc<dyn WalletRepository>,
        assets: Arc<dyn AssetRepository>,
        transactions: Arc<dyn TransactionRepository>,
    ) -> Self {
        // 1. 공유 서비스 생성 (지갑 서비스는 거래 도메인에서도 사용)
        let wallet_service = WalletService::new(wallets);

        // 2. 각 도메인 State 생성
        let asset_state = AssetState::new(AssetService::new(assets.clone()));
        let transaction_state = TransactionState::new(TransactionService::new(
            transactions,
            assets,
            wallet_service.clone(),
        ));
        let wallet_state = WalletState::new(wallet_service);

        // 3. AppState 조합
        Self {
            wallet_state,
            asset_state,
            transaction_state,
        }
    }
}
