// Transaction domain state
// 거래 도메인 상태
use crate::domains::transaction::services::TransactionService;

/// Transaction domain state
/// 거래 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct TransactionState {
    pub transaction_service: TransactionService,
}

impl TransactionState {
    pub fn new(transaction_service: TransactionService) -> Self {
        Self { transaction_service }
    }
}
