// Transaction services module
// 거래 서비스 모듈

pub mod transaction_service;
pub mod state;

pub use transaction_service::*;
pub use state::*;
