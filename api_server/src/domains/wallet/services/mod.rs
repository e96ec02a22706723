// Wallet services module
// 지갑 서비스 모듈

pub mod wallet_service;
pub mod state;

pub use wallet_service::*;
pub use state::*;
