// Wallet handlers module
// 지갑 핸들러 모듈

pub mod wallet_handler;

pub use wallet_handler::*;
