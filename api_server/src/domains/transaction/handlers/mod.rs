// Transaction handlers module
// 거래 핸들러 모듈

pub mod transaction_handler;

pub use transaction_handler::*;
