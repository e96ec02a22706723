// Wallet domain models
pub mod wallet;
pub mod requests;

pub use wallet::*;
pub use requests::*;
