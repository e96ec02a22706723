// Shared errors
pub mod asset_error;
pub mod transaction_error;
pub mod wallet_error;

pub use asset_error::*;
pub use transaction_error::*;
pub use wallet_error::*;
