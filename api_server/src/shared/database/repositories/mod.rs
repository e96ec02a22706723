// All repositories module
pub mod traits;
pub mod wallet_repository;
pub mod asset_repository;
pub mod transaction_repository;
pub mod memory_store;

// Re-export all repositories for convenience
pub use traits::*;
pub use wallet_repository::*;
pub use asset_repository::*;
pub use transaction_repository::*;
pub use memory_store::*;
