// Domain modules
pub mod wallet;
pub mod asset;
pub mod transaction;
