// Asset domain models
pub mod asset;

pub use asset::*;
