// Asset services module
pub mod asset_service;
pub mod state;

pub use asset_service::*;
pub use state::*;
