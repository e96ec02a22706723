// Asset handlers module
pub mod asset_handler;

pub use asset_handler::*;
