// Transaction domain models
pub mod transaction;
pub mod requests;

pub use transaction::*;
pub use requests::*;
