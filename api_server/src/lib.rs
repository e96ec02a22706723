// Portfolio API: wallet + stock transaction tracking over HTTP
pub mod domains;
pub mod routes;
pub mod shared;
