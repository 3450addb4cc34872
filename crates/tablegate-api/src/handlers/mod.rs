//! HTTP request handlers
//!
//! Thin actix-web adapters over the transport-independent router.

mod health;
mod table;

pub use health::healthz_handler;
pub use table::table_resource_handler;
