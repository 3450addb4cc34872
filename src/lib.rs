//! tablegate server
//!
//! Wires configuration, logging, the administration client and the
//! `tablegate-api` routes into an actix-web HTTP server.

pub mod lifecycle;
pub mod logging;
pub mod middleware;

pub use tablegate_configs as config;
