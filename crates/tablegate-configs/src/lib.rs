//! tablegate-configs
//!
//! Server configuration types and loader for tablegate.

pub mod config;

pub use config::defaults;
pub use config::*;
