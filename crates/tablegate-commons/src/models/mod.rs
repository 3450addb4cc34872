//! Data models shared across tablegate crates.

pub mod schemas;
