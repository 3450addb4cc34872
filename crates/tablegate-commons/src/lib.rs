//! tablegate-commons
//!
//! Schema model and the administration client interface shared by the
//! tablegate crates.
//!
//! ## Contents
//!
//! - [`models::schemas`]: table and column-family descriptors with the
//!   system default attribute values
//! - [`admin`]: the `TableAdmin` / `TableHandle` traits the REST layer
//!   delegates every mutation and metadata query to
//! - [`errors`]: `AdminError`, the error type of the administration client

pub mod admin;
pub mod errors;
pub mod models;

pub use admin::{TableAdmin, TableHandle};
pub use errors::{AdminError, Result};
pub use models::schemas;
pub use models::schemas::{ColumnFamilyDescriptor, Compression, TableDescriptor};
