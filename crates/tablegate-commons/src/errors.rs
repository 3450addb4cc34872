//! Error type of the table administration client.

use thiserror::Error;

/// Errors raised by a [`TableAdmin`](crate::TableAdmin) implementation.
///
/// The REST layer maps `TableNotFound` to 404 and every other variant to a
/// server error, keeping the message intact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Table already exists: {0}")]
    TableExists(String),

    #[error("Column family {family} not found in table {table}")]
    FamilyNotFound { table: String, family: String },

    /// Operation requires the table to be disabled first
    #[error("Table is enabled: {0}")]
    TableEnabled(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Transport or remote failure
    #[error("{0}")]
    Remote(String),
}

impl AdminError {
    pub fn table_not_found(name: impl Into<String>) -> Self {
        Self::TableNotFound(name.into())
    }

    pub fn remote(msg: impl Into<String>) -> Self {
        Self::Remote(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AdminError::TableNotFound(_))
    }
}

/// Result type for administration client calls
pub type Result<T> = std::result::Result<T, AdminError>;
