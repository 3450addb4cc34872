//! Table administration client interface
//!
//! The REST layer never touches storage itself; every lifecycle mutation and
//! metadata query goes through a [`TableAdmin`] injected at construction.
//! Calls may block on remote I/O and are awaited in place, without retries
//! or timeouts.

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::schemas::{ColumnFamilyDescriptor, TableDescriptor};

/// Handle onto a single table, used for region queries.
#[async_trait]
pub trait TableHandle: Send + Sync {
    /// Start keys of the table's regions in key order. The first region of
    /// a table starts at the empty key.
    async fn region_start_keys(&self) -> Result<Vec<Vec<u8>>>;
}

/// Administration client performing table lifecycle operations.
#[async_trait]
pub trait TableAdmin: Send + Sync {
    /// Descriptors of every table the client knows about.
    async fn list_tables(&self) -> Result<Vec<TableDescriptor>>;

    async fn create_table(&self, descriptor: TableDescriptor) -> Result<()>;

    async fn enable_table(&self, name: &str) -> Result<()>;

    async fn disable_table(&self, name: &str) -> Result<()>;

    async fn delete_table(&self, name: &str) -> Result<()>;

    /// Replace the attributes of an existing column family.
    async fn modify_column_family(
        &self,
        table: &str,
        family: &str,
        descriptor: ColumnFamilyDescriptor,
    ) -> Result<()>;

    async fn open_table(&self, name: &str) -> Result<Box<dyn TableHandle>>;
}
