//! `MemoryTableAdmin`: table catalog kept in process memory

use async_trait::async_trait;
use log::{debug, info};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tablegate_commons::{
    AdminError, ColumnFamilyDescriptor, Result, TableAdmin, TableDescriptor, TableHandle,
};

#[derive(Debug, Clone)]
struct TableEntry {
    descriptor: TableDescriptor,
    enabled: bool,
    /// Sorted region start keys; always contains the empty key
    region_start_keys: Vec<Vec<u8>>,
}

type Catalog = Arc<RwLock<BTreeMap<String, TableEntry>>>;

/// Table catalog held in memory.
///
/// Mirrors the lifecycle rules of a real cluster: new tables start enabled
/// with a single region, and deleting a table or modifying one of its
/// column families requires the table to be disabled first.
#[derive(Debug, Clone, Default)]
pub struct MemoryTableAdmin {
    tables: Catalog,
}

impl MemoryTableAdmin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self, name: &str) -> Option<bool> {
        self.tables.read().get(name).map(|t| t.enabled)
    }

    pub fn table_count(&self) -> usize {
        self.tables.read().len()
    }

    /// Split the region containing `key`, making `key` a new region start.
    pub fn split_region(&self, table: &str, key: impl Into<Vec<u8>>) -> Result<()> {
        let key = key.into();
        let mut tables = self.tables.write();
        let entry = tables.get_mut(table).ok_or_else(|| AdminError::table_not_found(table))?;
        if let Err(pos) = entry.region_start_keys.binary_search(&key) {
            entry.region_start_keys.insert(pos, key);
        }
        Ok(())
    }
}

#[async_trait]
impl TableAdmin for MemoryTableAdmin {
    async fn list_tables(&self) -> Result<Vec<TableDescriptor>> {
        Ok(self.tables.read().values().map(|t| t.descriptor.clone()).collect())
    }

    async fn create_table(&self, descriptor: TableDescriptor) -> Result<()> {
        if descriptor.name.is_empty() {
            return Err(AdminError::InvalidArgument("Table name cannot be empty".to_string()));
        }
        let mut tables = self.tables.write();
        if tables.contains_key(&descriptor.name) {
            return Err(AdminError::TableExists(descriptor.name));
        }
        info!(
            "Created table '{}' with {} column families",
            descriptor.name,
            descriptor.column_families.len()
        );
        tables.insert(
            descriptor.name.clone(),
            TableEntry {
                descriptor,
                enabled: true,
                region_start_keys: vec![Vec::new()],
            },
        );
        Ok(())
    }

    async fn enable_table(&self, name: &str) -> Result<()> {
        let mut tables = self.tables.write();
        let entry = tables.get_mut(name).ok_or_else(|| AdminError::table_not_found(name))?;
        entry.enabled = true;
        debug!("Enabled table '{}'", name);
        Ok(())
    }

    async fn disable_table(&self, name: &str) -> Result<()> {
        let mut tables = self.tables.write();
        let entry = tables.get_mut(name).ok_or_else(|| AdminError::table_not_found(name))?;
        entry.enabled = false;
        debug!("Disabled table '{}'", name);
        Ok(())
    }

    async fn delete_table(&self, name: &str) -> Result<()> {
        let mut tables = self.tables.write();
        match tables.get(name) {
            None => return Err(AdminError::table_not_found(name)),
            Some(entry) if entry.enabled => return Err(AdminError::TableEnabled(name.to_string())),
            Some(_) => {},
        }
        tables.remove(name);
        info!("Deleted table '{}'", name);
        Ok(())
    }

    async fn modify_column_family(
        &self,
        table: &str,
        family: &str,
        descriptor: ColumnFamilyDescriptor,
    ) -> Result<()> {
        let mut tables = self.tables.write();
        let entry = tables.get_mut(table).ok_or_else(|| AdminError::table_not_found(table))?;
        if entry.enabled {
            return Err(AdminError::TableEnabled(table.to_string()));
        }
        let slot = entry.descriptor.family_mut(family).ok_or_else(|| {
            AdminError::FamilyNotFound {
                table: table.to_string(),
                family: family.to_string(),
            }
        })?;
        *slot = descriptor;
        debug!("Modified column family '{}' of table '{}'", family, table);
        Ok(())
    }

    async fn open_table(&self, name: &str) -> Result<Box<dyn TableHandle>> {
        if !self.tables.read().contains_key(name) {
            return Err(AdminError::table_not_found(name));
        }
        Ok(Box::new(MemoryTableHandle {
            name: name.to_string(),
            tables: Arc::clone(&self.tables),
        }))
    }
}

/// Handle returned by [`MemoryTableAdmin::open_table`]; reads region
/// boundaries from the live catalog on every call.
#[derive(Debug)]
pub struct MemoryTableHandle {
    name: String,
    tables: Catalog,
}

#[async_trait]
impl TableHandle for MemoryTableHandle {
    async fn region_start_keys(&self) -> Result<Vec<Vec<u8>>> {
        self.tables
            .read()
            .get(&self.name)
            .map(|t| t.region_start_keys.clone())
            .ok_or_else(|| AdminError::table_not_found(&self.name))
    }
}
