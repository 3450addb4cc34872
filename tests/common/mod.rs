//! Shared test support: a recording administration client and an app
//! builder macro.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use tablegate_commons::{
    AdminError, ColumnFamilyDescriptor, Result, TableAdmin, TableDescriptor, TableHandle,
};

/// Call observed by [`RecordingAdmin`], in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminCall {
    ListTables,
    CreateTable(TableDescriptor),
    EnableTable(String),
    DisableTable(String),
    DeleteTable(String),
    ModifyColumnFamily {
        table: String,
        family: String,
        descriptor: ColumnFamilyDescriptor,
    },
    OpenTable(String),
}

/// Administration client that records every call and fails on demand.
#[derive(Default)]
pub struct RecordingAdmin {
    tables: Vec<TableDescriptor>,
    regions: HashMap<String, Vec<Vec<u8>>>,
    fail_family: Option<String>,
    fail_enable: Option<String>,
    calls: Mutex<Vec<AdminCall>>,
}

impl RecordingAdmin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, table: TableDescriptor) -> Self {
        self.regions.entry(table.name.clone()).or_default();
        self.tables.push(table);
        self
    }

    pub fn with_regions(mut self, table: &str, keys: &[&str]) -> Self {
        self.regions
            .insert(table.to_string(), keys.iter().map(|k| k.as_bytes().to_vec()).collect());
        self
    }

    /// `modify_column_family` fails for this family with a remote error.
    pub fn failing_family(mut self, family: &str) -> Self {
        self.fail_family = Some(family.to_string());
        self
    }

    /// `enable_table` fails with a remote error carrying `message`.
    pub fn failing_enable(mut self, message: &str) -> Self {
        self.fail_enable = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<AdminCall> {
        self.calls.lock().clone()
    }

    fn record(&self, call: AdminCall) {
        self.calls.lock().push(call);
    }
}

struct RecordedHandle {
    name: String,
    keys: Vec<Vec<u8>>,
}

#[async_trait]
impl TableHandle for RecordedHandle {
    async fn region_start_keys(&self) -> Result<Vec<Vec<u8>>> {
        Ok(self.keys.clone())
    }
}

#[async_trait]
impl TableAdmin for RecordingAdmin {
    async fn list_tables(&self) -> Result<Vec<TableDescriptor>> {
        self.record(AdminCall::ListTables);
        Ok(self.tables.clone())
    }

    async fn create_table(&self, descriptor: TableDescriptor) -> Result<()> {
        self.record(AdminCall::CreateTable(descriptor));
        Ok(())
    }

    async fn enable_table(&self, name: &str) -> Result<()> {
        self.record(AdminCall::EnableTable(name.to_string()));
        match &self.fail_enable {
            Some(message) => Err(AdminError::remote(message.clone())),
            None => Ok(()),
        }
    }

    async fn disable_table(&self, name: &str) -> Result<()> {
        self.record(AdminCall::DisableTable(name.to_string()));
        Ok(())
    }

    async fn delete_table(&self, name: &str) -> Result<()> {
        self.record(AdminCall::DeleteTable(name.to_string()));
        Ok(())
    }

    async fn modify_column_family(
        &self,
        table: &str,
        family: &str,
        descriptor: ColumnFamilyDescriptor,
    ) -> Result<()> {
        self.record(AdminCall::ModifyColumnFamily {
            table: table.to_string(),
            family: family.to_string(),
            descriptor,
        });
        if self.fail_family.as_deref() == Some(family) {
            return Err(AdminError::remote(format!("Failed to modify column family {}", family)));
        }
        Ok(())
    }

    async fn open_table(&self, name: &str) -> Result<Box<dyn TableHandle>> {
        self.record(AdminCall::OpenTable(name.to_string()));
        let keys = self.regions.get(name).ok_or_else(|| AdminError::table_not_found(name))?;
        Ok(Box::new(RecordedHandle {
            name: name.to_string(),
            keys: keys.clone(),
        }))
    }
}

/// `test_app!(admin)` builds an initialized actix test service over `admin`
/// (any `Arc<impl TableAdmin>`) with the default server configuration.
macro_rules! test_app {
    ($admin:expr) => {{
        let admin: std::sync::Arc<dyn tablegate_commons::TableAdmin> = $admin;
        let components = tablegate_server::lifecycle::ApplicationComponents::new(admin);
        let config = tablegate_configs::ServerConfig::default();
        actix_web::test::init_service(actix_web::App::new().configure(move |cfg| {
            tablegate_server::lifecycle::configure_app(cfg, &config, &components)
        }))
        .await
    }};
}
