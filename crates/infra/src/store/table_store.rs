use std::sync::{Arc, RwLock};

use weldstock_inventory::InventoryTable;

use super::error::StoreError;

/// Whole-table storage: every load reads the full table, every save
/// overwrites it.
///
/// No implementation guards against concurrent writers; the last save wins.
pub trait TableStore: Send + Sync {
    fn load(&self) -> Result<InventoryTable, StoreError>;
    fn save(&self, table: &InventoryTable) -> Result<(), StoreError>;
}

impl<S> TableStore for Arc<S>
where
    S: TableStore + ?Sized,
{
    fn load(&self) -> Result<InventoryTable, StoreError> {
        (**self).load()
    }

    fn save(&self, table: &InventoryTable) -> Result<(), StoreError> {
        (**self).save(table)
    }
}

impl<S> TableStore for &S
where
    S: TableStore + ?Sized,
{
    fn load(&self) -> Result<InventoryTable, StoreError> {
        (**self).load()
    }

    fn save(&self, table: &InventoryTable) -> Result<(), StoreError> {
        (**self).save(table)
    }
}

/// In-memory store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryTableStore {
    inner: RwLock<InventoryTable>,
}

impl InMemoryTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: InventoryTable) -> Self {
        Self {
            inner: RwLock::new(table),
        }
    }
}

impl TableStore for InMemoryTableStore {
    fn load(&self) -> Result<InventoryTable, StoreError> {
        let table = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.clone())
    }

    fn save(&self, table: &InventoryTable) -> Result<(), StoreError> {
        let mut current = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        *current = table.clone();
        Ok(())
    }
}
