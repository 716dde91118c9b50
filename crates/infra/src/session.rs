//! Per-interaction unit of work: load at entry, mutate, flush at exit.

use weldstock_inventory::InventoryTable;

use crate::store::{StoreError, TableStore};

/// A freshly loaded table bound to the store it came from.
///
/// Dropping a session without calling [`InventorySession::commit`] writes
/// nothing, so a failed validation leaves the file untouched.
#[derive(Debug)]
pub struct InventorySession<S: TableStore> {
    store: S,
    table: InventoryTable,
}

impl<S: TableStore> InventorySession<S> {
    pub fn begin(store: S) -> Result<Self, StoreError> {
        let table = store.load()?;
        Ok(Self { store, table })
    }

    pub fn table(&self) -> &InventoryTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut InventoryTable {
        &mut self.table
    }

    /// Flush the full table back to the store and hand it back for the
    /// response view.
    pub fn commit(self) -> Result<InventoryTable, StoreError> {
        self.store.save(&self.table)?;
        Ok(self.table)
    }
}
