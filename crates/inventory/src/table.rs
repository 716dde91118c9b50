//! The inventory table and its operations.
//!
//! Rows are matched by product name. Names are not unique: update and delete
//! act on every matching row, lookups return the first.

use serde::Serialize;

use weldstock_core::{DomainError, DomainResult, Entity, ValueObject};

use crate::record::{InventoryRecord, NewRecord, validate_stock};

/// Quantity below which a record counts as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Derived metrics, recomputed from scratch on every view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InventorySummary {
    pub count: usize,
    pub total_value: f64,
}

impl ValueObject for InventorySummary {}

/// Ordered collection of records, insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryTable {
    records: Vec<InventoryRecord>,
}

impl InventoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<InventoryRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<InventoryRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows whose product contains `filter` (case-insensitive), in insertion
    /// order. `None` or a blank filter returns every row.
    pub fn list(&self, filter: Option<&str>) -> Vec<&InventoryRecord> {
        // Blank filters show everything; others match as typed, spaces included.
        let needle = filter
            .filter(|f| !f.trim().is_empty())
            .map(str::to_lowercase);

        match needle {
            None => self.records.iter().collect(),
            Some(needle) => self
                .records
                .iter()
                .filter(|r| r.product.to_lowercase().contains(&needle))
                .collect(),
        }
    }

    /// Append a record. Existing rows with the same name are left alone.
    pub fn add(&mut self, new: NewRecord) -> DomainResult<&InventoryRecord> {
        let record = new.validate()?;
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Set quantity and price on every row named `product`.
    ///
    /// Returns the number of rows touched.
    pub fn update(&mut self, product: &str, quantity: i64, price: f64) -> DomainResult<usize> {
        validate_stock(quantity, price)?;

        let mut touched = 0;
        for record in self.records.iter_mut().filter(|r| r.id() == product) {
            record.quantity = quantity;
            record.price = price;
            touched += 1;
        }

        if touched == 0 {
            return Err(DomainError::not_found(product));
        }
        Ok(touched)
    }

    /// Remove every row named `product`; the rest keep their order.
    ///
    /// Returns the number of rows removed.
    pub fn delete(&mut self, product: &str) -> DomainResult<usize> {
        let before = self.records.len();
        self.records.retain(|r| r.id() != product);

        let removed = before - self.records.len();
        if removed == 0 {
            return Err(DomainError::not_found(product));
        }
        Ok(removed)
    }

    pub fn aggregate(&self) -> InventorySummary {
        InventorySummary {
            count: self.records.len(),
            total_value: self.records.iter().map(InventoryRecord::value).sum(),
        }
    }

    /// Distinct product names in first-seen order.
    pub fn product_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for record in &self.records {
            if !names.contains(&record.product.as_str()) {
                names.push(&record.product);
            }
        }
        names
    }

    pub fn first_match(&self, product: &str) -> Option<&InventoryRecord> {
        self.records.iter().find(|r| r.id() == product)
    }

    /// Rows shown by `list(filter)` whose quantity is strictly below `threshold`.
    pub fn low_stock(&self, filter: Option<&str>, threshold: i64) -> Vec<&InventoryRecord> {
        self.list(filter)
            .into_iter()
            .filter(|r| r.quantity < threshold)
            .collect()
    }
}
