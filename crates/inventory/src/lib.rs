//! Inventory domain module.
//!
//! This crate contains the rules for the welding-supplies inventory table,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod record;
pub mod table;

pub use record::{Category, InventoryRecord, NewRecord};
pub use table::{DEFAULT_LOW_STOCK_THRESHOLD, InventorySummary, InventoryTable};
