//! Infrastructure layer: inventory file storage and the per-request session.

pub mod session;
pub mod store;

pub use session::InventorySession;
pub use store::{CsvTableStore, InMemoryTableStore, Schema, StoreError, TableStore};

mod integration_tests;
