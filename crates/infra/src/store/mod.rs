//! Inventory table storage: the persisted CSV file plus an in-memory store for tests/dev.

pub mod csv_file;
pub mod error;
pub mod table_store;

pub use csv_file::{CsvTableStore, Schema, read_csv, write_csv};
pub use error::StoreError;
pub use table_store::{InMemoryTableStore, TableStore};
