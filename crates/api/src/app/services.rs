use std::sync::Arc;

use weldstock_infra::{CsvTableStore, TableStore};

use crate::app::errors::ApiError;
use crate::config::ApiConfig;

/// Shared handler state.
///
/// Holds the store only, never a table: every request loads its own copy.
/// Concurrent writers are not coordinated (single concurrent user).
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn TableStore>,
    low_stock_threshold: i64,
}

impl AppServices {
    pub fn new(store: Arc<dyn TableStore>, low_stock_threshold: i64) -> Self {
        Self {
            store,
            low_stock_threshold,
        }
    }

    /// Run one load/mutate/save cycle on the blocking pool; file I/O stays
    /// off the async workers.
    pub async fn with_store<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&dyn TableStore) -> Result<T, ApiError> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || f(store.as_ref())).await?
    }

    pub fn low_stock_threshold(&self) -> i64 {
        self.low_stock_threshold
    }
}

/// Wire the CSV-backed store described by `config`.
pub fn build_services(config: &ApiConfig) -> AppServices {
    tracing::info!(
        path = %config.csv_path.display(),
        schema = ?config.schema,
        "using inventory file"
    );
    let store = CsvTableStore::new(config.csv_path.clone(), config.schema);
    AppServices::new(Arc::new(store), config.low_stock_threshold)
}
