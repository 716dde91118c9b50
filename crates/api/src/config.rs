//! Process configuration, read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, anyhow};

use weldstock_infra::Schema;
use weldstock_inventory::DEFAULT_LOW_STOCK_THRESHOLD;

pub const CSV_PATH_VAR: &str = "WELDSTOCK_CSV_PATH";
pub const SCHEMA_VAR: &str = "WELDSTOCK_SCHEMA";
pub const BIND_ADDR_VAR: &str = "WELDSTOCK_BIND_ADDR";
pub const LOW_STOCK_VAR: &str = "WELDSTOCK_LOW_STOCK_THRESHOLD";

pub const DEFAULT_CSV_PATH: &str = "inventario_soldaduras.csv";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Inventory file, relative to the working directory unless absolute.
    pub csv_path: PathBuf,
    pub schema: Schema,
    pub bind_addr: SocketAddr,
    pub low_stock_threshold: i64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            schema: Schema::default(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup(CSV_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            config.csv_path = PathBuf::from(path);
        }

        if let Some(schema) = lookup(SCHEMA_VAR) {
            config.schema = schema
                .parse()
                .map_err(|e: String| anyhow!(e))
                .with_context(|| format!("invalid {SCHEMA_VAR}"))?;
        }

        if let Some(addr) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = addr
                .trim()
                .parse()
                .with_context(|| format!("invalid {BIND_ADDR_VAR} '{addr}'"))?;
        }

        if let Some(threshold) = lookup(LOW_STOCK_VAR) {
            config.low_stock_threshold = threshold
                .trim()
                .parse()
                .with_context(|| format!("invalid {LOW_STOCK_VAR} '{threshold}'"))?;
        }

        Ok(config)
    }
}
