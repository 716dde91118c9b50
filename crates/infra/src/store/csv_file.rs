//! CSV-backed inventory file.
//!
//! Columns: `Producto,Cantidad,Precio[,Categoria]`, header row first. Loading
//! is header-driven, so a file written with either schema can be read; saving
//! always writes the configured schema and overwrites the file in place.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use weldstock_inventory::{Category, InventoryRecord, InventoryTable};

use super::error::StoreError;
use super::table_store::TableStore;

const PRODUCT: &str = "Producto";
const QUANTITY: &str = "Cantidad";
const PRICE: &str = "Precio";
const CATEGORY: &str = "Categoria";

/// Column layout written on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schema {
    /// `Producto,Cantidad,Precio,Categoria`
    #[default]
    Categorized,
    /// `Producto,Cantidad,Precio`
    Basic,
}

impl Schema {
    pub fn header(&self) -> &'static [&'static str] {
        match self {
            Schema::Categorized => &[PRODUCT, QUANTITY, PRICE, CATEGORY],
            Schema::Basic => &[PRODUCT, QUANTITY, PRICE],
        }
    }
}

impl FromStr for Schema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "categorized" => Ok(Schema::Categorized),
            "basic" => Ok(Schema::Basic),
            other => Err(format!(
                "unknown schema '{other}'; expected one of: categorized, basic"
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Producto")]
    product: String,
    #[serde(rename = "Cantidad", deserialize_with = "quantity_cell")]
    quantity: i64,
    #[serde(rename = "Precio")]
    price: f64,
    #[serde(rename = "Categoria", default)]
    category: Option<String>,
}

// Spreadsheet tools often write integral quantities as `10.0`.
fn quantity_cell<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_quantity(&raw).map_err(serde::de::Error::custom)
}

fn parse_quantity(raw: &str) -> Result<i64, String> {
    let raw = raw.trim();
    if let Ok(q) = raw.parse::<i64>() {
        return Ok(q);
    }
    match raw.parse::<f64>() {
        // `i64::MAX as f64` rounds up to 2^63, which is already out of range.
        Ok(q) if q.fract() == 0.0 && q >= i64::MIN as f64 && q < i64::MAX as f64 => Ok(q as i64),
        _ => Err(format!("invalid quantity '{raw}'")),
    }
}

fn price_cell(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.1}")
    } else {
        price.to_string()
    }
}

/// Parse a full table from CSV with a header row.
pub fn read_csv<R: Read>(reader: R) -> Result<InventoryTable, StoreError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, row) in rdr.deserialize::<CsvRow>().enumerate() {
        let row = row?;
        let category = match row.category.as_deref() {
            None | Some("") => None,
            Some(label) => Some(Category::from_str(label).map_err(|e| StoreError::Malformed {
                row: idx + 1,
                message: e.to_string(),
            })?),
        };
        records.push(InventoryRecord {
            product: row.product,
            quantity: row.quantity,
            price: row.price,
            category,
        });
    }

    Ok(InventoryTable::from_records(records))
}

/// Serialize the full table (header + one row per record).
pub fn write_csv<W: Write>(table: &InventoryTable, schema: Schema, writer: W) -> Result<(), StoreError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(schema.header())?;

    for record in table.records() {
        let quantity = record.quantity.to_string();
        let price = price_cell(record.price);
        match schema {
            Schema::Categorized => {
                let category = record.category.map(|c| c.label()).unwrap_or("");
                wtr.write_record([record.product.as_str(), quantity.as_str(), price.as_str(), category])?;
            }
            Schema::Basic => {
                wtr.write_record([record.product.as_str(), quantity.as_str(), price.as_str()])?;
            }
        }
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// The persisted inventory file.
///
/// A missing file loads as an empty table. Saves truncate and rewrite the
/// file directly; a crash mid-write can leave it truncated.
#[derive(Debug, Clone)]
pub struct CsvTableStore {
    path: PathBuf,
    schema: Schema,
}

impl CsvTableStore {
    pub fn new(path: impl Into<PathBuf>, schema: Schema) -> Self {
        Self {
            path: path.into(),
            schema,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }
}

impl TableStore for CsvTableStore {
    fn load(&self) -> Result<InventoryTable, StoreError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "inventory file missing; starting empty");
                return Ok(InventoryTable::new());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let table = read_csv(file)?;
        tracing::debug!(path = %self.path.display(), rows = table.len(), "inventory loaded");
        Ok(table)
    }

    fn save(&self, table: &InventoryTable) -> Result<(), StoreError> {
        if self.schema == Schema::Basic {
            let dropped = table.records().iter().filter(|r| r.category.is_some()).count();
            if dropped > 0 {
                tracing::warn!(dropped, "basic schema has no category column; categories not persisted");
            }
        }

        let file = File::create(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        write_csv(table, self.schema, file)?;
        tracing::debug!(path = %self.path.display(), rows = table.len(), "inventory saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weldstock_inventory::NewRecord;

    fn sample() -> InventoryTable {
        let mut table = InventoryTable::new();
        table
            .add(NewRecord::new("Rod A", 10, 2.5).with_category(Category::Electrodes))
            .unwrap();
        table
            .add(NewRecord::new("Helmet", 2, 45.0).with_category(Category::Safety))
            .unwrap();
        table.add(NewRecord::new("Wire, 0.8mm", 3, 12.75)).unwrap();
        table
    }

    fn store_in(dir: &tempfile::TempDir, schema: Schema) -> CsvTableStore {
        CsvTableStore::new(dir.path().join("inventario_soldaduras.csv"), schema)
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, Schema::Categorized);

        let table = store.load().unwrap();
        assert!(table.is_empty());
        assert_eq!(table.aggregate().total_value, 0.0);
        assert!(!store.path().exists());
    }

    #[test]
    fn save_then_load_reproduces_rows() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, Schema::Categorized);

        store.save(&sample()).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, sample());

        // Saving an unmodified table again leaves the file content unchanged.
        let first = std::fs::read_to_string(store.path()).unwrap();
        store.save(&loaded).unwrap();
        let second = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn categorized_file_layout() {
        let mut out = Vec::new();
        write_csv(&sample(), Schema::Categorized, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Producto,Cantidad,Precio,Categoria",
                "Rod A,10,2.5,Electrodos",
                "Helmet,2,45.0,Seguridad",
                "\"Wire, 0.8mm\",3,12.75,",
            ]
        );
    }

    #[test]
    fn basic_schema_omits_category_column() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, Schema::Basic);
        store.save(&sample()).unwrap();

        let text = std::fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with("Producto,Cantidad,Precio\n"));

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 3);
        assert!(loaded.records().iter().all(|r| r.category.is_none()));
    }

    #[test]
    fn reads_basic_file_with_categorized_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, Schema::Categorized);
        std::fs::write(store.path(), "Producto,Cantidad,Precio\nRod A,10,2.5\n").unwrap();

        let table = store.load().unwrap();
        assert_eq!(table.records()[0].product, "Rod A");
        assert_eq!(table.records()[0].category, None);
    }

    #[test]
    fn accepts_integral_float_quantities() {
        let csv = "Producto,Cantidad,Precio,Categoria\nRod A,10.0,2.5,Electrodos\nGloves, 4 ,3,\n";
        let table = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.records()[0].quantity, 10);
        assert_eq!(table.records()[1].quantity, 4);
        assert_eq!(table.records()[1].price, 3.0);
    }

    #[test]
    fn fractional_quantity_is_an_error() {
        let csv = "Producto,Cantidad,Precio\nRod A,1.5,2.5\n";
        assert!(matches!(read_csv(csv.as_bytes()), Err(StoreError::Csv(_))));
    }

    #[test]
    fn out_of_range_quantity_is_an_error() {
        for cell in ["1e30", "-1e30", "9223372036854775808.0", "inf", "NaN"] {
            let csv = format!("Producto,Cantidad,Precio\nRod A,{cell},2.5\n");
            assert!(
                matches!(read_csv(csv.as_bytes()), Err(StoreError::Csv(_))),
                "cell {cell} should be rejected"
            );
        }
        assert_eq!(parse_quantity("-9223372036854775808.0"), Ok(i64::MIN));
        assert_eq!(parse_quantity("1e3"), Ok(1000));
    }

    #[test]
    fn unknown_category_is_malformed() {
        let csv = "Producto,Cantidad,Precio,Categoria\nRod A,1,2.5,Electrodos\nArgon,1,9.0,Gases\n";
        match read_csv(csv.as_bytes()) {
            Err(StoreError::Malformed { row, .. }) => assert_eq!(row, 2),
            other => panic!("expected malformed row, got {other:?}"),
        }
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir, Schema::Categorized);
        store.save(&sample()).unwrap();

        let mut table = store.load().unwrap();
        table.delete("Helmet").unwrap();
        table.delete("Rod A").unwrap();
        store.save(&table).unwrap();

        let text = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn empty_file_loads_empty() {
        let table = read_csv("".as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn schema_parses_from_config_strings() {
        assert_eq!("categorized".parse::<Schema>().unwrap(), Schema::Categorized);
        assert_eq!(" Basic ".parse::<Schema>().unwrap(), Schema::Basic);
        assert!("wide".parse::<Schema>().is_err());
    }
}
