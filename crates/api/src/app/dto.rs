use serde::Deserialize;

use weldstock_core::DomainResult;
use weldstock_inventory::{Category, InventoryRecord, NewRecord};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    /// Case-insensitive product substring.
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    // Missing and blank names both reach domain validation.
    #[serde(default)]
    pub product: String,
    pub quantity: i64,
    pub price: f64,
    pub category: Option<String>,
}

impl AddItemRequest {
    pub fn into_new_record(self) -> DomainResult<NewRecord> {
        let mut new = NewRecord::new(self.product, self.quantity, self.price);
        if let Some(label) = self.category.as_deref().filter(|c| !c.trim().is_empty()) {
            new = new.with_category(label.parse::<Category>()?);
        }
        Ok(new)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub quantity: i64,
    pub price: f64,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn record_to_json(record: &InventoryRecord) -> serde_json::Value {
    serde_json::json!({
        "product": record.product,
        "quantity": record.quantity,
        "price": record.price,
        "category": record.category.map(|c| c.label()),
        "value": record.value(),
    })
}

pub fn records_to_json<'a>(records: impl IntoIterator<Item = &'a InventoryRecord>) -> Vec<serde_json::Value> {
    records.into_iter().map(record_to_json).collect()
}
