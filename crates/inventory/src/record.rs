use core::str::FromStr;

use serde::{Deserialize, Serialize};

use weldstock_core::{DomainError, DomainResult, Entity, ValueObject};

/// Material category (categorized schema only).
///
/// Serialized with the labels stored in the inventory file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Electrodos", alias = "Electrodes")]
    Electrodes,
    #[serde(rename = "Seguridad", alias = "Safety")]
    Safety,
    #[serde(rename = "Herramientas", alias = "Tools")]
    Tools,
    #[serde(rename = "Otros", alias = "Other")]
    Other,
}

impl Category {
    /// All categories, in the order the add form offers them.
    pub const ALL: [Category; 4] = [
        Category::Electrodes,
        Category::Safety,
        Category::Tools,
        Category::Other,
    ];

    /// Label as persisted in the `Categoria` column.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electrodes => "Electrodos",
            Category::Safety => "Seguridad",
            Category::Tools => "Herramientas",
            Category::Other => "Otros",
        }
    }

    fn english(&self) -> &'static str {
        match self {
            Category::Electrodes => "electrodes",
            Category::Safety => "safety",
            Category::Tools => "tools",
            Category::Other => "other",
        }
    }
}

impl ValueObject for Category {}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    /// Accepts the persisted label or the English name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle) || c.english().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "unknown category '{needle}'; expected one of: Electrodos, Seguridad, Herramientas, Otros"
                ))
            })
    }
}

/// One material line item.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRecord {
    pub product: String,
    pub quantity: i64,
    /// Unit price.
    pub price: f64,
    pub category: Option<Category>,
}

impl InventoryRecord {
    /// Stock value of this line (`quantity * price`).
    pub fn value(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

impl Entity for InventoryRecord {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.product
    }
}

/// Input for adding a record, validated before it reaches the table.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub product: String,
    pub quantity: i64,
    pub price: f64,
    pub category: Option<Category>,
}

impl NewRecord {
    pub fn new(product: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            product: product.into(),
            quantity,
            price,
            category: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Validate and build the record. The product name is stored trimmed.
    pub fn validate(self) -> DomainResult<InventoryRecord> {
        let product = self.product.trim();
        if product.is_empty() {
            return Err(DomainError::validation("product cannot be empty"));
        }
        validate_stock(self.quantity, self.price)?;

        Ok(InventoryRecord {
            product: product.to_string(),
            quantity: self.quantity,
            price: self.price,
            category: self.category,
        })
    }
}

/// Checks shared by add and update.
pub(crate) fn validate_stock(quantity: i64, price: f64) -> DomainResult<()> {
    if quantity < 0 {
        return Err(DomainError::validation("quantity cannot be negative"));
    }
    if !price.is_finite() {
        return Err(DomainError::validation("price must be a finite number"));
    }
    if price < 0.0 {
        return Err(DomainError::validation("price cannot be negative"));
    }
    Ok(())
}
