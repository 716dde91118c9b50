//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (a category label, an inventory summary)
/// - **Entity**: Keyed (an inventory record, keyed by product name)
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct InventorySummary {
///     count: usize,
///     total_value: f64,
/// }
///
/// impl ValueObject for InventorySummary {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
