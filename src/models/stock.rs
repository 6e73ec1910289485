use serde::{Deserialize, Serialize};

/// One sellable plan as reported by the supplier panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    /// Stock-keeping unit code, upper-cased.
    pub sku: String,
    /// Display name. The supplier feed carries no separate name field,
    /// so this always mirrors the SKU.
    pub name: String,
    /// Units available. Loosely parsed; counts that fail to parse
    /// degrade to zero.
    pub stock: i64,
}
