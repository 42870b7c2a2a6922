use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::types::{ProductId, Quantity};

/// A fully transformed sales row, ready to be appended to the store.
///
/// Every field is populated; `total_amount` is always `quantity * unit_price`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct SalesRecord {
    /// Calendar date of the sale, the Unix epoch when the source had none.
    pub date: NaiveDate,
    /// Identifier of the product sold.
    pub product_id: ProductId,
    /// Number of units sold.
    pub quantity: Quantity,
    /// Price of a single unit.
    pub unit_price: Decimal,
    /// Derived `quantity * unit_price`, computed exactly.
    pub total_amount: Decimal
}
