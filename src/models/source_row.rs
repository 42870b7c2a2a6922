use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer};

use crate::types::{ProductId, Quantity};

/// Typed view of one extracted CSV record, matched to the header by name.
///
/// Empty cells deserialize to `None`. The date stays textual here so the
/// transformer can report the exact value it failed to parse.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceRow {
    /// Sale date as written in the file, expected as `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Identifier of the product sold.
    pub product_id: Option<ProductId>,
    /// Number of units sold.
    pub quantity: Option<Quantity>,
    /// Price of a single unit, parsed from its textual form without rounding.
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub unit_price: Option<Decimal>
}

fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|value| Decimal::from_str(&value).map_err(de::Error::custom))
        .transpose()
}
