use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::{Quantity, RecordNumber};

#[derive(Debug, Error)]
pub enum TransformationError {
    #[error("Required column [{column}] is missing from the input")]
    MissingColumn {
        column: &'static str
    },
    #[error("Record {record} has a value that is not valid for its column: {source}")]
    InvalidValue {
        record: RecordNumber,
        #[source]
        source: csv::Error
    },
    #[error("Record {record} has date [{value}] which does not match YYYY-MM-DD: {source}")]
    InvalidDate {
        record: RecordNumber,
        value: String,
        #[source]
        source: chrono::ParseError
    },
    #[error("Record {record} overflows computing total amount for quantity [{quantity}] and unit price [{unit_price}]")]
    Overflow {
        record: RecordNumber,
        quantity: Quantity,
        unit_price: Decimal
    }
}
