use super::{ExtractedTable, SourceRow, REQUIRED_COLUMNS};

use std::str::FromStr;

use anyhow::Result;
use csv::StringRecord;
use rust_decimal::Decimal;

fn headers(columns: &[&str]) -> StringRecord {
    StringRecord::from(columns.to_vec())
}

#[test]
fn test_source_row_deserializes_by_header_name() -> Result<()> {
    let headers = headers(&["unit_price", "quantity", "date", "product_id"]);
    let record = StringRecord::from(vec!["10.99", "5", "2024-01-01", "1"]);

    let row: SourceRow = record.deserialize(Some(&headers))?;

    assert_eq!(row.date.as_deref(), Some("2024-01-01"));
    assert_eq!(row.product_id, Some(1));
    assert_eq!(row.quantity, Some(5));
    assert_eq!(row.unit_price, Some(Decimal::from_str("10.99")?));

    Ok(())
}

#[test]
fn test_source_row_treats_empty_cells_as_null() -> Result<()> {
    let headers = headers(&REQUIRED_COLUMNS);
    let record = StringRecord::from(vec!["", "", "", ""]);

    let row: SourceRow = record.deserialize(Some(&headers))?;

    assert!(row.date.is_none());
    assert!(row.product_id.is_none());
    assert!(row.quantity.is_none());
    assert!(row.unit_price.is_none());

    Ok(())
}

#[test]
fn test_source_row_ignores_extra_columns() -> Result<()> {
    let headers = headers(&["date", "region", "product_id", "quantity", "unit_price"]);
    let record = StringRecord::from(vec!["2024-01-02", "north", "2", "3", "15.99"]);

    let row: SourceRow = record.deserialize(Some(&headers))?;

    assert_eq!(row.product_id, Some(2));
    assert_eq!(row.unit_price, Some(Decimal::from_str("15.99")?));

    Ok(())
}

#[test]
fn test_source_row_rejects_non_numeric_quantity() {
    let headers = headers(&REQUIRED_COLUMNS);
    let record = StringRecord::from(vec!["2024-01-01", "1", "five", "10.99"]);

    let result: Result<SourceRow, _> = record.deserialize(Some(&headers));

    assert!(result.is_err());
}

#[test]
fn test_extracted_table_reports_columns_and_length() {
    let table = ExtractedTable::new(
        headers(&REQUIRED_COLUMNS),
        vec![StringRecord::from(vec!["2024-01-01", "1", "5", "10.99"])]
    );

    assert_eq!(table.len(), 1);
    assert!(table.has_column("unit_price"));
    assert!(!table.has_column("total_amount"));
}

#[test]
fn test_source_row_reads_unit_price_from_text_without_rounding() -> Result<()> {
    let headers = headers(&REQUIRED_COLUMNS);
    let record = StringRecord::from(vec!["2024-01-01", "1", "3", "0.1234567890123456789"]);

    let row: SourceRow = record.deserialize(Some(&headers))?;

    assert_eq!(row.unit_price.map(|price| price.to_string()).as_deref(), Some("0.1234567890123456789"));

    Ok(())
}

#[test]
fn test_source_row_rejects_non_decimal_unit_price() {
    let headers = headers(&REQUIRED_COLUMNS);
    let record = StringRecord::from(vec!["2024-01-01", "1", "3", "ten"]);

    let result: Result<SourceRow, _> = record.deserialize(Some(&headers));

    assert!(result.is_err());
}
