use std::path::Path;
use std::process::Command;

use anyhow::Result;
use rusqlite::Connection;
use tempfile::tempdir;

const BINARY_PATH: &str = env!("CARGO_BIN_EXE_sales-etl-pipeline");

type StoredSale = (i64, String, i64, i64, f64, f64);

fn read_sales(path: &Path) -> Result<Vec<StoredSale>> {
    let connection = Connection::open(path)?;
    let mut statement = connection.prepare(
        "SELECT id, date, product_id, quantity, unit_price, total_amount FROM sales ORDER BY id"
    )?;

    let rows = statement
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?, row.get(5)?)))?
        .collect::<Result<Vec<StoredSale>, _>>()?;

    Ok(rows)
}

#[test]
fn test_cli_loads_sample_into_fresh_database() -> Result<()> {
    let directory = tempdir()?;
    let database_path = directory.path().join("sales_database.db");

    let output = Command::new(BINARY_PATH)
        .arg(Path::new("samples").join("sales_data.csv"))
        .arg(&database_path)
        .output()?;

    assert!(output.status.success());

    let sales = read_sales(&database_path)?;

    assert_eq!(sales.len(), 5);

    for (index, (id, date, product_id, quantity, unit_price, total_amount)) in sales.iter().enumerate() {
        assert_eq!(*id, index as i64 + 1);
        assert_eq!(*product_id, index as i64 + 1);
        assert!(date.starts_with("2024-01-0"));
        assert!((total_amount - *quantity as f64 * unit_price).abs() < 1e-9);
    }

    Ok(())
}

#[test]
fn test_cli_removes_duplicates_before_loading() -> Result<()> {
    let directory = tempdir()?;
    let database_path = directory.path().join("sales_database.db");

    let output = Command::new(BINARY_PATH)
        .arg(Path::new("samples").join("duplicates.csv"))
        .arg(&database_path)
        .output()?;

    assert!(output.status.success());

    let sales = read_sales(&database_path)?;

    assert_eq!(sales.len(), 2);
    assert_eq!((sales[0].0, sales[0].1.as_str()), (1, "2024-01-01"));
    assert!((sales[0].5 - 54.95).abs() < 1e-9);
    assert_eq!((sales[1].0, sales[1].1.as_str()), (2, "2024-01-02"));
    assert!((sales[1].5 - 47.97).abs() < 1e-9);

    Ok(())
}

#[test]
fn test_cli_second_run_appends_another_copy() -> Result<()> {
    let directory = tempdir()?;
    let database_path = directory.path().join("sales_database.db");

    for _ in 0..2 {
        let status = Command::new(BINARY_PATH)
            .arg(Path::new("samples").join("duplicates.csv"))
            .arg(&database_path)
            .status()?;

        assert!(status.success());
    }

    let ids: Vec<i64> = read_sales(&database_path)?.iter().map(|sale| sale.0).collect();

    assert_eq!(ids, vec![1, 2, 3, 4]);

    Ok(())
}

#[test]
fn test_cli_fails_on_invalid_date_without_loading() -> Result<()> {
    let directory = tempdir()?;
    let database_path = directory.path().join("sales_database.db");

    let output = Command::new(BINARY_PATH)
        .arg(Path::new("samples").join("invalid_date.csv"))
        .arg(&database_path)
        .output()?;

    assert!(!output.status.success());
    assert!(!database_path.exists());

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("2024/01/02"));

    Ok(())
}

#[test]
fn test_cli_fails_on_missing_input_file() -> Result<()> {
    let directory = tempdir()?;
    let database_path = directory.path().join("sales_database.db");

    let output = Command::new(BINARY_PATH)
        .arg(directory.path().join("missing.csv"))
        .arg(&database_path)
        .arg("error")
        .output()?;

    assert!(!output.status.success());
    assert!(!database_path.exists());

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("Unable to open input file"));

    Ok(())
}
