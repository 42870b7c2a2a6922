use std::path::PathBuf;

use rusqlite::{params, Connection};
use rust_decimal::prelude::ToPrimitive;

use crate::events::{EventSink, PipelineEvent, Stage};
use crate::load::LoadError;
use crate::models::SalesRecord;

const CREATE_SALES_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS sales (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date DATE,
        product_id INTEGER,
        quantity INTEGER,
        unit_price FLOAT,
        total_amount FLOAT
    )";

const INSERT_SALE: &str = "
    INSERT INTO sales (date, product_id, quantity, unit_price, total_amount)
    VALUES (?1, ?2, ?3, ?4, ?5)";

/// Appends sales records to the `sales` table of a SQLite database.
pub struct Loader {
    database_path: PathBuf
}

impl Loader {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self { database_path: database_path.into() }
    }

    /// Ensures the `sales` table exists and appends every record as a new row.
    ///
    /// Each insert commits on its own, so rows written before a failure stay
    /// in the table. The connection lives only for the duration of this call.
    ///
    /// # Errors
    /// Returns `LoadError` if the database cannot be opened, the table cannot be
    /// prepared, or a row is rejected by the store.
    pub fn load<S: EventSink>(&self, records: &[SalesRecord], sink: &S) -> Result<usize, LoadError> {
        sink.emit(PipelineEvent::StageStarted(Stage::Load));

        match self.append_all(records) {
            Ok(appended) => {
                sink.emit(PipelineEvent::Loaded { records: appended });
                Ok(appended)
            }
            Err(error) => {
                sink.emit(PipelineEvent::StageFailed { stage: Stage::Load, error: error.to_string() });
                Err(error)
            }
        }
    }

    fn append_all(&self, records: &[SalesRecord]) -> Result<usize, LoadError> {
        let connection = Connection::open(&self.database_path).map_err(|source| LoadError::Connection {
            path: self.database_path.clone(),
            source
        })?;

        // An early return drops the connection, which closes it.
        let appended = append(&connection, records)?;

        connection.close().map_err(|(_, source)| LoadError::Close(source))?;

        Ok(appended)
    }
}

fn append(connection: &Connection, records: &[SalesRecord]) -> Result<usize, LoadError> {
    connection.execute(CREATE_SALES_TABLE, []).map_err(LoadError::Schema)?;

    let mut statement = connection.prepare_cached(INSERT_SALE).map_err(LoadError::Schema)?;

    for (index, sale) in records.iter().enumerate() {
        let record = index + 1;
        let unit_price = sale.unit_price.to_f64().unwrap_or_default();
        let total_amount = sale.total_amount.to_f64().unwrap_or_default();

        statement.execute(params![sale.date, sale.product_id, sale.quantity, unit_price, total_amount])
            .map_err(|source| LoadError::Insert { record, source })?;
    }

    Ok(records.len())
}
