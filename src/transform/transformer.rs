use std::collections::HashSet;

use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::Decimal;

use crate::events::{EventSink, PipelineEvent, Stage};
use crate::models::{ExtractedTable, SalesRecord, SourceRow, REQUIRED_COLUMNS};
use crate::transform::{TransformOutcome, TransformationError};
use crate::types::{ProductId, Quantity, RecordNumber};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A record after date coercion and derivation, before nulls are filled.
///
/// Duplicate detection runs on this shape, so a null only matches another null.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
struct DerivedRow {
    date: Option<NaiveDate>,
    product_id: Option<ProductId>,
    quantity: Option<Quantity>,
    unit_price: Option<Decimal>,
    total_amount: Option<Decimal>
}

impl DerivedRow {
    fn from_source(record: RecordNumber, row: SourceRow) -> Result<Self, TransformationError> {
        let date = row.date
            .map(|value| {
                NaiveDate::parse_from_str(&value, DATE_FORMAT)
                    .map_err(|source| TransformationError::InvalidDate { record, value, source })
            })
            .transpose()?;

        let total_amount = match (row.quantity, row.unit_price) {
            (Some(quantity), Some(unit_price)) => Some(
                Decimal::from(quantity).checked_mul(unit_price)
                    .ok_or(TransformationError::Overflow { record, quantity, unit_price })?
            ),
            _ => None
        };

        Ok(Self {
            date,
            product_id: row.product_id,
            quantity: row.quantity,
            unit_price: row.unit_price,
            total_amount
        })
    }

    fn null_count(&self) -> usize {
        [
            self.date.is_none(),
            self.product_id.is_none(),
            self.quantity.is_none(),
            self.unit_price.is_none(),
            self.total_amount.is_none()
        ]
        .into_iter()
        .filter(|is_null| *is_null)
        .count()
    }

    /// Replaces every null with zero. A missing date becomes the Unix epoch.
    fn fill_nulls(self) -> SalesRecord {
        SalesRecord {
            date: self.date.unwrap_or_default(),
            product_id: self.product_id.unwrap_or_default(),
            quantity: self.quantity.unwrap_or_default(),
            unit_price: self.unit_price.unwrap_or_default(),
            total_amount: self.total_amount.unwrap_or_default()
        }
    }
}

/// Normalizes, derives and cleans an extracted table into sales records.
#[derive(Debug, Default)]
pub struct Transformer;

impl Transformer {
    pub fn new() -> Self {
        Self
    }

    /// Applies, in order: date coercion, `total_amount` derivation, duplicate
    /// removal (first occurrence wins) and the zero fill.
    ///
    /// # Errors
    /// Returns `TransformationError` on the first record that cannot be
    /// transformed; no records are returned in that case.
    pub fn transform<S: EventSink>(&self, table: ExtractedTable, sink: &S) -> Result<TransformOutcome, TransformationError> {
        sink.emit(PipelineEvent::StageStarted(Stage::Transform));

        match self.apply(&table, sink) {
            Ok(outcome) => {
                sink.emit(PipelineEvent::Transformed {
                    records: outcome.records.len(),
                    duplicates_removed: outcome.duplicates_removed,
                    nulls_filled: outcome.nulls_filled
                });
                Ok(outcome)
            }
            Err(error) => {
                sink.emit(PipelineEvent::StageFailed { stage: Stage::Transform, error: error.to_string() });
                Err(error)
            }
        }
    }

    fn apply<S: EventSink>(&self, table: &ExtractedTable, sink: &S) -> Result<TransformOutcome, TransformationError> {
        if let Some(column) = REQUIRED_COLUMNS.into_iter().find(|column| !table.has_column(column)) {
            return Err(TransformationError::MissingColumn { column });
        }

        let ignored: Vec<String> = table.headers().iter()
            .filter(|header| !REQUIRED_COLUMNS.contains(header))
            .map(String::from)
            .collect();

        if !ignored.is_empty() {
            sink.emit(PipelineEvent::ColumnsIgnored { columns: ignored });
        }

        let derived = table.records().iter()
            .enumerate()
            .map(|(index, record)| derive(index + 1, record, table.headers()))
            .collect::<Result<Vec<_>, _>>()?;

        let total = derived.len();
        let unique = remove_duplicates(derived);
        let nulls_filled = unique.iter().map(DerivedRow::null_count).sum();

        Ok(TransformOutcome {
            duplicates_removed: total - unique.len(),
            nulls_filled,
            records: unique.into_iter().map(DerivedRow::fill_nulls).collect()
        })
    }
}

fn derive(record: RecordNumber, fields: &StringRecord, headers: &StringRecord) -> Result<DerivedRow, TransformationError> {
    let row: SourceRow = fields.deserialize(Some(headers))
        .map_err(|source| TransformationError::InvalidValue { record, source })?;

    DerivedRow::from_source(record, row)
}

fn remove_duplicates(rows: Vec<DerivedRow>) -> Vec<DerivedRow> {
    let mut seen = HashSet::with_capacity(rows.len());

    rows.into_iter()
        .filter(|row| seen.insert(row.clone()))
        .collect()
}
