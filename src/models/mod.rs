mod extracted_table;
mod sales_record;
mod source_row;
#[cfg(test)]
mod tests;

pub use extracted_table::ExtractedTable;
pub use sales_record::SalesRecord;
pub use source_row::SourceRow;

/// Columns every input file must carry, in the order they are stored.
pub const REQUIRED_COLUMNS: [&str; 4] = ["date", "product_id", "quantity", "unit_price"];
