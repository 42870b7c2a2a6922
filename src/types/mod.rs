pub type ProductId = i64;
pub type Quantity = i64;

/// One-based position of a data record in the source file, header excluded.
pub type RecordNumber = usize;
