mod errors;
mod transformer;

use crate::models::SalesRecord;

pub use errors::TransformationError;
pub use transformer::Transformer;

/// Transformed records plus the bookkeeping reported at the stage boundary.
#[derive(Debug, Clone)]
pub struct TransformOutcome {
    pub records: Vec<SalesRecord>,
    pub duplicates_removed: usize,
    pub nulls_filled: usize
}
