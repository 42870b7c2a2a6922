use thiserror::Error;

use crate::extract::ExtractionError;
use crate::load::LoadError;
use crate::transform::TransformationError;

/// The first stage failure of a run, passed through without inspection.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Transformation(#[from] TransformationError),
    #[error(transparent)]
    Load(#[from] LoadError)
}
