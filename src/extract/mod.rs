mod errors;
mod extractor;

pub use errors::ExtractionError;
pub use extractor::Extractor;
