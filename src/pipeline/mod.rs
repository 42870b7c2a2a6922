mod config;
mod errors;
mod sales_pipeline;

pub use config::PipelineConfig;
pub use errors::PipelineError;
pub use sales_pipeline::{PipelineSummary, SalesPipeline};
